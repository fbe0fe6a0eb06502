//! Byte-offset source locations.

use serde::Serialize;

/// A byte offset into the source text.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Loc {
    pub start: u32,
}

impl Loc {
    pub const fn new(start: u32) -> Self {
        Loc { start }
    }

    /// Shift this location by `offset` bytes.
    ///
    /// Values are tokenized in isolation, so their locations are relative to
    /// the start of the value and must be rebased onto the stylesheet.
    pub const fn shifted(self, offset: u32) -> Self {
        Loc {
            start: self.start + offset,
        }
    }
}

/// A half-open byte range `[loc, loc + len)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    pub loc: Loc,
    pub len: u32,
}

impl Range {
    pub const fn new(start: u32, len: u32) -> Self {
        Range {
            loc: Loc::new(start),
            len,
        }
    }

    pub const fn end(&self) -> u32 {
        self.loc.start + self.len
    }

    pub fn contains(&self, loc: Loc) -> bool {
        loc.start >= self.loc.start && loc.start < self.end()
    }
}

#[cfg(test)]
#[path = "../tests/loc_tests.rs"]
mod tests;
