//! Common types and utilities for the kiln CSS compiler.
//!
//! This crate provides foundational types used across all kiln crates:
//! - Source locations (`Loc`, `Range`)
//! - Centralized limits and numeric thresholds
//! - Diagnostics reported back to the driver

// Source locations (byte offsets into the stylesheet)
pub mod loc;
pub use loc::{Loc, Range};

// Centralized limits and thresholds
pub mod limits;

// Warnings and errors surfaced to the user
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory};
