//! Formatted terminal output for conversion runs.

pub mod format;

pub use format::*;
