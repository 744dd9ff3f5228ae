//! Shared domain types: mass definitions, cosmology parameters, samples.

pub mod types;

pub use types::*;
