//! `halo-mass` library crate.
//!
//! Converts spherical-overdensity halo masses and concentrations between
//! definitions (e.g. 200m -> 500c) at fixed NFW profile, using the
//! Hu & Kravtsov (2002) fitting-function inversion and a pluggable
//! concentration-mass relation.
//!
//! The binary (`hmass`) is a thin wrapper around this library so that:
//!
//! - the conversion core is testable without spawning processes
//! - modules are reusable from other pipelines and notebooks

pub mod app;
pub mod cli;
pub mod convert;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod report;
