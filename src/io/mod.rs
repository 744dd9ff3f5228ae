//! File input/output for the batch front-end and the test fixtures.

pub mod export;
pub mod fixture;
pub mod samples;
