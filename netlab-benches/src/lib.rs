//! Benchmark support crate for netlab.
//!
//! Provides the parameter labels and fixture builders shared by the Criterion
//! benchmarks for the metrics engine and the SIR step.

pub mod error;
pub mod params;
