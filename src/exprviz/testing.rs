//! Ready-made expressions for tests, demos and the command line
//!
//! [samples] holds one named expression per node kind plus a few combinations. They are
//! built through the public factory functions only, so they double as usage examples.

pub mod samples;

pub use samples::{sample, sample_names};
