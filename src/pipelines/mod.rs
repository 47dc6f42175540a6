//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait and the
//! [topfreq::TopFreq] pipeline extracting top sentence/word tables.
pub mod pipeline;
pub mod topfreq;

pub use pipeline::Pipeline;
pub use topfreq::{RunOpts, TopFreq};
