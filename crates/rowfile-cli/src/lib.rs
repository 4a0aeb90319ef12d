//! CLI library components for the rowfile pipeline.

pub mod logging;
