pub mod format;
pub mod grid;
pub mod indicators;
pub mod metrics;
pub mod pipeline;
