//! Structured scan diagnostics.
mod scan;
mod timing;

pub use scan::ScanReport;
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
