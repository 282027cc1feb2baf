use super::timing::TimingBreakdown;
use serde::Serialize;

/// Summary of one scan over a binary raster.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub width: usize,
    pub height: usize,
    pub foreground_pixels: usize,
    pub region_count: usize,
    pub timing: TimingBreakdown,
}
