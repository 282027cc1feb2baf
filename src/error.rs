//! Error type shared by the scanner, the region store and the matcher.
use crate::regions::RegionId;

/// Failures surfaced by region labeling and region queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureError {
    /// Raster length does not match `width * height` (or the product overflows).
    InvalidDimensions {
        width: usize,
        height: usize,
        len: usize,
    },
    /// Lookup or similarity query referenced an id that is not in the store.
    RegionNotFound(RegionId),
    /// Descriptors were requested for an empty point set.
    DegenerateMoment,
    /// A 1-based Hu moment index outside `1..=5`.
    InvalidHuIndex(usize),
    /// More regions than a [`RegionId`] can number in one generation.
    TooManyRegions(usize),
}

impl std::fmt::Display for FeatureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeatureError::InvalidDimensions { width, height, len } => write!(
                f,
                "invalid raster dimensions ({width}x{height} does not match {len} pixels)"
            ),
            FeatureError::RegionNotFound(id) => write!(f, "no region with id {} found", id.0),
            FeatureError::DegenerateMoment => {
                write!(f, "moments of an empty point set are undefined (zero area)")
            }
            FeatureError::InvalidHuIndex(num) => {
                write!(f, "hu moment index {num} out of range (expected 1..=5)")
            }
            FeatureError::TooManyRegions(count) => {
                write!(f, "{count} regions exceed the id space of one store generation")
            }
        }
    }
}

impl std::error::Error for FeatureError {}
