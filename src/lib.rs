//! Connected-region labeling and moment-based shape descriptors for binary
//! rasters.
//!
//! A raster classified upstream into foreground and background is scanned in
//! row-major order; every 4-connected foreground component becomes a
//! [`Region`] with its bounding box, centroid, area, orientation,
//! eccentricity and the first five Hu moments. Regions can then be compared
//! with a tolerance-based similarity query.

// Public modules (stable-ish surface)
pub mod analyzer;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod regions;
pub mod similarity;

// Lower-level building blocks and tool support.
pub mod config;
pub mod moments;

// --- High-level re-exports -------------------------------------------------

pub use crate::analyzer::{RegionAnalyzer, RegionSummary};
pub use crate::diagnostics::ScanReport;
pub use crate::error::FeatureError;
pub use crate::regions::{scan_regions, BoundingBox, Centroid, Region, RegionId, RegionStore};
pub use crate::similarity::{find_similar, SimilarityTolerances};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use region_features::prelude::*;
///
/// # fn main() -> Result<(), FeatureError> {
/// let (w, h) = (64usize, 48usize);
/// let raster = vec![0u8; w * h];
/// let image = BinaryImage::new(w, h, &raster, Sentinels::WHITE_ON_BLACK)?;
///
/// let mut analyzer = RegionAnalyzer::new();
/// let report = analyzer.rebuild(&image)?;
/// println!("regions={} total_ms={:.3}", report.region_count, report.timing.total_ms);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{BinaryImage, Sentinels};
    pub use crate::{FeatureError, RegionAnalyzer, RegionId, SimilarityTolerances};
}
