//! Region analysis session.
//!
//! `RegionAnalyzer` owns one region store together with the scanner workspace
//! and the similarity tolerances. Callers rebuild it explicitly whenever a new
//! raster is loaded; nothing is shared between analyzers.
use crate::diagnostics::ScanReport;
use crate::error::FeatureError;
use crate::image::{BinaryImage, Sentinels};
use crate::regions::{Region, RegionId, RegionScanner, RegionStore};
use crate::similarity::{find_similar, SimilarityTolerances};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Default)]
pub struct RegionAnalyzer {
    scanner: RegionScanner,
    store: RegionStore,
    tolerances: SimilarityTolerances,
    last_report: Option<ScanReport>,
}

impl RegionAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tolerances(tolerances: SimilarityTolerances) -> Self {
        Self {
            tolerances,
            ..Self::default()
        }
    }

    /// Clear the store and relabel it from `image`.
    pub fn rebuild(&mut self, image: &BinaryImage<'_>) -> Result<&ScanReport, FeatureError> {
        let report = self.scanner.scan(image, &mut self.store)?;
        Ok(self.last_report.insert(report))
    }

    /// Validate a raw raster and rebuild from it. Invalid dimensions leave the
    /// current store untouched.
    pub fn rebuild_from_raw(
        &mut self,
        width: usize,
        height: usize,
        data: &[u8],
        sentinels: Sentinels,
    ) -> Result<&ScanReport, FeatureError> {
        let image = BinaryImage::new(width, height, data, sentinels)?;
        self.rebuild(&image)
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.last_report = None;
    }

    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    pub fn last_report(&self) -> Option<&ScanReport> {
        self.last_report.as_ref()
    }

    pub fn region(&self, id: RegionId) -> Result<&Region, FeatureError> {
        self.store.get(id)
    }

    pub fn region_ids(&self) -> Vec<RegionId> {
        self.store.ids().collect()
    }

    pub fn tolerances(&self) -> &SimilarityTolerances {
        &self.tolerances
    }

    pub fn tolerances_mut(&mut self) -> &mut SimilarityTolerances {
        &mut self.tolerances
    }

    pub fn hu_tolerance(&self, num: usize) -> Result<f64, FeatureError> {
        self.tolerances.hu_tolerance(num)
    }

    pub fn set_hu_tolerance(&mut self, num: usize, value: f64) -> Result<(), FeatureError> {
        self.tolerances.set_hu_tolerance(num, value)
    }

    /// Regions similar to `reference` under the current tolerances.
    pub fn find_similar(&self, reference: RegionId) -> Result<Vec<RegionId>, FeatureError> {
        find_similar(&self.store, reference, &self.tolerances)
    }

    /// Hit test: the region owning foreground pixel `(x, y)`, if any.
    ///
    /// `image` must be the raster the store was built from. Candidates are
    /// narrowed by bounding box before the membership check.
    pub fn region_at(&self, image: &BinaryImage<'_>, x: i64, y: i64) -> Option<RegionId> {
        if !image.is_foreground_at(x, y) {
            return None;
        }
        let idx = y as usize * image.width() + x as usize;
        self.store
            .iter()
            .filter(|r| r.bounding_box().contains(x, y))
            .find(|r| r.contains_index(idx))
            .map(Region::id)
    }

    pub fn summary(&self, id: RegionId) -> Result<RegionSummary, FeatureError> {
        self.store.get(id).map(RegionSummary::from)
    }
}

/// Scalar descriptors of one region.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionSummary {
    pub id: RegionId,
    pub area: u64,
    pub orientation_deg: f64,
    pub eccentricity: f64,
    pub hu_moments: [f64; 5],
}

impl From<&Region> for RegionSummary {
    fn from(region: &Region) -> Self {
        Self {
            id: region.id(),
            area: region.area(),
            orientation_deg: region.orientation_deg(),
            eccentricity: region.eccentricity(),
            hu_moments: region.hu_moments(),
        }
    }
}

impl fmt::Display for RegionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Values of region #{}", self.id.0)?;
        writeln!(f, "Area: {}", self.area)?;
        writeln!(f, "Orientation: {:.4}", self.orientation_deg)?;
        writeln!(f, "Eccentricity: {:.6}", self.eccentricity)?;
        for (k, hu) in self.hu_moments.iter().enumerate() {
            writeln!(f, "Hu moment #{}: {:e}", k + 1, hu)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: usize = 8;
    const H: usize = 7;

    // Ring around a single dot: the dot lies inside the ring's bounding box.
    fn ring_with_dot() -> Vec<u8> {
        let rows = [
            "........", //
            ".#####..", //
            ".#...#..", //
            ".#.#.#..", //
            ".#...#..", //
            ".#####..", //
            "........", //
        ];
        rows.iter()
            .flat_map(|r| r.bytes())
            .map(|b| if b == b'#' { 255 } else { 0 })
            .collect()
    }

    #[test]
    fn hit_test_resolves_nested_bounding_boxes() {
        let data = ring_with_dot();
        let image = BinaryImage::new(W, H, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let mut analyzer = RegionAnalyzer::new();
        analyzer.rebuild(&image).unwrap();
        assert_eq!(analyzer.store().len(), 2);

        assert_eq!(analyzer.region_at(&image, 1, 1), Some(RegionId(0)));
        assert_eq!(analyzer.region_at(&image, 3, 3), Some(RegionId(1)));
        assert_eq!(analyzer.region_at(&image, 2, 2), None);
        assert_eq!(analyzer.region_at(&image, -1, 0), None);
        assert_eq!(analyzer.region_at(&image, 8, 0), None);
    }

    #[test]
    fn invalid_raster_keeps_previous_store() {
        let data = ring_with_dot();
        let mut analyzer = RegionAnalyzer::new();
        analyzer
            .rebuild_from_raw(W, H, &data, Sentinels::WHITE_ON_BLACK)
            .unwrap();
        let err = analyzer
            .rebuild_from_raw(W + 1, H, &data, Sentinels::WHITE_ON_BLACK)
            .unwrap_err();
        assert!(matches!(err, FeatureError::InvalidDimensions { .. }));
        assert_eq!(analyzer.store().len(), 2);
        assert_eq!(analyzer.last_report().map(|r| r.region_count), Some(2));
    }

    #[test]
    fn tolerances_are_read_on_every_query() {
        let mut data = vec![0u8; 20 * 6];
        for y in 1..4 {
            for x in 1..4 {
                data[y * 20 + x] = 255;
            }
            for x in 10..14 {
                data[y * 20 + x] = 255;
            }
        }
        let image = BinaryImage::new(20, 6, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let mut analyzer = RegionAnalyzer::new();
        analyzer.rebuild(&image).unwrap();
        assert!(analyzer.find_similar(RegionId(0)).unwrap().is_empty());

        let tol = analyzer.tolerances_mut();
        tol.orientation_deg = 360.0;
        tol.eccentricity = 10.0;
        tol.hu = [10.0; 5];
        assert_eq!(analyzer.find_similar(RegionId(0)).unwrap(), vec![RegionId(1)]);
    }

    #[test]
    fn summary_reports_descriptors() {
        let data = ring_with_dot();
        let image = BinaryImage::new(W, H, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let mut analyzer = RegionAnalyzer::new();
        analyzer.rebuild(&image).unwrap();
        let summary = analyzer.summary(RegionId(0)).unwrap();
        assert_eq!(summary.area, 16);
        let text = summary.to_string();
        assert!(text.starts_with("Values of region #0"));
        assert!(text.contains("Hu moment #5"));
        assert_eq!(
            analyzer.summary(RegionId(7)).unwrap_err(),
            FeatureError::RegionNotFound(RegionId(7))
        );

        analyzer.clear();
        assert!(analyzer.region_ids().is_empty());
        assert!(analyzer.last_report().is_none());
    }
}
