use super::fill::{FillResult, FillWorkspace};
use super::region::{Region, RegionId};
use super::store::RegionStore;
use crate::diagnostics::{elapsed_ms, ScanReport, TimingBreakdown};
use crate::error::FeatureError;
use crate::image::BinaryImage;
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Row-major connected-component scanner.
///
/// Holds the claimed overlay and fill queue between scans so repeated scans
/// of same-sized rasters do not reallocate. The workspace is reset at the
/// start of every scan.
#[derive(Debug, Default)]
pub struct RegionScanner {
    workspace: FillWorkspace,
}

impl RegionScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label every 4-connected foreground component of `image` and replace
    /// the contents of `store` with the resulting regions.
    ///
    /// Ids follow row-major discovery order starting at zero. On error the
    /// store is left untouched.
    pub fn scan(
        &mut self,
        image: &BinaryImage<'_>,
        store: &mut RegionStore,
    ) -> Result<ScanReport, FeatureError> {
        let start = Instant::now();
        let mut timing = TimingBreakdown::default();

        let label_start = Instant::now();
        let fills = self.label(image);
        timing.record_since("label", label_start);

        let describe_start = Instant::now();
        let regions = describe(&fills, image.width())?;
        timing.record_since("describe", describe_start);

        let foreground_pixels: usize = fills.iter().map(|f| f.pixels.len()).sum();
        debug_assert_eq!(foreground_pixels, image.foreground_count());
        store.rebuild(regions)?;
        timing.total_ms = elapsed_ms(start);

        debug!(
            "RegionScanner::scan {}x{} -> {} regions ({} fg px) in {:.3} ms",
            image.width(),
            image.height(),
            store.len(),
            foreground_pixels,
            timing.total_ms
        );

        Ok(ScanReport {
            width: image.width(),
            height: image.height(),
            foreground_pixels,
            region_count: store.len(),
            timing,
        })
    }

    fn label(&mut self, image: &BinaryImage<'_>) -> Vec<FillResult> {
        self.workspace.reset(image.len());
        let mut fills = Vec::new();
        for idx in 0..image.len() {
            if image.is_foreground(idx) && !self.workspace.is_claimed(idx) {
                fills.push(self.workspace.fill(image, idx));
            }
        }
        fills
    }
}

/// Scan `image` into a fresh store.
pub fn scan_regions(image: &BinaryImage<'_>) -> Result<RegionStore, FeatureError> {
    let mut store = RegionStore::new();
    RegionScanner::new().scan(image, &mut store)?;
    Ok(store)
}

fn describe(fills: &[FillResult], width: usize) -> Result<Vec<Region>, FeatureError> {
    #[cfg(feature = "parallel")]
    {
        fills
            .par_iter()
            .enumerate()
            .map(|(i, fill)| Region::from_fill(RegionId::from_index(i)?, fill, width))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        fills
            .iter()
            .enumerate()
            .map(|(i, fill)| Region::from_fill(RegionId::from_index(i)?, fill, width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Sentinels;

    fn blank(w: usize, h: usize) -> Vec<u8> {
        vec![0u8; w * h]
    }

    fn paint(data: &mut [u8], w: usize, x0: usize, y0: usize, bw: usize, bh: usize) {
        for y in y0..y0 + bh {
            for x in x0..x0 + bw {
                data[y * w + x] = 255;
            }
        }
    }

    #[test]
    fn background_only_yields_no_regions() {
        let data = blank(16, 9);
        let img = BinaryImage::new(16, 9, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let store = scan_regions(&img).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn two_blocks_get_independent_ids() {
        let (w, h) = (12, 6);
        let mut data = blank(w, h);
        paint(&mut data, w, 1, 1, 3, 3);
        paint(&mut data, w, 7, 2, 3, 3);
        let img = BinaryImage::new(w, h, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let mut store = RegionStore::new();
        let report = RegionScanner::new().scan(&img, &mut store).unwrap();

        assert_eq!(report.region_count, 2);
        assert_eq!(report.foreground_pixels, 18);
        let first = store.get(RegionId(0)).unwrap();
        let second = store.get(RegionId(1)).unwrap();
        assert_eq!(first.area(), 9);
        assert_eq!(second.area(), 9);
        assert_eq!(first.pixels()[0], w + 1);
        assert_eq!(second.pixels()[0], 2 * w + 7);
        for k in 0..5 {
            assert!((first.hu_moments()[k] - second.hu_moments()[k]).abs() < 1e-12);
        }
    }

    #[test]
    fn ids_follow_row_major_discovery() {
        let (w, h) = (10, 10);
        let mut data = blank(w, h);
        // lower-left block starts on an earlier column but a later row
        paint(&mut data, w, 0, 6, 2, 2);
        paint(&mut data, w, 7, 1, 2, 2);
        let img = BinaryImage::new(w, h, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let store = scan_regions(&img).unwrap();
        assert_eq!(store.get(RegionId(0)).unwrap().pixels()[0], w + 7);
        assert_eq!(store.get(RegionId(1)).unwrap().pixels()[0], 6 * w);
    }

    #[test]
    fn rescan_resets_store_generation() {
        let (w, h) = (8, 8);
        let mut data = blank(w, h);
        paint(&mut data, w, 0, 0, 2, 2);
        paint(&mut data, w, 4, 4, 2, 2);
        let img = BinaryImage::new(w, h, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let mut scanner = RegionScanner::new();
        let mut store = RegionStore::new();
        scanner.scan(&img, &mut store).unwrap();
        assert_eq!(store.len(), 2);

        let mut single = blank(w, h);
        paint(&mut single, w, 3, 3, 3, 1);
        let img = BinaryImage::new(w, h, &single, Sentinels::WHITE_ON_BLACK).unwrap();
        scanner.scan(&img, &mut store).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec![RegionId(0)]);
        assert_eq!(store.get(RegionId(0)).unwrap().area(), 3);
    }

    #[test]
    fn components_touching_opposite_edges_stay_separate() {
        // right edge of row 0 and left edge of row 1 are flat-array neighbours
        let (w, h) = (5, 3);
        let mut data = blank(w, h);
        data[w - 1] = 255;
        data[w] = 255;
        let img = BinaryImage::new(w, h, &data, Sentinels::WHITE_ON_BLACK).unwrap();
        let store = scan_regions(&img).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.iter().all(|r| r.area() == 1));
    }
}
