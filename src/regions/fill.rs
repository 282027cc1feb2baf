use crate::image::BinaryImage;
use crate::moments::LocalPixel;
use std::collections::VecDeque;

/// Inclusive pixel extents of a filled component in absolute raster coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Extents {
    pub(crate) left: usize,
    pub(crate) right: usize,
    pub(crate) upper: usize,
    pub(crate) lower: usize,
}

impl Extents {
    fn seed(x: usize, y: usize) -> Self {
        Self {
            left: x,
            right: x,
            upper: y,
            lower: y,
        }
    }

    #[inline]
    fn include(&mut self, x: usize, y: usize) {
        self.left = self.left.min(x);
        self.right = self.right.max(x);
        self.upper = self.upper.min(y);
        self.lower = self.lower.max(y);
    }
}

/// Result of one flood fill.
///
/// `pixels` are in the local frame whose origin is `(left − 1, upper − 1)`,
/// so local coordinates start at 1 on both axes.
#[derive(Clone, Debug)]
pub(crate) struct FillResult {
    pub(crate) pixels: Vec<LocalPixel>,
    pub(crate) extents: Extents,
}

impl FillResult {
    /// Absolute origin of the local frame (may be −1 on either axis).
    #[inline]
    pub(crate) fn origin(&self) -> [i64; 2] {
        [
            self.extents.left as i64 - 1,
            self.extents.upper as i64 - 1,
        ]
    }

    /// Re-express the local pixels as linear raster indices, sorted ascending.
    pub(crate) fn absolute_indices(&self, width: usize) -> Vec<usize> {
        let left = self.extents.left;
        let upper = self.extents.upper;
        let mut indices: Vec<usize> = self
            .pixels
            .iter()
            .map(|px| (px.y + upper - 1) * width + px.x + left - 1)
            .collect();
        indices.sort_unstable();
        indices
    }
}

/// Scan-local claimed overlay and work queue, reused across fills of one scan.
#[derive(Debug, Default)]
pub(crate) struct FillWorkspace {
    claimed: Vec<bool>,
    queue: VecDeque<usize>,
    visited: Vec<(usize, usize)>,
}

impl FillWorkspace {
    /// Clears the overlay and sizes it for a raster of `len` cells.
    pub(crate) fn reset(&mut self, len: usize) {
        self.claimed.clear();
        self.claimed.resize(len, false);
        self.queue.clear();
        self.visited.clear();
    }

    #[inline]
    pub(crate) fn is_claimed(&self, idx: usize) -> bool {
        self.claimed[idx]
    }

    /// Breadth-first 4-connected fill from `start`.
    ///
    /// The seed must be an unclaimed foreground pixel. Every accepted pixel
    /// (seed included) is claimed, enqueued once and widens the extents.
    pub(crate) fn fill(&mut self, image: &BinaryImage<'_>, start: usize) -> FillResult {
        let width = image.width();
        let height = image.height();
        debug_assert!(image.is_foreground(start) && !self.claimed[start]);

        self.queue.clear();
        self.visited.clear();

        let (sx, sy) = (start % width, start / width);
        let mut extents = Extents::seed(sx, sy);
        self.claimed[start] = true;
        self.queue.push_back(start);
        self.visited.push((sx, sy));

        while let Some(idx) = self.queue.pop_front() {
            let x = idx % width;
            let y = idx / width;

            // left, right, up, down; bounded per row and per column
            let neighbours = [
                (x > 0).then(|| idx - 1),
                (x + 1 < width).then(|| idx + 1),
                (y > 0).then(|| idx - width),
                (y + 1 < height).then(|| idx + width),
            ];
            for neighbour in neighbours.into_iter().flatten() {
                if self.claimed[neighbour] || !image.is_foreground(neighbour) {
                    continue;
                }
                self.claimed[neighbour] = true;
                self.queue.push_back(neighbour);
                let (nx, ny) = (neighbour % width, neighbour / width);
                extents.include(nx, ny);
                self.visited.push((nx, ny));
            }
        }

        let pixels = self
            .visited
            .iter()
            .map(|&(x, y)| LocalPixel::new(x + 1 - extents.left, y + 1 - extents.upper))
            .collect();
        FillResult { pixels, extents }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Sentinels;

    fn mask(w: usize, rows: &[&str]) -> Vec<u8> {
        let data: Vec<u8> = rows
            .iter()
            .flat_map(|r| r.bytes())
            .map(|b| if b == b'#' { 255 } else { 0 })
            .collect();
        assert_eq!(data.len(), w * rows.len());
        data
    }

    fn fill_at(w: usize, h: usize, data: &[u8], start: usize) -> (FillResult, FillWorkspace) {
        let img = BinaryImage::new(w, h, data, Sentinels::WHITE_ON_BLACK).unwrap();
        let mut ws = FillWorkspace::default();
        ws.reset(img.len());
        let res = ws.fill(&img, start);
        (res, ws)
    }

    #[test]
    fn does_not_wrap_across_row_edges() {
        // (3,0) and (0,1) are adjacent in the flat array only
        let data = mask(4, &["...#", "#...", "...."]);
        let (res, ws) = fill_at(4, 3, &data, 3);
        assert_eq!(res.pixels.len(), 1);
        assert!(!ws.is_claimed(4));
    }

    #[test]
    fn does_not_wrap_vertically_past_last_row() {
        let data = mask(3, &["#..", "...", "..#"]);
        let (res, ws) = fill_at(3, 3, &data, 8);
        assert_eq!(res.pixels.len(), 1);
        assert!(!ws.is_claimed(0));
    }

    #[test]
    fn seed_is_recorded_and_claimed() {
        let data = mask(3, &["...", ".#.", "..."]);
        let (res, ws) = fill_at(3, 3, &data, 4);
        assert!(ws.is_claimed(4));
        assert_eq!(res.pixels, vec![LocalPixel::new(1, 1)]);
        assert_eq!(
            res.extents,
            Extents {
                left: 1,
                right: 1,
                upper: 1,
                lower: 1
            }
        );
    }

    #[test]
    fn tracks_extents_and_local_offset() {
        let data = mask(
            6,
            &[
                "......", //
                "..##..", //
                ".###..", //
                "...#..", //
            ],
        );
        let (res, _) = fill_at(6, 4, &data, 8);
        assert_eq!(
            res.extents,
            Extents {
                left: 1,
                right: 3,
                upper: 1,
                lower: 3
            }
        );
        assert_eq!(res.pixels.len(), 6);
        assert_eq!(res.origin(), [0, 0]);
        assert!(res.pixels.iter().all(|p| p.x >= 1 && p.y >= 1));
        assert!(res.pixels.contains(&LocalPixel::new(1, 2)));
        assert!(res.pixels.contains(&LocalPixel::new(3, 3)));
        assert_eq!(res.absolute_indices(6), vec![8, 9, 13, 14, 15, 21]);
    }

    #[test]
    fn four_connectivity_excludes_diagonals() {
        let data = mask(3, &["#..", ".#.", "..#"]);
        let (res, ws) = fill_at(3, 3, &data, 0);
        assert_eq!(res.pixels.len(), 1);
        assert!(!ws.is_claimed(4));
    }

    #[test]
    fn component_at_raster_corner_has_negative_origin() {
        let data = mask(3, &["##.", "#..", "..."]);
        let (res, _) = fill_at(3, 3, &data, 0);
        assert_eq!(res.origin(), [-1, -1]);
        assert_eq!(res.absolute_indices(3), vec![0, 1, 3]);
    }
}
