use super::fill::FillResult;
use crate::error::FeatureError;
use crate::moments::Moments;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Identifier of a region within one store generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Id for the `index`-th region of a generation.
    pub fn from_index(index: usize) -> Result<Self, FeatureError> {
        u32::try_from(index)
            .map(RegionId)
            .map_err(|_| FeatureError::TooManyRegions(index))
    }
}

/// Integer rectangle `(x, y, width, height)` in absolute raster coordinates.
///
/// Built as `(left, upper − 1, right − left, lower − upper + 1)` from the fill
/// extents, matching the local-frame offset. Hit-testing treats the right and
/// bottom edges as inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl BoundingBox {
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }

    /// Tight pixel bounds `(left, top, right, bottom)`, all inclusive.
    pub fn pixel_bounds(&self) -> (i64, i64, i64, i64) {
        (self.x, self.y + 1, self.x + self.width, self.y + self.height)
    }
}

/// Centroid rounded to raster coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Centroid {
    pub x: i64,
    pub y: i64,
}

/// One connected foreground component and its shape descriptors.
///
/// Descriptor fields are written once at construction and never updated.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    id: RegionId,
    #[serde(skip)]
    pixels: Vec<usize>,
    bounding_box: BoundingBox,
    area: u64,
    centroid: Centroid,
    centroid_exact: Point2<f64>,
    orientation_deg: f64,
    eccentricity: f64,
    hu_moments: [f64; 5],
}

impl Region {
    /// Build the descriptor for a fill result on a raster of `width` columns.
    pub(crate) fn from_fill(id: RegionId, fill: &FillResult, width: usize) -> Result<Self, FeatureError> {
        let shape = Moments::new(&fill.pixels).descriptors()?;
        let ext = fill.extents;
        let (left, right) = (ext.left as i64, ext.right as i64);
        let (upper, lower) = (ext.upper as i64, ext.lower as i64);
        let bounding_box = BoundingBox {
            x: left,
            y: upper - 1,
            width: right - left,
            height: lower - upper + 1,
        };
        // Local coordinates are offset from (left - 1, upper - 1), not from the
        // bounding box corner, so this lands on the mean of the member pixels.
        let [ox, oy] = fill.origin();
        let centroid_exact = Point2::new(
            ox as f64 + shape.centroid[0],
            oy as f64 + shape.centroid[1],
        );
        Ok(Self {
            id,
            pixels: fill.absolute_indices(width),
            bounding_box,
            area: shape.area as u64,
            centroid: Centroid {
                x: centroid_exact.x.round() as i64,
                y: centroid_exact.y.round() as i64,
            },
            centroid_exact,
            orientation_deg: shape.orientation_deg,
            eccentricity: shape.eccentricity,
            hu_moments: shape.hu,
        })
    }

    /// Re-key the region under an id issued by the store.
    pub(crate) fn with_id(mut self, id: RegionId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    /// Absolute raster indices of the member pixels, sorted ascending.
    pub fn pixels(&self) -> &[usize] {
        &self.pixels
    }

    pub fn contains_index(&self, idx: usize) -> bool {
        self.pixels.binary_search(&idx).is_ok()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn area(&self) -> u64 {
        self.area
    }

    pub fn centroid(&self) -> Centroid {
        self.centroid
    }

    /// Unrounded centroid in absolute raster coordinates.
    pub fn centroid_exact(&self) -> Point2<f64> {
        self.centroid_exact
    }

    pub fn orientation_deg(&self) -> f64 {
        self.orientation_deg
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn hu_moments(&self) -> [f64; 5] {
        self.hu_moments
    }

    /// Hu moment by 1-based index; `None` outside `1..=5`.
    pub fn hu_moment(&self, num: usize) -> Option<f64> {
        num.checked_sub(1)
            .and_then(|k| self.hu_moments.get(k))
            .copied()
    }
}
