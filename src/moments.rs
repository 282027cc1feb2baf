//! Image moments over a set of integer points.
//!
//! Points are expressed in a region-local frame (see `regions::fill`). The
//! engine provides:
//!
//! - raw moments `M(p,q) = Σ x^p · y^q`,
//! - central moments `μ(p,q) = Σ (x − cx)^p · (y − cy)^q` around the centroid,
//! - normalized central moments `η(p,q) = μ(p,q) / μ(0,0)^((p+q)/2 + 1)`,
//! - derived descriptors: principal-axis orientation (degrees), eccentricity
//!   and the first five Hu invariants.
//!
//! All arithmetic is `f64`. For an empty point set the primitive accessors
//! return `0.0` and [`Moments::descriptors`] fails with
//! [`FeatureError::DegenerateMoment`].
use crate::error::FeatureError;
use serde::Serialize;

/// Pixel position relative to a region's local origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LocalPixel {
    pub x: usize,
    pub y: usize,
}

impl LocalPixel {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Moment calculator bound to a borrowed point set.
#[derive(Clone, Debug)]
pub struct Moments<'a> {
    points: &'a [LocalPixel],
    area: f64,
    centroid: [f64; 2],
}

impl<'a> Moments<'a> {
    pub fn new(points: &'a [LocalPixel]) -> Self {
        let mut moments = Self {
            points,
            area: 0.0,
            centroid: [0.0, 0.0],
        };
        moments.area = moments.raw(0, 0);
        if moments.area > 0.0 {
            moments.centroid = [
                moments.raw(1, 0) / moments.area,
                moments.raw(0, 1) / moments.area,
            ];
        }
        moments
    }

    /// Zeroth raw moment (pixel count).
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Local centroid `(M10 / M00, M01 / M00)`; `None` for zero area.
    pub fn centroid(&self) -> Option<[f64; 2]> {
        (self.area > 0.0).then_some(self.centroid)
    }

    pub fn raw(&self, p: i32, q: i32) -> f64 {
        self.points
            .iter()
            .map(|px| (px.x as f64).powi(p) * (px.y as f64).powi(q))
            .sum()
    }

    pub fn central(&self, p: i32, q: i32) -> f64 {
        let [cx, cy] = self.centroid;
        self.points
            .iter()
            .map(|px| (px.x as f64 - cx).powi(p) * (px.y as f64 - cy).powi(q))
            .sum()
    }

    pub fn normalized(&self, p: i32, q: i32) -> f64 {
        if self.area <= 0.0 {
            return 0.0;
        }
        let exponent = (p + q) as f64 / 2.0 + 1.0;
        self.central(p, q) / self.area.powf(exponent)
    }

    /// Single-pass second and third order normalized central moments.
    pub fn normalized_set(&self) -> NormalizedMoments {
        if self.area <= 0.0 {
            return NormalizedMoments::default();
        }
        let [cx, cy] = self.centroid;
        let mut mu = CentralSums::default();
        for px in self.points {
            mu.push(px.x as f64 - cx, px.y as f64 - cy);
        }
        let norm2 = self.area.powi(2);
        let norm3 = self.area.powf(2.5);
        NormalizedMoments {
            eta20: mu.mu20 / norm2,
            eta02: mu.mu02 / norm2,
            eta11: mu.mu11 / norm2,
            eta30: mu.mu30 / norm3,
            eta03: mu.mu03 / norm3,
            eta21: mu.mu21 / norm3,
            eta12: mu.mu12 / norm3,
        }
    }

    /// Area, centroid, orientation, eccentricity and Hu moments 1–5.
    pub fn descriptors(&self) -> Result<ShapeDescriptors, FeatureError> {
        let centroid = self.centroid().ok_or(FeatureError::DegenerateMoment)?;
        let eta = self.normalized_set();
        Ok(ShapeDescriptors {
            area: self.area,
            centroid,
            orientation_deg: eta.orientation_deg(),
            eccentricity: eta.eccentricity(),
            hu: eta.hu(),
        })
    }
}

#[derive(Default)]
struct CentralSums {
    mu20: f64,
    mu02: f64,
    mu11: f64,
    mu30: f64,
    mu03: f64,
    mu21: f64,
    mu12: f64,
}

impl CentralSums {
    #[inline]
    fn push(&mut self, dx: f64, dy: f64) {
        let dx2 = dx * dx;
        let dy2 = dy * dy;
        self.mu20 += dx2;
        self.mu02 += dy2;
        self.mu11 += dx * dy;
        self.mu30 += dx2 * dx;
        self.mu03 += dy2 * dy;
        self.mu21 += dx2 * dy;
        self.mu12 += dx * dy2;
    }
}

/// Normalized central moments up to third order.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedMoments {
    pub eta20: f64,
    pub eta02: f64,
    pub eta11: f64,
    pub eta30: f64,
    pub eta03: f64,
    pub eta21: f64,
    pub eta12: f64,
}

impl NormalizedMoments {
    /// Principal axis angle `0.5 · atan2(2η11, η20 − η02)` in degrees.
    pub fn orientation_deg(&self) -> f64 {
        (0.5 * (2.0 * self.eta11).atan2(self.eta20 - self.eta02)).to_degrees()
    }

    /// `((η20 − η02)² + 4η11²) / (η20 + η02)²`, zero when the denominator vanishes.
    pub fn eccentricity(&self) -> f64 {
        let denom = (self.eta20 + self.eta02).powi(2);
        if denom <= 0.0 {
            return 0.0;
        }
        ((self.eta20 - self.eta02).powi(2) + 4.0 * self.eta11.powi(2)) / denom
    }

    pub fn hu(&self) -> [f64; 5] {
        let Self {
            eta20,
            eta02,
            eta11,
            eta30,
            eta03,
            eta21,
            eta12,
        } = *self;
        let a = eta30 - 3.0 * eta12;
        let b = 3.0 * eta21 - eta03;
        let s = eta30 + eta12;
        let t = eta21 + eta03;
        [
            eta20 + eta02,
            (eta20 - eta02).powi(2) + 4.0 * eta11.powi(2),
            a.powi(2) + b.powi(2),
            s.powi(2) + t.powi(2),
            a * s * (s.powi(2) - 3.0 * t.powi(2)) + b * t * (3.0 * s.powi(2) - t.powi(2)),
        ]
    }
}

/// Descriptor values derived from one point set, in the local frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDescriptors {
    pub area: f64,
    pub centroid: [f64; 2],
    pub orientation_deg: f64,
    pub eccentricity: f64,
    pub hu: [f64; 5],
}
