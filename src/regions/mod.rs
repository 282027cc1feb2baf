//! Connected-component labeling of binary rasters.
//!
//! The scanner walks the raster in row-major order. Each foreground pixel not
//! yet claimed seeds a breadth-first flood fill over its 4-neighbourhood
//! (left, right, up, down). Neighbour checks are bounded per row and per
//! column, so components never wrap from one raster edge to the opposite one.
//!
//! While filling, the extents (leftmost/rightmost column, uppermost/lowermost
//! row) are tracked incrementally. Once the queue drains the member pixels are
//! re-expressed in a local frame with origin `(left − 1, upper − 1)`; local
//! coordinates therefore start at 1. Moments, centroid and the bounding box
//! `(left, upper − 1, right − left, lower − upper + 1)` are all derived from
//! that frame, and changing the offset shifts every downstream value.
//!
//! Complexity
//! - Each pixel is claimed by at most one fill, so labeling is O(W·H).
//! - Descriptor computation is linear in the component size. With the
//!   `parallel` feature it runs per component on rayon; ids still follow
//!   discovery order.

mod fill;
mod region;
mod scanner;
mod store;

pub use region::{BoundingBox, Centroid, Region, RegionId};
pub use scanner::{scan_regions, RegionScanner};
pub use store::RegionStore;
