//! Threshold-based similarity between regions.
//!
//! A candidate matches the reference when its orientation, eccentricity and
//! each of the five Hu moments lie strictly inside `reference ± tolerance`.
//! All seven checks must pass. The relation is symmetric but not transitive.
use crate::error::FeatureError;
use crate::regions::{Region, RegionId, RegionStore};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Absolute tolerances used by [`find_similar`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityTolerances {
    /// Orientation tolerance in degrees.
    pub orientation_deg: f64,
    pub eccentricity: f64,
    /// Tolerances for Hu moments 1..=5.
    pub hu: [f64; 5],
}

impl Default for SimilarityTolerances {
    fn default() -> Self {
        Self {
            orientation_deg: 10.0,
            eccentricity: 0.05,
            hu: [0.04, 0.004, 0.009, 0.004, 0.00001],
        }
    }
}

impl SimilarityTolerances {
    /// Tolerance of Hu moment `num` (1-based).
    pub fn hu_tolerance(&self, num: usize) -> Result<f64, FeatureError> {
        num.checked_sub(1)
            .and_then(|k| self.hu.get(k))
            .copied()
            .ok_or(FeatureError::InvalidHuIndex(num))
    }

    /// Set the tolerance of Hu moment `num` (1-based).
    pub fn set_hu_tolerance(&mut self, num: usize, value: f64) -> Result<(), FeatureError> {
        let slot = num
            .checked_sub(1)
            .and_then(|k| self.hu.get_mut(k))
            .ok_or(FeatureError::InvalidHuIndex(num))?;
        *slot = value;
        Ok(())
    }
}

#[inline]
fn within(value: f64, reference: f64, tolerance: f64) -> bool {
    value < reference + tolerance && value > reference - tolerance
}

/// True when `candidate` lies inside every tolerance band around `reference`.
pub fn is_similar(reference: &Region, candidate: &Region, tol: &SimilarityTolerances) -> bool {
    let ref_hu = reference.hu_moments();
    let cand_hu = candidate.hu_moments();
    within(
        candidate.orientation_deg(),
        reference.orientation_deg(),
        tol.orientation_deg,
    ) && within(
        candidate.eccentricity(),
        reference.eccentricity(),
        tol.eccentricity,
    ) && (0..5).all(|k| within(cand_hu[k], ref_hu[k], tol.hu[k]))
}

/// Ids of all regions other than `reference` that are similar to it, ascending.
pub fn find_similar(
    store: &RegionStore,
    reference: RegionId,
    tol: &SimilarityTolerances,
) -> Result<Vec<RegionId>, FeatureError> {
    let reference_region = store.get(reference).inspect_err(|_| {
        warn!("find_similar: no region with id {} found", reference.0);
    })?;
    let matches: Vec<RegionId> = store
        .iter()
        .filter(|r| r.id() != reference)
        .filter(|r| is_similar(reference_region, r, tol))
        .map(Region::id)
        .collect();
    debug!(
        "find_similar: reference {} matched {} of {} regions",
        reference.0,
        matches.len(),
        store.len().saturating_sub(1)
    );
    Ok(matches)
}
