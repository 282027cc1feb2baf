use super::region::{Region, RegionId};
use crate::error::FeatureError;
use std::collections::BTreeMap;

/// Owns every region of the current store generation.
///
/// Ids are handed out sequentially from zero; [`RegionStore::clear`] starts a
/// new generation and resets the counter.
#[derive(Clone, Debug, Default)]
pub struct RegionStore {
    next_id: u32,
    regions: BTreeMap<RegionId, Region>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `region` under the next id of this generation and return that id.
    ///
    /// The store issues the id itself, so an insert never replaces an existing
    /// region; any id the region carried before is discarded.
    pub fn insert(&mut self, region: Region) -> Result<RegionId, FeatureError> {
        let id = RegionId(self.next_id);
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or(FeatureError::TooManyRegions(self.regions.len() + 1))?;
        self.regions.insert(id, region.with_id(id));
        Ok(id)
    }

    /// Replace the whole generation with `regions`, numbered `0..n` in order.
    ///
    /// On error the previous generation is left untouched.
    pub(crate) fn rebuild(&mut self, regions: Vec<Region>) -> Result<(), FeatureError> {
        let mut next = RegionStore::new();
        for region in regions {
            next.insert(region)?;
        }
        *self = next;
        Ok(())
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    pub fn get(&self, id: RegionId) -> Result<&Region, FeatureError> {
        self.regions.get(&id).ok_or(FeatureError::RegionNotFound(id))
    }

    /// Region ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.regions.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn clear(&mut self) {
        self.next_id = 0;
        self.regions.clear();
    }
}
