//! Sparse bidirectional view↔data position mapping.
//!
//! Only the reordered prefix is stored. Past it, a view position maps to the
//! data position with the same index. The stored prefix is always a
//! permutation of `0..stored_len`, and it is kept canonical (no trailing
//! identity run) after every mutation so that equal mappings have equal
//! representations and equal hashes.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use super::sparse::{Fallback, SparseVec};
use crate::error::{AxisError, Result};

/// Data position stored at a view slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct DataIndex(u32);

impl Fallback for DataIndex {
    fn fallback(index: usize) -> Self {
        DataIndex(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

/// View position → data position mapping with identity fallback.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexMapping {
    views: SparseVec<DataIndex>,
}

impl IndexMapping {
    /// Identity mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from a full view→data listing.
    ///
    /// # Errors
    /// Returns [`AxisError::InvalidState`] if `order` is not a permutation of
    /// `0..order.len()`.
    pub fn from_order(order: &[u32]) -> Result<Self> {
        let mut seen = vec![false; order.len()];
        for &data in order {
            match seen.get_mut(data as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(AxisError::InvalidState(format!(
                        "order is not a permutation: data position {data} repeated or out of range"
                    )))
                }
            }
        }
        let mut views = SparseVec::from_vec(order.iter().copied().map(DataIndex).collect());
        views.trim_fallback_suffix();
        Ok(Self { views })
    }

    /// Data position shown at `view`.
    pub fn data_position(&self, view: u32) -> u32 {
        self.views.get(view as usize).0
    }

    /// View position currently showing `data`.
    ///
    /// Returns `None` only if the stored prefix is not a permutation, which
    /// is an internal consistency failure.
    pub fn view_position(&self, data: u32) -> Option<u32> {
        let stored = self.views.as_slice();
        if data as usize >= stored.len() {
            return Some(data);
        }
        let found = stored
            .iter()
            .position(|d| d.0 == data)
            .and_then(|view| u32::try_from(view).ok());
        if found.is_none() {
            tracing::error!(data, stored_len = stored.len(), "data position missing from view mapping");
        }
        debug_assert!(found.is_some(), "data position {data} missing from view mapping");
        found
    }

    /// Number of explicitly stored view slots.
    pub fn stored_len(&self) -> usize {
        self.views.stored_len()
    }

    /// True when every view position maps to itself.
    pub fn is_identity(&self) -> bool {
        self.views.stored_len() == 0
    }

    /// Move the view positions in `sources` (sorted ascending, no duplicates)
    /// so they sit consecutively, in their original relative order, at
    /// `insert` as measured before the move.
    ///
    /// Returns the lowest view position whose data position may have changed.
    /// Nothing before it moved.
    pub fn reorder(&mut self, sources: &[u32], insert: u32) -> u32 {
        let min_affected = self.views.move_block(sources, insert);
        self.views.trim_fallback_suffix();
        u32::try_from(min_affected).unwrap_or(u32::MAX)
    }

    /// Shrink the mapping so it is a bijection on `0..count`, dropping data
    /// positions at or past `count` while keeping the relative order of the
    /// rest.
    ///
    /// Returns the lowest view position whose data position changed, if any.
    pub fn truncate_to_count(&mut self, count: u32) -> Option<u32> {
        let limit = count as usize;
        if self.views.stored_len() <= limit {
            return None;
        }
        let before = self.views.as_slice().to_vec();
        self.views.as_mut_vec().retain(|d| d.0 < count);
        self.views.trim_fallback_suffix();

        (0..limit)
            .find(|&view| before.get(view).map(|d| d.0) != Some(self.views.get(view).0))
            .and_then(|view| u32::try_from(view).ok())
    }

    /// Full view→data listing for `count` positions.
    pub fn order(&self, count: u32) -> Vec<u32> {
        (0..count).map(|view| self.data_position(view)).collect()
    }

    /// Hash of the canonical representation. Mappings that agree on every
    /// position hash equal.
    pub fn identity_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.views.as_slice().hash(&mut hasher);
        hasher.finish()
    }

    /// Back to identity.
    pub fn clear(&mut self) {
        self.views.clear();
    }
}
