//! Per-data-position nominal sizes and visibility.
//!
//! Each data position carries a [`NominalSize`]: the axis default, an explicit
//! size, or hidden (remembering the size it had, if any). Positions past the
//! stored prefix are default and visible.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::sparse::{Fallback, SparseVec};

/// Nominal (unzoomed) size and visibility of one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NominalSize {
    /// Visible, uses the axis default size.
    #[default]
    Default,
    /// Visible with an explicit size.
    Sized(u16),
    /// Hidden. Keeps the explicit size it had so unhiding restores it.
    Hidden(Option<u16>),
}

impl NominalSize {
    /// Whether the position is hidden.
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden(_))
    }

    /// The explicit size, hidden or not.
    pub fn explicit(self) -> Option<u16> {
        match self {
            Self::Default | Self::Hidden(None) => None,
            Self::Sized(size) | Self::Hidden(Some(size)) => Some(size),
        }
    }

    /// Same magnitude, hidden.
    pub fn hidden(self) -> Self {
        Self::Hidden(self.explicit())
    }

    /// Same magnitude, visible.
    pub fn shown(self) -> Self {
        match self.explicit() {
            Some(size) => Self::Sized(size),
            None => Self::Default,
        }
    }

    /// Replace the magnitude, keeping visibility.
    pub fn with_explicit(self, size: Option<u16>) -> Self {
        match (self.is_hidden(), size) {
            (true, size) => Self::Hidden(size),
            (false, Some(size)) => Self::Sized(size),
            (false, None) => Self::Default,
        }
    }
}

impl Fallback for NominalSize {
    fn fallback(_index: usize) -> Self {
        Self::Default
    }
}

/// Scale a nominal size by the zoom factor.
///
/// An absent zoom and a zoom of exactly 1.0 take the integer path so the
/// common case carries no rounding.
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn zoomed(nominal: u16, zoom: Option<f64>) -> i64 {
    match zoom {
        Some(factor) if factor != 1.0 => (f64::from(nominal) * factor).round() as i64,
        _ => i64::from(nominal),
    }
}

/// Sparse table of nominal sizes keyed by data position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSize {
    sizes: SparseVec<NominalSize>,
}

impl IndexSize {
    /// Everything default and visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nominal size of `data`.
    pub fn nominal_size(&self, data: u32) -> NominalSize {
        self.sizes.get(data as usize)
    }

    /// Give `data` an explicit size, keeping its visibility.
    ///
    /// Returns the previous value.
    pub fn set_nominal_size(&mut self, data: u32, size: u16) -> NominalSize {
        let old = self.nominal_size(data);
        self.sizes.set(data as usize, old.with_explicit(Some(size)));
        old
    }

    /// Drop the explicit size of `data`, keeping its visibility.
    pub fn reset_to_default(&mut self, data: u32) -> bool {
        let old = self.nominal_size(data);
        if old.explicit().is_none() {
            return false;
        }
        self.sizes.set(data as usize, old.with_explicit(None));
        self.sizes.trim_fallback_suffix();
        true
    }

    /// Hide `data`. Returns false if it was already hidden.
    pub fn hide(&mut self, data: u32) -> bool {
        let old = self.nominal_size(data);
        if old.is_hidden() {
            return false;
        }
        self.sizes.set(data as usize, old.hidden());
        true
    }

    /// Show `data`. Returns false if it was already visible.
    pub fn unhide(&mut self, data: u32) -> bool {
        let old = self.nominal_size(data);
        if !old.is_hidden() {
            return false;
        }
        self.sizes.set(data as usize, old.shown());
        self.sizes.trim_fallback_suffix();
        true
    }

    /// Show every hidden position, returning the ones that changed.
    pub fn unhide_all(&mut self) -> Vec<u32> {
        let mut changed = Vec::new();
        for (data, slot) in self.sizes.as_mut_vec().iter_mut().enumerate() {
            if slot.is_hidden() {
                *slot = slot.shown();
                changed.extend(u32::try_from(data).ok());
            }
        }
        self.sizes.trim_fallback_suffix();
        changed
    }

    /// Drop every explicit size, keeping visibility.
    pub fn clear_all_sizes(&mut self) -> bool {
        let mut changed = false;
        for slot in self.sizes.as_mut_vec().iter_mut() {
            if slot.explicit().is_some() {
                *slot = slot.with_explicit(None);
                changed = true;
            }
        }
        self.sizes.trim_fallback_suffix();
        changed
    }

    /// Raise every explicit size below `minimum` to `minimum`.
    pub fn apply_minimum_size(&mut self, minimum: u16) -> bool {
        let mut changed = false;
        for slot in self.sizes.as_mut_vec().iter_mut() {
            if let Some(size) = slot.explicit() {
                if size < minimum {
                    *slot = slot.with_explicit(Some(minimum));
                    changed = true;
                }
            }
        }
        changed
    }

    /// Sum of zoomed pixel sizes over data positions `0..count`.
    pub fn total_pixels(&self, count: u32, default_size: u16, zoom: Option<f64>) -> i64 {
        let default_px = zoomed(default_size, zoom);
        let stored = self.sizes.as_slice();
        let covered = stored.len().min(count as usize);

        let mut total = 0_i64;
        let mut defaults = i64::from(count) - i64::try_from(covered).unwrap_or(0);
        for size in stored.iter().take(covered) {
            match size {
                NominalSize::Default => defaults += 1,
                NominalSize::Sized(size) => total += zoomed(*size, zoom),
                NominalSize::Hidden(_) => {}
            }
        }
        total + defaults * default_px
    }

    /// Physically relocate the records at data positions `sources` (sorted
    /// ascending, no duplicates) to `insert`, following rows the data model
    /// itself moved.
    ///
    /// Returns the lowest data position whose record may have changed.
    pub fn reorder_positions(&mut self, sources: &[u32], insert: u32) -> u32 {
        let min_affected = self.sizes.move_block(sources, insert);
        self.sizes.trim_fallback_suffix();
        u32::try_from(min_affected).unwrap_or(u32::MAX)
    }

    /// Forget every record at or past `count`.
    pub fn truncate(&mut self, count: u32) {
        self.sizes.truncate(count as usize);
        self.sizes.trim_fallback_suffix();
    }

    /// Explicit sizes by data position, hidden ones included.
    pub fn size_exceptions(&self) -> BTreeMap<u32, u16> {
        self.records()
            .filter_map(|(data, size)| size.explicit().map(|s| (data, s)))
            .collect()
    }

    /// Hidden data positions.
    pub fn hidden_positions(&self) -> BTreeSet<u32> {
        self.records()
            .filter(|(_, size)| size.is_hidden())
            .map(|(data, _)| data)
            .collect()
    }

    /// Number of stored records.
    pub fn stored_len(&self) -> usize {
        self.sizes.stored_len()
    }

    /// Everything back to default and visible.
    pub fn clear(&mut self) {
        self.sizes.clear();
    }

    fn records(&self) -> impl Iterator<Item = (u32, NominalSize)> + '_ {
        self.sizes
            .as_slice()
            .iter()
            .enumerate()
            .filter_map(|(data, size)| u32::try_from(data).ok().map(|d| (d, *size)))
    }
}
