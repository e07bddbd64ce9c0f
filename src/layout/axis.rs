//! The axis coordinate engine.
//!
//! An [`Axis`] converts between data positions, view positions and pixel
//! coordinates for one dimension of a grid. It composes an [`IndexMapping`]
//! (display order), an [`IndexSize`] table (sizes and visibility) and a lazily
//! extended [`PixelCache`], and invalidates exactly the cached geometry each
//! mutation can affect.
//!
//! Pixel space starts with the header band (`[0, header_pixels)`), followed by
//! the body positions in view order. The header is never scrolled; body
//! coordinates are shifted by the caller's scroll offset.

use std::collections::BTreeSet;

use super::index_mapping::IndexMapping;
use super::index_size::{zoomed, IndexSize, NominalSize};
use super::pixel_cache::PixelCache;
use super::state::AxisState;
use crate::config::{nominal, validate_zoom, AxisConfig};
use crate::error::{AxisError, Result};
use crate::position::{PixelHit, HEADER};

/// Geometry change reported to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisChange {
    /// The total pixel extent may have changed.
    TotalPixelsChanged,
    /// Pixel starts from this view position onward may have changed.
    LayoutChanged {
        /// First affected view position.
        from: u32,
    },
}

/// One row or column axis of a grid.
#[derive(Debug, Clone)]
pub struct Axis {
    count: u32,
    default_size: u16,
    minimum_size: u16,
    header_size: u16,
    zoom: Option<f64>,
    mapping: IndexMapping,
    sizes: IndexSize,
    starts: PixelCache,
    total: Option<i64>,
    changes: Vec<AxisChange>,
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

impl Axis {
    /// Empty axis with the default configuration.
    pub fn new() -> Self {
        let config = AxisConfig::default();
        Self {
            count: 0,
            default_size: config.default_size,
            minimum_size: config.minimum_size,
            header_size: config.header_size,
            zoom: config.zoom,
            mapping: IndexMapping::new(),
            sizes: IndexSize::new(),
            starts: PixelCache::new(),
            total: None,
            changes: Vec::new(),
        }
    }

    /// Empty axis with `config`.
    ///
    /// # Errors
    /// Returns the validation error of [`AxisConfig::validate`].
    pub fn with_config(config: AxisConfig) -> Result<Self> {
        config.validate()?;
        let mut axis = Self::new();
        axis.default_size = config.default_size;
        axis.minimum_size = config.minimum_size;
        axis.header_size = config.header_size;
        axis.zoom = config.zoom;
        Ok(axis)
    }

    /// Builder-style count, for axes created before the data model exists.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.notify_count_changed(self.count, count);
        self.changes.clear();
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of body positions.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Nominal size of positions without an override.
    pub fn default_size(&self) -> u16 {
        self.default_size
    }

    /// Floor applied to explicit sizes.
    pub fn minimum_size(&self) -> u16 {
        self.minimum_size
    }

    /// Nominal header size.
    pub fn header_size(&self) -> u16 {
        self.header_size
    }

    /// Current zoom factor.
    pub fn zoom(&self) -> Option<f64> {
        self.zoom
    }

    /// Current configuration.
    pub fn config(&self) -> AxisConfig {
        AxisConfig {
            default_size: self.default_size,
            minimum_size: self.minimum_size,
            header_size: self.header_size,
            zoom: self.zoom,
        }
    }

    /// Zoomed header extent.
    pub fn header_pixels(&self) -> i64 {
        zoomed(self.header_size, self.zoom)
    }

    /// Number of view positions whose pixel start is currently cached.
    pub fn cached_positions(&self) -> usize {
        self.starts.len()
    }

    /// Hash of the display order. Equal orders hash equal.
    pub fn mapping_hash(&self) -> u64 {
        self.mapping.identity_hash()
    }

    /// Drain the geometry changes recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<AxisChange> {
        std::mem::take(&mut self.changes)
    }

    // ------------------------------------------------------------------
    // Position spaces
    // ------------------------------------------------------------------

    /// Data position shown at view position `view`.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `view >= count`.
    pub fn data_position(&self, view: u32) -> Result<u32> {
        self.check_body(view)?;
        Ok(self.mapping.data_position(view))
    }

    /// View position showing data position `data`.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `data >= count`, or
    /// [`AxisError::Inconsistent`] if the mapping lost track of it.
    pub fn view_position(&self, data: u32) -> Result<u32> {
        self.check_body(data)?;
        self.mapping
            .view_position(data)
            .ok_or(AxisError::Inconsistent { data })
    }

    /// Nominal size record of data position `data`.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `data >= count`.
    pub fn nominal_size(&self, data: u32) -> Result<NominalSize> {
        self.check_body(data)?;
        Ok(self.sizes.nominal_size(data))
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    /// Pixel size of view position `view`, or of the header for [`HEADER`].
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] outside `[HEADER, count)`.
    pub fn pixel_size(&self, view: i32) -> Result<i64> {
        match self.check_view(view)? {
            None => Ok(self.header_pixels()),
            Some(view) => Ok(self.body_pixel_size(view)),
        }
    }

    /// Pixel where view position `view` starts, minus `scroll`.
    ///
    /// The header starts at 0 regardless of scroll. Positions past the end
    /// clamp to `count`, whose start is the end of the axis.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] for positions below [`HEADER`].
    pub fn pixel_start(&mut self, view: i32, scroll: i64) -> Result<i64> {
        if view == HEADER {
            return Ok(0);
        }
        let view = u32::try_from(view).map_err(|_| self.out_of_range(i64::from(view)))?;
        Ok(self.start_of(view.min(self.count)).saturating_sub(scroll))
    }

    /// Which position the pixel coordinate `coordinate` falls on.
    ///
    /// Coordinates inside the header band hit the header; body coordinates
    /// are shifted by `scroll` first.
    pub fn position_at_pixel(&mut self, coordinate: i64, scroll: i64) -> PixelHit {
        if coordinate < 0 {
            return PixelHit::Before;
        }
        if coordinate < self.header_pixels() {
            return PixelHit::Header;
        }
        let target = coordinate.saturating_add(scroll);
        if target >= self.total_pixels() {
            return PixelHit::After;
        }

        self.extend_past(target);
        match self
            .starts
            .find_position(target)
            .and_then(|view| u32::try_from(view).ok())
        {
            Some(view) => PixelHit::Cell(view.min(self.count.saturating_sub(1))),
            // Scrolled above the first body position.
            None => PixelHit::Before,
        }
    }

    /// Total pixel extent: header plus every body position.
    pub fn total_pixels(&mut self) -> i64 {
        if let Some(total) = self.total {
            return total;
        }
        let total = self.header_pixels()
            + self
                .sizes
                .total_pixels(self.count, self.default_size, self.zoom);
        self.total = Some(total);
        total
    }

    // ------------------------------------------------------------------
    // Sizing
    // ------------------------------------------------------------------

    /// Change the nominal size of positions without an override.
    ///
    /// # Errors
    /// [`AxisError::InvalidSize`] unless `1 <= size <= 65535`.
    pub fn set_default_size(&mut self, size: i32) -> Result<()> {
        let size = nominal("default", size)?;
        if size == 0 {
            return Err(AxisError::InvalidSize {
                what: "default",
                value: 0,
            });
        }
        if size != self.default_size {
            self.default_size = size;
            self.invalidate_all();
        }
        Ok(())
    }

    /// Change the floor for explicit sizes, raising existing ones below it.
    ///
    /// # Errors
    /// [`AxisError::InvalidSize`] unless `0 <= size <= 65535`.
    pub fn set_minimum_size(&mut self, size: i32) -> Result<()> {
        let size = nominal("minimum", size)?;
        let raised = size > self.minimum_size;
        self.minimum_size = size;
        if raised && self.sizes.apply_minimum_size(size) {
            self.invalidate_all();
        }
        Ok(())
    }

    /// Change the nominal header size.
    ///
    /// # Errors
    /// [`AxisError::InvalidSize`] unless `0 <= size <= 65535`.
    pub fn set_header_size(&mut self, size: i32) -> Result<()> {
        let size = nominal("header", size)?;
        if size == self.header_size {
            return Ok(());
        }
        let delta = zoomed(size, self.zoom) - self.header_pixels();
        self.header_size = size;
        // Every body start shifts by the header delta.
        self.starts.clear();
        self.push_change(AxisChange::LayoutChanged { from: 0 });
        self.adjust_total(delta);
        Ok(())
    }

    /// Give data position `data` an explicit nominal size, or resize the
    /// header when `data` is [`HEADER`]. Sizes below the minimum are raised
    /// to it. Visibility is unchanged.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] outside `[HEADER, count)`,
    /// [`AxisError::InvalidSize`] unless `0 <= size <= 65535`.
    pub fn set_index_size(&mut self, data: i32, size: i32) -> Result<()> {
        let Some(data) = self.check_view(data)? else {
            return self.set_header_size(size);
        };
        let size = nominal("index", size)?.max(self.minimum_size);
        let old = self.sizes.set_nominal_size(data, size);
        self.size_record_changed(data, old);
        Ok(())
    }

    /// Drop the explicit size of data position `data`.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `data >= count`.
    pub fn clear_index_size(&mut self, data: u32) -> Result<()> {
        self.check_body(data)?;
        let old = self.sizes.nominal_size(data);
        if self.sizes.reset_to_default(data) {
            self.size_record_changed(data, old);
        }
        Ok(())
    }

    /// Drop every explicit size. Hidden positions stay hidden.
    pub fn clear_all_size_exceptions(&mut self) {
        if self.sizes.clear_all_sizes() {
            self.invalidate_all();
        }
    }

    /// Change the zoom factor. `None` disables scaling.
    ///
    /// # Errors
    /// [`AxisError::InvalidZoom`] for factors outside `(0, MAX_ZOOM]`.
    pub fn notify_zoom_changed(&mut self, zoom: Option<f64>) -> Result<()> {
        if let Some(factor) = zoom {
            validate_zoom(factor)?;
        }
        if zoom != self.zoom {
            tracing::debug!(old = ?self.zoom, new = ?zoom, "axis zoom changed");
            self.zoom = zoom;
            self.invalidate_all();
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    /// Hide data positions. Returns the ones that were visible before, or
    /// `None` if nothing changed.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if any position is `>= count`; no
    /// position is hidden in that case.
    pub fn hide(&mut self, data_positions: &[u32]) -> Result<Option<BTreeSet<u32>>> {
        self.set_hidden(data_positions, true)
    }

    /// Show data positions. Returns the ones that were hidden before, or
    /// `None` if nothing changed.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if any position is `>= count`; no
    /// position is shown in that case.
    pub fn unhide(&mut self, data_positions: &[u32]) -> Result<Option<BTreeSet<u32>>> {
        self.set_hidden(data_positions, false)
    }

    /// Show every hidden position.
    pub fn unhide_all(&mut self) -> Option<BTreeSet<u32>> {
        let changed: BTreeSet<u32> = self.sizes.unhide_all().into_iter().collect();
        if changed.is_empty() {
            return None;
        }
        self.invalidate_all();
        Some(changed)
    }

    /// Whether view position `view` is visible.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `view >= count`.
    pub fn is_visible(&self, view: u32) -> Result<bool> {
        self.check_body(view)?;
        Ok(self.visible(view))
    }

    /// Lowest visible view position.
    pub fn first_visible(&self) -> Option<u32> {
        (0..self.count).find(|&v| self.visible(v))
    }

    /// Highest visible view position.
    pub fn last_visible(&self) -> Option<u32> {
        (0..self.count).rev().find(|&v| self.visible(v))
    }

    /// First visible view position after `view`, falling back to the closest
    /// one at or before it.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `view >= count`.
    pub fn next_visible(&self, view: u32) -> Result<Option<u32>> {
        self.check_body(view)?;
        Ok(self
            .scan_forward(view + 1)
            .or_else(|| self.scan_backward(view)))
    }

    /// Last visible view position before `view`, falling back to the closest
    /// one at or after it.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `view >= count`.
    pub fn previous_visible(&self, view: u32) -> Result<Option<u32>> {
        self.check_body(view)?;
        let before = view.checked_sub(1).and_then(|v| self.scan_backward(v));
        Ok(before.or_else(|| self.scan_forward(view)))
    }

    /// `view` itself if visible, otherwise the next visible position with
    /// backward fallback.
    ///
    /// # Errors
    /// [`AxisError::PositionOutOfRange`] if `view >= count`.
    pub fn nearest_visible(&self, view: u32) -> Result<Option<u32>> {
        self.check_body(view)?;
        if self.visible(view) {
            return Ok(Some(view));
        }
        self.next_visible(view)
    }

    // ------------------------------------------------------------------
    // Reordering and upstream notifications
    // ------------------------------------------------------------------

    /// Move the view positions `views` so they sit together, in their current
    /// relative order, at `insert` (a view position in `[0, count]` measured
    /// before the move). Sizes stay attached to data positions.
    ///
    /// # Errors
    /// [`AxisError::EmptySelection`] for an empty set,
    /// [`AxisError::PositionOutOfRange`] for a source `>= count`,
    /// [`AxisError::InsertOutOfRange`] for `insert > count`.
    pub fn reorder(&mut self, views: &[u32], insert: u32) -> Result<()> {
        let sources = self.check_move("reorder", views, insert)?;
        let before = self.mapping.clone();
        let min_affected = self.mapping.reorder(&sources, insert);
        tracing::debug!(
            moved = sources.len(),
            insert,
            min_affected,
            "axis reordered"
        );
        if self.mapping != before {
            self.invalidate_from(min_affected);
        }
        Ok(())
    }

    /// The data model moved the rows at data positions `data_positions` to
    /// `insert`; move their size and visibility records along with them.
    /// The display order is left alone.
    ///
    /// # Errors
    /// Same as [`Axis::reorder`].
    pub fn notify_data_moved(&mut self, data_positions: &[u32], insert: u32) -> Result<()> {
        let sources = self.check_move("move", data_positions, insert)?;
        let min_affected = self.sizes.reorder_positions(&sources, insert);
        tracing::debug!(moved = sources.len(), insert, min_affected, "data positions relocated");
        // Relocated records can land anywhere in view order.
        self.starts.clear();
        self.push_change(AxisChange::LayoutChanged { from: 0 });
        Ok(())
    }

    /// The data model's count went from `old` to `new`.
    ///
    /// Growth keeps every cached start; shrinkage drops size records,
    /// display order entries and cached starts past the new bound.
    pub fn notify_count_changed(&mut self, old: u32, new: u32) {
        if old != self.count {
            tracing::warn!(
                expected = self.count,
                old,
                new,
                "count notification out of sync with axis"
            );
        }
        let old = self.count;
        if new == old {
            return;
        }
        tracing::debug!(old, new, "axis count changed");
        self.count = new;

        if new > old {
            // Positions past the old end are unstored: default and visible.
            let added = i64::from(new - old) * zoomed(self.default_size, self.zoom);
            self.adjust_total(added);
            return;
        }

        self.sizes.truncate(new);
        let remapped = self.mapping.truncate_to_count(new);
        let from = remapped.map_or(new, |view| view.min(new));
        self.starts.truncate(from as usize + 1);
        self.total = None;
        self.push_change(AxisChange::LayoutChanged { from });
        self.push_change(AxisChange::TotalPixelsChanged);
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// Explicit nominal sizes by data position. Excludes default positions
    /// and hidden positions without an explicit size.
    pub fn size_exceptions(&self) -> std::collections::BTreeMap<u32, u16> {
        self.sizes.size_exceptions()
    }

    /// Hidden data positions.
    pub fn hidden_positions(&self) -> BTreeSet<u32> {
        self.sizes.hidden_positions()
    }

    /// Snapshot for persistence.
    pub fn state(&self) -> AxisState {
        AxisState {
            config: self.config(),
            count: self.count,
            order: if self.mapping.is_identity() {
                Vec::new()
            } else {
                self.mapping.order(self.count)
            },
            size_exceptions: self.size_exceptions(),
            hidden: self.hidden_positions(),
        }
    }

    /// Replace everything with `state`. Nothing changes if `state` is invalid.
    ///
    /// # Errors
    /// [`AxisError::InvalidState`] if the order is not a permutation of
    /// `0..count` or a record lies past `count`; configuration errors as in
    /// [`AxisConfig::validate`].
    pub fn restore(&mut self, state: &AxisState) -> Result<()> {
        state.config.validate()?;
        let count = state.count;

        let mapping = if state.order.is_empty() {
            IndexMapping::new()
        } else if state.order.len() == count as usize {
            IndexMapping::from_order(&state.order)?
        } else {
            return Err(AxisError::InvalidState(format!(
                "order lists {} positions, count is {count}",
                state.order.len()
            )));
        };

        let mut sizes = IndexSize::new();
        for (&data, &size) in &state.size_exceptions {
            if data >= count {
                return Err(AxisError::InvalidState(format!(
                    "size exception at {data} is past count {count}"
                )));
            }
            sizes.set_nominal_size(data, size.max(state.config.minimum_size));
        }
        for &data in &state.hidden {
            if data >= count {
                return Err(AxisError::InvalidState(format!(
                    "hidden position {data} is past count {count}"
                )));
            }
            sizes.hide(data);
        }

        tracing::debug!(
            count,
            exceptions = state.size_exceptions.len(),
            hidden = state.hidden.len(),
            "axis restored"
        );
        let config = state.config;
        self.default_size = config.default_size;
        self.minimum_size = config.minimum_size;
        self.header_size = config.header_size;
        self.zoom = config.zoom;
        self.count = count;
        self.mapping = mapping;
        self.sizes = sizes;
        self.invalidate_all();
        Ok(())
    }

    /// Back to identity order with every position default and visible.
    /// Configuration and count are kept.
    pub fn reset(&mut self) {
        self.mapping.clear();
        self.sizes.clear();
        self.invalidate_all();
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn out_of_range(&self, position: i64) -> AxisError {
        AxisError::PositionOutOfRange {
            position,
            count: self.count,
        }
    }

    fn check_body(&self, position: u32) -> Result<()> {
        if position < self.count {
            Ok(())
        } else {
            Err(self.out_of_range(i64::from(position)))
        }
    }

    /// `None` for the header, `Some(body)` for a body position.
    fn check_view(&self, position: i32) -> Result<Option<u32>> {
        if position == HEADER {
            return Ok(None);
        }
        match u32::try_from(position) {
            Ok(body) if body < self.count => Ok(Some(body)),
            _ => Err(self.out_of_range(i64::from(position))),
        }
    }

    fn check_move(&self, what: &'static str, positions: &[u32], insert: u32) -> Result<Vec<u32>> {
        if positions.is_empty() {
            return Err(AxisError::EmptySelection(what));
        }
        for &position in positions {
            self.check_body(position)?;
        }
        if insert > self.count {
            return Err(AxisError::InsertOutOfRange {
                position: insert,
                count: self.count,
            });
        }
        let mut sources = positions.to_vec();
        sources.sort_unstable();
        sources.dedup();
        Ok(sources)
    }

    fn nominal_pixels(&self, size: NominalSize) -> i64 {
        match size {
            NominalSize::Hidden(_) => 0,
            NominalSize::Default => zoomed(self.default_size, self.zoom),
            NominalSize::Sized(size) => zoomed(size, self.zoom),
        }
    }

    fn body_pixel_size(&self, view: u32) -> i64 {
        let data = self.mapping.data_position(view);
        self.nominal_pixels(self.sizes.nominal_size(data))
    }

    fn visible(&self, view: u32) -> bool {
        !self
            .sizes
            .nominal_size(self.mapping.data_position(view))
            .is_hidden()
    }

    fn scan_forward(&self, from: u32) -> Option<u32> {
        (from..self.count).find(|&v| self.visible(v))
    }

    fn scan_backward(&self, from: u32) -> Option<u32> {
        (0..=from.min(self.count.saturating_sub(1)))
            .rev()
            .find(|&v| self.count > 0 && self.visible(v))
    }

    /// Compute starts up to and including `view` (at most `count`).
    fn ensure_starts(&mut self, view: u32) {
        if self.starts.is_empty() {
            let header = self.header_pixels();
            self.starts.append(header);
        }
        let from = self.starts.len();
        while self.starts.len() <= view as usize {
            let last = self.starts.last().unwrap_or_default();
            let next = u32::try_from(self.starts.len() - 1)
                .map_or(0, |previous| self.body_pixel_size(previous));
            self.starts.append(last + next);
        }
        if self.starts.len() > from {
            tracing::trace!(from, to = self.starts.len(), "extended pixel cache");
        }
    }

    fn start_of(&mut self, view: u32) -> i64 {
        self.ensure_starts(view);
        self.starts
            .get(view as usize)
            .or_else(|| self.starts.last())
            .unwrap_or_default()
    }

    /// Extend the cache until it holds a start past `target` or reaches the
    /// end of the axis.
    fn extend_past(&mut self, target: i64) {
        self.ensure_starts(0);
        while self.starts.last().is_some_and(|last| last <= target)
            && self.starts.len() <= self.count as usize
        {
            let next = u32::try_from(self.starts.len()).unwrap_or(self.count);
            self.ensure_starts(next);
        }
    }

    fn size_record_changed(&mut self, data: u32, old: NominalSize) {
        let new = self.sizes.nominal_size(data);
        if new == old {
            return;
        }
        let delta = self.nominal_pixels(new) - self.nominal_pixels(old);
        if delta == 0 {
            return;
        }
        self.adjust_total(delta);
        match self.mapping.view_position(data) {
            Some(view) => self.invalidate_from(view),
            None => self.invalidate_all(),
        }
    }

    fn set_hidden(&mut self, data_positions: &[u32], hide: bool) -> Result<Option<BTreeSet<u32>>> {
        for &data in data_positions {
            self.check_body(data)?;
        }

        let mut changed = BTreeSet::new();
        let mut delta = 0_i64;
        for &data in data_positions {
            let old = self.sizes.nominal_size(data);
            let toggled = if hide {
                self.sizes.hide(data)
            } else {
                self.sizes.unhide(data)
            };
            if toggled {
                delta += self.nominal_pixels(self.sizes.nominal_size(data)) - self.nominal_pixels(old);
                changed.insert(data);
            }
        }
        if changed.is_empty() {
            return Ok(None);
        }

        let from = changed
            .iter()
            .map(|&data| self.mapping.view_position(data))
            .try_fold(u32::MAX, |min, view| view.map(|v| min.min(v)));
        match from {
            Some(from) => self.invalidate_from(from),
            None => self.invalidate_all(),
        }
        self.adjust_total(delta);
        Ok(Some(changed))
    }

    /// Keep starts `0..=view`; everything after depends on `view`'s size.
    fn invalidate_from(&mut self, view: u32) {
        self.starts.truncate(view as usize + 1);
        self.push_change(AxisChange::LayoutChanged { from: view });
    }

    fn invalidate_all(&mut self) {
        self.starts.clear();
        self.total = None;
        self.push_change(AxisChange::LayoutChanged { from: 0 });
        self.push_change(AxisChange::TotalPixelsChanged);
    }

    fn adjust_total(&mut self, delta: i64) {
        if delta == 0 {
            return;
        }
        if let Some(total) = self.total.as_mut() {
            *total += delta;
        }
        self.push_change(AxisChange::TotalPixelsChanged);
    }

    fn push_change(&mut self, change: AxisChange) {
        if !self.changes.contains(&change) {
            self.changes.push(change);
        }
    }
}
