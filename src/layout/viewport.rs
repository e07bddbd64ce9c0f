//! Viewport state for one scrolled axis.

use super::Axis;
use crate::position::PixelHit;

/// Scroll position and visible extent along one axis.
///
/// `extent` covers the whole visible band, header included. The header stays
/// pinned; only the body scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisViewport {
    /// Body scroll offset in axis pixels
    pub scroll: i64,
    /// Visible extent in pixels
    pub extent: i64,
}

impl AxisViewport {
    /// Create a viewport showing `extent` pixels from the top.
    pub fn new(extent: i64) -> Self {
        Self { scroll: 0, extent }
    }

    /// First and last body view positions intersecting the viewport
    /// (inclusive), or `None` if no body position shows.
    pub fn visible_range(&self, axis: &mut Axis) -> Option<(u32, u32)> {
        let header = axis.header_pixels();
        if self.extent <= header || axis.count() == 0 {
            return None;
        }
        let first = match axis.position_at_pixel(header, self.scroll) {
            PixelHit::Cell(view) => view,
            PixelHit::Before | PixelHit::Header => 0,
            PixelHit::After => return None,
        };
        let last = match axis.position_at_pixel(self.extent - 1, self.scroll) {
            PixelHit::Cell(view) => view,
            _ => axis.count() - 1,
        };
        Some((first, last.max(first)))
    }

    /// Largest useful scroll offset.
    pub fn max_scroll(&self, axis: &mut Axis) -> i64 {
        (axis.total_pixels() - self.extent).max(0)
    }

    /// Clamp the scroll offset to `[0, max_scroll]`.
    pub fn clamp_scroll(&mut self, axis: &mut Axis) {
        self.scroll = self.scroll.clamp(0, self.max_scroll(axis));
    }

    /// Scroll the least amount needed to show view position `view` fully.
    /// Positions larger than the body band are aligned to its start.
    pub fn scroll_into_view(&mut self, axis: &mut Axis, view: u32) {
        let header = axis.header_pixels();
        let Ok(start) = axis.pixel_start(i32::try_from(view).unwrap_or(i32::MAX), 0) else {
            return;
        };
        let end = start + axis.pixel_size(i32::try_from(view).unwrap_or(i32::MAX)).unwrap_or(0);

        let band_start = header + self.scroll;
        let band_end = self.scroll + self.extent;
        if start < band_start || end - start > self.extent - header {
            self.scroll = start - header;
        } else if end > band_end {
            self.scroll = end - self.extent;
        }
        self.clamp_scroll(axis);
    }

    /// Convert an axis pixel to a screen pixel.
    pub fn to_screen(&self, axis: &Axis, pixel: i64) -> i64 {
        if pixel < axis.header_pixels() {
            pixel
        } else {
            pixel - self.scroll
        }
    }

    /// Convert a screen pixel to an axis pixel.
    pub fn to_axis(&self, axis: &Axis, screen: i64) -> i64 {
        if screen < axis.header_pixels() {
            screen
        } else {
            screen + self.scroll
        }
    }
}
