//! Axis configuration.
//!
//! Hosts usually keep one [`AxisConfig`] per axis in their settings file and
//! hand it to [`Axis::with_config`](crate::layout::Axis::with_config).

use serde::{Deserialize, Serialize};

use crate::error::{AxisError, Result};

/// Default nominal size of a body position.
pub const DEFAULT_SIZE: u16 = 100;

/// Largest accepted zoom factor. Keeps `u16::MAX * MAX_ZOOM * u32::MAX`
/// inside `i64`.
pub const MAX_ZOOM: f64 = 64.0;

/// Sizes and zoom an axis starts with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AxisConfig {
    /// Nominal size of positions without an override. Must be at least 1.
    pub default_size: u16,
    /// Floor applied to explicit sizes.
    pub minimum_size: u16,
    /// Nominal size of the header row/column. 0 hides the header band.
    pub header_size: u16,
    /// Zoom factor. `None` means unscaled.
    pub zoom: Option<f64>,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            minimum_size: 0,
            header_size: 0,
            zoom: None,
        }
    }
}

impl AxisConfig {
    /// Check every field.
    ///
    /// # Errors
    /// Returns [`AxisError::InvalidSize`] for a zero default size and
    /// [`AxisError::InvalidZoom`] for a zoom outside `(0, MAX_ZOOM]`.
    pub fn validate(&self) -> Result<()> {
        if self.default_size == 0 {
            return Err(AxisError::InvalidSize {
                what: "default",
                value: 0,
            });
        }
        if let Some(zoom) = self.zoom {
            validate_zoom(zoom)?;
        }
        Ok(())
    }
}

/// Zoom factors must lie in `(0, MAX_ZOOM]`.
pub(crate) fn validate_zoom(zoom: f64) -> Result<()> {
    if zoom > 0.0 && zoom <= MAX_ZOOM {
        Ok(())
    } else {
        Err(AxisError::InvalidZoom(zoom))
    }
}

/// Convert a caller-supplied size to a nominal size, rejecting negatives and
/// values that do not fit.
pub(crate) fn nominal(what: &'static str, value: i32) -> Result<u16> {
    u16::try_from(value).map_err(|_| AxisError::InvalidSize {
        what,
        value: i64::from(value),
    })
}
