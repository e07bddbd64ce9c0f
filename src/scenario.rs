//! Scripted axis scenarios.
//!
//! A [`Scenario`] is a JSON document describing an axis configuration, a
//! sequence of operations and a set of pixel probes. [`Scenario::run`]
//! replays it and produces a [`Report`] with the resulting geometry. The
//! `gridaxis_cli` binary is a thin wrapper around this.

use serde::{Deserialize, Serialize};

use crate::config::AxisConfig;
use crate::error::Result;
use crate::layout::{Axis, AxisState};
use crate::position::{PixelHit, HEADER};

/// One mutation applied to the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Operation {
    /// The data model count changed.
    #[serde(rename_all = "camelCase")]
    Count { count: u32 },
    /// Zoom changed; `null` disables zoom.
    Zoom { factor: Option<f64> },
    /// New default size for positions without an override.
    #[serde(rename_all = "camelCase")]
    DefaultSize { size: i32 },
    /// New floor for explicit sizes.
    #[serde(rename_all = "camelCase")]
    MinimumSize { size: i32 },
    /// New header size.
    #[serde(rename_all = "camelCase")]
    HeaderSize { size: i32 },
    /// Explicit size for a data position (`-1` for the header).
    #[serde(rename_all = "camelCase")]
    IndexSize { position: i32, size: i32 },
    /// Drop the explicit size of a data position.
    #[serde(rename_all = "camelCase")]
    ClearIndexSize { position: u32 },
    /// Drop every explicit size.
    ClearAllSizes,
    /// Hide view positions.
    Hide { positions: Vec<u32> },
    /// Show view positions again.
    Unhide { positions: Vec<u32> },
    /// Show every hidden position.
    UnhideAll,
    /// Move view positions to an insertion point.
    Reorder { positions: Vec<u32>, insert: u32 },
    /// The data model relocated data positions.
    DataMoved { positions: Vec<u32>, insert: u32 },
    /// Identity order, every position default and visible.
    Reset,
}

impl Operation {
    /// Apply to `axis`.
    ///
    /// # Errors
    /// Propagates the axis error of the underlying call.
    pub fn apply(&self, axis: &mut Axis) -> Result<()> {
        match self {
            Self::Count { count } => axis.notify_count_changed(axis.count(), *count),
            Self::Zoom { factor } => axis.notify_zoom_changed(*factor)?,
            Self::DefaultSize { size } => axis.set_default_size(*size)?,
            Self::MinimumSize { size } => axis.set_minimum_size(*size)?,
            Self::HeaderSize { size } => axis.set_header_size(*size)?,
            Self::IndexSize { position, size } => axis.set_index_size(*position, *size)?,
            Self::ClearIndexSize { position } => axis.clear_index_size(*position)?,
            Self::ClearAllSizes => axis.clear_all_size_exceptions(),
            Self::Hide { positions } => {
                axis.hide(positions)?;
            }
            Self::Unhide { positions } => {
                axis.unhide(positions)?;
            }
            Self::UnhideAll => {
                axis.unhide_all();
            }
            Self::Reorder { positions, insert } => axis.reorder(positions, *insert)?,
            Self::DataMoved { positions, insert } => axis.notify_data_moved(positions, *insert)?,
            Self::Reset => axis.reset(),
        }
        Ok(())
    }
}

/// Input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    /// Initial axis configuration.
    pub config: AxisConfig,
    /// Initial number of positions.
    pub count: u32,
    /// Mutations applied in order.
    pub operations: Vec<Operation>,
    /// Pixel coordinates to hit-test after the operations.
    pub probes: Vec<i64>,
    /// Scroll offset used for the probes.
    pub scroll: i64,
}

/// Geometry of one view position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionReport {
    pub view: u32,
    pub data: u32,
    pub start: i64,
    pub size: i64,
    pub visible: bool,
}

/// Result of one pixel probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    pub pixel: i64,
    pub hit: PixelHit,
}

/// Output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub total_pixels: i64,
    pub header_pixels: i64,
    pub positions: Vec<PositionReport>,
    pub probes: Vec<ProbeReport>,
    pub state: AxisState,
}

impl Scenario {
    /// Parse a scenario from JSON text.
    ///
    /// # Errors
    /// Returns the JSON error as [`crate::error::AxisError::InvalidState`].
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| crate::error::AxisError::InvalidState(format!("scenario: {e}")))
    }

    /// Build the axis, replay every operation and collect the geometry.
    ///
    /// # Errors
    /// Stops at the first failing operation and returns its error.
    pub fn run(&self) -> Result<Report> {
        let mut axis = Axis::with_config(self.config)?.with_count(self.count);
        for (index, operation) in self.operations.iter().enumerate() {
            tracing::debug!(index, ?operation, "applying operation");
            operation.apply(&mut axis)?;
        }

        let mut positions = Vec::with_capacity(axis.count() as usize);
        for view in 0..axis.count() {
            let signed = i32::try_from(view).unwrap_or(i32::MAX);
            positions.push(PositionReport {
                view,
                data: axis.data_position(view)?,
                start: axis.pixel_start(signed, 0)?,
                size: axis.pixel_size(signed)?,
                visible: axis.is_visible(view)?,
            });
        }
        let probes = self
            .probes
            .iter()
            .map(|&pixel| ProbeReport {
                pixel,
                hit: axis.position_at_pixel(pixel, self.scroll),
            })
            .collect();

        Ok(Report {
            total_pixels: axis.total_pixels(),
            header_pixels: axis.pixel_size(HEADER)?,
            positions,
            probes,
            state: axis.state(),
        })
    }
}
