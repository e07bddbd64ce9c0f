//! Position sentinels and the result type of pixel hit testing.
//!
//! Body positions are `0..count`. The single header row/column and the areas
//! outside the axis are encoded as negative sentinels so that hosts speaking
//! plain integers (the WASM binding, scenario files) can round-trip them.

use serde::{Deserialize, Serialize};

/// First body position.
pub const FIRSTCELL: i32 = 0;

/// The header row/column.
pub const HEADER: i32 = -1;

/// No valid position.
pub const INVALID: i32 = -2;

/// Pixel coordinate before the start of the axis.
pub const BEFORE: i32 = -3;

/// Pixel coordinate past the end of the axis.
pub const AFTER: i32 = -4;

/// Where a pixel coordinate lands on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "position")]
pub enum PixelHit {
    /// Before the axis origin.
    Before,
    /// Inside the header band.
    Header,
    /// Inside the body block at this view position.
    Cell(u32),
    /// At or past the end of the axis.
    After,
}

impl PixelHit {
    /// Encode as the integer sentinel convention.
    pub fn to_raw(self) -> i64 {
        match self {
            Self::Before => i64::from(BEFORE),
            Self::Header => i64::from(HEADER),
            Self::Cell(view) => i64::from(view),
            Self::After => i64::from(AFTER),
        }
    }

    /// The body view position, if the hit landed on one.
    pub fn cell(self) -> Option<u32> {
        match self {
            Self::Cell(view) => Some(view),
            _ => None,
        }
    }
}

/// Encode an optional view position, mapping `None` to [`INVALID`].
pub fn position_or_invalid(position: Option<u32>) -> i64 {
    position.map_or(i64::from(INVALID), i64::from)
}
