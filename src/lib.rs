//! gridaxis - axis coordinate engine for grid views
//!
//! Converts between the three coordinate spaces of one grid axis:
//! - Data positions: stable row/column identities from the data model
//! - View positions: the current display order after reordering
//! - Pixel coordinates: header band first, then body positions in view order
//!
//! On top of that it keeps per-position size overrides, hidden flags and a
//! zoom factor, and answers the geometry queries a renderer needs with a
//! lazily built pixel cache. Rows and columns are two independent [`Axis`]
//! instances.
//!
//! # Usage
//!
//! ```rust
//! use gridaxis::{Axis, AxisConfig, PixelHit};
//!
//! let config = AxisConfig { default_size: 100, header_size: 50, ..AxisConfig::default() };
//! let mut rows = Axis::with_config(config)?.with_count(5);
//!
//! assert_eq!(rows.total_pixels(), 550);
//! assert_eq!(rows.pixel_start(4, 0)?, 450);
//! assert_eq!(rows.position_at_pixel(549, 0), PixelHit::Cell(4));
//!
//! rows.hide(&[2])?;
//! assert_eq!(rows.next_visible(1)?, Some(3));
//! # Ok::<(), gridaxis::AxisError>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod position;
pub mod scenario;
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use config::AxisConfig;
pub use error::{AxisError, Result};
pub use layout::{Axis, AxisChange, AxisState, AxisViewport, NominalSize};
pub use position::{PixelHit, AFTER, BEFORE, FIRSTCELL, HEADER, INVALID};

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
