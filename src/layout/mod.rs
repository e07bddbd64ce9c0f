//! Axis layout engine.
//!
//! This module handles:
//! - Remapping view positions to data positions for reordered rows/columns
//! - Per-position nominal sizes and hidden flags
//! - Lazily built pixel start offsets with binary search hit testing
//! - Viewport scrolling along one axis

mod axis;
mod index_mapping;
mod index_size;
mod pixel_cache;
mod sparse;
mod state;
mod viewport;

pub use axis::{Axis, AxisChange};
pub use index_mapping::IndexMapping;
pub use index_size::{zoomed, IndexSize, NominalSize};
pub use pixel_cache::PixelCache;
pub use sparse::{Fallback, SparseVec};
pub use state::AxisState;
pub use viewport::AxisViewport;
