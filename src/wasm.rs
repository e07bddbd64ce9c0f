//! JavaScript bindings.
//!
//! Positions cross the boundary as plain integers using the sentinels from
//! [`crate::position`]; errors become thrown strings.

use wasm_bindgen::prelude::*;

use crate::config::AxisConfig;
use crate::layout::Axis;
use crate::position::{position_or_invalid, HEADER};

/// A single row or column axis exposed to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct AxisHandle {
    axis: Axis,
}

#[wasm_bindgen]
impl AxisHandle {
    /// Create an axis from a config object (`{defaultSize, headerSize, ...}`).
    ///
    /// # Errors
    /// Returns an error if the config cannot be deserialized or is invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, count: u32) -> Result<AxisHandle, JsValue> {
        let config: AxisConfig = if config.is_undefined() || config.is_null() {
            AxisConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        let axis = Axis::with_config(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .with_count(count);
        Ok(Self { axis })
    }

    /// The header sentinel.
    #[wasm_bindgen(js_name = "headerPosition")]
    pub fn header_position() -> i32 {
        HEADER
    }

    #[wasm_bindgen(js_name = "countChanged")]
    pub fn count_changed(&mut self, old: u32, new: u32) {
        self.axis.notify_count_changed(old, new);
    }

    /// # Errors
    /// Returns an error for invalid zoom factors.
    #[wasm_bindgen(js_name = "setZoom")]
    pub fn set_zoom(&mut self, zoom: Option<f64>) -> Result<(), JsValue> {
        self.axis
            .notify_zoom_changed(zoom)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// # Errors
    /// Returns an error for positions outside `[HEADER, count)`.
    #[wasm_bindgen(js_name = "pixelSize")]
    pub fn pixel_size(&self, view: i32) -> Result<f64, JsValue> {
        self.axis
            .pixel_size(view)
            .map(pixel_to_js)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// # Errors
    /// Returns an error for positions below `HEADER`.
    #[wasm_bindgen(js_name = "pixelStart")]
    pub fn pixel_start(&mut self, view: i32, scroll: f64) -> Result<f64, JsValue> {
        self.axis
            .pixel_start(view, pixel_from_js(scroll))
            .map(pixel_to_js)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Position under a pixel, or one of the `BEFORE`/`HEADER`/`AFTER` sentinels.
    #[wasm_bindgen(js_name = "positionAtPixel")]
    pub fn position_at_pixel(&mut self, coordinate: f64, scroll: f64) -> f64 {
        pixel_to_js(
            self.axis
                .position_at_pixel(pixel_from_js(coordinate), pixel_from_js(scroll))
                .to_raw(),
        )
    }

    #[wasm_bindgen(js_name = "totalPixels")]
    pub fn total_pixels(&mut self) -> f64 {
        pixel_to_js(self.axis.total_pixels())
    }

    /// # Errors
    /// Returns an error for invalid positions or sizes.
    #[wasm_bindgen(js_name = "setIndexSize")]
    pub fn set_index_size(&mut self, data: i32, size: i32) -> Result<(), JsValue> {
        self.axis
            .set_index_size(data, size)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// # Errors
    /// Returns an error for invalid positions.
    pub fn hide(&mut self, data: Vec<u32>) -> Result<bool, JsValue> {
        self.axis
            .hide(&data)
            .map(|changed| changed.is_some())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// # Errors
    /// Returns an error for invalid positions.
    pub fn unhide(&mut self, data: Vec<u32>) -> Result<bool, JsValue> {
        self.axis
            .unhide(&data)
            .map(|changed| changed.is_some())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// # Errors
    /// Returns an error for empty or out-of-range moves.
    pub fn reorder(&mut self, views: Vec<u32>, insert: u32) -> Result<(), JsValue> {
        self.axis
            .reorder(&views, insert)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Next visible view position, or `INVALID`.
    #[wasm_bindgen(js_name = "nextVisible")]
    pub fn next_visible(&self, view: u32) -> f64 {
        pixel_to_js(position_or_invalid(
            self.axis.next_visible(view).ok().flatten(),
        ))
    }

    /// Axis snapshot as a plain object.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.axis.state())?)
    }

    /// # Errors
    /// Returns an error if the object is not a valid axis snapshot.
    pub fn restore(&mut self, state: JsValue) -> Result<(), JsValue> {
        let state = serde_wasm_bindgen::from_value(state)?;
        self.axis
            .restore(&state)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

// JS numbers are doubles; axis extents stay far below 2^53.
#[allow(clippy::cast_precision_loss)]
fn pixel_to_js(pixel: i64) -> f64 {
    pixel as f64
}

#[allow(clippy::cast_possible_truncation)]
fn pixel_from_js(pixel: f64) -> i64 {
    pixel as i64
}
