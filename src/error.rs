//! Structured error types for gridaxis.
//!
//! Every fallible axis operation returns [`Result`]; nothing is retried or
//! silently clamped unless the operation documents it.

/// All errors that can occur while querying or mutating an axis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AxisError {
    /// A position argument fell outside `[HEADER, count)`.
    #[error("position {position} is out of range (count {count})")]
    PositionOutOfRange {
        /// The rejected position.
        position: i64,
        /// Number of body positions on the axis when the call was made.
        count: u32,
    },

    /// A reorder insertion point fell outside `[0, count]`.
    #[error("insert position {position} is out of range (count {count})")]
    InsertOutOfRange {
        /// The rejected insertion point.
        position: u32,
        /// Number of body positions on the axis when the call was made.
        count: u32,
    },

    /// A size argument was negative, zero where a positive value is needed,
    /// or larger than a nominal size can hold.
    #[error("invalid {what} size: {value}")]
    InvalidSize {
        /// Which setting was being changed.
        what: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Zoom factors must be finite and strictly positive.
    #[error("invalid zoom factor: {0}")]
    InvalidZoom(f64),

    /// A reorder or relocation was requested for an empty set of positions.
    #[error("no positions given to {0}")]
    EmptySelection(&'static str),

    /// The view mapping lost track of a data position. This is a bug in the
    /// engine, not a caller error.
    #[error("data position {data} is missing from the view mapping")]
    Inconsistent {
        /// The data position that could not be found.
        data: u32,
    },

    /// A persisted snapshot does not describe a valid axis.
    #[error("invalid axis state: {0}")]
    InvalidState(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AxisError>;

#[cfg(target_arch = "wasm32")]
impl From<AxisError> for wasm_bindgen::JsValue {
    fn from(e: AxisError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
