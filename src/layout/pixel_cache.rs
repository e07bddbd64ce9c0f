//! Lazily extended cumulative pixel offsets.
//!
//! `starts[i]` is the pixel where view position `i` begins. The array is a
//! valid prefix of the full sequence: it only ever grows at the end, and is
//! truncated when something upstream of an entry changes.

/// Non-decreasing prefix of pixel start offsets.
#[derive(Debug, Clone, Default)]
pub struct PixelCache {
    starts: Vec<i64>,
}

impl PixelCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start offset of view position `index`, if already computed.
    pub fn get(&self, index: usize) -> Option<i64> {
        self.starts.get(index).copied()
    }

    /// Number of computed entries.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether nothing has been computed yet.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Last computed start offset.
    pub fn last(&self) -> Option<i64> {
        self.starts.last().copied()
    }

    /// Append the next start offset. Growth is amortized by `Vec`.
    pub fn append(&mut self, pixel: i64) {
        debug_assert!(
            self.last().map_or(true, |last| last <= pixel),
            "pixel cache must be non-decreasing"
        );
        self.starts.push(pixel);
    }

    /// Drop entries at or past `len`. Never grows.
    pub fn truncate(&mut self, len: usize) {
        self.starts.truncate(len);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.starts.clear();
    }

    /// Greatest index whose start is `<= pixel`.
    ///
    /// `None` when every computed start lies past `pixel`. Callers extend the
    /// cache far enough before searching.
    pub fn find_position(&self, pixel: i64) -> Option<usize> {
        self.starts
            .partition_point(|&start| start <= pixel)
            .checked_sub(1)
    }

    /// The computed offsets.
    pub fn as_slice(&self) -> &[i64] {
        &self.starts
    }
}
