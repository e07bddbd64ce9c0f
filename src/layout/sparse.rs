//! Growable prefix store with a per-index fallback value.
//!
//! Both the view→data mapping and the per-position size table only need to
//! remember the positions that were ever touched. Everything past the stored
//! prefix reads back as [`Fallback::fallback`] for its index.

/// A value type that knows what an unstored slot reads as.
pub trait Fallback: Copy + PartialEq {
    /// The value of index `index` when nothing is stored for it.
    fn fallback(index: usize) -> Self;
}

/// Sparse array: an explicit prefix plus an implicit fallback tail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SparseVec<T> {
    items: Vec<T>,
}

impl<T> Default for SparseVec<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Fallback> SparseVec<T> {
    /// Create an empty store; every index reads as its fallback.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a store from an explicit prefix.
    pub fn from_vec(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Value at `index`, falling back past the stored prefix.
    pub fn get(&self, index: usize) -> T {
        self.items
            .get(index)
            .copied()
            .unwrap_or_else(|| T::fallback(index))
    }

    /// Store `value` at `index`, growing the prefix with fallback values first.
    pub fn set(&mut self, index: usize, value: T) {
        if let Some(slot) = self.items.get_mut(index) {
            *slot = value;
        } else {
            self.grow_to(index);
            self.items.push(value);
        }
    }

    /// Make sure at least `len` entries are stored.
    pub fn grow_to(&mut self, len: usize) {
        let start = self.items.len();
        if len > start {
            self.items.extend((start..len).map(T::fallback));
        }
    }

    /// Number of explicitly stored entries.
    pub fn stored_len(&self) -> usize {
        self.items.len()
    }

    /// The explicit prefix.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to the explicit prefix, for bulk rewrites.
    pub fn as_mut_vec(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    /// Forget every stored entry at or past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Move the entries at `sources` (sorted ascending, no duplicates) so they
    /// sit consecutively, in their original relative order, at `insert` as
    /// measured before the move.
    ///
    /// Returns the lowest index whose entry may have changed.
    pub fn move_block(&mut self, sources: &[u32], insert: u32) -> usize {
        let (Some(&first), Some(&last)) = (sources.first(), sources.last()) else {
            return insert as usize;
        };
        self.grow_to((insert as usize).max(last as usize + 1));

        // Highest first so pending indices stay put.
        let mut moved = Vec::with_capacity(sources.len());
        for &source in sources.iter().rev() {
            if (source as usize) < self.items.len() {
                moved.push(self.items.remove(source as usize));
            }
        }
        moved.reverse();

        let shifted = sources.iter().filter(|&&s| s < insert).count();
        let adjusted = (insert as usize)
            .saturating_sub(shifted)
            .min(self.items.len());
        let tail = self.items.split_off(adjusted);
        self.items.extend(moved);
        self.items.extend(tail);
        adjusted.min(first as usize)
    }

    /// Remove the trailing run of entries equal to their fallback, leaving the
    /// unique minimal representation.
    pub fn trim_fallback_suffix(&mut self) {
        while let Some(last) = self.items.last() {
            if *last == T::fallback(self.items.len() - 1) {
                self.items.pop();
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Ident(usize);

    impl Fallback for Ident {
        fn fallback(index: usize) -> Self {
            Ident(index)
        }
    }

    #[test]
    fn test_reads_fall_back_past_prefix() {
        let store = SparseVec::<Ident>::new();
        assert_eq!(store.get(0), Ident(0));
        assert_eq!(store.get(42), Ident(42));
        assert_eq!(store.stored_len(), 0);
    }

    #[test]
    fn test_grow_fills_with_fallback() {
        let mut store = SparseVec::<Ident>::new();
        store.set(3, Ident(9));
        assert_eq!(store.as_slice(), &[Ident(0), Ident(1), Ident(2), Ident(9)]);
        assert_eq!(store.get(4), Ident(4));
    }

    #[test]
    fn test_trim_fallback_suffix() {
        let mut store = SparseVec::from_vec(vec![Ident(1), Ident(0), Ident(2), Ident(3)]);
        store.trim_fallback_suffix();
        assert_eq!(store.as_slice(), &[Ident(1), Ident(0)]);

        let mut identity = SparseVec::from_vec(vec![Ident(0), Ident(1)]);
        identity.trim_fallback_suffix();
        assert_eq!(identity.stored_len(), 0);
    }

    #[test]
    fn test_move_block_grows_then_moves() {
        let mut store = SparseVec::<Ident>::new();
        let min_affected = store.move_block(&[0, 1], 3);
        assert_eq!(store.as_slice(), &[Ident(2), Ident(0), Ident(1)]);
        assert_eq!(min_affected, 0);
        assert_eq!(store.get(3), Ident(3));
    }
}
