use std::num::NonZero;

/// A link in a bucket chain or in an ordered sequence: either the handle of the next entry along
/// or the end of the line.
pub type Link = Option<EntryIndex>;

/// The handle of an entry within a map's entry arena.
///
/// Holds the arena index offset by one in a [`NonZero`], so that [`Link`] occupies a single
/// `usize`. Entries are only ever appended to the arena and never removed from it, so a handle
/// stays valid for the lifetime of the map that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryIndex(NonZero<usize>);

impl EntryIndex {
    /// Wraps an arena index.
    ///
    /// # Panics
    /// Panics if `index` is `usize::MAX`, which no arena can reach in practice.
    pub const fn new(index: usize) -> EntryIndex {
        match NonZero::new(index.wrapping_add(1)) {
            Some(offset) => EntryIndex(offset),
            None => panic!("entry index overflow"),
        }
    }

    /// Unwraps the handle back into an arena index.
    pub const fn get(self) -> usize {
        self.0.get() - 1
    }
}

/// One key / value pair in a [`ChainedMap`](crate::map::ChainedMap), along with the link to the
/// next entry in its bucket's chain.
///
/// The key is fixed at insertion; setting the same key again replaces the value in place.
#[derive(Debug, Clone)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub chain: Link,
}
