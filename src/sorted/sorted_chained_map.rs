use std::fmt::{self, Debug, Display, Formatter};
use std::hash::BuildHasher;
use std::mem;
use std::ops::Index;

use super::entry::SortedEntry;
use super::{Iter, Keys, Values};
use crate::hash::Djb2;
use crate::map::entry::{EntryIndex, Link};
use crate::map::{EmptyKey, KeyNotFound, ZeroCapacity};
use crate::util::fmt::{DebugRaw, write_entries};
use crate::util::result::ResultExtension;

/// A [`ChainedMap`](crate::map::ChainedMap) which additionally threads every entry into a
/// doubly-linked sequence kept in ascending key order, so the whole map can be traversed
/// forwards or backwards by key without ever sorting.
///
/// Lookups still go through the bucket chains and never touch the ordered sequence; the sequence
/// only pays its way during insertion, where the right position for a new key is found by
/// walking from the smallest key upward. Keys are compared bytewise, as [`str`] ordering does,
/// so all capitals sort before all lowercase letters.
///
/// Setting a key which is already present replaces its value in place and leaves the entry
/// exactly where it was in the sequence.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the map.
/// - `c`: The length of the chain in the relevant bucket, on average `n` divided by the bucket
///   count for an evenly distributing hasher.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set` (new key) | `O(n)` |
/// | `set` (existing key) | `O(c)` |
/// | `get` | `O(c)` |
/// | `contains` | `O(c)` |
///
/// # Examples
/// ```
/// use chained_map::SortedChainedMap;
///
/// let mut map = SortedChainedMap::new(1024);
/// map.set("b", "2")?;
/// map.set("c", "3")?;
/// map.set("a", "1")?;
///
/// assert_eq!(map.to_string(), "{'a': '1', 'b': '2', 'c': '3'}");
/// assert_eq!(map.display_rev().to_string(), "{'c': '3', 'b': '2', 'a': '1'}");
/// # Ok::<(), chained_map::map::EmptyKey>(())
/// ```
#[derive(Clone)]
pub struct SortedChainedMap<B: BuildHasher = Djb2> {
    pub(crate) buckets: Box<[Link]>,
    pub(crate) entries: Vec<SortedEntry>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) hasher: B,
}

impl SortedChainedMap {
    /// Creates a new map with the provided number of `buckets` and the default [`Djb2`] hasher.
    ///
    /// # Panics
    /// Panics if `buckets` is 0. Use [`try_new`](SortedChainedMap::try_new) to handle the zero
    /// case without panicking.
    pub fn new(buckets: usize) -> SortedChainedMap {
        Self::try_new(buckets).throw()
    }

    /// Creates a new map with the provided number of `buckets` and the default [`Djb2`] hasher,
    /// failing with [`ZeroCapacity`] if `buckets` is 0.
    pub fn try_new(buckets: usize) -> Result<SortedChainedMap, ZeroCapacity> {
        Self::try_with_hasher(buckets, Djb2::default())
    }
}

impl<B: BuildHasher> SortedChainedMap<B> {
    /// Creates a new map with the provided number of `buckets` and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if `buckets` is 0. Use [`try_with_hasher`](SortedChainedMap::try_with_hasher) to
    /// handle the zero case without panicking.
    pub fn with_hasher(buckets: usize, hasher: B) -> SortedChainedMap<B> {
        Self::try_with_hasher(buckets, hasher).throw()
    }

    /// Creates a new map with the provided number of `buckets` and the provided `hasher`, failing
    /// with [`ZeroCapacity`] if `buckets` is 0.
    pub fn try_with_hasher(buckets: usize, hasher: B) -> Result<SortedChainedMap<B>, ZeroCapacity> {
        if buckets == 0 {
            return Err(ZeroCapacity);
        }

        Ok(SortedChainedMap {
            buckets: vec![None; buckets].into_boxed_slice(),
            entries: Vec::new(),
            head: None,
            tail: None,
            hasher,
        })
    }

    /// Returns the number of entries stored in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of buckets, fixed when the map was created.
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Sets the value for the provided `key`, copying both strings into the map. If the key was
    /// already present its value is replaced in place and the previous value is returned; the
    /// entry keeps both its chain position and its place in the ordered sequence.
    ///
    /// A new key is linked in at the head of its bucket's chain and spliced into the ordered
    /// sequence immediately before the smallest greater key.
    ///
    /// Fails with [`EmptyKey`] if `key` is the empty string, leaving the map untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<Option<String>, EmptyKey> {
        if key.is_empty() {
            return Err(EmptyKey);
        }

        let bucket = self.bucket_index(key);

        // Walk the chain for an existing entry first; keys are unique across the map.
        let mut link = self.buckets[bucket];
        while let Some(curr) = link {
            let entry = &mut self.entries[curr.get()];
            if entry.key == key {
                // Replace the value without moving the entry anywhere.
                return Ok(Some(mem::replace(&mut entry.value, value.to_owned())));
            }
            link = entry.chain;
        }

        // A new key: the entry is built in full before the bucket is pointed at it, so every
        // reachable entry is always completely initialised.
        let handle = EntryIndex::new(self.entries.len());
        self.entries.push(SortedEntry {
            key: key.to_owned(),
            value: value.to_owned(),
            chain: self.buckets[bucket],
            prev: None,
            next: None,
        });
        self.buckets[bucket] = Some(handle);

        self.link_in_order(handle);

        Ok(None)
    }

    /// Returns a reference to the value stored for the provided `key` or None if the map contains
    /// no value for it. An empty `key` is never stored, so it also reports None.
    pub fn get(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }

        let mut link = self.buckets[self.bucket_index(key)];
        while let Some(curr) = link {
            let entry = &self.entries[curr.get()];
            if entry.key == key {
                return Some(&entry.value);
            }
            link = entry.chain;
        }

        None
    }

    /// Returns true if there is a value stored for the provided `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Calculates the index of the bucket `key` belongs to: the key's hash modulo the number of
    /// buckets. The ordered sequence plays no part here; placement matches the unsorted map's.
    pub fn bucket_index(&self, key: &str) -> usize {
        // The bucket count is at least 1, so the remainder is always defined.
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Returns and iterator over all key-value pairs in the map, as references, in ascending key
    /// order. The iterator is double-ended, so it can be reversed to walk descending instead.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the map, as references, in ascending order.
    pub fn keys<'a>(&'a self) -> Keys<'a> {
        Keys(self.iter())
    }

    /// Returns and iterator over all values in the map, as references, in ascending order of
    /// their keys.
    pub fn values<'a>(&'a self) -> Values<'a> {
        Values(self.iter())
    }

    /// Returns an adapter which renders the map the way [`Display`] does, except walking the
    /// ordered sequence tail to head: descending key order.
    ///
    /// # Examples
    /// ```
    /// use chained_map::SortedChainedMap;
    ///
    /// let mut map = SortedChainedMap::new(16);
    /// map.set("low", "1")?;
    /// map.set("high", "2")?;
    ///
    /// assert_eq!(map.display_rev().to_string(), "{'low': '1', 'high': '2'}");
    /// # Ok::<(), chained_map::map::EmptyKey>(())
    /// ```
    pub fn display_rev(&self) -> DisplayRev<'_, B> {
        DisplayRev(self)
    }
}

impl<B: BuildHasher> SortedChainedMap<B> {
    /// Splices the freshly inserted entry at `handle` into the ordered sequence, immediately
    /// before the first entry with a greater key. Keys are unique, so an equal key can never be
    /// encountered.
    pub(crate) fn link_in_order(&mut self, handle: EntryIndex) {
        let new_key = self.entries[handle.get()].key.as_str();

        // Walk up from the smallest key to the first entry which should follow the new one. The
        // new entry carries no sequence links yet, so the walk can never meet it.
        let mut after = self.head;
        while let Some(curr) = after {
            let entry = &self.entries[curr.get()];
            if entry.key.as_str() > new_key {
                break;
            }
            after = entry.next;
        }

        match after {
            Some(next) => {
                let prev = self.entries[next.get()].prev;
                self.entries[handle.get()].prev = prev;
                self.entries[handle.get()].next = Some(next);
                self.entries[next.get()].prev = Some(handle);

                match prev {
                    Some(prev) => self.entries[prev.get()].next = Some(handle),
                    // No predecessor: the new key is the smallest and becomes the head.
                    None => self.head = Some(handle),
                }
            },
            // Ran off the tail, so the new key is the greatest so far.
            None => match self.tail {
                Some(tail) => {
                    self.entries[handle.get()].prev = Some(tail);
                    self.entries[tail.get()].next = Some(handle);
                    self.tail = Some(handle);
                },
                // The first entry becomes both ends of the sequence.
                None => {
                    self.head = Some(handle);
                    self.tail = Some(handle);
                },
            },
        }
    }

    /// Renders a single bucket's chain for debug output, head first, in the form
    /// `('key': 'value') -> ('key': 'value')`.
    pub(crate) fn render_chain(&self, head: Link) -> String {
        let mut parts = Vec::new();

        let mut link = head;
        while let Some(curr) = link {
            let entry = &self.entries[curr.get()];
            parts.push(format!("('{}': '{}')", entry.key, entry.value));
            link = entry.chain;
        }

        parts.join(" -> ")
    }

    /// Renders the ordered sequence for debug output, smallest key first, in the form
    /// `('key': 'value') <-> ('key': 'value')`.
    pub(crate) fn render_order(&self) -> String {
        let mut parts = Vec::new();

        let mut link = self.head;
        while let Some(curr) = link {
            let entry = &self.entries[curr.get()];
            parts.push(format!("('{}': '{}')", entry.key, entry.value));
            link = entry.next;
        }

        parts.join(" <-> ")
    }
}

/// A renderer for a map in descending key order, created by
/// [`display_rev`](SortedChainedMap::display_rev).
pub struct DisplayRev<'a, B: BuildHasher = Djb2>(
    pub(crate) &'a SortedChainedMap<B>
);

impl<B: BuildHasher> Display for DisplayRev<'_, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_entries(f, self.0.iter().rev())
    }
}

/// Retrieves the value stored for `key`, as [`get`](SortedChainedMap::get) does, except that a
/// missing key panics rather than reporting None.
impl<B: BuildHasher> Index<&str> for SortedChainedMap<B> {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        self.get(key)
            .ok_or_else(|| KeyNotFound { key: key.to_owned() })
            .throw()
    }
}

/// Maps are equal when they hold exactly the same key / value pairs, regardless of bucket count,
/// hasher or the order the pairs were set in. The ordered sequence makes this a single zipped
/// walk rather than a lookup per key.
impl<B: BuildHasher> PartialEq for SortedChainedMap<B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<B: BuildHasher> Eq for SortedChainedMap<B> {}

impl<B: BuildHasher + Debug> Debug for SortedChainedMap<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self.buckets.iter()
            .map(|head| match head {
                Some(_) => DebugRaw(self.render_chain(*head)),
                None => DebugRaw("-".into()),
            })
            .collect();

        f.debug_struct("SortedChainedMap")
            .field("buckets", &buckets)
            .field("order", &DebugRaw(self.render_order()))
            .field("len", &self.len())
            .field("size", &self.size())
            .field("hasher", &self.hasher)
            .finish()
    }
}

/// Renders the map as `{'key': 'value', ...}` in ascending key order, or `{}` when empty. Unlike
/// the unsorted map, the hasher has no say in the order.
///
/// Keys and values are written verbatim, so quote characters within them are not escaped.
impl<B: BuildHasher> Display for SortedChainedMap<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_entries(f, self.iter())
    }
}
