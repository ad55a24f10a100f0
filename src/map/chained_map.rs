use std::fmt::{self, Debug, Display, Formatter};
use std::hash::BuildHasher;
use std::mem;
use std::ops::Index;

use super::entry::{Entry, EntryIndex, Link};
use super::{EmptyKey, Iter, Keys, KeyNotFound, Values, ZeroCapacity};
use crate::hash::Djb2;
use crate::util::fmt::{DebugRaw, write_entries};
use crate::util::result::ResultExtension;

/// A map of string keys to string values which handles hash collisions by chaining: each bucket
/// holds a singly-linked chain of the entries hashed into it, with new keys linked in at the
/// chain's head.
///
/// The number of buckets is fixed when the map is created and never changes, so a bucket's chain
/// simply grows as it collects more keys. Setting a key which is already present replaces its
/// value in place, keeping keys unique across the whole map rather than just within a bucket.
///
/// Keys must be non-empty; values may be any string, including the empty one. Both are copied
/// into the map on insertion, so no borrow of the caller's data is retained.
///
/// Internally the entries live in an append-only arena and all chain links are small handles into
/// it, meaning the map involves no pointer juggling and a handle never dangles.
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
/// | `set` | `O(c)` |
/// | `get` | `O(c)` |
/// | `contains` | `O(c)` |
/// | `bucket_index` | `O(1)` |
///
/// # Examples
/// ```
/// use chained_map::ChainedMap;
///
/// let mut map = ChainedMap::new(1024);
/// map.set("betty", "cool")?;
/// map.set("c", "fun")?;
///
/// assert_eq!(map.get("betty"), Some("cool"));
/// assert_eq!(map.get("missing"), None);
/// assert_eq!(map.len(), 2);
/// # Ok::<(), chained_map::map::EmptyKey>(())
/// ```
#[derive(Clone)]
pub struct ChainedMap<B: BuildHasher = Djb2> {
    pub(crate) buckets: Box<[Link]>,
    pub(crate) entries: Vec<Entry>,
    pub(crate) hasher: B,
}

impl ChainedMap {
    /// Creates a new map with the provided number of `buckets` and the default [`Djb2`] hasher.
    ///
    /// # Panics
    /// Panics if `buckets` is 0. Use [`try_new`](ChainedMap::try_new) to handle the zero case
    /// without panicking.
    pub fn new(buckets: usize) -> ChainedMap {
        Self::try_new(buckets).throw()
    }

    /// Creates a new map with the provided number of `buckets` and the default [`Djb2`] hasher,
    /// failing with [`ZeroCapacity`] if `buckets` is 0.
    pub fn try_new(buckets: usize) -> Result<ChainedMap, ZeroCapacity> {
        Self::try_with_hasher(buckets, Djb2::default())
    }
}

impl<B: BuildHasher> ChainedMap<B> {
    /// Creates a new map with the provided number of `buckets` and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if `buckets` is 0. Use [`try_with_hasher`](ChainedMap::try_with_hasher) to handle
    /// the zero case without panicking.
    pub fn with_hasher(buckets: usize, hasher: B) -> ChainedMap<B> {
        Self::try_with_hasher(buckets, hasher).throw()
    }

    /// Creates a new map with the provided number of `buckets` and the provided `hasher`, failing
    /// with [`ZeroCapacity`] if `buckets` is 0.
    pub fn try_with_hasher(buckets: usize, hasher: B) -> Result<ChainedMap<B>, ZeroCapacity> {
        if buckets == 0 {
            return Err(ZeroCapacity);
        }

        Ok(ChainedMap {
            buckets: vec![None; buckets].into_boxed_slice(),
            entries: Vec::new(),
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
    /// already present its value is replaced in place and the previous value is returned.
    ///
    /// New keys are linked in at the head of their bucket's chain, so within a single bucket the
    /// most recently added key is the first one a lookup meets.
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
                // Replace the value without moving the entry.
                return Ok(Some(mem::replace(&mut entry.value, value.to_owned())));
            }
            link = entry.chain;
        }

        // A new key: the entry is built in full before the bucket is pointed at it, so every
        // reachable entry is always completely initialised.
        let handle = EntryIndex::new(self.entries.len());
        self.entries.push(Entry {
            key: key.to_owned(),
            value: value.to_owned(),
            chain: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(handle);

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
    /// buckets. The result is stable for a given key, hasher and bucket count, so keys can be
    /// grouped or inspected without touching the map itself.
    pub fn bucket_index(&self, key: &str) -> usize {
        // The bucket count is at least 1, so the remainder is always defined.
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Returns an iterator over all key-value pairs in the map, as references, in bucket-traversal
    /// order: bucket 0 upward, each chain from its head.
    pub fn iter(&self) -> Iter<'_> {
        self.into_iter()
    }

    /// Returns and iterator over all keys in the map, as references, in the same order as
    /// [`iter`](ChainedMap::iter).
    pub fn keys<'a>(&'a self) -> Keys<'a> {
        Keys(self.iter())
    }

    /// Returns and iterator over all values in the map, as references, in the same order as
    /// [`iter`](ChainedMap::iter).
    pub fn values<'a>(&'a self) -> Values<'a> {
        Values(self.iter())
    }
}

impl<B: BuildHasher> ChainedMap<B> {
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
}

/// Retrieves the value stored for `key`, as [`get`](ChainedMap::get) does, except that a missing
/// key panics rather than reporting None.
impl<B: BuildHasher> Index<&str> for ChainedMap<B> {
    type Output = str;

    fn index(&self, key: &str) -> &str {
        self.get(key)
            .ok_or_else(|| KeyNotFound { key: key.to_owned() })
            .throw()
    }
}

impl<B: BuildHasher + Debug> Debug for ChainedMap<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self.buckets.iter()
            .map(|head| match head {
                Some(_) => DebugRaw(self.render_chain(*head)),
                None => DebugRaw("-".into()),
            })
            .collect();

        f.debug_struct("ChainedMap")
            .field("buckets", &buckets)
            .field("len", &self.len())
            .field("size", &self.size())
            .field("hasher", &self.hasher)
            .finish()
    }
}

/// Renders the map as `{'key': 'value', ...}` in bucket-traversal order, or `{}` when empty. With
/// the default [`Djb2`] hasher the order is stable across runs.
///
/// Keys and values are written verbatim, so quote characters within them are not escaped.
impl<B: BuildHasher> Display for ChainedMap<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_entries(f, self.iter())
    }
}
