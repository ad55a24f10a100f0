use crate::map::entry::Link;

/// One key / value pair in a [`SortedChainedMap`](crate::sorted::SortedChainedMap), along with
/// its bucket chain link and its two links into the ordered sequence.
///
/// `prev` and `next` are purely navigational; like `chain` they confer no ownership over the
/// entries they lead to. An entry's position in the sequence is fixed at insertion, since keys
/// are unique and never modified afterwards.
#[derive(Debug, Clone)]
pub struct SortedEntry {
    pub key: String,
    pub value: String,
    pub chain: Link,
    pub prev: Link,
    pub next: Link,
}
