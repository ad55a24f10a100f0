use std::hash::BuildHasher;
use std::iter::FusedIterator;

use super::SortedChainedMap;
use super::entry::SortedEntry;
use crate::map::entry::Link;

impl<B: BuildHasher> IntoIterator for SortedChainedMap<B> {
    type Item = (String, String);

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let SortedChainedMap { entries, head, tail, .. } = self;

        IntoIter {
            len: entries.len(),
            // Each entry moves out through an Option so that the sequence links stay meaningful
            // while the arena drains.
            slots: entries.into_iter().map(Some).collect(),
            head,
            tail,
        }
    }
}

/// An owning iterator over a map's entries in ascending key order, double-ended like [`Iter`].
pub struct IntoIter {
    pub(crate) slots: Vec<Option<SortedEntry>>,
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) len: usize,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        // Once the two ends have met, the remaining links lead to spent entries.
        let new_len = self.len.checked_sub(1)?;

        let curr = self.head?;
        let entry = self.slots[curr.get()].take()?;
        self.head = entry.next;
        self.len = new_len;

        Some((entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl DoubleEndedIterator for IntoIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        let new_len = self.len.checked_sub(1)?;

        let curr = self.tail?;
        let entry = self.slots[curr.get()].take()?;
        self.tail = entry.prev;
        self.len = new_len;

        Some((entry.key, entry.value))
    }
}

impl FusedIterator for IntoIter {}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, B: BuildHasher> IntoIterator for &'a SortedChainedMap<B> {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            entries: &self.entries,
            head: self.head,
            tail: self.tail,
            len: self.len(),
        }
    }
}

/// An iterator over a map's entries in ascending key order, double-ended so that it can walk
/// descending instead.
///
/// Both ends follow the ordered sequence inward; `len` tracks the entries left between them, so
/// the two directions stop cleanly when they meet.
pub struct Iter<'a> {
    pub(crate) entries: &'a [SortedEntry],
    pub(crate) head: Link,
    pub(crate) tail: Link,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        // Once the two ends have met, the remaining links lead to spent entries.
        let new_len = self.len.checked_sub(1)?;

        let curr = self.head?;
        let entry = &self.entries[curr.get()];
        self.head = entry.next;
        self.len = new_len;

        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let new_len = self.len.checked_sub(1)?;

        let curr = self.tail?;
        let entry = &self.entries[curr.get()];
        self.tail = entry.prev;
        self.len = new_len;

        Some((&entry.key, &entry.value))
    }
}

impl<'a> FusedIterator for Iter<'a> {}

impl<'a> ExactSizeIterator for Iter<'a> {
    fn len(&self) -> usize {
        self.len
    }
}

pub struct Keys<'a>(
    pub(crate) Iter<'a>
);

impl<'a> Iterator for Keys<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }
}

pub struct Values<'a>(
    pub(crate) Iter<'a>
);

impl<'a> Iterator for Values<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }
}
