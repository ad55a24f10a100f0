use std::hash::BuildHasher;
use std::iter::FusedIterator;
use std::slice::Iter as BucketIter;
use std::vec::IntoIter as BucketIntoIter;

use super::ChainedMap;
use super::entry::{Entry, Link};

impl<B: BuildHasher> IntoIterator for ChainedMap<B> {
    type Item = (String, String);

    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let ChainedMap { buckets, entries, .. } = self;

        IntoIter {
            len: entries.len(),
            // Each entry moves out through an Option so that the chain links stay meaningful
            // while the arena drains.
            slots: entries.into_iter().map(Some).collect(),
            buckets: buckets.into_vec().into_iter(),
            link: None,
        }
    }
}

/// An owning iterator over a map's entries, yielding them in the same bucket-traversal order as
/// [`Iter`].
pub struct IntoIter {
    pub(crate) buckets: BucketIntoIter<Link>,
    pub(crate) slots: Vec<Option<Entry>>,
    pub(crate) link: Link,
    pub(crate) len: usize,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(curr) = self.link {
                let entry = self.slots[curr.get()].take()?;
                self.link = entry.chain;
                self.len -= 1;
                return Some((entry.key, entry.value));
            }

            self.link = self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl FusedIterator for IntoIter {}

impl ExactSizeIterator for IntoIter {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, B: BuildHasher> IntoIterator for &'a ChainedMap<B> {
    type Item = (&'a str, &'a str);

    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.buckets.iter(),
            entries: &self.entries,
            link: None,
            len: self.len(),
        }
    }
}

/// An iterator over a map's entries in bucket-traversal order: bucket 0 upward, each chain walked
/// from its head.
pub struct Iter<'a> {
    pub(crate) buckets: BucketIter<'a, Link>,
    pub(crate) entries: &'a [Entry],
    pub(crate) link: Link,
    pub(crate) len: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(curr) = self.link {
                let entry = &self.entries[curr.get()];
                self.link = entry.chain;
                self.len -= 1;
                return Some((&entry.key, &entry.value));
            }

            // The end of a chain: move on to the next bucket's head. Once the bucket iterator
            // runs out the map is exhausted.
            self.link = *self.buckets.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
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
