//! A module containing [`SortedChainedMap`] and associtated types.
//!
//! The sorted map shares its hashing, chaining and error handling with
//! [`ChainedMap`](crate::map::ChainedMap), but threads every entry into a second, doubly-linked
//! sequence in ascending key order. The included iterators walk that sequence from either end,
//! and [`DisplayRev`] renders it backwards.
//!
//! The whole module sits behind the `sorted` cargo feature, which is enabled by default.
//!
//! [`SortedChainedMap`] is also re-exported at the crate root.

mod iter;
mod sorted_chained_map;

pub(crate) mod entry;

pub use iter::*;
pub use sorted_chained_map::*;
