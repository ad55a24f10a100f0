//! Chained hash tables for string keys and values, one plain and one which keeps its keys in
//! ascending order.
//!
//! # Purpose
//! This crate is a learning exercise: the venerable fixed-size hash table with separate chaining,
//! written out properly, twice. Tables like these are the first data structure many of us ever
//! build from scratch, and I wanted to see what one looks like once it grows up and learns Rust.
//! There's no expectation for it to be used in production, although I've tried to write it to a
//! level where it could be.
//!
//! # Method
//! Both maps hash keys into a fixed number of buckets and resolve collisions by chaining, with
//! new keys linked in at the head of their chain. Where a textbook version would wire the chains
//! up with raw pointers, here every entry lives in an append-only arena and the links between
//! them are small typed handles. Nothing is ever removed from the arena, so a handle can't
//! dangle, and the whole crate gets away with no unsafe code at all.
//!
//! The sorted variant threads a second, doubly-linked sequence through the same entries, kept in
//! ascending key order at insertion time, so the map can be read in order - forwards or backwards
//! - at any moment without sorting anything.
//!
//! # Error Handling
//! Errors are strongly typed: small structs which implement [`Error`](std::error::Error),
//! combined into enums for static dispatch where an operation can fail in more than one way.
//! Methods which would rather panic than make every caller handle an unlikely case come in pairs,
//! with the panicking version built on top of the fallible `try_` one.
//!
//! # Dependencies
//! The entry arena is an ordinary [`Vec`] and the bucket table a boxed slice; unlike a certain
//! other project of mine, this crate is perfectly happy to stand on [`std`]'s shoulders rather
//! than rebuild them. Beyond that it only depends on some derive macros, because they're helpful
//! and remove the need for some very repetitive programming.
//!
//! # Potential Future Additions
//! - Per-key removal, which the append-only arena would need a free list or compaction for.
//! - Automatic resizing driven by a load factor, instead of a bucket count fixed at creation.
//! - Generic key and value types, bounded on [`Hash`](std::hash::Hash) and [`Ord`] where the
//!   ordered sequence needs them.
//! - An entry API in the style of the standard library's maps.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod hash;
pub mod map;
#[cfg(feature = "sorted")]
pub mod sorted;

pub(crate) mod util;

#[doc(inline)]
pub use map::ChainedMap;
#[cfg(feature = "sorted")]
#[doc(inline)]
pub use sorted::SortedChainedMap;
