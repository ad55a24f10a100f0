//! A module containing [`ChainedMap`] and associtated types.
//!
//! The other included types provide owned and borrowed iteration over entries, keys or values in
//! a map, along with the error types shared with the sorted variant.
//!
//! As a note, there is no mutable iterator over entries or keys because mutating a key in place
//! would break its bucket placement and the uniqueness of keys.
//!
//! [`ChainedMap`] is also re-exported at the crate root.

mod chained_map;
mod error;
mod iter;
mod tests;

pub(crate) mod entry;

pub use chained_map::*;
pub use error::*;
pub use iter::*;
