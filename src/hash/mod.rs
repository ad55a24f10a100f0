//! A module containing the crate's default hash function, [`Djb2Hasher`], and associtated types.
//!
//! The maps in this crate accept any [`BuildHasher`](std::hash::BuildHasher), but default to DJB2
//! rather than the standard library's [`RandomState`](std::hash::RandomState) so that bucket
//! placement is reproducible from run to run and process to process.

mod djb2_hasher;
mod tests;

pub use djb2_hasher::*;
