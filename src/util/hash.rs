use std::hash::{BuildHasher, Hasher};

/// A hasher which ignores its input entirely and hashes everything to zero.
///
/// With every key landing in bucket zero, collision handling can be exercised in tests without
/// depending on any real hash function's distribution.
#[derive(Debug)]
#[allow(unused)]
pub struct BadHasher;

impl Hasher for BadHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default)]
#[allow(unused)]
pub struct BadHasherBuilder;

impl BuildHasher for BadHasherBuilder {
    type Hasher = BadHasher;

    fn build_hasher(&self) -> Self::Hasher {
        BadHasher
    }
}
