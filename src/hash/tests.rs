#![cfg(test)]

use std::hash::{BuildHasher, Hasher};

use super::*;

fn djb2(bytes: &[u8]) -> u64 {
    let mut hasher = Djb2Hasher::default();
    hasher.write(bytes);
    hasher.finish()
}

#[test]
fn test_reference_values() {
    assert_eq!(djb2(b""), 5381, "An empty input should hash to the initial state.");
    assert_eq!(djb2(b"hello"), 210714636441);
}

#[test]
fn test_streaming() {
    let mut streamed = Djb2Hasher::default();
    streamed.write(b"he");
    streamed.write(b"llo");

    assert_eq!(
        streamed.finish(),
        djb2(b"hello"),
        "Hashing in pieces should match hashing in one call."
    );
}

#[test]
fn test_determinism() {
    assert_eq!(
        Djb2::default().hash_one("some key"),
        Djb2::default().hash_one("some key"),
        "Separate builders should produce identical hashes for equal keys."
    );
}
