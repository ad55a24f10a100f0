#![cfg(test)]

use std::hash::BuildHasher;

use super::*;
use crate::hash::Djb2;
use crate::util::hash::BadHasherBuilder;
use crate::util::panic::assert_panics;

#[test]
fn test_construction() {
    let map = ChainedMap::new(128);
    assert_eq!(map.size(), 128, "The bucket count should match the requested one.");
    assert_eq!(map.len(), 0, "A new map should hold no entries.");
    assert!(map.is_empty());

    assert!(ChainedMap::try_new(0).is_err(), "Zero buckets should be rejected.");
    assert!(ChainedMap::try_with_hasher(0, BadHasherBuilder).is_err());

    assert_panics!({ ChainedMap::new(0) });
    assert_panics!({ ChainedMap::with_hasher(0, BadHasherBuilder) });
}

#[test]
fn test_set_and_get() {
    let mut map = ChainedMap::new(1024);
    assert_eq!(map.set("betty", "cool").unwrap(), None);
    assert_eq!(map.set("c", "fun").unwrap(), None);

    assert_eq!(map.get("betty"), Some("cool"));
    assert_eq!(map.get("c"), Some("fun"));
    assert_eq!(map.get("python"), None, "A key which was never set should have no value.");
    assert_eq!(map.len(), 2);

    assert!(map.contains("betty"));
    assert!(!map.contains("python"));

    assert_eq!(map.set("quiet", "").unwrap(), None, "An empty value should be accepted.");
    assert_eq!(map.get("quiet"), Some(""));
}

#[test]
fn test_value_replacement() {
    let mut map = ChainedMap::new(16);
    assert_eq!(map.set("state", "first").unwrap(), None);
    assert_eq!(
        map.set("state", "second").unwrap(),
        Some("first".to_owned()),
        "Replacing a value should return the previous one."
    );

    assert_eq!(map.get("state"), Some("second"));
    assert_eq!(map.len(), 1, "Replacing a value should never add an entry.");
}

#[test]
fn test_empty_keys() {
    let mut map = ChainedMap::new(16);
    assert!(map.set("", "value").is_err(), "An empty key should be rejected.");
    assert!(map.is_empty(), "A rejected set should leave the map untouched.");

    map.set("real", "value").unwrap();
    assert_eq!(map.get(""), None, "An empty key is never stored, so it has no value.");
    assert!(!map.contains(""));
}

#[test]
fn test_hash_collisions() {
    let mut map = ChainedMap::with_hasher(4, BadHasherBuilder);
    map.set("a", "1").unwrap();
    map.set("b", "2").unwrap();
    map.set("c", "3").unwrap();

    assert_eq!(map.bucket_index("a"), 0, "BadHasher should send every key to bucket 0.");
    assert_eq!(map.bucket_index("b"), 0);
    assert_eq!(map.bucket_index("c"), 0);

    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        ["c", "b", "a"],
        "Chains should grow from the head, so the newest key comes first."
    );

    assert_eq!(map.get("a"), Some("1"), "Keys at the chain's tail should still be found.");
    assert_eq!(map.get("b"), Some("2"));
    assert_eq!(map.get("c"), Some("3"));

    assert_eq!(map.set("a", "10").unwrap(), Some("1".to_owned()));
    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        ["c", "b", "a"],
        "Replacing a value should never reorder the chain."
    );
}

#[test]
fn test_single_bucket() {
    // With one bucket every key collides, whatever the hasher does.
    let mut map = ChainedMap::new(1);
    map.set("a", "1").unwrap();
    map.set("b", "2").unwrap();

    assert_eq!(map.bucket_index("a"), 0);
    assert_eq!(map.bucket_index("b"), 0);
    assert_eq!(map.get("a"), Some("1"));
    assert_eq!(map.get("b"), Some("2"));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_bucket_index() {
    let map = ChainedMap::new(8);
    assert_eq!(
        map.bucket_index("betty"),
        (Djb2::default().hash_one("betty") % 8) as usize,
        "The bucket index should be the key's hash modulo the bucket count."
    );
    assert_eq!(
        map.bucket_index("betty"),
        map.bucket_index("betty"),
        "The bucket index should be stable across calls."
    );
    assert_eq!(
        map.bucket_index("betty"),
        ChainedMap::new(8).bucket_index("betty"),
        "The bucket index should be stable across maps of the same size."
    );

    for key in ["a", "b", "c", "betty", "python"] {
        assert!(map.bucket_index(key) < map.size());
    }
}

#[test]
fn test_iteration() {
    let mut map = ChainedMap::new(4);
    for (key, value) in [("one", "1"), ("two", "2"), ("three", "3"), ("four", "4")] {
        map.set(key, value).unwrap();
    }

    let mut iter = map.iter();
    assert_eq!(iter.size_hint(), (4, Some(4)));
    iter.next();
    assert_eq!(iter.len(), 3, "The remaining length should shrink as entries are yielded.");

    let indices: Vec<usize> = map.iter().map(|(key, _)| map.bucket_index(key)).collect();
    assert!(
        indices.is_sorted(),
        "Iteration should visit buckets in order, exhausting each chain before the next."
    );

    let mut keys: Vec<&str> = map.keys().collect();
    keys.sort_unstable();
    assert_eq!(keys, ["four", "one", "three", "two"], "Every key should be yielded exactly once.");

    for (key, value) in &map {
        assert_eq!(map.get(key), Some(value));
    }

    let pairs: Vec<_> = map.iter().collect();
    let zipped: Vec<_> = map.keys().zip(map.values()).collect();
    assert_eq!(pairs, zipped, "Keys and values should iterate in the same order as entries.");
}

#[test]
fn test_into_iteration() {
    let mut map = ChainedMap::new(8);
    for (key, value) in [("one", "1"), ("two", "2"), ("three", "3")] {
        map.set(key, value).unwrap();
    }

    let borrowed: Vec<(String, String)> = map.iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect();

    let mut owning = map.into_iter();
    assert_eq!(owning.size_hint(), (3, Some(3)));
    assert_eq!(
        owning.by_ref().collect::<Vec<_>>(),
        borrowed,
        "Owned iteration should yield the same entries in the same order as borrowed iteration."
    );
    assert_eq!(owning.next(), None, "An exhausted iterator should keep reporting None.");
}

#[test]
fn test_rendering() {
    let mut map = ChainedMap::with_hasher(4, BadHasherBuilder);
    assert_eq!(map.to_string(), "{}", "An empty map should render as bare braces.");

    map.set("a", "1").unwrap();
    assert_eq!(map.to_string(), "{'a': '1'}");

    map.set("b", "2").unwrap();
    map.set("c", "3").unwrap();
    assert_eq!(
        map.to_string(),
        "{'c': '3', 'b': '2', 'a': '1'}",
        "A chain should render head first."
    );

    let debugged = format!("{map:?}");
    assert!(debugged.contains("('c': '3') -> ('b': '2') -> ('a': '1')"));
    assert!(debugged.contains('-'), "Empty buckets should render as a dash.");
}

#[test]
fn test_indexing() {
    let mut map = ChainedMap::new(16);
    map.set("key", "value").unwrap();
    assert_eq!(&map["key"], "value");

    assert_panics!({
        let _ = &ChainedMap::new(16)["missing"];
    });
}

#[test]
fn test_clone() {
    let mut original = ChainedMap::new(4);
    original.set("a", "1").unwrap();

    let copied = original.clone();
    original.set("a", "2").unwrap();
    original.set("b", "3").unwrap();

    assert_eq!(copied.get("a"), Some("1"), "A clone should be unaffected by later writes.");
    assert_eq!(copied.len(), 1);
    assert!(!copied.contains("b"));
}

#[test]
fn test_errors() {
    assert_eq!(ZeroCapacity.to_string(), "Unable to create a map with 0 buckets!");
    assert_eq!(EmptyKey.to_string(), "Unable to use an empty string as a key!");
    assert_eq!(
        KeyNotFound { key: "ghost".to_owned() }.to_string(),
        "No value stored for key 'ghost'!"
    );

    let error = MapError::from(ZeroCapacity);
    assert!(error.is_zero_capacity());
    assert_eq!(
        error.to_string(),
        ZeroCapacity.to_string(),
        "The union should pass the inner error's message through."
    );
    assert!(TryInto::<ZeroCapacity>::try_into(error).is_ok());

    assert!(MapError::from(EmptyKey).is_empty_key());
}

#[test]
fn test_error_propagation() -> Result<(), MapError> {
    let mut map = ChainedMap::try_new(4)?;
    map.set("key", "value")?;
    assert_eq!(map.get("key"), Some("value"));
    Ok(())
}
