use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An error indicating that a map was asked for zero buckets, which would leave no bucket for any
/// key to hash into.
#[derive(Debug)]
pub struct ZeroCapacity;

impl Display for ZeroCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to create a map with 0 buckets!")
    }
}

impl Error for ZeroCapacity {}

/// An error indicating that an empty string was passed as a key. Empty keys are never stored, so
/// rejecting them up front keeps every stored key retrievable.
#[derive(Debug)]
pub struct EmptyKey;

impl Display for EmptyKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to use an empty string as a key!")
    }
}

impl Error for EmptyKey {}

/// An error indicating that a key had no value stored for it. Used as the panic payload of the
/// indexing operator; fallible lookups report absence through [`Option`] instead.
#[derive(Debug)]
pub struct KeyNotFound {
    pub key: String,
}

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No value stored for key '{}'!", self.key)
    }
}

impl Error for KeyNotFound {}

/// A combination of all error types which map construction and mutation can produce, for callers
/// wanting to bubble up any of them with `?`.
///
/// # Examples
/// ```
/// use chained_map::ChainedMap;
/// use chained_map::map::MapError;
///
/// fn build(entries: &[(&str, &str)]) -> Result<ChainedMap, MapError> {
///     let mut map = ChainedMap::try_new(64)?;
///     for (key, value) in entries {
///         map.set(key, value)?;
///     }
///     Ok(map)
/// }
///
/// assert!(build(&[("halloween", "spooky")]).is_ok());
/// assert!(build(&[("", "spooky")]).is_err());
/// ```
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum MapError {
    ZeroCapacity(ZeroCapacity),
    EmptyKey(EmptyKey),
}
