use std::fmt::{self, Debug, Formatter};

/// A wrapper which passes its contents through [`Debug`] untouched, with none of the quoting or
/// escaping applied to a [`String`].
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Writes a sequence of key / value pairs in the crate's standard rendering:
/// `{'key': 'value', 'key': 'value'}`, with an empty sequence producing `{}`.
///
/// Keys and values are written verbatim between their single quotes, so quote characters within
/// them are not escaped.
pub fn write_entries<'a, I>(f: &mut Formatter<'_>, entries: I) -> fmt::Result
where
    I: Iterator<Item = (&'a str, &'a str)>,
{
    write!(f, "{{")?;
    for (position, (key, value)) in entries.enumerate() {
        if position > 0 {
            write!(f, ", ")?;
        }
        write!(f, "'{key}': '{value}'")?;
    }
    write!(f, "}}")
}
