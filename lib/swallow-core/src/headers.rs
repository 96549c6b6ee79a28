//! Request header set with first-write-wins semantics.

use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};

/// An unordered set of request headers where the first write for a name
/// wins.
///
/// Later writes for an already-present name are silently ignored, so
/// defaults registered early can never be clobbered by code running later.
/// Names are matched exactly as given, with no case normalization; the
/// values pass through to the transport uninterpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: HashMap<String, String>,
}

impl Headers {
    /// Creates an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header unless one with the same name is already present.
    ///
    /// Returns `true` when the value was inserted, `false` when an earlier
    /// write already claimed the name.
    pub fn put_if_absent(&mut self, name: impl Into<String>, value: impl Into<String>) -> bool {
        match self.entries.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
        }
    }

    /// Value of the header with this exact name, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// `true` when a header with this exact name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of headers in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the set holds no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, value)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        hash_map::Iter<'a, String, String>,
        fn((&'a String, &'a String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn pair<'e>((name, value): (&'e String, &'e String)) -> (&'e str, &'e str) {
            (name.as_str(), value.as_str())
        }
        self.entries.iter().map(pair)
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(pairs: I) -> Self {
        let mut headers = Self::new();
        for (name, value) in pairs {
            headers.put_if_absent(name, value);
        }
        headers
    }
}
