//! Case-insensitive, multi-valued header storage.

use std::collections::HashMap;

/// A header name together with every value recorded for it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    /// The name as first supplied, used when writing the header out
    name: String,
    values: Vec<String>,
}

/// A mapping of header names to one or more values.
///
/// Lookups ignore ASCII case. Insertion order between different names is not preserved,
/// while the values of a single name keep the order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    entries: HashMap<String, Entry>,
}

impl HeaderMap {
    /// Create an empty header map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value of `name` with `value`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries.insert(
            name.to_ascii_lowercase(),
            Entry {
                name,
                values: vec![value.into()],
            },
        );
    }

    /// Add `value` to the values of `name`, keeping the existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.entries
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| Entry {
                name,
                values: Vec::new(),
            })
            .values
            .push(value.into());
    }

    /// Get the first value of a header.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Get every value of a header, in the order they were added.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .get(&name.to_ascii_lowercase())
            .map(|entry| entry.values.as_slice())
            .unwrap_or(&[])
    }

    /// Check if a header exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_ascii_lowercase())
    }

    /// Remove a header and all of its values.
    pub fn remove(&mut self, name: &str) -> Vec<String> {
        self.entries
            .remove(&name.to_ascii_lowercase())
            .map(|entry| entry.values)
            .unwrap_or_default()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs, one pair per value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.values().flat_map(|entry| {
            entry
                .values
                .iter()
                .map(move |value| (entry.name.as_str(), value.as_str()))
        })
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderMap
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = HeaderMap::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}
