use std::collections::{hash_map, HashMap};

/// One parsed part header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name as written, e.g. `Content-Type`.
    pub name: String,
    /// Header value up to the first `;`, trimmed.
    pub value: String,
    /// `;`-delimited parameters, present only when the line carried any.
    pub params: Option<Params>,
}

impl Header {
    /// Creates a header without parameters.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            params: None,
        }
    }

    /// Returns `true` when the header name contains `needle`, ignoring ASCII case.
    pub fn name_contains(&self, needle: &str) -> bool {
        contains_ignore_ascii_case(&self.name, needle)
    }

    /// Looks up a parameter by exact name.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.as_ref()?.get(key)
    }

    /// Looks up a parameter by name, ignoring ASCII case.
    pub fn param_ignore_case(&self, key: &str) -> Option<&str> {
        self.params.as_ref()?.get_ignore_case(key)
    }
}

/// Header parameter map. Keys are unique; later duplicates overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    entries: HashMap<String, String>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter, overwriting any previous value under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up a parameter by exact name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Looks up a parameter by name, ignoring ASCII case.
    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.get(key).or_else(|| {
            self.entries
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(key))
                .map(|(_, value)| value.as_str())
        })
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no parameters are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates parameters in unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Removes every parameter.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a String);
    type IntoIter = hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }

    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

pub(crate) fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
