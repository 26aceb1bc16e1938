//! Header storage shared by requests and responses.
//!
//! The transport layer fills a [`HeaderStore`] once, status pseudo-headers
//! included, and the views built on top of it only read from it.
//!
//! # Example
//!
//! ```
//! use acurl_http::{HeaderStore, Headers};
//!
//! let mut headers = Headers::new();
//! headers.append("Set-Cookie", "a=1");
//! headers.append("Set-Cookie", "b=2");
//!
//! assert_eq!(headers.header("Set-Cookie"), Some("a=1"));
//! assert_eq!(headers.get_all("Set-Cookie").count(), 2);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use derive_more::Display;

/// Kind of message a header container belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContainerKind {
    /// Outgoing request headers.
    #[display("request")]
    Request,
    /// Received response headers.
    #[display("response")]
    Response,
}

/// Read access to a populated header container.
///
/// Lookups are by exact name unless the implementation documents otherwise.
pub trait HeaderStore {
    /// First value stored under `name`.
    fn header(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> HeaderStore for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl HeaderStore for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Lookups follow `http` rules: names are case-insensitive, names that are
/// not valid header names and values that are not visible ASCII read as
/// absent.
impl HeaderStore for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

/// Ordered header container.
///
/// Keeps insertion order and allows several values per name. Names are
/// compared exactly, so `_status` and `_Status` are distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Creates an empty container.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `name` to a single value.
    ///
    /// An existing name keeps its position; any further values are dropped.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        let mut first = true;
        self.entries
            .retain(|(existing, _)| *existing != name || std::mem::replace(&mut first, false));

        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Adds a value after any existing ones.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// All values stored under `name`, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if at least one value is stored under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == name)
    }

    /// Removes every value under `name`, returning the first one.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let position = self
            .entries
            .iter()
            .position(|(existing, _)| existing == name)?;
        let (_, value) = self.entries.remove(position);
        self.entries.retain(|(existing, _)| existing != name);
        Some(value)
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HeaderStore for Headers {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl<K, V> FromIterator<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut headers = Self::new();
        headers.extend(iter);
        headers
    }
}

impl<K, V> Extend<(K, V)> for Headers
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.append(name, value);
        }
    }
}
