//! Names already shown to the user.
//!
//! [`SeenList`] is the client side: an ordered, de-duplicated list capped at [`SEEN_CAP`],
//! sent as `avoid` with the next request. [`AvoidList`] is the server's view of that field.

use std::collections::HashSet;

/// Maximum number of names carried between requests.
pub const SEEN_CAP: usize = 50;

/// Client-held list of recently shown names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeenList {
    names: Vec<String>,
}

impl SeenList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends names, keeps the first occurrence of each, then keeps only the newest
    /// [`SEEN_CAP`] entries. Blank names are skipped.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let merged: Vec<String> = self
            .names
            .drain(..)
            .chain(names.into_iter().map(Into::into))
            .filter(|n| !n.trim().is_empty())
            .filter(|n| seen.insert(n.clone()))
            .collect();
        let skip = merged.len().saturating_sub(SEEN_CAP);
        self.names = merged.into_iter().skip(skip).collect();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Server view of a request's `avoid` field: trimmed, non-blank, at most [`SEEN_CAP`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AvoidList {
    names: Vec<String>,
    lowered: HashSet<String>,
}

impl AvoidList {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .take(SEEN_CAP)
            .collect();
        let lowered = names.iter().map(|n| n.to_lowercase()).collect();
        Self { names, lowered }
    }

    /// Case-insensitive match on the trimmed name.
    pub fn contains(&self, name: &str) -> bool {
        self.lowered.contains(&name.trim().to_lowercase())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
