// Identifiers for mappings, configs and platform tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque identifier used for mapping names, config names and platform tags
///
/// The empty name is the "none" sentinel: it never names a real mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

/// Name of a bindable player action (e.g. "Jump")
pub type MappingName = Name;

impl Name {
    /// The "none" sentinel name
    pub fn none() -> Self {
        Self(String::new())
    }

    /// Create a name from anything string-like
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Check if this is the "none" sentinel
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("None")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Name {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
