//! Path keys: stable, unique addresses for leaf settings.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The slash-joined address of one leaf setting within a tree:
/// `[rootName, subsectionID*, settingID]`.
///
/// Within one document, path key → setting is a bijection onto the set of
/// leaves reachable from a named root (nodes without identifiers are
/// excluded from indexing). Segments are assumed not to contain `/`; this
/// mirrors the identifier conventions of the document format and is not
/// defended against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathKey(Vec<String>);

impl PathKey {
    /// Build a key from its ordered segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Build a key from its slash-joined text form. Never fails: any text
    /// is a key (it may simply resolve to nothing).
    pub fn from_text(text: &str) -> Self {
        Self(text.split('/').map(str::to_string).collect())
    }

    /// The ordered segments of this key.
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

impl FromStr for PathKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_text(s))
    }
}

// Serialized as the slash-joined text form so the edits sidecar and JSON
// output stay human-readable.
impl Serialize for PathKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PathKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
