//! Document, Section, and Setting struct definitions.

/// A parsed configuration document: an ordered forest of root sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    /// Root sections in document order.
    ///
    /// Order matters for deterministic serialization, not for semantics.
    pub roots: Vec<Section>,
}

/// A named container node, either a root section or a nested subsection.
///
/// Root sections are identified by their `Name` attribute, nested sections
/// by their `ID` attribute; both land in `id` here, and the serializer
/// decides the attribute name from the node's position. An empty `id` marks
/// a node that carried no identifier in the input — such nodes are kept in
/// the tree but excluded from path indexing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    /// Identifying name (root) or ID (nested); empty when absent.
    pub id: String,
    /// Nested subsections in document order.
    pub sections: Vec<Section>,
    /// Leaf settings in document order.
    pub settings: Vec<Setting>,
}

/// A leaf setting: identifier, declared data-type tag, and current value.
///
/// The identifier is unique among siblings only; global identity comes from
/// the full path key. The data-type tag is a free-form display hint
/// (e.g. `BOOL`, `TIME`) — values are opaque strings and are never coerced
/// or range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Setting {
    /// Identifier, unique among siblings; empty when absent.
    pub id: String,
    /// Declared data-type tag, if the input carried one.
    pub data_type: Option<String>,
    /// Current value. A missing `Value` attribute reads as the empty string.
    pub value: String,
}

impl Section {
    /// Create an empty section with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            sections: Vec::new(),
            settings: Vec::new(),
        }
    }
}

impl Setting {
    /// Create a setting with an identifier, data-type tag, and value.
    pub fn new(
        id: impl Into<String>,
        data_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            data_type: Some(data_type.into()),
            value: value.into(),
        }
    }
}
