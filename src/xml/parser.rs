//! XML parsing into the tree model.

use crate::error::{GraftError, Result};
use crate::tree::{Document, Section, Setting};

/// Parse a configuration document.
///
/// Fails with [`GraftError::Parse`] when the input is not well-formed XML
/// or the root element is not `<DATA>`; a tree is never partially
/// populated on failure. Inside a well-formed document the parser is
/// tolerant: unknown elements are ignored, and missing identifier
/// attributes are kept as empty (such nodes are excluded from path
/// indexing but survive a re-render).
pub fn parse(xml: &str) -> Result<Document> {
    let doc = roxmltree::Document::parse(xml)
        .map_err(|e| GraftError::Parse(format!("XML parse error: {}", e)))?;

    let root = doc.root_element();
    if root.tag_name().name() != "DATA" {
        return Err(GraftError::Parse(format!(
            "root element must be <DATA>, found <{}>",
            root.tag_name().name()
        )));
    }

    let mut document = Document::default();
    for child in root.children().filter(|n| n.is_element()) {
        if child.tag_name().name() == "Element" {
            document.roots.push(parse_root(&child));
        }
    }

    Ok(document)
}

/// Parse a root `<Element>` node. Root sections are identified by `Name`.
fn parse_root(node: &roxmltree::Node) -> Section {
    let mut section = Section::new(node.attribute("Name").unwrap_or_default());
    parse_children(node, &mut section);
    section
}

/// Parse a nested `<Group>` node. Nested sections are identified by `ID`.
fn parse_group(node: &roxmltree::Node) -> Section {
    let mut section = Section::new(node.attribute("ID").unwrap_or_default());
    parse_children(node, &mut section);
    section
}

fn parse_children(node: &roxmltree::Node, section: &mut Section) {
    for child in node.children().filter(|n| n.is_element()) {
        match child.tag_name().name() {
            "Group" => section.sections.push(parse_group(&child)),
            "Property" => section.settings.push(parse_property(&child)),
            _ => {}
        }
    }
}

fn parse_property(node: &roxmltree::Node) -> Setting {
    Setting {
        id: node.attribute("ID").unwrap_or_default().to_string(),
        data_type: node.attribute("DataType").map(str::to_string),
        value: node.attribute("Value").unwrap_or_default().to_string(),
    }
}
