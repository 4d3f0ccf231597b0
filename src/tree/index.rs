//! Path indexing: enumerate leaves with their keys and resolve keys back
//! to leaves.
//!
//! Indexing is tolerant of structural anomalies: a section without an
//! identifier contributes no key segment but its descendants stay
//! reachable (the walk flattens through it, and resolution searches
//! through unidentified children at each step), a setting without an
//! identifier is excluded entirely, and a root section without a name has
//! no addressable first segment so its subtree is unindexed. Duplicate
//! sibling identifiers resolve to the first match in walk order; sibling
//! uniqueness is a data-quality assumption of the format, not something
//! defended against here.

use super::model::{Document, Section, Setting};
use super::path::PathKey;

/// Enumerate every indexable leaf of `doc` with its path key, in walk
/// order (settings before subsections within each section).
pub fn leaves(doc: &Document) -> Vec<(PathKey, &Setting)> {
    let mut out = Vec::new();
    for root in &doc.roots {
        if root.id.is_empty() {
            continue;
        }
        let mut prefix = vec![root.id.clone()];
        walk_section(root, &mut prefix, &mut out);
    }
    out
}

fn walk_section<'a>(
    section: &'a Section,
    prefix: &mut Vec<String>,
    out: &mut Vec<(PathKey, &'a Setting)>,
) {
    for setting in &section.settings {
        if setting.id.is_empty() {
            continue;
        }
        let mut segments = prefix.clone();
        segments.push(setting.id.clone());
        out.push((PathKey::new(segments), setting));
    }
    for child in &section.sections {
        if child.id.is_empty() {
            // No identifier, no key segment; descendants stay reachable.
            walk_section(child, prefix, out);
        } else {
            prefix.push(child.id.clone());
            walk_section(child, prefix, out);
            prefix.pop();
        }
    }
}

/// Compute the path key of one specific leaf within `doc`.
///
/// The leaf is located by identity, so the caller must pass a reference
/// into `doc` itself. Returns `None` for leaves the index excludes
/// (missing identifiers anywhere on the root path, or a foreign node).
pub fn key_of(doc: &Document, target: &Setting) -> Option<PathKey> {
    leaves(doc)
        .into_iter()
        .find(|(_, setting)| std::ptr::eq(*setting, target))
        .map(|(key, _)| key)
}

/// Resolve a path key to a leaf within `doc`.
///
/// The first segment selects a root section by name, intermediate segments
/// each select one nested subsection by ID, and the final segment selects a
/// setting by ID. Absence at any step yields `None` — a key missing from a
/// tree is an expected, common case (e.g. a template lacking a field the
/// config has), not an error.
pub fn resolve<'a>(doc: &'a Document, key: &PathKey) -> Option<&'a Setting> {
    let (first, rest) = key.segments().split_first()?;
    if rest.is_empty() {
        return None;
    }
    let root = doc.roots.iter().find(|root| root.id == *first)?;
    resolve_in(root, rest)
}

/// Mutable variant of [`resolve`], used by value mutation and the merge
/// operations.
pub fn resolve_mut<'a>(doc: &'a mut Document, key: &PathKey) -> Option<&'a mut Setting> {
    let (first, rest) = key.segments().split_first()?;
    if rest.is_empty() {
        return None;
    }
    let root = doc.roots.iter_mut().find(|root| root.id == *first)?;
    resolve_in_mut(root, rest)
}

fn resolve_in<'a>(section: &'a Section, segments: &[String]) -> Option<&'a Setting> {
    let (segment, rest) = segments.split_first()?;
    if rest.is_empty() {
        find_setting(section, segment)
    } else {
        find_section(section, segment).and_then(|child| resolve_in(child, rest))
    }
}

fn resolve_in_mut<'a>(section: &'a mut Section, segments: &[String]) -> Option<&'a mut Setting> {
    let (segment, rest) = segments.split_first()?;
    if rest.is_empty() {
        find_setting_mut(section, segment)
    } else {
        find_section_mut(section, segment).and_then(|child| resolve_in_mut(child, rest))
    }
}

// Lookup helpers search the section's own children first, then look through
// unidentified child sections, matching the flattened view the walk
// produces. First match wins.

fn find_setting<'a>(section: &'a Section, id: &str) -> Option<&'a Setting> {
    if let Some(setting) = section.settings.iter().find(|s| s.id == id) {
        return Some(setting);
    }
    section
        .sections
        .iter()
        .filter(|child| child.id.is_empty())
        .find_map(|child| find_setting(child, id))
}

fn find_setting_mut<'a>(section: &'a mut Section, id: &str) -> Option<&'a mut Setting> {
    if section.settings.iter().any(|s| s.id == id) {
        return section.settings.iter_mut().find(|s| s.id == id);
    }
    section
        .sections
        .iter_mut()
        .filter(|child| child.id.is_empty())
        .find_map(|child| find_setting_mut(child, id))
}

fn find_section<'a>(section: &'a Section, id: &str) -> Option<&'a Section> {
    if let Some(child) = section.sections.iter().find(|c| c.id == id) {
        return Some(child);
    }
    section
        .sections
        .iter()
        .filter(|child| child.id.is_empty())
        .find_map(|child| find_section(child, id))
}

fn find_section_mut<'a>(section: &'a mut Section, id: &str) -> Option<&'a mut Section> {
    let direct = section.sections.iter().position(|c| c.id == id);
    if let Some(pos) = direct {
        return section.sections.get_mut(pos);
    }
    section
        .sections
        .iter_mut()
        .filter(|child| child.id.is_empty())
        .find_map(|child| find_section_mut(child, id))
}
