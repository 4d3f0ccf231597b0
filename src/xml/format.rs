//! Canonical rendering of a tree back to indented markup.
//!
//! The output must be byte-for-byte stable for downstream consumers of
//! exported files, so the formatter reproduces a fixed algorithm exactly:
//!
//! 1. Serialize the tree to flat markup with no whitespace between tags.
//! 2. Break the flat string into lines at every `>`/`<` tag boundary.
//! 3. Re-indent line by line with a running depth counter: a line that
//!    both opens and closes a container gets no depth change, a pure
//!    closing tag decrements depth before printing (never below zero),
//!    and an opening tag increments depth after printing. Self-closing
//!    lines are depth-neutral.
//! 4. Join lines with CRLF.
//!
//! The classification is line-local and regex-driven rather than a
//! structural pretty-printer; it stays behind [`render`] so it could be
//! swapped out without touching the tree model.

use crate::tree::{Document, Section, Setting};
use regex::Regex;
use std::sync::LazyLock;

/// One indent step.
const PADDING: &str = "    ";

static TAG_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(>)(<)(/*)").unwrap());
static CLOSES_ON_SAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".+</\w[^>]*>$").unwrap());
static CLOSING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^</\w").unwrap());
static OPENING_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<\w[^>]*[^/]>.*$").unwrap());

/// Render a document to its canonical indented form.
pub fn render(doc: &Document) -> String {
    reindent(&render_flat(doc))
}

/// Serialize to flat markup: no whitespace between sibling tags, fixed
/// attribute order, childless containers self-close.
fn render_flat(doc: &Document) -> String {
    if doc.roots.is_empty() {
        return "<DATA/>".to_string();
    }

    let mut out = String::new();
    out.push_str("<DATA>");
    for root in &doc.roots {
        write_section(&mut out, root, true);
    }
    out.push_str("</DATA>");
    out
}

fn write_section(out: &mut String, section: &Section, is_root: bool) {
    // Root sections carry Name, nested sections carry ID.
    let (tag, attr) = if is_root {
        ("Element", "Name")
    } else {
        ("Group", "ID")
    };

    out.push_str(&format!("<{} {}=\"{}\"", tag, attr, escape_attr(&section.id)));
    if section.settings.is_empty() && section.sections.is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');

    for setting in &section.settings {
        write_setting(out, setting);
    }
    for child in &section.sections {
        write_section(out, child, false);
    }

    out.push_str(&format!("</{}>", tag));
}

fn write_setting(out: &mut String, setting: &Setting) {
    out.push_str(&format!("<Property ID=\"{}\"", escape_attr(&setting.id)));
    if let Some(data_type) = &setting.data_type {
        out.push_str(&format!(" DataType=\"{}\"", escape_attr(data_type)));
    }
    out.push_str(&format!(" Value=\"{}\"/>", escape_attr(&setting.value)));
}

/// Break flat markup into lines and re-indent with a running depth counter.
fn reindent(xml: &str) -> String {
    let broken = TAG_BOUNDARY.replace_all(xml, "${1}\r\n${2}${3}");

    let mut pad: usize = 0;
    let mut lines = Vec::new();
    for line in broken.split("\r\n") {
        let indent: usize;
        if CLOSES_ON_SAME_LINE.is_match(line) {
            indent = 0;
        } else if CLOSING_TAG.is_match(line) && pad > 0 {
            pad -= 1;
            indent = 0;
        } else if OPENING_TAG.is_match(line) {
            indent = 1;
        } else {
            indent = 0;
        }

        pad += indent;
        lines.push(format!("{}{}", PADDING.repeat(pad - indent), line));
    }

    lines.join("\r\n")
}

/// Escape special characters in attribute values.
fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
