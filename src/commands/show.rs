//! Implementation of the `graft show` command.
//!
//! Renders the document as an annotated tree for humans: sections
//! indented, settings with display labels derived from their
//! identifiers, declared types, inferred unit suffixes, and edit
//! markers. None of this affects stored values or keys.

use crate::cli::ShowArgs;
use crate::error::Result;
use crate::session::EditSession;
use crate::tracker::EditTracker;
use crate::tree::{PathKey, Section};
use regex::Regex;
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").unwrap());
static WORD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w").unwrap());
static SPEED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)speed").unwrap());
static ACCELERATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)acceleration|deceleration").unwrap());

/// Execute the `graft show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let session = EditSession::open(&args.config)?;

    println!(
        "================================================================================"
    );
    println!("{}", args.config.display());
    println!(
        "================================================================================"
    );

    for root in &session.config().roots {
        if root.id.is_empty() {
            continue;
        }
        println!();
        println!("{}", root.id);
        let mut prefix = vec![root.id.clone()];
        print_section(root, 1, &mut prefix, session.tracker());
    }

    let edited = session.tracker().len();
    if edited > 0 {
        println!();
        println!("{} setting(s) edited since load.", edited);
    }

    Ok(())
}

fn print_section(section: &Section, depth: usize, prefix: &mut Vec<String>, tracker: &EditTracker) {
    let indent = "    ".repeat(depth);

    for setting in &section.settings {
        if setting.id.is_empty() {
            continue;
        }

        let mut segments = prefix.clone();
        segments.push(setting.id.clone());
        let key = PathKey::new(segments);

        let mut line = format!(
            "{}{}: {}",
            indent,
            display_label(&setting.id),
            setting.value
        );
        if let Some(unit) = unit_suffix(&setting.id, setting.data_type.as_deref()) {
            line.push(' ');
            line.push_str(unit);
        }
        if let Some(data_type) = &setting.data_type {
            line.push_str(&format!(" ({})", data_type));
        }
        if tracker.is_edited(&key) {
            line.push_str(" [edited]");
        }
        println!("{}", line);
    }

    for child in &section.sections {
        if child.id.is_empty() {
            // Transparent wrapper: no heading, no key segment.
            print_section(child, depth, prefix, tracker);
        } else {
            println!("{}{}", indent, child.id);
            prefix.push(child.id.clone());
            print_section(child, depth + 1, prefix, tracker);
            prefix.pop();
        }
    }
}

/// Derive a human-readable label from a setting identifier: underscores
/// become spaces, lowerCamelCase boundaries get a space, and each word is
/// capitalized.
fn display_label(id: &str) -> String {
    let spaced = id.replace('_', " ");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "${1} ${2}");
    WORD_START
        .replace_all(&spaced, |caps: &regex::Captures| caps[0].to_uppercase())
        .into_owned()
}

/// Infer a display unit from the data-type tag and the identifier.
fn unit_suffix(id: &str, data_type: Option<&str>) -> Option<&'static str> {
    if data_type == Some("TIME") {
        Some("ms")
    } else if SPEED.is_match(id) {
        Some("mm/s")
    } else if ACCELERATION.is_match(id) {
        Some("mm/s²")
    } else {
        None
    }
}
