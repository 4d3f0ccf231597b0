//! Implementation of the `graft diff` command.

use crate::cli::DiffArgs;
use crate::diff::diff_against_template;
use crate::error::{GraftError, Result};
use crate::session::EditSession;
use crate::xml;

/// Execute the `graft diff` command.
///
/// Read-only: lists every setting present in both documents whose values
/// differ, flagging the ones a merge would preserve as edited.
pub fn cmd_diff(args: DiffArgs) -> Result<()> {
    let session = EditSession::open(&args.config)?;

    let template_text = std::fs::read_to_string(&args.template).map_err(|e| {
        GraftError::UserError(format!(
            "failed to read file '{}': {}",
            args.template.display(),
            e
        ))
    })?;
    let template = xml::parse(&template_text)?;

    let diffs = diff_against_template(session.config(), &template, session.tracker());

    if args.json {
        let json = serde_json::to_string_pretty(&diffs)
            .map_err(|e| GraftError::UserError(format!("failed to serialize diff: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    if diffs.is_empty() {
        println!("No differences: every shared setting matches the template.");
        return Ok(());
    }

    for diff in &diffs {
        let marker = if diff.edited { " [edited]" } else { "" };
        println!(
            "{}: \"{}\" -> \"{}\"{}",
            diff.key, diff.config_value, diff.template_value, marker
        );
    }
    println!();
    println!("{} differing setting(s).", diffs.len());

    Ok(())
}
