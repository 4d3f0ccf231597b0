//! Implementation of the `graft get` command.

use crate::cli::GetArgs;
use crate::error::{GraftError, Result};
use crate::session::EditSession;
use crate::tree::PathKey;

/// Execute the `graft get` command.
///
/// Prints the bare value so the output is pipe-friendly.
pub fn cmd_get(args: GetArgs) -> Result<()> {
    let session = EditSession::open(&args.config)?;
    let key = PathKey::from_text(&args.key);

    let value = session.value(&key).ok_or_else(|| {
        GraftError::UserError(format!(
            "key '{}' not found in '{}'.\n\n\
             Use `graft keys {}` to list available keys.",
            key,
            args.config.display(),
            args.config.display()
        ))
    })?;

    println!("{}", value);
    Ok(())
}
