//! Implementation of the `graft set` command.

use crate::cli::SetArgs;
use crate::error::Result;
use crate::session::EditSession;
use crate::tree::PathKey;

/// Execute the `graft set` command.
///
/// Commits a user edit: the value is written through the session (which
/// marks the key edited), and both the canonical document and the edits
/// sidecar are written back atomically.
pub fn cmd_set(args: SetArgs) -> Result<()> {
    let mut session = EditSession::open(&args.config)?;
    let key = PathKey::from_text(&args.key);

    session.set_value(&key, &args.value)?;
    session.save(&args.config)?;

    println!("Set {} = {}", key, args.value);
    Ok(())
}
