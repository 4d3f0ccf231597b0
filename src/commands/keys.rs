//! Implementation of the `graft keys` command.

use crate::cli::KeysArgs;
use crate::error::Result;
use crate::session::EditSession;

/// Execute the `graft keys` command.
///
/// Prints one path key per line in walk order; keys tracked as edited get
/// a trailing ` *` marker.
pub fn cmd_keys(args: KeysArgs) -> Result<()> {
    let session = EditSession::open(&args.config)?;

    for key in session.keys() {
        if session.tracker().is_edited(&key) {
            println!("{} *", key);
        } else {
            println!("{}", key);
        }
    }

    Ok(())
}
