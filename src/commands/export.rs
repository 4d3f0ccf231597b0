//! Implementation of the `graft export` command.

use crate::cli::ExportArgs;
use crate::error::Result;
use crate::fs::atomic_write_file;
use crate::session::EditSession;

/// Execute the `graft export` command.
///
/// Renders the canonical form of the document to stdout or to a file.
/// The source document itself is left untouched.
pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let session = EditSession::open(&args.config)?;
    let rendered = session.export();

    match args.output {
        Some(path) => {
            atomic_write_file(&path, &rendered)?;
            println!("Exported {} to {}", args.config.display(), path.display());
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}
