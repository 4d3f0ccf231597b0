//! Command implementations for graft.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Commands are thin: they read the document (and, where
//! relevant, the template and the edits sidecar), call into the session
//! boundary, write results back atomically, and report what happened.

mod diff;
mod export;
mod get;
mod keys;
mod merge;
mod reset;
mod set;
mod show;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Keys(args) => keys::cmd_keys(args),
        Command::Get(args) => get::cmd_get(args),
        Command::Set(args) => set::cmd_set(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Export(args) => export::cmd_export(args),
        Command::Merge(args) => merge::cmd_merge(args),
        Command::Reset(args) => reset::cmd_reset(args),
        Command::Diff(args) => diff::cmd_diff(args),
    }
}
