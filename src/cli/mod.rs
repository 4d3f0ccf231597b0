//! CLI argument parsing for graft.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Graft: path-keyed editor for hierarchical XML configuration documents.
///
/// Every leaf setting is addressed by a slash-joined path key
/// (`rootName/section.../settingID`). Edits are tracked in a sidecar file
/// next to the document, and template values can be merged into unedited
/// settings or used to reset fields outright.
#[derive(Parser, Debug)]
#[command(name = "graft")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for graft.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the path key of every setting in a document.
    ///
    /// Keys tracked as edited are marked with a trailing `*`.
    Keys(KeysArgs),

    /// Print the value of one setting.
    Get(GetArgs),

    /// Set the value of one setting and mark it edited.
    ///
    /// The document is rewritten in canonical form and the edit is
    /// recorded in the sidecar, so later merges preserve it.
    Set(SetArgs),

    /// Display the document as an annotated tree.
    ///
    /// Settings are shown with display labels, declared types, inferred
    /// unit suffixes, and edit markers.
    Show(ShowArgs),

    /// Render the canonical form of a document.
    ///
    /// Writes to stdout by default; the source file is not modified.
    Export(ExportArgs),

    /// Merge template values into all unedited settings.
    ///
    /// Settings you have edited keep their values; settings the template
    /// does not carry are left untouched.
    Merge(MergeArgs),

    /// Reset settings to their template values.
    ///
    /// With a key, resets that single setting and forgets its edit.
    /// With --all, resets every covered setting and clears all tracked
    /// edits; this discards your work and therefore requires --force.
    Reset(ResetArgs),

    /// Compare a document against a template.
    ///
    /// Lists settings present in both whose values differ, flagging the
    /// ones a merge would preserve as edited.
    Diff(DiffArgs),
}

/// Arguments for the `keys` command.
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Path to the configuration document.
    pub config: PathBuf,
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Path to the configuration document.
    pub config: PathBuf,

    /// Path key of the setting (e.g. main:config/limits/maxSpeed).
    pub key: String,
}

/// Arguments for the `set` command.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Path to the configuration document.
    pub config: PathBuf,

    /// Path key of the setting (e.g. main:config/limits/maxSpeed).
    pub key: String,

    /// New value.
    pub value: String,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Path to the configuration document.
    pub config: PathBuf,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Path to the configuration document.
    pub config: PathBuf,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `merge` command.
#[derive(Parser, Debug)]
pub struct MergeArgs {
    /// Path to the configuration document.
    pub config: PathBuf,

    /// Path to the template document.
    #[arg(long)]
    pub template: PathBuf,
}

/// Arguments for the `reset` command.
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Path to the configuration document.
    pub config: PathBuf,

    /// Path key of the setting to reset.
    pub key: Option<String>,

    /// Path to the template document.
    #[arg(long)]
    pub template: PathBuf,

    /// Reset every setting the template covers.
    #[arg(long)]
    pub all: bool,

    /// Confirm a full reset (required with --all).
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `diff` command.
#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Path to the configuration document.
    pub config: PathBuf,

    /// Path to the template document.
    #[arg(long)]
    pub template: PathBuf,

    /// Emit the differences as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
