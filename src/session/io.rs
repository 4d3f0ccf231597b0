//! File I/O for editing sessions.
//!
//! A CLI invocation is a process, not a session, so the edit tracker is
//! durable state: the tracker for `config.xml` lives in the JSON sidecar
//! `config.xml.edits` next to it. A missing sidecar is an empty tracker;
//! an empty tracker removes the sidecar on save. Both the document and
//! the sidecar are written atomically.

use super::EditSession;
use crate::error::{GraftError, Result};
use crate::fs::atomic_write_file;
use crate::tracker::EditTracker;
use crate::tree::PathKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serialized form of the edits sidecar.
#[derive(Debug, Serialize, Deserialize)]
struct EditState {
    edited: Vec<PathKey>,
}

impl EditSession {
    /// Open a session from a config file, picking up any edits sidecar.
    pub fn open<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let text = read_file(config_path)?;

        let mut session = Self::load(&text)?;
        session.tracker = load_tracker(&sidecar_path(config_path))?;
        Ok(session)
    }

    /// Open a session and load a template alongside it.
    pub fn open_with_template<P: AsRef<Path>, Q: AsRef<Path>>(
        config_path: P,
        template_path: Q,
    ) -> Result<Self> {
        let mut session = Self::open(config_path)?;
        let text = read_file(template_path.as_ref())?;
        session.load_template(&text)?;
        Ok(session)
    }

    /// Write the canonical document and the edits sidecar back to disk.
    ///
    /// The sidecar is removed when no edits are tracked, so an untouched
    /// or fully reset document leaves a single file behind.
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();
        atomic_write_file(config_path, &self.export())?;

        let sidecar = sidecar_path(config_path);
        if self.tracker.is_empty() {
            if sidecar.exists() {
                std::fs::remove_file(&sidecar).map_err(|e| {
                    GraftError::UserError(format!(
                        "failed to remove edits sidecar '{}': {}",
                        sidecar.display(),
                        e
                    ))
                })?;
            }
            return Ok(());
        }

        let state = EditState {
            edited: self.tracker.iter().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&state).map_err(|e| {
            GraftError::UserError(format!("failed to serialize edits sidecar: {}", e))
        })?;
        atomic_write_file(&sidecar, &json)
    }
}

/// The sidecar path for a config file: `<file>.edits`.
fn sidecar_path(config_path: &Path) -> PathBuf {
    let mut name = config_path.as_os_str().to_os_string();
    name.push(".edits");
    PathBuf::from(name)
}

fn load_tracker(sidecar: &Path) -> Result<EditTracker> {
    if !sidecar.exists() {
        return Ok(EditTracker::new());
    }

    let json = read_file(sidecar)?;
    let state: EditState = serde_json::from_str(&json).map_err(|e| {
        GraftError::UserError(format!(
            "failed to parse edits sidecar '{}': {}",
            sidecar.display(),
            e
        ))
    })?;

    let mut tracker = EditTracker::new();
    for key in state.edited {
        tracker.mark_edited(key);
    }
    Ok(tracker)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        GraftError::UserError(format!("failed to read file '{}': {}", path.display(), e))
    })
}
