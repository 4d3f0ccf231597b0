//! Editing session: one config tree, an optional template tree, and the
//! edit tracker that ties them together.
//!
//! This is the boundary the command layer talks to. The session keeps the
//! tree as the single source of truth: callers hold only path keys, and
//! every mutation goes through [`EditSession::set_value`], which records
//! the edit in the tracker. Loading a new document replaces the tree and
//! clears the tracker; the template has an independent lifetime and may
//! be absent.
//!
//! All operations here are synchronous, in-memory tree walks. File I/O
//! (reading documents, persisting the tracker across invocations) lives
//! in the `io` submodule.

mod io;


use crate::error::{GraftError, Result};
use crate::merge;
use crate::tracker::EditTracker;
use crate::tree::{self, Document, PathKey};
use crate::xml;

/// One editing session over a config document.
#[derive(Debug, Clone)]
pub struct EditSession {
    config: Document,
    template: Option<Document>,
    tracker: EditTracker,
}

impl EditSession {
    /// Parse `text` and start a fresh session (empty tracker, no template).
    pub fn load(text: &str) -> Result<Self> {
        Ok(Self {
            config: xml::parse(text)?,
            template: None,
            tracker: EditTracker::new(),
        })
    }

    /// Parse `text` as the template for this session.
    ///
    /// A parse failure leaves any previously loaded template in place.
    pub fn load_template(&mut self, text: &str) -> Result<()> {
        self.template = Some(xml::parse(text)?);
        Ok(())
    }

    /// Whether a template is loaded.
    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }

    /// The config tree (read-only).
    pub fn config(&self) -> &Document {
        &self.config
    }

    /// The template tree, when one is loaded.
    pub fn template(&self) -> Option<&Document> {
        self.template.as_ref()
    }

    /// The edit tracker (read-only).
    pub fn tracker(&self) -> &EditTracker {
        &self.tracker
    }

    /// Every indexable path key of the config tree, in walk order.
    pub fn keys(&self) -> Vec<PathKey> {
        tree::leaves(&self.config)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }

    /// The value at `key`, if the key resolves.
    pub fn value(&self, key: &PathKey) -> Option<&str> {
        tree::resolve(&self.config, key).map(|s| s.value.as_str())
    }

    /// Commit a user edit: set the value at `key` and mark the key edited.
    pub fn set_value(&mut self, key: &PathKey, value: &str) -> Result<()> {
        let setting = tree::resolve_mut(&mut self.config, key)
            .ok_or_else(|| GraftError::UserError(format!("key '{}' not found", key)))?;
        setting.value = value.to_string();
        self.tracker.mark_edited(key.clone());
        Ok(())
    }

    /// Merge template values into all unedited leaves.
    ///
    /// Returns the number of leaves overwritten.
    pub fn apply_template(&mut self) -> Result<usize> {
        let Some(template) = self.template.as_ref() else {
            return Err(missing_template());
        };
        Ok(merge::apply_template(&mut self.config, template, &self.tracker))
    }

    /// Reset every leaf with a template counterpart and clear the tracker.
    ///
    /// Returns the number of leaves overwritten. Destructive; callers are
    /// responsible for confirming with the user first.
    pub fn reset_all(&mut self) -> Result<usize> {
        let Some(template) = self.template.as_ref() else {
            return Err(missing_template());
        };
        Ok(merge::reset_all(&mut self.config, template, &mut self.tracker))
    }

    /// Reset the single leaf at `key` to its template value.
    ///
    /// Returns `false` (and changes nothing) when the template has no
    /// counterpart for `key`.
    pub fn reset_field(&mut self, key: &PathKey) -> Result<bool> {
        let Some(template) = self.template.as_ref() else {
            return Err(missing_template());
        };
        Ok(merge::reset_field(
            &mut self.config,
            key,
            template,
            &mut self.tracker,
        ))
    }

    /// Render the config tree to its canonical textual form.
    pub fn export(&self) -> String {
        xml::render(&self.config)
    }
}

fn missing_template() -> GraftError {
    GraftError::UserError("no template loaded".to_string())
}
