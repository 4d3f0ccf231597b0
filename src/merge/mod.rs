//! Selective merge and reset operations between a config tree and a
//! template tree.
//!
//! All three operations are keyed by structural path, not tree position,
//! so they stay correct when template and config sections appear in
//! different orders or when the config carries sections the template
//! lacks (optional hardware modules, for example) — template values that
//! do not exist simply never touch anything. A leaf with no template
//! counterpart is always left as-is; templates are allowed to be partial.
//!
//! `apply_template` is idempotent and leaf-local: running it twice with no
//! edits in between yields the same tree. `reset_all` is destructive from
//! the user's perspective; requiring explicit confirmation is the
//! caller's responsibility, not the engine's.


use crate::tracker::EditTracker;
use crate::tree::{self, Document, PathKey};

/// Copy template values into every *unedited* leaf of `config` that has a
/// template counterpart. Leaves tracked in `tracker` keep their user
/// value; leaves absent from `template` are untouched.
///
/// Returns the number of leaves overwritten.
pub fn apply_template(config: &mut Document, template: &Document, tracker: &EditTracker) -> usize {
    let keys: Vec<PathKey> = tree::leaves(config).into_iter().map(|(k, _)| k).collect();

    let mut applied = 0;
    for key in keys {
        if tracker.is_edited(&key) {
            continue;
        }
        if overwrite_from_template(config, template, &key) {
            applied += 1;
        }
    }
    applied
}

/// Copy template values into *every* leaf of `config` that has a template
/// counterpart, regardless of edit state, then clear `tracker` entirely.
///
/// Returns the number of leaves overwritten.
pub fn reset_all(config: &mut Document, template: &Document, tracker: &mut EditTracker) -> usize {
    let keys: Vec<PathKey> = tree::leaves(config).into_iter().map(|(k, _)| k).collect();

    let mut applied = 0;
    for key in keys {
        if overwrite_from_template(config, template, &key) {
            applied += 1;
        }
    }

    tracker.clear_all();
    applied
}

/// Reset the single leaf at `key` to its template value and drop `key`
/// from `tracker`. No-op (returning `false`) when the template has no
/// counterpart for `key`.
pub fn reset_field(
    config: &mut Document,
    key: &PathKey,
    template: &Document,
    tracker: &mut EditTracker,
) -> bool {
    if !overwrite_from_template(config, template, key) {
        return false;
    }
    tracker.clear_edited(key);
    true
}

/// Look up `key` in both trees and overwrite the config leaf with the
/// template value. Returns `false` when either side lacks the key.
fn overwrite_from_template(config: &mut Document, template: &Document, key: &PathKey) -> bool {
    let Some(template_value) = tree::resolve(template, key).map(|s| s.value.clone()) else {
        return false;
    };
    match tree::resolve_mut(config, key) {
        Some(setting) => {
            setting.value = template_value;
            true
        }
        None => false,
    }
}
