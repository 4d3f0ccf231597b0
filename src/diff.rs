//! Config-vs-template value comparison.
//!
//! A read-only companion to the merge operations: for every leaf present
//! in both trees, report the value pair when the two sides disagree,
//! together with whether the key is currently tracked as edited (i.e.
//! whether a selective merge would skip it). Keys present on only one
//! side are not differences — partial templates are expected, and
//! config-only sections are never touched by a merge.

use crate::tracker::EditTracker;
use crate::tree::{self, Document, PathKey};
use serde::Serialize;

/// One differing leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueDiff {
    /// Path key of the leaf, in slash-joined text form.
    pub key: PathKey,
    /// Current value in the config tree.
    pub config_value: String,
    /// Value the template holds for the same key.
    pub template_value: String,
    /// Whether the key is tracked as edited (a selective merge would
    /// preserve the config value).
    pub edited: bool,
}

/// Compare `config` against `template`, in config walk order.
pub fn diff_against_template(
    config: &Document,
    template: &Document,
    tracker: &EditTracker,
) -> Vec<ValueDiff> {
    let mut diffs = Vec::new();
    for (key, setting) in tree::leaves(config) {
        let Some(counterpart) = tree::resolve(template, &key) else {
            continue;
        };
        if counterpart.value == setting.value {
            continue;
        }
        diffs.push(ValueDiff {
            edited: tracker.is_edited(&key),
            config_value: setting.value.clone(),
            template_value: counterpart.value.clone(),
            key,
        });
    }
    diffs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_document, template_document};

    fn key(text: &str) -> PathKey {
        text.parse().unwrap()
    }

    #[test]
    fn reports_only_differing_shared_keys() {
        let config = sample_document();
        let template = template_document();
        let tracker = EditTracker::new();

        let diffs = diff_against_template(&config, &template, &tracker);
        let keys: Vec<String> = diffs.iter().map(|d| d.key.to_string()).collect();

        // `mtu` (config-only) and `turbo` (template-only) never appear;
        // `minSpeed` appears because the sides disagree.
        assert_eq!(
            keys,
            [
                "main:config/limits/maxSpeed",
                "main:config/limits/minSpeed",
                "main:config/network/dhcp",
                "feeder:config/belt/startDelay",
            ]
        );

        let max_speed = &diffs[0];
        assert_eq!(max_speed.config_value, "100");
        assert_eq!(max_speed.template_value, "150");
        assert!(!max_speed.edited);
    }

    #[test]
    fn equal_values_produce_no_diff() {
        let config = sample_document();
        let tracker = EditTracker::new();

        let diffs = diff_against_template(&config, &config.clone(), &tracker);
        assert!(diffs.is_empty());
    }

    #[test]
    fn edited_keys_are_flagged() {
        let config = sample_document();
        let template = template_document();
        let mut tracker = EditTracker::new();
        tracker.mark_edited(key("main:config/limits/maxSpeed"));

        let diffs = diff_against_template(&config, &template, &tracker);

        assert!(diffs[0].edited);
        assert!(!diffs[1].edited);
    }

    #[test]
    fn serializes_to_json_with_text_keys() {
        let config = sample_document();
        let template = template_document();
        let tracker = EditTracker::new();

        let diffs = diff_against_template(&config, &template, &tracker);
        let json = serde_json::to_value(&diffs).unwrap();

        assert_eq!(json[0]["key"], "main:config/limits/maxSpeed");
        assert_eq!(json[0]["config_value"], "100");
        assert_eq!(json[0]["template_value"], "150");
        assert_eq!(json[0]["edited"], false);
    }
}
