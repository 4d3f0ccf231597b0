//! Implementation of the `graft merge` command.

use crate::cli::MergeArgs;
use crate::error::Result;
use crate::session::EditSession;

/// Execute the `graft merge` command.
///
/// Merges template values into every unedited setting, writes the
/// document back, and reports the outcome. Edited settings are
/// preserved; settings the template does not cover are untouched.
pub fn cmd_merge(args: MergeArgs) -> Result<()> {
    let mut session = EditSession::open_with_template(&args.config, &args.template)?;

    let applied = session.apply_template()?;
    session.save(&args.config)?;

    let preserved = session.tracker().len();
    if applied == 0 && preserved == 0 {
        println!("Merge produced no change: the template covers no settings.");
    } else {
        println!(
            "Merged {} setting(s) from template; {} edited setting(s) preserved.",
            applied, preserved
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::set::cmd_set;
    use crate::cli::SetArgs;
    use crate::test_support::{SAMPLE_XML, TEMPLATE_XML};
    use tempfile::TempDir;

    fn write_fixtures(temp_dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
        let config_path = temp_dir.path().join("config.xml");
        let template_path = temp_dir.path().join("template.xml");
        std::fs::write(&config_path, SAMPLE_XML).unwrap();
        std::fs::write(&template_path, TEMPLATE_XML).unwrap();
        (config_path, template_path)
    }

    #[test]
    fn merge_overwrites_unedited_settings() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        cmd_merge(MergeArgs {
            config: config_path.clone(),
            template: template_path,
        })
        .unwrap();

        let written = std::fs::read_to_string(&config_path).unwrap();
        assert!(written.contains("Value=\"150\""));
    }

    #[test]
    fn merge_preserves_prior_edits_across_invocations() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        // Edit in one invocation, merge in another: the sidecar carries
        // the tracker between processes.
        cmd_set(SetArgs {
            config: config_path.clone(),
            key: "main:config/limits/maxSpeed".to_string(),
            value: "120".to_string(),
        })
        .unwrap();

        cmd_merge(MergeArgs {
            config: config_path.clone(),
            template: template_path,
        })
        .unwrap();

        let session = EditSession::open(&config_path).unwrap();
        let key = crate::tree::PathKey::from_text("main:config/limits/maxSpeed");
        assert_eq!(session.value(&key), Some("120"));
        assert!(session.tracker().is_edited(&key));
    }

    #[test]
    fn merge_with_missing_template_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.xml");
        std::fs::write(&config_path, SAMPLE_XML).unwrap();

        let result = cmd_merge(MergeArgs {
            config: config_path,
            template: temp_dir.path().join("missing.xml"),
        });
        assert!(result.is_err());
    }
}
