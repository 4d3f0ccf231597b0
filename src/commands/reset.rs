//! Implementation of the `graft reset` command.

use crate::cli::ResetArgs;
use crate::error::{GraftError, Result};
use crate::session::EditSession;
use crate::tree::PathKey;

/// Execute the `graft reset` command.
///
/// Single-key form: restore one setting to its template value and forget
/// its edit. `--all` form: restore every covered setting and clear all
/// tracked edits; this discards the user's work, so it refuses to run
/// without `--force`.
pub fn cmd_reset(args: ResetArgs) -> Result<()> {
    if args.all {
        if args.key.is_some() {
            return Err(GraftError::UserError(
                "specify a key or --all, not both".to_string(),
            ));
        }
        return reset_all(&args);
    }

    let Some(key) = &args.key else {
        return Err(GraftError::UserError(
            "specify the key to reset, or --all to reset every setting".to_string(),
        ));
    };
    reset_field(&args, key)
}

fn reset_all(args: &ResetArgs) -> Result<()> {
    // Require --force: a full reset discards every edit.
    if !args.force {
        return Err(GraftError::UserError(format!(
            "refusing to reset all settings without --force.\n\n\
             A full reset overwrites every setting the template covers and\n\
             discards all tracked edits.\n\n\
             To reset everything, run:\n  graft reset {} --template {} --all --force",
            args.config.display(),
            args.template.display()
        )));
    }

    let mut session = EditSession::open_with_template(&args.config, &args.template)?;
    let discarded = session.tracker().len();
    let applied = session.reset_all()?;
    session.save(&args.config)?;

    println!(
        "Reset {} setting(s) to template values; discarded {} tracked edit(s).",
        applied, discarded
    );
    Ok(())
}

fn reset_field(args: &ResetArgs, key_text: &str) -> Result<()> {
    let mut session = EditSession::open_with_template(&args.config, &args.template)?;
    let key = PathKey::from_text(key_text);

    if session.reset_field(&key)? {
        session.save(&args.config)?;
        println!("Reset {} to its template value.", key);
    } else {
        println!("Template has no value for {}; nothing to reset.", key);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SetArgs;
    use crate::commands::set::cmd_set;
    use crate::test_support::{SAMPLE_XML, TEMPLATE_XML};
    use tempfile::TempDir;

    fn write_fixtures(temp_dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
        let config_path = temp_dir.path().join("config.xml");
        let template_path = temp_dir.path().join("template.xml");
        std::fs::write(&config_path, SAMPLE_XML).unwrap();
        std::fs::write(&template_path, TEMPLATE_XML).unwrap();
        (config_path, template_path)
    }

    fn reset_args(
        config: &std::path::Path,
        template: &std::path::Path,
        key: Option<&str>,
        all: bool,
        force: bool,
    ) -> ResetArgs {
        ResetArgs {
            config: config.to_path_buf(),
            key: key.map(str::to_string),
            template: template.to_path_buf(),
            all,
            force,
        }
    }

    #[test]
    fn reset_all_refuses_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        let result = cmd_reset(reset_args(&config_path, &template_path, None, true, false));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("--force"));

        // Nothing changed on disk.
        let untouched = std::fs::read_to_string(&config_path).unwrap();
        assert_eq!(untouched, SAMPLE_XML);
    }

    #[test]
    fn reset_all_with_force_overwrites_and_clears_edits() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        cmd_set(SetArgs {
            config: config_path.clone(),
            key: "main:config/limits/maxSpeed".to_string(),
            value: "120".to_string(),
        })
        .unwrap();

        cmd_reset(reset_args(&config_path, &template_path, None, true, true)).unwrap();

        let session = EditSession::open(&config_path).unwrap();
        let key = PathKey::from_text("main:config/limits/maxSpeed");
        assert_eq!(session.value(&key), Some("150"));
        assert!(session.tracker().is_empty());
        assert!(!temp_dir.path().join("config.xml.edits").exists());
    }

    #[test]
    fn reset_single_key_restores_template_value() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        cmd_set(SetArgs {
            config: config_path.clone(),
            key: "main:config/limits/maxSpeed".to_string(),
            value: "120".to_string(),
        })
        .unwrap();
        cmd_set(SetArgs {
            config: config_path.clone(),
            key: "main:config/network/dhcp".to_string(),
            value: "false".to_string(),
        })
        .unwrap();

        cmd_reset(reset_args(
            &config_path,
            &template_path,
            Some("main:config/limits/maxSpeed"),
            false,
            false,
        ))
        .unwrap();

        let session = EditSession::open(&config_path).unwrap();
        assert_eq!(
            session.value(&PathKey::from_text("main:config/limits/maxSpeed")),
            Some("150")
        );
        // The other edit is untouched and still tracked.
        assert_eq!(
            session.value(&PathKey::from_text("main:config/network/dhcp")),
            Some("false")
        );
        assert_eq!(session.tracker().len(), 1);
    }

    #[test]
    fn reset_key_without_counterpart_is_a_reported_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        cmd_set(SetArgs {
            config: config_path.clone(),
            key: "main:config/network/advanced/mtu".to_string(),
            value: "9000".to_string(),
        })
        .unwrap();

        // mtu has no template counterpart: the command succeeds but
        // changes nothing.
        cmd_reset(reset_args(
            &config_path,
            &template_path,
            Some("main:config/network/advanced/mtu"),
            false,
            false,
        ))
        .unwrap();

        let session = EditSession::open(&config_path).unwrap();
        let key = PathKey::from_text("main:config/network/advanced/mtu");
        assert_eq!(session.value(&key), Some("9000"));
        assert!(session.tracker().is_edited(&key));
    }

    #[test]
    fn reset_rejects_key_and_all_together() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        let result = cmd_reset(reset_args(
            &config_path,
            &template_path,
            Some("main:config/limits/maxSpeed"),
            true,
            true,
        ));
        assert!(result.is_err());
    }

    #[test]
    fn reset_without_key_or_all_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let (config_path, template_path) = write_fixtures(&temp_dir);

        let result = cmd_reset(reset_args(&config_path, &template_path, None, false, false));
        assert!(result.is_err());
    }
}
