use super::{execute_install, InstallRun, LoadArgs};
use anyhow::Context;
use sdd_core::config::Config;
use sdd_core::messages;
use sdd_core::target::detect_targets;
use std::path::Path;

/// Re-run the install non-interactively: tools from the config when recorded,
/// otherwise detected from what is on disk. Saved locale, rules, and profile
/// are reused.
pub fn run(root: &Path, load: LoadArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let locale = load.resolve_locale(config.as_ref());

    let mut targets = config.as_ref().map(Config::targets).unwrap_or_default();
    if targets.is_empty() {
        targets = detect_targets(root);
    }

    if targets.is_empty() {
        if json {
            return crate::output::print_json(&serde_json::json!({ "targets": [] }));
        }
        println!("{}", messages::lookup(locale, "upgrade.no_config"));
        return Ok(());
    }

    if !json {
        let keys: Vec<&str> = targets.iter().map(|t| t.as_str()).collect();
        println!(
            "{}",
            messages::format(locale, "upgrade.detected", &[("tools", &keys.join(", "))])
        );
    }

    let (rules, profile) = config
        .map(|c| (c.global_rules, c.profile))
        .unwrap_or_default();

    execute_install(
        root,
        InstallRun {
            targets,
            locale,
            rules,
            profile,
            load,
        },
        json,
        "upgrade.success",
    )
}
