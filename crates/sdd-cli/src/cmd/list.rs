use super::{global_rules_text, runtime, LoadArgs};
use crate::output::{print_json, print_table};
use anyhow::Context;
use sdd_core::config::Config;
use sdd_core::{load_agents, messages};
use std::path::Path;

pub fn run(root: &Path, load: LoadArgs, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let locale = load.resolve_locale(config.as_ref());
    let (rules, profile) = config
        .map(|c| (c.global_rules, c.profile))
        .unwrap_or_default();
    let global_rules = global_rules_text(rules.as_deref(), profile.as_deref())?;
    let opts = load.load_options(root, locale, global_rules);

    let report = runtime()?
        .block_on(load_agents(&opts))
        .context("failed to load agent definitions")?;

    if json {
        let skipped: Vec<_> = report
            .skipped
            .iter()
            .map(|f| serde_json::json!({ "file": f.file, "reason": f.reason.to_string() }))
            .collect();
        return print_json(&serde_json::json!({
            "agents": report.agents,
            "skipped": skipped,
        }));
    }

    if report.agents.is_empty() {
        println!("{}", messages::lookup(locale, "install.no_agents"));
    } else {
        let rows = report
            .agents
            .iter()
            .map(|a| {
                vec![
                    a.slug.clone(),
                    format!("{} {}", a.emoji, a.name),
                    a.role.clone(),
                    a.source.to_string(),
                    a.rules.len().to_string(),
                ]
            })
            .collect();
        print_table(&["SLUG", "NAME", "ROLE", "SOURCE", "RULES"], rows);
    }

    for failure in &report.skipped {
        println!("skipped: {} ({})", failure.file, failure.reason);
    }
    Ok(())
}
