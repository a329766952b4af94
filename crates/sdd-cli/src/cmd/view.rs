use crate::output::print_json;
use anyhow::Context;
use sdd_core::config::{Config, WarnLevel};
use sdd_core::messages;
use sdd_core::target::detect_targets;
use std::path::Path;

/// Read-only summary of the project's recorded configuration.
pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    let detected = detect_targets(root);
    let warnings = config.as_ref().map(Config::validate).unwrap_or_default();

    if json {
        return print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "config": config,
            "warnings": warnings,
            "detected": detected,
        }));
    }

    let Some(config) = config else {
        println!("{}", messages::lookup(Default::default(), "view.no_config"));
        print_detected(&detected);
        return Ok(());
    };

    let locale = config.resolved_locale();
    println!("root:          {}", root.display());
    println!("locale:        {} ({})", locale, locale.display_name());
    println!("tools:         {}", list_or_none(&config.tools));
    println!("profile:       {}", config.profile.as_deref().unwrap_or("-"));
    match config.global_rules.as_deref() {
        Some(rules) => println!("global rules:  {} line(s)", rules.lines().filter(|l| !l.trim().is_empty()).count()),
        None => println!("global rules:  -"),
    }
    println!(
        "last install:  {}",
        config
            .last_install
            .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "-".to_string())
    );
    if let Some(version) = &config.toolkit_version {
        println!("sdd version:   {version}");
    }
    print_detected(&detected);

    for w in &warnings {
        let prefix = match w.level {
            WarnLevel::Warning => "warning",
            WarnLevel::Error => "error",
        };
        println!("[{prefix}] {}", w.message);
    }
    Ok(())
}

fn print_detected(detected: &[sdd_core::Target]) {
    let keys: Vec<String> = detected.iter().map(|t| t.to_string()).collect();
    println!("detected:      {}", list_or_none(&keys));
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}
