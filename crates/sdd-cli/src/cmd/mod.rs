pub mod install;
pub mod list;
pub mod profiles;
pub mod targets;
pub mod upgrade;
pub mod view;

use crate::output::print_json;
use anyhow::Context;
use clap::Args;
use sdd_core::adapter;
use sdd_core::config::Config;
use sdd_core::locale::{resolve_locale, Locale};
use sdd_core::materialize::WriteOutcome;
use sdd_core::messages;
use sdd_core::profiles::profile_rules_text;
use sdd_core::render::RenderOptions;
use sdd_core::rules::join_global_rules;
use sdd_core::{load_agents, DefinitionSource, LoadOptions, LoadReport, Target};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where definitions come from and which language they are compiled for.
#[derive(Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Output language: en, pt_br, es (unknown values fall back to en)
    #[arg(long, env = "SDD_LOCALE")]
    pub locale: Option<String>,

    /// Directory of default definitions (default: the bundled set)
    #[arg(long, env = "SDD_DEFINITIONS")]
    pub definitions: Option<PathBuf>,
}

impl LoadArgs {
    /// Values from the environment only, for entry points without flags.
    pub fn from_env() -> Self {
        Self {
            locale: std::env::var("SDD_LOCALE").ok().filter(|v| !v.is_empty()),
            definitions: std::env::var_os("SDD_DEFINITIONS")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Flag or env locale, then the project config, then the default.
    pub fn resolve_locale(&self, config: Option<&Config>) -> Locale {
        match (&self.locale, config) {
            (Some(requested), _) => resolve_locale(requested),
            (None, Some(cfg)) => cfg.resolved_locale(),
            (None, None) => Locale::default(),
        }
    }

    pub fn load_options(&self, root: &Path, locale: Locale, global_rules: Option<String>) -> LoadOptions {
        let mut opts = LoadOptions::for_project(root);
        if let Some(dir) = &self.definitions {
            opts.defaults = DefinitionSource::Directory(dir.clone());
        }
        opts.locale = locale;
        opts.global_rules = global_rules;
        opts
    }
}

/// User rules followed by the profile's rules, as one global rules text.
pub fn global_rules_text(rules: Option<&str>, profile: Option<&str>) -> anyhow::Result<Option<String>> {
    let profile_text = profile.map(profile_rules_text).transpose()?;
    Ok(join_global_rules(
        rules.into_iter().chain(profile_text.as_deref()),
    ))
}

pub fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

/// Everything one install run needs after flags, env, and config are merged.
pub struct InstallRun {
    pub targets: Vec<Target>,
    pub locale: Locale,
    /// User free-text rules, as recorded in the config.
    pub rules: Option<String>,
    pub profile: Option<String>,
    pub load: LoadArgs,
}

#[derive(Serialize)]
struct TargetReport {
    target: Target,
    files: Vec<WriteOutcome>,
}

#[derive(Serialize)]
struct SkippedReport {
    file: String,
    reason: String,
}

/// Load agents, install every target in order, and stamp the project config.
pub fn execute_install(root: &Path, run: InstallRun, json: bool, done_key: &str) -> anyhow::Result<()> {
    let locale = run.locale;
    let global_rules = global_rules_text(run.rules.as_deref(), run.profile.as_deref())?;
    let load_opts = run.load.load_options(root, locale, global_rules);
    let render_opts = RenderOptions { locale };

    if !json {
        println!("{}", messages::lookup(locale, "install.loading"));
    }

    let rt = runtime()?;
    let (report, installed) = rt.block_on(async {
        let report: LoadReport = load_agents(&load_opts)
            .await
            .context("failed to load agent definitions")?;
        let mut installed = Vec::with_capacity(run.targets.len());
        for target in &run.targets {
            let files = adapter::install(*target, &report.agents, &render_opts, root)
                .await
                .with_context(|| format!("failed to install {target}"))?;
            installed.push(TargetReport {
                target: *target,
                files,
            });
        }
        anyhow::Ok((report, installed))
    })?;

    let mut config = Config::load(root)
        .context("failed to load config")?
        .unwrap_or_default();
    config.stamp(
        &run.targets,
        locale,
        run.rules,
        run.profile,
        env!("CARGO_PKG_VERSION"),
    );
    config.save(root).context("failed to save config")?;

    if json {
        let skipped: Vec<SkippedReport> = report
            .skipped
            .iter()
            .map(|f| SkippedReport {
                file: f.file.clone(),
                reason: f.reason.to_string(),
            })
            .collect();
        return print_json(&serde_json::json!({
            "locale": locale,
            "agents": report.agents.len(),
            "skipped": skipped,
            "targets": installed,
        }));
    }

    if !report.skipped.is_empty() {
        let count = report.skipped.len().to_string();
        println!(
            "{}",
            messages::format(locale, "install.skipped", &[("count", &count)])
        );
    }
    if report.agents.is_empty() {
        println!("{}", messages::lookup(locale, "install.no_agents"));
        return Ok(());
    }

    let tools: Vec<&str> = run.targets.iter().map(|t| t.label()).collect();
    println!(
        "{}",
        messages::format(locale, "install.installing", &[("tools", &tools.join(", "))])
    );
    for target in &installed {
        for file in &target.files {
            println!("  {}: {}", file.verb(), file.path.display());
        }
    }
    if run.targets.iter().any(|t| t.has_custom_modes()) {
        println!("{}", messages::lookup(locale, "install.custom_modes_notice"));
    }
    println!("{}", messages::lookup(locale, done_key));
    Ok(())
}
