use super::{execute_install, InstallRun, LoadArgs};
use anyhow::Context;
use clap::Args;
use sdd_core::config::Config;
use sdd_core::Target;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Tool to generate files for (repeatable; `all` selects every tool)
    #[arg(long = "tool", short = 't', required = true, value_name = "KEY")]
    pub tools: Vec<String>,

    /// Extra rules for every agent, one per line
    #[arg(long)]
    pub rules: Option<String>,

    /// Read extra rules from a file
    #[arg(long, value_name = "PATH")]
    pub rules_file: Option<PathBuf>,

    /// Stack profile whose rules are added (see `sdd profiles`)
    #[arg(long)]
    pub profile: Option<String>,

    #[command(flatten)]
    pub load: LoadArgs,
}

pub fn run(root: &Path, args: InstallArgs, json: bool) -> anyhow::Result<()> {
    let targets = parse_targets(&args.tools)?;
    let config = Config::load(root).context("failed to load config")?;
    let locale = args.load.resolve_locale(config.as_ref());

    let mut rules = args.rules;
    if let Some(path) = &args.rules_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read rules file {}", path.display()))?;
        rules = Some(match rules {
            Some(inline) => format!("{inline}\n{text}"),
            None => text,
        });
    }
    let rules = rules.or_else(|| config.as_ref().and_then(|c| c.global_rules.clone()));
    let profile = args
        .profile
        .or_else(|| config.as_ref().and_then(|c| c.profile.clone()));

    execute_install(
        root,
        InstallRun {
            targets,
            locale,
            rules,
            profile,
            load: args.load,
        },
        json,
        "install.finished",
    )
}

/// Parse `--tool` values in order, dropping repeats. `all` expands to every target.
fn parse_targets(keys: &[String]) -> anyhow::Result<Vec<Target>> {
    if keys.iter().any(|k| k.trim().eq_ignore_ascii_case("all")) {
        return Ok(Target::all().to_vec());
    }
    let mut targets = Vec::with_capacity(keys.len());
    for key in keys {
        let target: Target = key.parse()?;
        if !targets.contains(&target) {
            targets.push(target);
        }
    }
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn all_selects_every_target() {
        assert_eq!(parse_targets(&keys(&["claude", "ALL"])).unwrap(), Target::all());
    }

    #[test]
    fn keeps_order_and_drops_repeats() {
        assert_eq!(
            parse_targets(&keys(&["roo", "claude", "roo"])).unwrap(),
            vec![Target::Roo, Target::Claude]
        );
    }

    #[test]
    fn unknown_key_fails() {
        let err = parse_targets(&keys(&["claude", "emacs"])).unwrap_err();
        assert!(err.to_string().contains("emacs"));
    }
}
