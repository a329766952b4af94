//! Layered agent loading: bundled or directory defaults, shadowed file-for-file
//! by a project-local override directory.

use crate::agent::{Agent, AgentSource};
use crate::error::{Result, SddError};
use crate::locale::{language_rule, Locale};
use crate::paths;
use crate::rules::compose_rules;
use crate::schema::{self, ValidationError};
use rust_embed::Embed;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Embed)]
#[folder = "definitions/"]
struct BundledDefinitions;

// ---------------------------------------------------------------------------
// Options / results
// ---------------------------------------------------------------------------

/// Where the default definitions come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// Definitions compiled into the binary.
    Bundled,
    /// A directory of `*.yaml` / `*.yml` files. Must exist.
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub defaults: DefinitionSource,
    /// Project-local override directory; ignored when absent on disk.
    pub local_dir: Option<PathBuf>,
    pub locale: Locale,
    /// Free-text rules applied to every agent, one rule per non-empty line.
    pub global_rules: Option<String>,
}

impl LoadOptions {
    /// Bundled defaults with the standard override directory under `root`.
    pub fn for_project(root: &Path) -> Self {
        Self {
            defaults: DefinitionSource::Bundled,
            local_dir: Some(paths::local_agents_dir(root)),
            locale: Locale::default(),
            global_rules: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    Read(String),
    Parse(String),
    Invalid(ValidationError),
    /// Another definition loaded earlier already produced this slug.
    DuplicateSlug { slug: String, first: String },
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::Read(e) => write!(f, "read failed: {e}"),
            FailureReason::Parse(e) => write!(f, "invalid YAML: {e}"),
            FailureReason::Invalid(e) => write!(f, "{e}"),
            FailureReason::DuplicateSlug { slug, first } => {
                write!(f, "slug '{slug}' is already used by {first}")
            }
        }
    }
}

/// A definition file that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub file: String,
    pub reason: FailureReason,
}

#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Valid agents, in definition file-name order.
    pub agents: Vec<Agent>,
    pub skipped: Vec<LoadFailure>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load, validate, and compose every agent definition.
///
/// Only a missing default directory is fatal. Unreadable, unparsable, or
/// invalid files are skipped with a warning and reported in
/// [`LoadReport::skipped`], as is any file whose slug an earlier file
/// (in name order) already produced.
pub async fn load_agents(options: &LoadOptions) -> Result<LoadReport> {
    let names = list_default_files(&options.defaults).await?;
    let local_dir = existing_dir(options.local_dir.as_deref()).await;

    if let Some(dir) = local_dir {
        log_unmatched_overrides(dir, &names).await;
    }

    let results =
        futures::future::join_all(names.iter().map(|name| load_one(options, local_dir, name)))
            .await;

    let mut report = LoadReport::default();
    let mut seen: HashMap<String, String> = HashMap::new();
    for (name, result) in names.iter().zip(results) {
        let checked = result.and_then(|agent| match seen.get(&agent.slug) {
            Some(first) => Err(LoadFailure {
                file: name.clone(),
                reason: FailureReason::DuplicateSlug {
                    slug: agent.slug,
                    first: first.clone(),
                },
            }),
            None => {
                seen.insert(agent.slug.clone(), name.clone());
                Ok(agent)
            }
        });
        match checked {
            Ok(agent) => report.agents.push(agent),
            Err(failure) => {
                tracing::warn!(file = %failure.file, "skipping definition: {}", failure.reason);
                report.skipped.push(failure);
            }
        }
    }
    Ok(report)
}

async fn load_one(
    options: &LoadOptions,
    local_dir: Option<&Path>,
    name: &str,
) -> std::result::Result<Agent, LoadFailure> {
    let fail = |reason| LoadFailure {
        file: name.to_string(),
        reason,
    };

    let (content, source) = read_definition(&options.defaults, local_dir, name)
        .await
        .map_err(|e| fail(FailureReason::Read(e.to_string())))?;
    tracing::debug!(file = name, source = %source, "resolved definition");

    let raw: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|e| fail(FailureReason::Parse(e.to_string())))?;
    let definition = schema::validate(&raw).map_err(|e| fail(FailureReason::Invalid(e)))?;

    let rules = compose_rules(
        &definition.rules,
        language_rule(options.locale),
        options.global_rules.as_deref(),
    );
    // Names come from list_default_files, which only keeps valid stems.
    let stem = paths::definition_stem(name).unwrap_or(name);
    Ok(Agent::from_definition(definition, stem, source, rules))
}

/// Read the local override when one exists, else the default.
async fn read_definition(
    defaults: &DefinitionSource,
    local_dir: Option<&Path>,
    name: &str,
) -> std::io::Result<(String, AgentSource)> {
    if let Some(dir) = local_dir {
        let path = dir.join(name);
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            let content = tokio::fs::read_to_string(&path).await?;
            return Ok((content, AgentSource::Local));
        }
    }
    let content = read_default(defaults, name).await?;
    Ok((content, AgentSource::Default))
}

async fn read_default(defaults: &DefinitionSource, name: &str) -> std::io::Result<String> {
    match defaults {
        DefinitionSource::Directory(dir) => tokio::fs::read_to_string(dir.join(name)).await,
        DefinitionSource::Bundled => {
            let file = <BundledDefinitions as Embed>::get(name).ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "not bundled")
            })?;
            String::from_utf8(file.data.into_owned())
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        }
    }
}

/// Sorted definition file names available in the default source.
async fn list_default_files(defaults: &DefinitionSource) -> Result<Vec<String>> {
    let mut names = match defaults {
        DefinitionSource::Bundled => bundled_definition_names(),
        DefinitionSource::Directory(dir) => {
            if existing_dir(Some(dir.as_path())).await.is_none() {
                return Err(SddError::DefinitionsNotFound(dir.clone()));
            }
            list_definition_files(dir).await?
        }
    };
    names.sort();
    Ok(names)
}

async fn list_definition_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if paths::definition_stem(&name).is_some() {
            names.push(name);
        }
    }
    Ok(names)
}

async fn existing_dir(dir: Option<&Path>) -> Option<&Path> {
    let dir = dir?;
    match tokio::fs::metadata(dir).await {
        Ok(meta) if meta.is_dir() => Some(dir),
        _ => None,
    }
}

async fn log_unmatched_overrides(local_dir: &Path, defaults: &[String]) {
    let Ok(locals) = list_definition_files(local_dir).await else {
        return;
    };
    for name in locals.iter().filter(|n| !defaults.contains(n)) {
        tracing::debug!(file = %name, "local definition has no default counterpart; ignored");
    }
}

/// Names of the definitions compiled into the binary.
pub fn bundled_definition_names() -> Vec<String> {
    let mut names: Vec<String> = <BundledDefinitions as Embed>::iter()
        .map(|n| n.into_owned())
        .filter(|n| !n.contains('/') && paths::definition_stem(n).is_some())
        .collect();
    names.sort();
    names
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
