use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Glyph used when a definition does not declare an `emoji`.
pub const DEFAULT_EMOJI: &str = "🤖";

/// Substring that marks the generic coding agent for single-file targets.
pub const PRIMARY_AGENT_MARKER: &str = "coder";

// ---------------------------------------------------------------------------
// AgentSource
// ---------------------------------------------------------------------------

/// Which layer produced an agent. Informational only; renderers ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentSource {
    Default,
    Local,
}

impl AgentSource {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentSource::Default => "default",
            AgentSource::Local => "local",
        }
    }
}

impl fmt::Display for AgentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AgentDefinition / Agent
// ---------------------------------------------------------------------------

/// A definition that passed schema validation, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentDefinition {
    pub name: String,
    pub role: String,
    pub emoji: String,
    pub system_prompt: String,
    pub rules: Vec<String>,
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A validated agent with load-time metadata and its composed rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub role: String,
    pub emoji: String,
    pub system_prompt: String,
    /// Composed rules: locale rule, global rules, then declared rules.
    pub rules: Vec<String>,
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub slug: String,
    pub original_name: String,
    pub source: AgentSource,
}

impl Agent {
    /// Build an agent from a validated definition and the file stem it came from.
    ///
    /// `rules` replaces the definition's declared rules.
    pub fn from_definition(
        def: AgentDefinition,
        stem: &str,
        source: AgentSource,
        rules: Vec<String>,
    ) -> Self {
        Self {
            name: def.name,
            role: def.role,
            emoji: def.emoji,
            system_prompt: def.system_prompt,
            rules,
            tools: def.tools,
            description: def.description,
            slug: derive_slug(stem),
            original_name: stem.to_string(),
            source,
        }
    }

    /// Free-text summary: the declared description, or the role when the
    /// description is missing or blank.
    pub fn summary(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&self.role)
    }

    /// Normalized identifier for targets with strict naming rules.
    pub fn skill_name(&self) -> String {
        skill_name(&self.slug)
    }
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// Slug for a definition file stem: every `.` becomes `-`.
pub fn derive_slug(stem: &str) -> String {
    stem.replace('.', "-")
}

static NON_ALNUM_RE: OnceLock<Regex> = OnceLock::new();

fn non_alnum_re() -> &'static Regex {
    NON_ALNUM_RE.get_or_init(|| Regex::new(r"[^a-z0-9]+").unwrap())
}

/// Lower-case, collapse runs of non-alphanumerics to one hyphen, trim hyphens.
pub fn skill_name(slug: &str) -> String {
    let lowered = slug.to_lowercase();
    non_alnum_re()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// The agent that represents "the" configuration for single-file targets:
/// the first whose slug contains `coder`, else the first agent.
pub fn primary_agent(agents: &[Agent]) -> Option<&Agent> {
    agents
        .iter()
        .find(|a| a.slug.contains(PRIMARY_AGENT_MARKER))
        .or_else(|| agents.first())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
