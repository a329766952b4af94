//! Target adapters: a fixed table mapping each [`Target`] to the artifacts
//! it needs for a collection of agents.
//!
//! Planning is pure. [`install`] plans and then hands the artifacts to the
//! materializer.

use crate::agent::{primary_agent, Agent};
use crate::error::Result;
use crate::materialize::{materialize, WriteOutcome};
use crate::render::skill::OpenCodeMode;
use crate::render::{gemini, markdown, modes, plain, skill, RenderOptions, RenderedArtifact};
use crate::target::Target;
use std::path::{Path, PathBuf};

pub trait TargetAdapter: Send + Sync {
    fn target(&self) -> Target;

    /// Every artifact this target needs for `agents`, in a stable order.
    /// An empty collection yields an empty plan.
    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>>;
}

/// The adapter registered for `target`.
pub fn adapter_for(target: Target) -> &'static dyn TargetAdapter {
    match target {
        Target::Gemini => &GeminiAdapter,
        Target::Claude => &ClaudeAdapter,
        Target::Cursor => &CursorAdapter,
        Target::Kilo => &KiloAdapter,
        Target::Opencode => &OpencodeAdapter,
        Target::Antigravity => &AntigravityAdapter,
        Target::Roo => &RooAdapter,
        Target::Cline => &ClineAdapter,
        Target::Windsurf => &WindsurfAdapter,
        Target::Trae => &TraeAdapter,
        Target::Copilot => &CopilotAdapter,
        Target::Web => &WebAdapter,
    }
}

/// Plan `target` for `agents` and write the result under `root`.
pub async fn install(
    target: Target,
    agents: &[Agent],
    opts: &RenderOptions,
    root: &Path,
) -> Result<Vec<WriteOutcome>> {
    if agents.is_empty() {
        tracing::debug!(tool = %target, "no agents, nothing to install");
        return Ok(Vec::new());
    }
    let artifacts = adapter_for(target).plan(agents, opts)?;
    let outcomes = materialize(root, &artifacts).await?;
    tracing::info!(tool = %target, files = outcomes.len(), "installed");
    Ok(outcomes)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn skill_path(base: &str, agent: &Agent) -> PathBuf {
    Path::new(base).join(agent.skill_name()).join("SKILL.md")
}

fn skill_artifact(base: &str, agent: &Agent, opts: &RenderOptions) -> RenderedArtifact {
    RenderedArtifact::new(skill_path(base, agent), skill::skill_md(agent, opts))
}

fn skills_only(base: &str, agents: &[Agent], opts: &RenderOptions) -> Vec<RenderedArtifact> {
    agents
        .iter()
        .map(|agent| skill_artifact(base, agent, opts))
        .collect()
}

/// One artifact rendered from the primary agent, or nothing.
fn primary_only(
    agents: &[Agent],
    path: &str,
    render: impl Fn(&Agent) -> String,
) -> Vec<RenderedArtifact> {
    primary_agent(agents)
        .map(|agent| RenderedArtifact::new(path, render(agent)))
        .into_iter()
        .collect()
}

fn modes_manifest(path: &str, agents: &[Agent]) -> Result<Option<RenderedArtifact>> {
    if agents.is_empty() {
        return Ok(None);
    }
    Ok(Some(RenderedArtifact::new(path, modes::custom_modes_json(agents)?)))
}

// ---------------------------------------------------------------------------
// Adapters
// ---------------------------------------------------------------------------

struct GeminiAdapter;

impl TargetAdapter for GeminiAdapter {
    fn target(&self) -> Target {
        Target::Gemini
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out = Vec::with_capacity(agents.len() * 2);
        for agent in agents {
            out.push(RenderedArtifact::new(
                format!(".gemini/commands/dev/{}.toml", agent.original_name),
                gemini::command_toml(agent, opts),
            ));
            out.push(skill_artifact(".gemini/skills", agent, opts));
        }
        Ok(out)
    }
}

struct ClaudeAdapter;

impl TargetAdapter for ClaudeAdapter {
    fn target(&self) -> Target {
        Target::Claude
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out = Vec::with_capacity(agents.len() * 3);
        for agent in agents {
            out.push(RenderedArtifact::new(
                format!(".claude/commands/agents/{}.md", agent.slug),
                skill::claude_command(agent, opts),
            ));
            out.push(skill_artifact(".claude/skills", agent, opts));
            out.push(RenderedArtifact::new(
                format!(".claude/agents/{}.md", agent.skill_name()),
                skill::claude_subagent(agent, opts),
            ));
        }
        Ok(out)
    }
}

struct CursorAdapter;

impl TargetAdapter for CursorAdapter {
    fn target(&self) -> Target {
        Target::Cursor
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out = Vec::with_capacity(agents.len() * 2);
        for agent in agents {
            out.push(RenderedArtifact::new(
                format!(".cursor/commands/{}.mdc", agent.slug),
                markdown::cursor_mdc(agent, opts),
            ));
            out.push(skill_artifact(".cursor/skills", agent, opts));
        }
        Ok(out)
    }
}

struct KiloAdapter;

impl TargetAdapter for KiloAdapter {
    fn target(&self) -> Target {
        Target::Kilo
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out = Vec::with_capacity(agents.len() * 2);
        for agent in agents {
            out.push(RenderedArtifact::new(
                format!(".kilocode/workflows/{}.md", agent.slug),
                markdown::workflow_markdown(agent, opts, markdown::KILO_HEADER),
            ));
            out.push(skill_artifact(".kilocode/skills", agent, opts));
        }
        Ok(out)
    }
}

struct OpencodeAdapter;

impl TargetAdapter for OpencodeAdapter {
    fn target(&self) -> Target {
        Target::Opencode
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out = Vec::with_capacity(agents.len() * 2);
        for agent in agents {
            out.push(skill_artifact(".opencode/skills", agent, opts));
            out.push(RenderedArtifact::new(
                format!(".opencode/agents/{}.md", agent.skill_name()),
                skill::opencode_agent(agent, opts, OpenCodeMode::All),
            ));
        }
        Ok(out)
    }
}

struct AntigravityAdapter;

impl TargetAdapter for AntigravityAdapter {
    fn target(&self) -> Target {
        Target::Antigravity
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        Ok(skills_only(".agent/skills", agents, opts))
    }
}

struct RooAdapter;

impl TargetAdapter for RooAdapter {
    fn target(&self) -> Target {
        Target::Roo
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out = skills_only(".roo/skills", agents, opts);
        out.extend(modes_manifest("roo_custom_modes.json", agents)?);
        Ok(out)
    }
}

struct ClineAdapter;

impl TargetAdapter for ClineAdapter {
    fn target(&self) -> Target {
        Target::Cline
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out: Vec<RenderedArtifact> = agents
            .iter()
            .map(|agent| {
                RenderedArtifact::new(
                    format!(".cline/{}.md", agent.slug),
                    markdown::workflow_markdown(agent, opts, markdown::CLINE_HEADER),
                )
            })
            .collect();
        out.extend(modes_manifest("cline_custom_modes.json", agents)?);
        Ok(out)
    }
}

struct WindsurfAdapter;

impl TargetAdapter for WindsurfAdapter {
    fn target(&self) -> Target {
        Target::Windsurf
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        Ok(primary_only(agents, ".windsurfrules", |a| {
            markdown::windsurf_rules(a, opts)
        }))
    }
}

struct TraeAdapter;

impl TargetAdapter for TraeAdapter {
    fn target(&self) -> Target {
        Target::Trae
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        Ok(primary_only(agents, ".trae/instructions.md", |a| {
            markdown::trae_rules(a, opts)
        }))
    }
}

struct CopilotAdapter;

impl TargetAdapter for CopilotAdapter {
    fn target(&self) -> Target {
        Target::Copilot
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        let mut out: Vec<RenderedArtifact> = agents
            .iter()
            .map(|agent| {
                RenderedArtifact::new(
                    format!(".github/agents/{}.md", agent.slug),
                    markdown::copilot_instructions(agent, opts),
                )
            })
            .collect();
        out.extend(primary_only(agents, ".github/copilot-instructions.md", |a| {
            markdown::copilot_instructions(a, opts)
        }));
        Ok(out)
    }
}

struct WebAdapter;

impl TargetAdapter for WebAdapter {
    fn target(&self) -> Target {
        Target::Web
    }

    fn plan(&self, agents: &[Agent], opts: &RenderOptions) -> Result<Vec<RenderedArtifact>> {
        Ok(agents
            .iter()
            .map(|agent| {
                RenderedArtifact::new(
                    format!("prompts/{}.txt", agent.slug),
                    plain::system_prompt(agent, opts),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::tests::sample_agent;
    use crate::locale::Locale;
    use tempfile::TempDir;

    fn agents() -> Vec<Agent> {
        vec![sample_agent("sdd.architect"), sample_agent("dev.coder")]
    }

    fn paths(target: Target) -> Vec<String> {
        adapter_for(target)
            .plan(&agents(), &RenderOptions::default())
            .unwrap()
            .into_iter()
            .map(|a| a.path.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn registry_covers_every_target() {
        for target in Target::all() {
            assert_eq!(adapter_for(*target).target(), *target);
        }
    }

    #[test]
    fn gemini_layout_uses_original_name() {
        assert_eq!(
            paths(Target::Gemini),
            vec![
                ".gemini/commands/dev/sdd.architect.toml",
                ".gemini/skills/sdd-architect/SKILL.md",
                ".gemini/commands/dev/dev.coder.toml",
                ".gemini/skills/dev-coder/SKILL.md",
            ]
        );
    }

    #[test]
    fn claude_layout() {
        let paths = paths(Target::Claude);
        assert_eq!(paths.len(), 6);
        assert!(paths.contains(&".claude/commands/agents/dev-coder.md".to_string()));
        assert!(paths.contains(&".claude/skills/dev-coder/SKILL.md".to_string()));
        assert!(paths.contains(&".claude/agents/dev-coder.md".to_string()));
    }

    #[test]
    fn per_agent_layouts() {
        assert!(paths(Target::Cursor).contains(&".cursor/commands/dev-coder.mdc".to_string()));
        assert!(paths(Target::Kilo).contains(&".kilocode/workflows/dev-coder.md".to_string()));
        assert!(paths(Target::Opencode).contains(&".opencode/agents/dev-coder.md".to_string()));
        assert_eq!(
            paths(Target::Antigravity),
            vec![".agent/skills/sdd-architect/SKILL.md", ".agent/skills/dev-coder/SKILL.md"]
        );
        assert_eq!(paths(Target::Web), vec!["prompts/sdd-architect.txt", "prompts/dev-coder.txt"]);
    }

    #[test]
    fn custom_mode_targets_add_one_manifest() {
        let roo = paths(Target::Roo);
        assert_eq!(roo.len(), 3);
        assert_eq!(roo.last().unwrap(), "roo_custom_modes.json");

        let cline = paths(Target::Cline);
        assert_eq!(cline, vec![".cline/sdd-architect.md", ".cline/dev-coder.md", "cline_custom_modes.json"]);
    }

    #[test]
    fn single_file_targets_use_primary_agent() {
        let plan = adapter_for(Target::Windsurf)
            .plan(&agents(), &RenderOptions::default())
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].path, PathBuf::from(".windsurfrules"));

        let mut architect = sample_agent("sdd.architect");
        architect.name = "Architect".to_string();
        let plan = adapter_for(Target::Trae)
            .plan(&[architect], &RenderOptions::default())
            .unwrap();
        assert_eq!(plan[0].path, PathBuf::from(".trae/instructions.md"));
        assert!(plan[0].content.contains("# Architect"));
    }

    #[test]
    fn copilot_writes_agents_and_primary_instructions() {
        let plan = adapter_for(Target::Copilot)
            .plan(&agents(), &RenderOptions { locale: Locale::PtBr })
            .unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[2].path, PathBuf::from(".github/copilot-instructions.md"));
        assert_eq!(plan[2].content, plan[1].content);
    }

    #[test]
    fn plans_are_pure() {
        let opts = RenderOptions::default();
        for target in Target::all() {
            let adapter = adapter_for(*target);
            assert_eq!(
                adapter.plan(&agents(), &opts).unwrap(),
                adapter.plan(&agents(), &opts).unwrap()
            );
        }
    }

    #[test]
    fn empty_collection_plans_nothing() {
        for target in Target::all() {
            assert!(adapter_for(*target)
                .plan(&[], &RenderOptions::default())
                .unwrap()
                .is_empty());
        }
    }

    #[tokio::test]
    async fn install_with_no_agents_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let outcomes = install(Target::Claude, &[], &RenderOptions::default(), dir.path())
            .await
            .unwrap();
        assert!(outcomes.is_empty());
        assert!(!dir.path().join(".claude").exists());
    }

    #[tokio::test]
    async fn install_writes_planned_files() {
        let dir = TempDir::new().unwrap();
        let outcomes = install(Target::Roo, &agents(), &RenderOptions::default(), dir.path())
            .await
            .unwrap();
        assert_eq!(outcomes.len(), 3);
        let json = std::fs::read_to_string(dir.path().join("roo_custom_modes.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["customModes"][1]["slug"], "dev-coder");
    }
}
