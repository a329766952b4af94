//! Frontmatter documents: skills, slash commands, and subagents.

use super::builder::{yaml_scalar, DocBuilder};
use super::RenderOptions;
use crate::agent::Agent;
use std::fmt;

/// OpenCode agent mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenCodeMode {
    /// Selectable as a primary agent and callable as a subagent.
    #[default]
    All,
}

impl OpenCodeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            OpenCodeMode::All => "all",
        }
    }
}

impl fmt::Display for OpenCodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `SKILL.md` shared by every skill-based target.
pub fn skill_md(agent: &Agent, _opts: &RenderOptions) -> String {
    DocBuilder::new()
        .frontmatter(&[
            ("name", agent.skill_name()),
            ("description", yaml_scalar(agent.summary())),
        ])
        .blank()
        .heading(1, &format!("{} {}", agent.name, agent.emoji))
        .blank()
        .line(format!("**Role**: {}", agent.role))
        .blank()
        .heading(2, "Instructions")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Rules", &agent.rules)
        .build()
}

/// Slash command invoked with the user's request as `$ARGUMENTS`.
pub fn claude_command(agent: &Agent, _opts: &RenderOptions) -> String {
    DocBuilder::new()
        .frontmatter(&[
            ("description", yaml_scalar(agent.summary())),
            ("argument-hint", yaml_scalar("[task or question]")),
        ])
        .blank()
        .line(format!(
            "You are **{}** {}, acting as {}.",
            agent.name, agent.emoji, agent.role
        ))
        .blank()
        .heading(2, "Instructions")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Rules", &agent.rules)
        .heading(2, "Task")
        .blank()
        .line("$ARGUMENTS")
        .build()
}

/// Claude Code subagent definition.
pub fn claude_subagent(agent: &Agent, _opts: &RenderOptions) -> String {
    let mut fields = vec![
        ("name", agent.skill_name()),
        ("description", yaml_scalar(agent.summary())),
    ];
    if !agent.tools.is_empty() {
        fields.push(("tools", yaml_scalar(&agent.tools.join(", "))));
    }
    persona_body(DocBuilder::new().frontmatter(&fields), agent)
}

/// OpenCode agent definition.
pub fn opencode_agent(agent: &Agent, _opts: &RenderOptions, mode: OpenCodeMode) -> String {
    let fields = [
        ("description", yaml_scalar(agent.summary())),
        ("mode", mode.to_string()),
    ];
    persona_body(DocBuilder::new().frontmatter(&fields), agent)
}

fn persona_body(doc: DocBuilder, agent: &Agent) -> String {
    doc.blank()
        .line(format!(
            "You are **{}** {}, a {}.",
            agent.name, agent.emoji, agent.role
        ))
        .blank()
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("## Rules", &agent.rules)
        .build()
}
