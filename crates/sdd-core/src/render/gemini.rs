use super::builder::{escape_double_quoted, DocBuilder};
use super::RenderOptions;
use crate::agent::Agent;

/// Gemini CLI custom command (TOML).
pub fn command_toml(agent: &Agent, _opts: &RenderOptions) -> String {
    let prompt = DocBuilder::new()
        .heading(1, "Identity")
        .line(format!("You are **{}** {}", agent.name, agent.emoji))
        .line(format!("Role: {}", agent.role))
        .blank()
        .heading(1, "Core Instructions")
        .text(&agent.system_prompt)
        .blank()
        .bullet_section("# Rules & Guidelines", &agent.rules)
        .build();

    let mut toml = format!(
        "description = \"{}\"\n\nprompt = \"\"\"\n{}\"\"\"\n",
        escape_double_quoted(agent.summary()),
        escape_multiline(&prompt)
    );

    if !agent.rules.is_empty() {
        toml.push_str("\nrules = [\n");
        for rule in &agent.rules {
            toml.push_str(&format!("  \"{}\",\n", escape_double_quoted(rule)));
        }
        toml.push_str("]\n");
    }

    toml
}

/// Escape for a TOML multi-line basic string: backslashes, and any run of
/// quotes that could close the string early.
fn escape_multiline(text: &str) -> String {
    text.replace('\\', "\\\\").replace("\"\"\"", "\"\"\\\"")
}
