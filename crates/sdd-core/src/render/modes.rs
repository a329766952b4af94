//! Custom-mode manifests (`roo_custom_modes.json`, `cline_custom_modes.json`).

use crate::agent::Agent;
use crate::error::Result;
use serde::Serialize;

/// Tool permission groups granted to every generated mode.
pub const MODE_GROUPS: &[&str] = &["read", "edit", "browser", "command", "mcp"];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomModes {
    pub custom_modes: Vec<CustomMode>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMode {
    pub slug: String,
    pub name: String,
    pub role_definition: String,
    pub groups: Vec<&'static str>,
}

impl CustomMode {
    pub fn from_agent(agent: &Agent) -> Self {
        Self {
            slug: agent.slug.clone(),
            name: format!("{} {}", agent.emoji, agent.name),
            role_definition: role_definition(agent),
            groups: MODE_GROUPS.to_vec(),
        }
    }
}

fn role_definition(agent: &Agent) -> String {
    let mut out = format!(
        "# {} ({})\n\n{}",
        agent.name,
        agent.role,
        agent.system_prompt.trim()
    );
    if !agent.rules.is_empty() {
        out.push_str("\n\n## Rules & Guidelines");
        for rule in &agent.rules {
            out.push_str("\n- ");
            out.push_str(rule);
        }
    }
    out
}

/// Pretty-printed manifest with one mode per agent, in collection order.
pub fn custom_modes_json(agents: &[Agent]) -> Result<String> {
    let manifest = CustomModes {
        custom_modes: agents.iter().map(CustomMode::from_agent).collect(),
    };
    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::tests::sample_agent;

    #[test]
    fn manifest_shape() {
        let agents = vec![sample_agent("dev.coder"), sample_agent("qa.tester")];
        let json = custom_modes_json(&agents).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let modes = value["customModes"].as_array().unwrap();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0]["slug"], "dev-coder");
        assert_eq!(modes[1]["slug"], "qa-tester");
        assert_eq!(modes[0]["name"], "🤖 Coder");
        assert_eq!(
            modes[0]["groups"],
            serde_json::json!(["read", "edit", "browser", "command", "mcp"])
        );
        let role = modes[0]["roleDefinition"].as_str().unwrap();
        assert!(role.starts_with("# Coder (Builder)\n\nWrite clean code for the user."));
        assert!(role.ends_with("## Rules & Guidelines\n- Always reply in English unless told otherwise."));
    }

    #[test]
    fn empty_collection_gives_empty_list() {
        let json = custom_modes_json(&[]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["customModes"], serde_json::json!([]));
    }
}
