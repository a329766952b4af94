use crate::error::SddError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

// ---------------------------------------------------------------------------
// Target
// ---------------------------------------------------------------------------

/// A supported AI coding-assistant tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Gemini,
    Claude,
    Cursor,
    Kilo,
    Opencode,
    Antigravity,
    Roo,
    Cline,
    Windsurf,
    Trae,
    Copilot,
    Web,
}

impl Target {
    pub fn all() -> &'static [Target] {
        &[
            Target::Gemini,
            Target::Claude,
            Target::Cursor,
            Target::Kilo,
            Target::Opencode,
            Target::Antigravity,
            Target::Roo,
            Target::Cline,
            Target::Windsurf,
            Target::Trae,
            Target::Copilot,
            Target::Web,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Target::Gemini => "gemini",
            Target::Claude => "claude",
            Target::Cursor => "cursor",
            Target::Kilo => "kilo",
            Target::Opencode => "opencode",
            Target::Antigravity => "antigravity",
            Target::Roo => "roo",
            Target::Cline => "cline",
            Target::Windsurf => "windsurf",
            Target::Trae => "trae",
            Target::Copilot => "copilot",
            Target::Web => "web",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Target::Gemini => "Gemini CLI",
            Target::Claude => "Claude Code",
            Target::Cursor => "Cursor",
            Target::Kilo => "Kilo Code",
            Target::Opencode => "OpenCode",
            Target::Antigravity => "Antigravity",
            Target::Roo => "Roo Code",
            Target::Cline => "Cline",
            Target::Windsurf => "Windsurf",
            Target::Trae => "Trae IDE",
            Target::Copilot => "GitHub Copilot",
            Target::Web => "OpenAI / Claude (web)",
        }
    }

    /// Short description of where the target's artifacts land.
    pub fn hint(self) -> &'static str {
        match self {
            Target::Gemini => ".gemini/commands/dev + .gemini/skills",
            Target::Claude => ".claude/commands/agents + .claude/skills + .claude/agents",
            Target::Cursor => ".cursor/commands/*.mdc + .cursor/skills",
            Target::Kilo => ".kilocode/workflows + .kilocode/skills",
            Target::Opencode => ".opencode/skills + .opencode/agents",
            Target::Antigravity => ".agent/skills",
            Target::Roo => ".roo/skills + roo_custom_modes.json",
            Target::Cline => ".cline/*.md + cline_custom_modes.json",
            Target::Windsurf => ".windsurfrules",
            Target::Trae => ".trae/instructions.md",
            Target::Copilot => ".github/agents + .github/copilot-instructions.md",
            Target::Web => "prompts/*.txt",
        }
    }

    /// Path whose presence in a project signals an earlier install.
    pub fn marker(self) -> &'static str {
        match self {
            Target::Gemini => ".gemini",
            Target::Claude => ".claude",
            Target::Cursor => ".cursor",
            Target::Kilo => ".kilocode",
            Target::Opencode => ".opencode",
            Target::Antigravity => ".agent",
            Target::Roo => ".roo",
            Target::Cline => ".cline",
            Target::Windsurf => ".windsurfrules",
            Target::Trae => ".trae",
            Target::Copilot => ".github",
            Target::Web => "prompts",
        }
    }

    /// Whether the target also gets an aggregate custom-modes manifest.
    pub fn has_custom_modes(self) -> bool {
        matches!(self, Target::Roo | Target::Cline)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Target {
    type Err = SddError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Target::all()
            .iter()
            .find(|t| t.as_str() == key)
            .copied()
            .ok_or_else(|| SddError::UnknownTarget(s.to_string()))
    }
}

/// Targets whose marker path exists under `root`, in registry order.
pub fn detect_targets(root: &Path) -> Vec<Target> {
    Target::all()
        .iter()
        .copied()
        .filter(|t| root.join(t.marker()).exists())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn keys_round_trip() {
        for target in Target::all() {
            assert_eq!(target.as_str().parse::<Target>().unwrap(), *target);
        }
        assert_eq!(" Claude ".parse::<Target>().unwrap(), Target::Claude);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = "emacs".parse::<Target>().unwrap_err();
        assert!(matches!(err, SddError::UnknownTarget(ref k) if k == "emacs"));
    }

    #[test]
    fn detects_existing_markers() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".gemini")).unwrap();
        std::fs::create_dir_all(dir.path().join(".roo")).unwrap();
        std::fs::write(dir.path().join(".windsurfrules"), "x").unwrap();
        assert_eq!(
            detect_targets(dir.path()),
            vec![Target::Gemini, Target::Roo, Target::Windsurf]
        );
    }

    #[test]
    fn detects_nothing_in_empty_project() {
        let dir = TempDir::new().unwrap();
        assert!(detect_targets(dir.path()).is_empty());
    }
}
