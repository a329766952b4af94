use crate::error::Result;
use crate::locale::{resolve_locale, Locale};
use crate::paths;
use crate::profiles::find_profile;
use crate::target::Target;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project settings recorded by the last install (`.sdd-toolkit/config.yaml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_rules: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toolkit_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_install: Option<DateTime<Utc>>,
}

fn default_version() -> u32 {
    1
}

fn default_locale() -> String {
    Locale::default().as_str().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            locale: default_locale(),
            tools: Vec::new(),
            global_rules: None,
            profile: None,
            toolkit_version: None,
            last_install: None,
        }
    }
}

impl Config {
    /// `Ok(None)` when the project has never been installed into.
    pub fn load(root: &Path) -> Result<Option<Self>> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(None);
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(Some(cfg))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn resolved_locale(&self) -> Locale {
        resolve_locale(&self.locale)
    }

    /// Recorded tools that parse as targets, in recorded order.
    pub fn targets(&self) -> Vec<Target> {
        self.tools.iter().filter_map(|t| t.parse().ok()).collect()
    }

    /// Record a finished install.
    pub fn stamp(
        &mut self,
        targets: &[Target],
        locale: Locale,
        global_rules: Option<String>,
        profile: Option<String>,
        toolkit_version: &str,
    ) {
        self.tools = targets.iter().map(|t| t.as_str().to_string()).collect();
        self.locale = locale.as_str().to_string();
        self.global_rules = global_rules;
        self.profile = profile;
        self.toolkit_version = Some(toolkit_version.to_string());
        self.last_install = Some(Utc::now());
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        for tool in &self.tools {
            if tool.parse::<Target>().is_err() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("unknown tool '{tool}' in tools (it will be skipped)"),
                });
            }
        }

        if let Some(profile) = &self.profile {
            if find_profile(profile).is_none() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!("unknown stack profile '{profile}'"),
                });
            }
        }

        let resolved = self.resolved_locale();
        if resolved.as_str() != self.locale {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("locale '{}' resolves to '{resolved}'", self.locale),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
