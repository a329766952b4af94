use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const TOOLKIT_DIR: &str = ".sdd-toolkit";
pub const LOCAL_AGENTS_DIR: &str = ".sdd-toolkit/agents";
pub const CONFIG_FILE: &str = ".sdd-toolkit/config.yaml";

/// Extensions recognised as agent definition files.
pub const DEFINITION_EXTENSIONS: &[&str] = &["yaml", "yml"];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn toolkit_dir(root: &Path) -> PathBuf {
    root.join(TOOLKIT_DIR)
}

pub fn local_agents_dir(root: &Path) -> PathBuf {
    root.join(LOCAL_AGENTS_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Return the file stem of a definition file name, or `None` when the
/// extension is not a recognised definition extension.
///
/// Only the final extension is stripped: `dev.coder.yaml` → `dev.coder`.
pub fn definition_stem(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || !DEFINITION_EXTENSIONS.contains(&ext) {
        return None;
    }
    Some(stem)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_stem_strips_only_the_yaml_extension() {
        assert_eq!(definition_stem("coder.yaml"), Some("coder"));
        assert_eq!(definition_stem("dev.coder.yml"), Some("dev.coder"));
    }

    #[test]
    fn definition_stem_rejects_other_files() {
        for name in ["README.md", "coder", ".yaml", "coder.yaml.bak", "notes.txt"] {
            assert_eq!(definition_stem(name), None, "expected rejection: {name}");
        }
    }

    #[test]
    fn config_lives_under_toolkit_dir() {
        let root = Path::new("/project");
        assert!(config_path(root).starts_with(toolkit_dir(root)));
        assert!(local_agents_dir(root).starts_with(toolkit_dir(root)));
    }
}
