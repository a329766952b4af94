use std::path::{Path, PathBuf};

/// Resolve the project root.
///
/// Priority:
/// 1. `--root` flag / `SDD_ROOT` env var (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.sdd-toolkit/`
/// 3. Walk upward from `cwd` looking for `.git/`
/// 4. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_toolkit_root(&cwd)
        .or_else(|| find_upward(&cwd, ".git"))
        .unwrap_or(cwd)
}

/// Nearest ancestor of `start` (inclusive) that holds a `.sdd-toolkit/` directory.
fn find_toolkit_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| sdd_core::paths::toolkit_dir(dir).is_dir())
        .map(Path::to_path_buf)
}

fn find_upward(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_dir())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_root_wins() {
        let dir = TempDir::new().unwrap();
        assert_eq!(resolve_root(Some(dir.path())), dir.path());
    }

    #[test]
    fn finds_toolkit_dir_above_start() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".sdd-toolkit")).unwrap();
        let deep = dir.path().join("src/deep");
        std::fs::create_dir_all(&deep).unwrap();
        assert_eq!(find_toolkit_root(&deep).unwrap(), dir.path());
    }

    #[test]
    fn toolkit_dir_beats_git_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("app");
        std::fs::create_dir_all(dir.path().join(".git")).unwrap();
        std::fs::create_dir_all(nested.join(".sdd-toolkit")).unwrap();
        assert_eq!(find_toolkit_root(&nested).unwrap(), nested);
        assert_eq!(find_upward(&nested, ".git").unwrap(), dir.path());
    }
}
