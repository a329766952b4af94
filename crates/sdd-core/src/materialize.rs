use crate::error::Result;
use crate::io;
use crate::render::RenderedArtifact;
use futures::future::try_join_all;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// Result of writing one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteOutcome {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// True when an existing file was overwritten.
    pub existed: bool,
}

impl WriteOutcome {
    pub fn verb(&self) -> &'static str {
        if self.existed {
            "updated"
        } else {
            "created"
        }
    }
}

/// Write `artifacts` under `root`.
///
/// Every parent directory is created before the first write; files are then
/// written concurrently with full overwrite. The first failure is returned
/// and files already written stay on disk.
pub async fn materialize(root: &Path, artifacts: &[RenderedArtifact]) -> Result<Vec<WriteOutcome>> {
    let artifacts = dedupe(artifacts);

    let parents: BTreeSet<PathBuf> = artifacts
        .iter()
        .filter_map(|a| root.join(&a.path).parent().map(Path::to_path_buf))
        .collect();
    for dir in &parents {
        io::ensure_dir(dir).await?;
    }

    let writes = artifacts.iter().map(|artifact| async move {
        let full = root.join(&artifact.path);
        let existed = io::write_file(&full, artifact.content.as_bytes()).await?;
        tracing::debug!(path = %artifact.path.display(), existed, "wrote artifact");
        Ok::<_, crate::SddError>(WriteOutcome {
            path: artifact.path.clone(),
            existed,
        })
    });
    try_join_all(writes).await
}

/// Drop earlier artifacts that share a path with a later one.
fn dedupe(artifacts: &[RenderedArtifact]) -> Vec<&RenderedArtifact> {
    let mut last: HashMap<&Path, usize> = HashMap::new();
    for (i, artifact) in artifacts.iter().enumerate() {
        if let Some(prev) = last.insert(artifact.path.as_path(), i) {
            tracing::warn!(
                path = %artifact.path.display(),
                dropped = prev,
                "duplicate artifact path in plan, keeping the last one"
            );
        }
    }
    artifacts
        .iter()
        .enumerate()
        .filter(|(i, a)| last.get(a.path.as_path()) == Some(i))
        .map(|(_, a)| a)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SddError;
    use tempfile::TempDir;

    fn plan() -> Vec<RenderedArtifact> {
        vec![
            RenderedArtifact::new(".claude/skills/dev-coder/SKILL.md", "skill\n"),
            RenderedArtifact::new(".claude/agents/dev-coder.md", "agent\n"),
            RenderedArtifact::new("roo_custom_modes.json", "{}\n"),
        ]
    }

    #[tokio::test]
    async fn creates_parents_and_writes() {
        let dir = TempDir::new().unwrap();
        let outcomes = materialize(dir.path(), &plan()).await.unwrap();

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| !o.existed));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".claude/skills/dev-coder/SKILL.md")).unwrap(),
            "skill\n"
        );
        assert!(dir.path().join("roo_custom_modes.json").is_file());
    }

    #[tokio::test]
    async fn rerun_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        materialize(dir.path(), &plan()).await.unwrap();
        let first = std::fs::read(dir.path().join(".claude/agents/dev-coder.md")).unwrap();

        let outcomes = materialize(dir.path(), &plan()).await.unwrap();
        let second = std::fs::read(dir.path().join(".claude/agents/dev-coder.md")).unwrap();

        assert_eq!(first, second);
        assert!(outcomes.iter().all(|o| o.existed));
        assert_eq!(outcomes[0].verb(), "updated");
    }

    #[tokio::test]
    async fn overwrites_longer_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prompts/coder.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "a much longer previous version of the prompt").unwrap();

        materialize(dir.path(), &[RenderedArtifact::new("prompts/coder.txt", "short\n")])
            .await
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[tokio::test]
    async fn duplicate_paths_keep_last() {
        let dir = TempDir::new().unwrap();
        let artifacts = vec![
            RenderedArtifact::new("out.md", "first\n"),
            RenderedArtifact::new("other.md", "other\n"),
            RenderedArtifact::new("out.md", "second\n"),
        ];
        let outcomes = materialize(dir.path(), &artifacts).await.unwrap();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].path, PathBuf::from("other.md"));
        assert_eq!(std::fs::read_to_string(dir.path().join("out.md")).unwrap(), "second\n");
    }

    #[tokio::test]
    async fn write_failure_surfaces_path() {
        let dir = TempDir::new().unwrap();
        // A file where a directory is needed.
        std::fs::write(dir.path().join(".cline"), "blocker").unwrap();
        let err = materialize(dir.path(), &[RenderedArtifact::new(".cline/coder.md", "x\n")])
            .await
            .unwrap_err();
        match err {
            SddError::Write { path, .. } => assert!(path.ends_with(".cline")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn empty_plan_writes_nothing() {
        let dir = TempDir::new().unwrap();
        assert!(materialize(dir.path(), &[]).await.unwrap().is_empty());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
