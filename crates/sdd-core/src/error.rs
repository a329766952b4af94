use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SddError {
    #[error("definitions directory not found: {}", .0.display())]
    DefinitionsNotFound(PathBuf),

    #[error("unknown target '{0}' (run 'sdd targets' for the supported list)")]
    UnknownTarget(String),

    #[error("unknown stack profile '{0}' (run 'sdd profiles' for the supported list)")]
    UnknownProfile(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SddError>;
