//! Pure per-target renderers: one [`Agent`](crate::Agent) in, one document out.
//!
//! Renderers perform no I/O and hold no state; calling one twice with the
//! same input yields byte-identical output.

pub mod builder;
pub mod gemini;
pub mod markdown;
pub mod modes;
pub mod plain;
pub mod skill;

use crate::locale::Locale;
use std::path::PathBuf;

/// Options shared by every renderer in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub locale: Locale,
}

/// One document destined for `path`, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub path: PathBuf,
    pub content: String,
}

impl RenderedArtifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
