use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::animation::clip::MotionClip;
use crate::foundation::error::ForgeResult;
use crate::graph::builder::StateGraph;

/// Destination for generated assets.
///
/// Each call creates or overwrites the asset for the given canonical name; where it lands is
/// the sink's business.
pub trait AssetSink {
    /// Persist one clip under `clip.name`.
    fn write_clip(&mut self, clip: &MotionClip) -> ForgeResult<()>;
    /// Persist one state graph under `name`.
    fn write_graph(&mut self, name: &str, graph: &StateGraph) -> ForgeResult<()>;
}

/// In-memory sink for tests and debugging. Overwrites keep the original slot.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) clips: Vec<MotionClip>,
    pub(crate) graphs: Vec<(String, StateGraph)>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured clips in first-write order.
    pub fn clips(&self) -> &[MotionClip] {
        &self.clips
    }

    /// Captured graphs in first-write order.
    pub fn graphs(&self) -> &[(String, StateGraph)] {
        &self.graphs
    }

    /// Look up a captured clip by name.
    pub fn clip(&self, name: &str) -> Option<&MotionClip> {
        self.clips.iter().find(|c| c.name == name)
    }
}

impl AssetSink for InMemorySink {
    fn write_clip(&mut self, clip: &MotionClip) -> ForgeResult<()> {
        match self.clips.iter_mut().find(|c| c.name == clip.name) {
            Some(slot) => *slot = clip.clone(),
            None => self.clips.push(clip.clone()),
        }
        Ok(())
    }

    fn write_graph(&mut self, name: &str, graph: &StateGraph) -> ForgeResult<()> {
        match self.graphs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = graph.clone(),
            None => self.graphs.push((name.to_string(), graph.clone())),
        }
        Ok(())
    }
}

/// Writes pretty JSON files under a root directory:
/// `<root>/<name>.clip.json` and `<root>/<name>.graph.json`.
#[derive(Clone, Debug)]
pub struct JsonDirSink {
    root: PathBuf,
}

impl JsonDirSink {
    /// Sink rooted at `root` (created on first write).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a clip with `name` is written to.
    pub fn clip_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.clip.json"))
    }

    /// Path a graph with `name` is written to.
    pub fn graph_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.graph.json"))
    }
}

impl AssetSink for JsonDirSink {
    fn write_clip(&mut self, clip: &MotionClip) -> ForgeResult<()> {
        write_json(&self.clip_path(&clip.name), clip)
    }

    fn write_graph(&mut self, name: &str, graph: &StateGraph) -> ForgeResult<()> {
        write_json(&self.graph_path(name), graph)
    }
}

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> ForgeResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Serialize `value` as pretty JSON, replacing any existing file.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> ForgeResult<()> {
    ensure_parent_dir(path)?;
    let bytes = serde_json::to_vec_pretty(value)?;
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "asset written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
