use std::path::Path;

use anyhow::Context as _;

use crate::animation::clip::ClipTiming;
use crate::foundation::core::Fps;
use crate::foundation::error::ForgeResult;

/// Run-wide settings. Every field has a default, so partial JSON files are accepted.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Segmentation and merge thresholds.
    pub segmentation: SegmentationConfig,
    /// Clip timing.
    pub timing: TimingConfig,
}

/// Thresholds for the pixel stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Pixels with alpha at or above this value are opaque.
    pub alpha_threshold: u8,
    /// Largest horizontal gap, in pixels, that still fuses two regions.
    pub merge_gap: u32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 1,
            merge_gap: 2,
        }
    }
}

/// Clip sample rate and distribute-then-hold timing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Clip sample rate.
    pub fps: Fps,
    /// Declared clip length in seconds.
    pub total_duration_secs: f64,
    /// Time the last frame lands, in seconds.
    pub hold_start_secs: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let timing = ClipTiming::default();
        Self {
            fps: Fps::default(),
            total_duration_secs: timing.total_duration_secs,
            hold_start_secs: timing.hold_start_secs,
        }
    }
}

impl TimingConfig {
    /// Timing handed to clip synthesis.
    pub fn clip_timing(&self) -> ClipTiming {
        ClipTiming {
            total_duration_secs: self.total_duration_secs,
            hold_start_secs: self.hold_start_secs,
        }
    }
}

impl PipelineConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> ForgeResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Read and parse a JSON file.
    pub fn from_json_file(path: &Path) -> ForgeResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Reject configurations no run could succeed with.
    pub fn validate(&self) -> ForgeResult<()> {
        self.timing.fps.validate()?;
        self.timing.clip_timing().validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
