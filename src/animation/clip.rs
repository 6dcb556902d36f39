use crate::foundation::core::{Fps, FrameIndex, TIME_EPSILON};
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::naming::axis::AxisValues;

/// Reference to a named frame (sprite) a clip displays.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct FrameRef(pub String);

impl From<&str> for FrameRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FrameRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Timing of the distribute-then-hold law, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipTiming {
    /// Declared clip length.
    pub total_duration_secs: f64,
    /// Time at which the last frame lands and starts being held.
    pub hold_start_secs: f64,
}

impl Default for ClipTiming {
    fn default() -> Self {
        Self {
            total_duration_secs: 100.0 / 60.0,
            hold_start_secs: 80.0 / 60.0,
        }
    }
}

impl ClipTiming {
    /// Reject inconsistent timing instead of clamping it.
    pub fn validate(&self) -> ForgeResult<()> {
        let total = self.total_duration_secs;
        let hold = self.hold_start_secs;
        if !total.is_finite() || total <= 0.0 {
            return Err(ForgeError::invalid_timing(format!(
                "total duration must be > 0, got {total}"
            )));
        }
        if !hold.is_finite() || hold < 0.0 {
            return Err(ForgeError::invalid_timing(format!(
                "hold start must be >= 0, got {hold}"
            )));
        }
        if hold > total {
            return Err(ForgeError::invalid_timing(format!(
                "hold start {hold} exceeds total duration {total}"
            )));
        }
        Ok(())
    }
}

/// One keyframe: from `time_secs` on, `frame` is displayed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClipKeyframe {
    /// Clip-local time in seconds.
    pub time_secs: f64,
    /// Displayed frame.
    pub frame: FrameRef,
}

/// Time-keyed frame sequence for one axis key.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionClip {
    /// Canonical clip name (`AxisValues::clip_name`).
    pub name: String,
    /// Semantic key.
    pub axis: AxisValues,
    /// Sample rate of the clip.
    pub fps: Fps,
    /// Declared clip length; the last keyframe sits exactly here.
    pub total_duration_secs: f64,
    /// Non-empty, sorted by time.
    pub keyframes: Vec<ClipKeyframe>,
}

/// Build a clip whose frames play quickly up to `hold_start_secs` and then hold the last pose.
///
/// With `n` frames: a single frame gets keys at `0` and `total`; otherwise frame `i < n-1` lands at
/// `i / (n-1) * hold`, the last at `hold`, and when `total > hold` a terminal key repeats the last
/// frame at `total`.
#[tracing::instrument(skip(frames), fields(clip = %axis, frames = frames.len()))]
pub fn synthesize(
    axis: AxisValues,
    frames: &[FrameRef],
    timing: &ClipTiming,
    fps: Fps,
) -> ForgeResult<MotionClip> {
    timing.validate()?;
    fps.validate()?;

    let total = timing.total_duration_secs;
    let hold = timing.hold_start_secs;

    let keyframes = match frames {
        [] => {
            return Err(ForgeError::validation(format!(
                "clip '{}' has no frames",
                axis.clip_name()
            )));
        }
        [only] => vec![
            ClipKeyframe {
                time_secs: 0.0,
                frame: only.clone(),
            },
            ClipKeyframe {
                time_secs: total,
                frame: only.clone(),
            },
        ],
        [head @ .., last] => {
            let steps = head.len() as f64;
            let mut keys: Vec<ClipKeyframe> = head
                .iter()
                .enumerate()
                .map(|(i, frame)| ClipKeyframe {
                    time_secs: i as f64 / steps * hold,
                    frame: frame.clone(),
                })
                .collect();
            keys.push(ClipKeyframe {
                time_secs: hold,
                frame: last.clone(),
            });
            if total > hold {
                keys.push(ClipKeyframe {
                    time_secs: total,
                    frame: last.clone(),
                });
            }
            keys
        }
    };

    Ok(MotionClip {
        name: axis.clip_name(),
        axis,
        fps,
        total_duration_secs: total,
        keyframes,
    })
}

impl MotionClip {
    /// Check the clip invariants (non-empty, sorted, ends at the declared duration).
    pub fn validate(&self) -> ForgeResult<()> {
        let Some(last) = self.keyframes.last() else {
            return Err(ForgeError::validation(format!(
                "clip '{}' has no keyframes",
                self.name
            )));
        };
        if !self
            .keyframes
            .windows(2)
            .all(|w| w[0].time_secs <= w[1].time_secs)
        {
            return Err(ForgeError::validation(format!(
                "clip '{}' keyframes must be sorted by time",
                self.name
            )));
        }
        if (last.time_secs - self.total_duration_secs).abs() > TIME_EPSILON {
            return Err(ForgeError::validation(format!(
                "clip '{}' ends at {} but declares {}",
                self.name, last.time_secs, self.total_duration_secs
            )));
        }
        self.fps.validate()
    }

    /// Frame shown at `time_secs` (hold interpolation, clamped to the clip ends).
    pub fn frame_at(&self, time_secs: f64) -> Option<&FrameRef> {
        let idx = self
            .keyframes
            .partition_point(|k| k.time_secs <= time_secs + TIME_EPSILON);
        let key = if idx == 0 {
            self.keyframes.first()
        } else {
            self.keyframes.get(idx - 1)
        };
        key.map(|k| &k.frame)
    }

    /// Frame shown at a frame index counted at the clip fps.
    pub fn frame_at_index(&self, index: FrameIndex) -> Option<&FrameRef> {
        self.frame_at(self.fps.frames_to_secs(index.0))
    }

    /// Clip length in whole frames at the clip fps (partial frames round up).
    pub fn duration_frames(&self) -> u64 {
        self.fps.secs_to_frames_ceil(self.total_duration_secs)
    }

    /// Frames in display order, consecutive repeats collapsed.
    pub fn frames(&self) -> Vec<&FrameRef> {
        let mut out: Vec<&FrameRef> = Vec::new();
        for key in &self.keyframes {
            if out.last() != Some(&&key.frame) {
                out.push(&key.frame);
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clip.rs"]
mod tests;
