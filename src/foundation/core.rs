use crate::foundation::error::{ForgeError, ForgeResult};

/// Absolute 0-based frame index in clip time, counted at the clip's fps.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> ForgeResult<Self> {
        if den == 0 {
            return Err(ForgeError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ForgeError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Re-check a value that may have been deserialized without going through [`Fps::new`].
    pub fn validate(self) -> ForgeResult<()> {
        Self::new(self.num, self.den).map(|_| ())
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64() + TIME_EPSILON).floor().max(0.0) as u64
    }

    /// Convert seconds to frame count using ceil semantics.
    pub fn secs_to_frames_ceil(self, secs: f64) -> u64 {
        (secs * self.as_f64() - TIME_EPSILON).ceil().max(0.0) as u64
    }
}

/// Tolerance for comparing clip times that went through float division.
pub const TIME_EPSILON: f64 = 1e-9;

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
