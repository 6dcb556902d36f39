//! The single code table shared by name parsing and state-graph predicates.

use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ForgeError, ForgeResult};

/// `state` parameter value that means "no action"; the driver resets to it after a clip plays.
pub const IDLE_STATE_CODE: i32 = 0;

/// Largest item id or variant the `i32` parameter surface can carry.
pub const MAX_AXIS_VALUE: u32 = i32::MAX as u32;

/// Tool actions that get generated clips.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Action {
    /// Blade swing.
    Slice,
    /// Thrust.
    Pierce,
    /// Overhead smash.
    Crush,
    /// Watering can.
    Watering,
    /// Rod cast.
    Fish,
}

impl Action {
    /// Every action, in code order.
    pub const ALL: [Action; 5] = [
        Action::Slice,
        Action::Pierce,
        Action::Crush,
        Action::Fish,
        Action::Watering,
    ];

    /// Value of the `state` parameter that selects this action.
    pub fn code(self) -> i32 {
        match self {
            Action::Slice => 6,
            Action::Pierce => 7,
            Action::Crush => 8,
            Action::Fish => 9,
            Action::Watering => 10,
        }
    }

    /// Inverse of [`Action::code`].
    pub fn from_code(code: i32) -> Option<Action> {
        Self::ALL.into_iter().find(|a| a.code() == code)
    }

    /// Canonical spelling used in names.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Slice => "Slice",
            Action::Pierce => "Pierce",
            Action::Crush => "Crush",
            Action::Watering => "Watering",
            Action::Fish => "Fish",
        }
    }

    /// Case-insensitive exact match against the canonical spelling.
    pub fn from_token(token: &str) -> Option<Action> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ForgeError;

    fn from_str(s: &str) -> ForgeResult<Self> {
        Self::from_token(s.trim())
            .ok_or_else(|| ForgeError::grammar_mismatch(format!("unknown action '{s}'")))
    }
}

/// Facing of a sprite sequence. Left and right share `Side` (the runtime mirrors).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Direction {
    /// Facing the camera.
    Down,
    /// Facing away.
    Up,
    /// Facing left or right.
    Side,
}

impl Direction {
    /// Every direction, in code order.
    pub const ALL: [Direction; 3] = [Direction::Down, Direction::Up, Direction::Side];

    /// Value of the `direction` parameter.
    pub fn code(self) -> i32 {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
            Direction::Side => 2,
        }
    }

    /// Inverse of [`Direction::code`].
    pub fn from_code(code: i32) -> Option<Direction> {
        Self::ALL.into_iter().find(|d| d.code() == code)
    }

    /// Canonical spelling used in names.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Down => "Down",
            Direction::Up => "Up",
            Direction::Side => "Side",
        }
    }

    /// Case-insensitive substring match; `right`/`left` normalize to `Side`.
    pub fn match_token(token: &str) -> Option<Direction> {
        let lower = token.to_ascii_lowercase();
        if lower.contains("down") {
            Some(Direction::Down)
        } else if lower.contains("side") || lower.contains("right") || lower.contains("left") {
            Some(Direction::Side)
        } else if lower.contains("up") {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Whole-token match against `down`, `up`, `side`, `right` or `left`, ignoring case.
    pub fn match_exact(token: &str) -> Option<Direction> {
        match token.to_ascii_lowercase().as_str() {
            "down" => Some(Direction::Down),
            "up" => Some(Direction::Up),
            "side" | "right" | "left" => Some(Direction::Side),
            _ => None,
        }
    }

    /// Resolve a folder or batch label such as `"Down"`, `"walk_left"` or `"SIDE"`.
    pub fn from_label(label: &str) -> ForgeResult<Direction> {
        Self::match_token(label).ok_or_else(|| ForgeError::unrecognized_direction(label))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ForgeError;

    fn from_str(s: &str) -> ForgeResult<Self> {
        Self::from_label(s)
    }
}

/// Semantic key of a clip and of the state that plays it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AxisValues {
    /// Tool action.
    pub action: Action,
    /// Facing.
    pub direction: Direction,
    /// Item identity (which tool sprite set).
    pub item_id: u32,
    /// Quality tier or cosmetic variant; `0` when the item has none.
    pub variant: u32,
}

impl AxisValues {
    /// Key with variant `0`.
    pub fn new(action: Action, direction: Direction, item_id: u32) -> Self {
        Self {
            action,
            direction,
            item_id,
            variant: 0,
        }
    }

    /// Same key with a different variant.
    pub fn with_variant(self, variant: u32) -> Self {
        Self { variant, ..self }
    }

    /// Item id and variant as parameter values.
    ///
    /// Fails with [`ForgeError::Validation`] when either exceeds [`MAX_AXIS_VALUE`].
    pub fn parameter_values(&self) -> ForgeResult<(i32, i32)> {
        let convert = |what: &str, value: u32| {
            i32::try_from(value).map_err(|_| {
                ForgeError::validation(format!(
                    "{self}: {what} {value} exceeds {MAX_AXIS_VALUE}"
                ))
            })
        };
        Ok((
            convert("item id", self.item_id)?,
            convert("variant", self.variant)?,
        ))
    }

    /// Canonical clip name: `{Action}_{Direction}_Clip_{ItemId}[_{Variant}]`.
    ///
    /// The variant suffix is only written when it is non-zero.
    pub fn clip_name(&self) -> String {
        if self.variant == 0 {
            format!("{}_{}_Clip_{}", self.action, self.direction, self.item_id)
        } else {
            format!(
                "{}_{}_Clip_{}_{}",
                self.action, self.direction, self.item_id, self.variant
            )
        }
    }
}

impl fmt::Display for AxisValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clip_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/naming/axis.rs"]
mod tests;
