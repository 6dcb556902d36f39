//! Parsing of canonical names back into axis values.
//!
//! Recognized shapes (separators may repeat, keywords are case-insensitive):
//!
//! - clips: `{Action}_{Direction}_Clip_{ItemId}` and `{Action}_{Direction}_Clip_{ItemId}_{Variant}`
//! - raw frames: `{Action}_{Direction}_{FrameIndex}` (no `Clip` keyword)
//!
//! Failures are item-level: callers skip the name and report it.

use crate::foundation::error::{ForgeError, ForgeResult};
use crate::naming::axis::{Action, AxisValues, Direction, MAX_AXIS_VALUE};

/// Components of a raw frame name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FrameKey {
    /// Tool action.
    pub action: Action,
    /// Facing.
    pub direction: Direction,
    /// Position in the sequence.
    pub order_index: u32,
}

/// Parse a clip name into its axis values.
///
/// Trailing integer tokens are read from the right: one integer is the item id (variant `0`),
/// two are item id then variant. The last non-integer token must be the `Clip` keyword, so a raw
/// frame name never parses as a clip. Integers above [`MAX_AXIS_VALUE`] are rejected.
pub fn parse(name: &str) -> ForgeResult<AxisValues> {
    let tokens = tokenize(name);
    let action = leading_action(&tokens, name)?;

    let ints = trailing_integers(&tokens[1..], 2);
    let (item_id, variant) = match ints.as_slice() {
        [item_id] => (*item_id, 0),
        [variant, item_id] => (*item_id, *variant),
        _ => {
            return Err(ForgeError::grammar_mismatch(format!(
                "{name} (no trailing item id)"
            )));
        }
    };

    let head = &tokens[1..tokens.len() - ints.len()];
    let Some((_, head)) = head.split_last().filter(|(t, _)| is_clip_keyword(t)) else {
        return Err(ForgeError::grammar_mismatch(format!(
            "{name} (missing Clip keyword)"
        )));
    };
    let direction = find_direction(head, name)?;

    Ok(AxisValues {
        action,
        direction,
        item_id: axis_integer(item_id, name)?,
        variant: axis_integer(variant, name)?,
    })
}

/// Parse a raw frame name produced by [`crate::frame_name`].
///
/// Clip names are rejected.
pub fn parse_frame_name(name: &str) -> ForgeResult<FrameKey> {
    let tokens = tokenize(name);
    let action = leading_action(&tokens, name)?;

    let ints = trailing_integers(&tokens[1..], 1);
    let Some(&order_index) = ints.first() else {
        return Err(ForgeError::grammar_mismatch(format!(
            "{name} (no trailing frame index)"
        )));
    };

    let head = &tokens[1..tokens.len() - ints.len()];
    if head.iter().any(|t| is_clip_keyword(t)) {
        return Err(ForgeError::grammar_mismatch(format!(
            "{name} (clip name, not a frame)"
        )));
    }
    let direction = find_direction(head, name)?;

    let order_index = u32::try_from(order_index).map_err(|_| {
        ForgeError::grammar_mismatch(format!("{name} (frame index out of range)"))
    })?;

    Ok(FrameKey {
        action,
        direction,
        order_index,
    })
}

fn tokenize(name: &str) -> Vec<&str> {
    name.trim()
        .split('_')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_clip_keyword(token: &str) -> bool {
    token.eq_ignore_ascii_case("clip")
}

fn leading_action(tokens: &[&str], name: &str) -> ForgeResult<Action> {
    tokens
        .first()
        .and_then(|t| Action::from_token(t))
        .ok_or_else(|| ForgeError::grammar_mismatch(format!("{name} (unknown action)")))
}

/// A whole-token direction wins over a substring hit in an earlier token.
fn find_direction(tokens: &[&str], name: &str) -> ForgeResult<Direction> {
    tokens
        .iter()
        .find_map(|t| Direction::match_exact(t))
        .or_else(|| tokens.iter().find_map(|t| Direction::match_token(t)))
        .ok_or_else(|| ForgeError::unrecognized_direction(name))
}

/// Up to `max` integer tokens from the right, right-most first.
fn trailing_integers(tokens: &[&str], max: usize) -> Vec<u64> {
    tokens
        .iter()
        .rev()
        .map_while(|t| t.parse::<u64>().ok())
        .take(max)
        .collect()
}

fn axis_integer(value: u64, name: &str) -> ForgeResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v <= MAX_AXIS_VALUE)
        .ok_or_else(|| {
            ForgeError::grammar_mismatch(format!(
                "{name} ({value} exceeds {MAX_AXIS_VALUE})"
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/naming/grammar.rs"]
mod tests;
