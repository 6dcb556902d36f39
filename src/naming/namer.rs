use std::cmp::Reverse;

use crate::naming::axis::{Action, Direction};
use crate::raster::region::Region;

/// A merged region with its position in an (action, direction) sequence.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Source bounds in texture space.
    pub region: Region,
    /// Dense 0-based index within the batch.
    pub order_index: u32,
    /// `{Action}_{Direction}_{order_index}`.
    pub name: String,
}

/// Canonical raw-frame name.
pub fn frame_name(action: Action, direction: Direction, order_index: u32) -> String {
    format!("{action}_{direction}_{order_index}")
}

/// Order regions left to right (ties: top-most first) and give each its canonical name.
///
/// Re-running on the same regions produces the same names.
#[tracing::instrument(skip(regions), fields(regions = regions.len()))]
pub fn name_frames(regions: &[Region], action: Action, direction: Direction) -> Vec<Frame> {
    let mut ordered = regions.to_vec();
    ordered.sort_by_key(|r| (r.min_x, Reverse(r.min_y), r.id));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, region)| {
            let order_index = i as u32;
            Frame {
                region,
                order_index,
                name: frame_name(action, direction, order_index),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/naming/namer.rs"]
mod tests;
