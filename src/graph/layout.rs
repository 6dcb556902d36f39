//! Cosmetic node placement for editors that display a built graph.
//!
//! Positions have no effect on graph semantics.

use std::collections::BTreeMap;

use crate::graph::builder::{StateGraph, StateId};

/// Which node a position belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum NodeRef {
    /// The idle state.
    Idle,
    /// A content state.
    Content(StateId),
}

/// Node position in editor units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodePosition {
    /// Node.
    pub node: NodeRef,
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

/// Grid spacing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutOptions {
    /// Idle state position.
    pub origin: (f32, f32),
    /// Distance between direction columns.
    pub column_spacing: f32,
    /// Distance between rows.
    pub row_spacing: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            origin: (0.0, 0.0),
            column_spacing: 250.0,
            row_spacing: 60.0,
        }
    }
}

/// Idle at the origin; content states in one column per direction and one row per
/// (action, item, variant), rows sorted by that key.
pub fn grid_layout(graph: &StateGraph, opts: &LayoutOptions) -> Vec<NodePosition> {
    let mut rows: BTreeMap<(i32, u32, u32), usize> = BTreeMap::new();
    for state in &graph.content_states {
        let key = (state.axis.action.code(), state.axis.item_id, state.axis.variant);
        rows.entry(key).or_default();
    }
    for (i, row) in rows.values_mut().enumerate() {
        *row = i;
    }

    let (ox, oy) = opts.origin;
    let mut out = Vec::with_capacity(graph.content_states.len() + 1);
    out.push(NodePosition {
        node: NodeRef::Idle,
        x: ox,
        y: oy,
    });
    for (i, state) in graph.content_states.iter().enumerate() {
        let key = (state.axis.action.code(), state.axis.item_id, state.axis.variant);
        let row = rows.get(&key).copied().unwrap_or(0);
        let col = state.axis.direction.code() + 1;
        out.push(NodePosition {
            node: NodeRef::Content(StateId(i)),
            x: ox + col as f32 * opts.column_spacing,
            y: oy + row as f32 * opts.row_spacing,
        });
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/graph/layout.rs"]
mod tests;
