use super::*;
use crate::graph::builder::{ClipRef, build};
use crate::naming::axis::{Action, AxisValues, Direction};

#[test]
fn every_node_gets_a_distinct_position() {
    let entries: Vec<(AxisValues, ClipRef)> = Direction::ALL
        .into_iter()
        .flat_map(|d| {
            [1u32, 2].map(move |item| {
                let axis = AxisValues::new(Action::Slice, d, item);
                (axis, ClipRef(axis.clip_name()))
            })
        })
        .collect();
    let graph = build(&entries).unwrap().graph;
    let positions = grid_layout(&graph, &LayoutOptions::default());

    assert_eq!(positions.len(), graph.content_states.len() + 1);
    assert_eq!(positions[0].node, NodeRef::Idle);
    assert_eq!((positions[0].x, positions[0].y), (0.0, 0.0));

    for (i, a) in positions.iter().enumerate() {
        for b in &positions[i + 1..] {
            assert!((a.x, a.y) != (b.x, b.y));
        }
    }
}

#[test]
fn layout_leaves_graph_untouched() {
    let axis = AxisValues::new(Action::Fish, Direction::Up, 3);
    let graph = build(&[(axis, ClipRef(axis.clip_name()))]).unwrap().graph;
    let before = graph.clone();
    let _ = grid_layout(&graph, &LayoutOptions::default());
    assert_eq!(graph, before);
}
