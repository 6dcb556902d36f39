use super::*;
use crate::naming::axis::{Action, Direction, MAX_AXIS_VALUE};

fn entry(action: Action, direction: Direction, item: u32, variant: u32) -> (AxisValues, ClipRef) {
    let axis = AxisValues::new(action, direction, item).with_variant(variant);
    (axis, ClipRef(axis.clip_name()))
}

#[test]
fn three_entries_give_idle_plus_three_states_and_transitions() {
    let entries = vec![
        entry(Action::Slice, Direction::Down, 1, 0),
        entry(Action::Slice, Direction::Up, 1, 0),
        entry(Action::Crush, Direction::Side, 112, 2),
    ];
    let built = build(&entries).unwrap();
    assert!(built.conflicts.is_empty());

    let graph = built.graph;
    assert_eq!(graph.idle_state.name, "Idle");
    assert_eq!(graph.content_states.len(), 3);
    assert_eq!(graph.transitions.len(), 3);
    assert!(
        graph
            .transitions
            .iter()
            .all(|t| t.predicate.conditions.len() == 4)
    );

    let names: Vec<&str> = graph.parameters.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["state", "direction", "itemId", "variant"]);
    graph.validate().unwrap();
}

#[test]
fn predicate_uses_shared_code_table() {
    let (axis, clip) = entry(Action::Crush, Direction::Side, 112, 2);
    let graph = build(&[(axis, clip)]).unwrap().graph;
    let conditions = &graph.transitions[0].predicate.conditions;
    let pairs: Vec<(&str, i32)> = conditions
        .iter()
        .map(|c| (c.parameter.as_str(), c.equals))
        .collect();
    assert_eq!(
        pairs,
        [("state", 8), ("direction", 2), ("itemId", 112), ("variant", 2)]
    );
}

#[test]
fn predicates_are_unique_and_select_is_deterministic() {
    let mut entries = Vec::new();
    for action in Action::ALL {
        for direction in Direction::ALL {
            for item in [1u32, 2] {
                for variant in [0u32, 1] {
                    entries.push(entry(action, direction, item, variant));
                }
            }
        }
    }
    let graph = build(&entries).unwrap().graph;
    assert_eq!(graph.transitions.len(), entries.len());

    let mut predicates: Vec<&Predicate> = graph.transitions.iter().map(|t| &t.predicate).collect();
    let total = predicates.len();
    predicates.sort_by_key(|p| format!("{p:?}"));
    predicates.dedup();
    assert_eq!(predicates.len(), total);

    for (axis, clip) in &entries {
        let values = ParameterValues::for_axis(axis).unwrap();
        let matching = graph
            .transitions
            .iter()
            .filter(|t| t.predicate.holds(&values))
            .count();
        assert_eq!(matching, 1);
        assert_eq!(graph.select(&values).map(|s| &s.clip), Some(clip));
    }
}

#[test]
fn idle_parameters_select_nothing() {
    let graph = build(&[entry(Action::Fish, Direction::Down, 0, 0)]).unwrap().graph;
    assert!(graph.select(&ParameterValues::default()).is_none());
}

#[test]
fn duplicates_are_reported_not_overwritten() {
    let (axis, _) = entry(Action::Pierce, Direction::Up, 5, 0);
    let entries = vec![
        (axis, ClipRef::from("first")),
        (axis, ClipRef::from("second")),
    ];
    let built = build(&entries).unwrap();
    assert_eq!(built.graph.content_states.len(), 1);
    assert_eq!(built.graph.content_states[0].clip, ClipRef::from("first"));
    assert_eq!(
        built.conflicts,
        vec![AxisConflict {
            axis,
            kept: ClipRef::from("first"),
            rejected: ClipRef::from("second"),
        }]
    );

    let err = built.into_strict().unwrap_err();
    assert!(matches!(err, ForgeError::DuplicateAxisValues(ref m) if m.contains("second")));
}

#[test]
fn no_exit_or_inter_state_transitions() {
    let entries = vec![
        entry(Action::Watering, Direction::Down, 1, 0),
        entry(Action::Watering, Direction::Up, 1, 0),
    ];
    let graph = build(&entries).unwrap().graph;
    let mut targets: Vec<StateId> = graph.transitions.iter().map(|t| t.target).collect();
    targets.sort();
    assert_eq!(targets, vec![StateId(0), StateId(1)]);
}

#[test]
fn validate_catches_missing_parameter_test() {
    let mut graph = build(&[entry(Action::Slice, Direction::Down, 1, 0)]).unwrap().graph;
    graph.transitions[0].predicate.conditions.pop();
    assert!(graph.validate().is_err());
}

#[test]
fn graph_json_roundtrip() {
    let graph = build(&[entry(Action::Slice, Direction::Side, 4, 1)]).unwrap().graph;
    let s = serde_json::to_string_pretty(&graph).unwrap();
    let de: StateGraph = serde_json::from_str(&s).unwrap();
    assert_eq!(de, graph);
}

#[test]
fn out_of_range_keys_fail_the_build() {
    let axis = AxisValues::new(Action::Slice, Direction::Down, 3_000_000_000);
    let err = build(&[(axis, ClipRef(axis.clip_name()))]).unwrap_err();
    assert!(matches!(err, ForgeError::Validation(_)));

    let axis = AxisValues::new(Action::Slice, Direction::Down, 1).with_variant(u32::MAX);
    assert!(ParameterValues::for_axis(&axis).is_err());
}

#[test]
fn largest_key_stays_non_negative() {
    let (axis, clip) = entry(Action::Fish, Direction::Up, MAX_AXIS_VALUE, MAX_AXIS_VALUE);
    let graph = build(&[(axis, clip)]).unwrap().graph;
    assert!(
        graph.transitions[0]
            .predicate
            .conditions
            .iter()
            .all(|c| c.equals >= 0)
    );
    assert_eq!(
        graph
            .select(&ParameterValues::for_axis(&axis).unwrap())
            .map(|s| s.axis),
        Some(axis)
    );
}
