use std::collections::{BTreeMap, HashMap};

use crate::foundation::error::{ForgeError, ForgeResult};
use crate::naming::axis::{AxisValues, IDLE_STATE_CODE};

/// Name of the action-code parameter.
pub const PARAM_STATE: &str = "state";
/// Name of the direction-code parameter.
pub const PARAM_DIRECTION: &str = "direction";
/// Name of the item-id parameter.
pub const PARAM_ITEM_ID: &str = "itemId";
/// Name of the variant parameter.
pub const PARAM_VARIANT: &str = "variant";

/// Name given to the default state.
pub const IDLE_STATE_NAME: &str = "Idle";

/// Reference to a persisted clip, by canonical name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ClipRef(pub String);

impl From<&str> for ClipRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Integer parameter a runtime driver sets to pick a state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Value before the driver writes anything.
    pub default: i32,
}

/// Index of a content state inside [`StateGraph::content_states`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct StateId(pub usize);

/// Default state. Carries no clip and no outgoing wiring.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IdleState {
    /// State name.
    pub name: String,
}

/// State that plays one clip.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContentState {
    /// State name (the clip name of its key).
    pub name: String,
    /// Key the state is selected by.
    pub axis: AxisValues,
    /// Clip played while the state is active.
    pub clip: ClipRef,
}

/// `param == value` test.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Condition {
    /// Parameter name.
    pub parameter: String,
    /// Required value.
    pub equals: i32,
}

/// Conjunction of equality tests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Predicate {
    /// All must hold.
    pub conditions: Vec<Condition>,
}

impl Predicate {
    /// Equality tests on all four parameters for `axis`.
    ///
    /// Fails when the item id or variant does not fit the parameter surface.
    pub fn for_axis(axis: &AxisValues) -> ForgeResult<Self> {
        let (item_id, variant) = axis.parameter_values()?;
        let eq = |parameter: &str, equals: i32| Condition {
            parameter: parameter.to_string(),
            equals,
        };
        Ok(Self {
            conditions: vec![
                eq(PARAM_STATE, axis.action.code()),
                eq(PARAM_DIRECTION, axis.direction.code()),
                eq(PARAM_ITEM_ID, item_id),
                eq(PARAM_VARIANT, variant),
            ],
        })
    }

    /// Evaluate against current parameter values. Missing parameters read as `0`.
    pub fn holds(&self, values: &ParameterValues) -> bool {
        self.conditions
            .iter()
            .all(|c| values.get(&c.parameter) == c.equals)
    }
}

/// Transition taken from whichever state is active when the predicate holds.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnyStateTransition {
    /// Destination content state.
    pub target: StateId,
    /// Trigger condition.
    pub predicate: Predicate,
}

/// Current values of the graph parameters, as a runtime driver would hold them.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParameterValues(BTreeMap<String, i32>);

impl ParameterValues {
    /// Values that select `axis`.
    pub fn for_axis(axis: &AxisValues) -> ForgeResult<Self> {
        let mut values = Self::default();
        for c in Predicate::for_axis(axis)?.conditions {
            values.set(&c.parameter, c.equals);
        }
        Ok(values)
    }

    /// Set one parameter.
    pub fn set(&mut self, name: &str, value: i32) {
        self.0.insert(name.to_string(), value);
    }

    /// Read one parameter, `0` when unset.
    pub fn get(&self, name: &str) -> i32 {
        self.0.get(name).copied().unwrap_or(0)
    }
}

/// Parametric state graph: one idle state, content states, and one any-state edge per content state.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StateGraph {
    /// Declared integer parameters, in declaration order.
    pub parameters: Vec<Parameter>,
    /// Default state.
    pub idle_state: IdleState,
    /// Content states in first-seen entry order.
    pub content_states: Vec<ContentState>,
    /// Exactly one per content state.
    pub transitions: Vec<AnyStateTransition>,
}

/// A later entry that collided with an earlier one on the same key.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AxisConflict {
    /// Shared key.
    pub axis: AxisValues,
    /// Clip that owns the state.
    pub kept: ClipRef,
    /// Clip that was dropped.
    pub rejected: ClipRef,
}

/// Output of [`build`]: the graph plus every duplicate key that was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphBuild {
    /// Built graph.
    pub graph: StateGraph,
    /// Entries rejected because their key was already taken.
    pub conflicts: Vec<AxisConflict>,
}

impl GraphBuild {
    /// Return the graph, or [`ForgeError::DuplicateAxisValues`] when any entry collided.
    pub fn into_strict(self) -> ForgeResult<StateGraph> {
        if self.conflicts.is_empty() {
            return Ok(self.graph);
        }
        let detail = self
            .conflicts
            .iter()
            .map(|c| format!("{} ({} vs {})", c.axis, c.kept.0, c.rejected.0))
            .collect::<Vec<_>>()
            .join(", ");
        Err(ForgeError::duplicate_axis_values(detail))
    }
}

/// Declare the four parameters, the idle state, one content state per distinct key and one
/// any-state transition per content state.
///
/// The first entry for a key wins; later ones are reported in [`GraphBuild::conflicts`].
/// No exit transitions are created: the driver resets `state` to the idle code itself.
///
/// A key whose item id or variant exceeds [`crate::MAX_AXIS_VALUE`] fails the whole build with
/// [`ForgeError::Validation`].
#[tracing::instrument(skip(entries), fields(entries = entries.len()))]
pub fn build(entries: &[(AxisValues, ClipRef)]) -> ForgeResult<GraphBuild> {
    let parameters = [PARAM_STATE, PARAM_DIRECTION, PARAM_ITEM_ID, PARAM_VARIANT]
        .into_iter()
        .map(|name| Parameter {
            name: name.to_string(),
            default: if name == PARAM_STATE { IDLE_STATE_CODE } else { 0 },
        })
        .collect();

    let mut seen: HashMap<AxisValues, StateId> = HashMap::new();
    let mut content_states: Vec<ContentState> = Vec::new();
    let mut transitions: Vec<AnyStateTransition> = Vec::new();
    let mut conflicts: Vec<AxisConflict> = Vec::new();

    for (axis, clip) in entries {
        if let Some(existing) = seen.get(axis) {
            let kept = content_states[existing.0].clip.clone();
            tracing::warn!(
                key = %axis,
                kept = %kept.0,
                rejected = %clip.0,
                "duplicate axis values"
            );
            conflicts.push(AxisConflict {
                axis: *axis,
                kept,
                rejected: clip.clone(),
            });
            continue;
        }

        let id = StateId(content_states.len());
        seen.insert(*axis, id);
        content_states.push(ContentState {
            name: axis.clip_name(),
            axis: *axis,
            clip: clip.clone(),
        });
        transitions.push(AnyStateTransition {
            target: id,
            predicate: Predicate::for_axis(axis)?,
        });
    }

    tracing::debug!(
        states = content_states.len(),
        conflicts = conflicts.len(),
        "state graph built"
    );

    Ok(GraphBuild {
        graph: StateGraph {
            parameters,
            idle_state: IdleState {
                name: IDLE_STATE_NAME.to_string(),
            },
            content_states,
            transitions,
        },
        conflicts,
    })
}

impl StateGraph {
    /// Content state whose any-state predicate holds for `values`, if any.
    ///
    /// Keys are unique, so at most one predicate can hold.
    pub fn select(&self, values: &ParameterValues) -> Option<&ContentState> {
        self.transitions
            .iter()
            .find(|t| t.predicate.holds(values))
            .and_then(|t| self.content_states.get(t.target.0))
    }

    /// Look up a content state by key.
    pub fn state_for(&self, axis: &AxisValues) -> Option<&ContentState> {
        self.content_states.iter().find(|s| s.axis == *axis)
    }

    /// Re-check the structural invariants.
    pub fn validate(&self) -> ForgeResult<()> {
        if self.transitions.len() != self.content_states.len() {
            return Err(ForgeError::validation(format!(
                "{} transitions for {} content states",
                self.transitions.len(),
                self.content_states.len()
            )));
        }

        let mut targets: Vec<usize> = self.transitions.iter().map(|t| t.target.0).collect();
        targets.sort_unstable();
        if targets.iter().enumerate().any(|(i, &t)| i != t) {
            return Err(ForgeError::validation(
                "every content state needs exactly one inbound transition",
            ));
        }

        for t in &self.transitions {
            for p in &self.parameters {
                if !t.predicate.conditions.iter().any(|c| c.parameter == p.name) {
                    return Err(ForgeError::validation(format!(
                        "transition to state {} does not test parameter '{}'",
                        t.target.0, p.name
                    )));
                }
            }
        }

        let mut keys: Vec<AxisValues> = self.content_states.iter().map(|s| s.axis).collect();
        keys.sort_unstable();
        if keys.windows(2).any(|w| w[0] == w[1]) {
            return Err(ForgeError::duplicate_axis_values(
                "two content states share a key",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/builder.rs"]
mod tests;
