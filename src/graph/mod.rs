//! Parametric animation state graphs built from (axis values, clip) pairs.

pub(crate) mod builder;
pub(crate) mod layout;
