//! Axis values, canonical frame/clip names and the grammar that parses them back.

pub(crate) mod axis;
pub(crate) mod grammar;
pub(crate) mod namer;
