//! Motion clip synthesis from ordered frame sequences.

pub(crate) mod clip;
