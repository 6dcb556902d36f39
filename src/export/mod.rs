//! Persistence sinks for generated clips and graphs.

pub(crate) mod sink;
