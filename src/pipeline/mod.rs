//! Batch drivers that chain the stages and collect per-item failures.

pub(crate) mod batch;
pub(crate) mod config;
pub(crate) mod report;
