//! Pixel-space stages: alpha masks, connected-component segmentation and region merging.

pub(crate) mod mask;
pub(crate) mod merge;
pub(crate) mod region;
pub(crate) mod segment;
