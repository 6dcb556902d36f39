//! spriteforge turns multi-frame sprite sheets into named frames, motion clips and a parametric
//! animation state graph.
//!
//! # Pipeline overview
//!
//! 1. **Segment**: `PixelMask -> Vec<Region>` (4-connected components over the alpha channel)
//! 2. **Merge**: fuse horizontally adjacent regions separated by small gaps
//! 3. **Name**: order regions and assign `{Action}_{Direction}_{index}` names
//! 4. **Synthesize**: frame lists become [`MotionClip`]s under the distribute-then-hold timing law
//! 5. **Build**: `(AxisValues, ClipRef)` pairs become a [`StateGraph`] selected by four integer
//!    parameters (`state`, `direction`, `itemId`, `variant`)
//!
//! Every stage is a pure function over in-memory data. IO lives at the edges: images are decoded
//! into a [`PixelMask`] by the caller and results leave through an [`AssetSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod export;
mod foundation;
mod graph;
mod naming;
mod pipeline;
mod raster;

pub use animation::clip::{ClipKeyframe, ClipTiming, FrameRef, MotionClip, synthesize};
pub use export::sink::{AssetSink, InMemorySink, JsonDirSink, ensure_parent_dir, write_json};
pub use foundation::core::{Fps, FrameIndex, TIME_EPSILON};
pub use foundation::error::{ForgeError, ForgeResult};
pub use graph::builder::{
    AnyStateTransition, AxisConflict, ClipRef, Condition, ContentState, GraphBuild,
    IDLE_STATE_NAME, IdleState, PARAM_DIRECTION, PARAM_ITEM_ID, PARAM_STATE, PARAM_VARIANT,
    Parameter, ParameterValues, Predicate, StateGraph, StateId, build,
};
pub use graph::layout::{LayoutOptions, NodePosition, NodeRef, grid_layout};
pub use naming::axis::{Action, AxisValues, Direction, IDLE_STATE_CODE, MAX_AXIS_VALUE};
pub use naming::grammar::{FrameKey, parse, parse_frame_name};
pub use naming::namer::{Frame, frame_name, name_frames};
pub use pipeline::batch::{
    ClipBatchOutput, ClipManifest, ClipSource, SheetInput, SliceBatchOutput, SlicedSheet, export,
    run_clip_batch, run_slice_batch, slice_sheet,
};
pub use pipeline::config::{PipelineConfig, SegmentationConfig, TimingConfig};
pub use pipeline::report::{BatchReport, Issue, IssueKind};
pub use raster::mask::{PixelMask, crop_region};
pub use raster::merge::merge;
pub use raster::region::Region;
pub use raster::segment::{LabelMap, label, segment};
