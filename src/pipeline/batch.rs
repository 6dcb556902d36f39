use std::collections::HashMap;
use std::path::Path;

use anyhow::Context as _;

use crate::animation::clip::{FrameRef, MotionClip, synthesize};
use crate::export::sink::AssetSink;
use crate::foundation::error::{ForgeError, ForgeResult};
use crate::graph::builder::{ClipRef, StateGraph, build};
use crate::naming::axis::{Action, AxisValues, Direction};
use crate::naming::grammar::parse;
use crate::naming::namer::{Frame, name_frames};
use crate::pipeline::config::{PipelineConfig, SegmentationConfig};
use crate::pipeline::report::BatchReport;
use crate::raster::mask::PixelMask;
use crate::raster::merge::merge;
use crate::raster::segment::segment;

/// Segment, merge and name one sheet.
///
/// Returns [`ForgeError::EmptySegmentation`] when the mask has no opaque pixels.
#[tracing::instrument(skip(mask, cfg), fields(width = mask.width(), height = mask.height()))]
pub fn slice_sheet(
    mask: &PixelMask,
    action: Action,
    direction: Direction,
    cfg: &SegmentationConfig,
) -> ForgeResult<Vec<Frame>> {
    let regions = segment(mask, cfg.alpha_threshold);
    if regions.is_empty() {
        return Err(ForgeError::empty_segmentation(format!(
            "{action}_{direction}: no pixels with alpha >= {}",
            cfg.alpha_threshold
        )));
    }
    let merged = merge(&regions, cfg.merge_gap);
    tracing::debug!(
        regions = regions.len(),
        merged = merged.len(),
        "sheet segmented"
    );
    Ok(name_frames(&merged, action, direction))
}

/// One source image of a slice batch. Directions come from the caller's folder labels.
#[derive(Clone, Debug)]
pub struct SheetInput {
    /// Display label used in reports (file name, folder).
    pub label: String,
    /// Action the sheet animates.
    pub action: Action,
    /// Raw direction label, resolved with [`Direction::from_label`].
    pub direction_label: String,
    /// Alpha channel of the sheet.
    pub mask: PixelMask,
}

/// Frames cut from one sheet.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SlicedSheet {
    /// Source label.
    pub label: String,
    /// Action.
    pub action: Action,
    /// Resolved direction.
    pub direction: Direction,
    /// Named frames, in order.
    pub frames: Vec<Frame>,
}

/// Result of [`run_slice_batch`].
#[derive(Clone, Debug, Default)]
pub struct SliceBatchOutput {
    /// Sheets that produced frames.
    pub sheets: Vec<SlicedSheet>,
    /// Counts and skipped sheets.
    pub report: BatchReport,
}

/// Slice every sheet, skipping (and reporting) unrecognized directions and empty images.
#[tracing::instrument(skip(sheets, cfg), fields(sheets = sheets.len()))]
pub fn run_slice_batch(sheets: Vec<SheetInput>, cfg: &SegmentationConfig) -> SliceBatchOutput {
    let mut out = SliceBatchOutput::default();
    for sheet in sheets {
        let direction = match Direction::from_label(&sheet.direction_label) {
            Ok(d) => d,
            Err(err) => {
                out.report.record_skip(&sheet.label, &err);
                continue;
            }
        };
        match slice_sheet(&sheet.mask, sheet.action, direction, cfg) {
            Ok(frames) => {
                out.report.record_ok();
                out.sheets.push(SlicedSheet {
                    label: sheet.label,
                    action: sheet.action,
                    direction,
                    frames,
                });
            }
            Err(err) => out.report.record_skip(&sheet.label, &err),
        }
    }
    out
}

/// Named frame list that becomes one clip.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClipSource {
    /// Clip name in the `{Action}_{Direction}_Clip_{ItemId}[_{Variant}]` grammar.
    pub name: String,
    /// Frames in playback order.
    pub frames: Vec<FrameRef>,
}

impl ClipSource {
    /// Clip source for a sliced sheet, using the canonical clip name for `item_id`/`variant`.
    pub fn from_sheet(sheet: &SlicedSheet, item_id: u32, variant: u32) -> Self {
        let axis = AxisValues::new(sheet.action, sheet.direction, item_id).with_variant(variant);
        Self {
            name: axis.clip_name(),
            frames: sheet
                .frames
                .iter()
                .map(|f| FrameRef(f.name.clone()))
                .collect(),
        }
    }
}

/// On-disk list of clip sources.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClipManifest {
    /// Clip sources in processing order.
    pub clips: Vec<ClipSource>,
}

impl ClipManifest {
    /// Read and parse a JSON manifest.
    pub fn from_json_file(path: &Path) -> ForgeResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest '{}'", path.display()))?;
        Ok(serde_json::from_str(&s)?)
    }
}

/// Result of [`run_clip_batch`].
#[derive(Clone, Debug)]
pub struct ClipBatchOutput {
    /// Synthesized clips, in source order.
    pub clips: Vec<MotionClip>,
    /// Graph over every synthesized clip.
    pub graph: StateGraph,
    /// Counts and skipped sources.
    pub report: BatchReport,
}

/// Parse, synthesize and wire every clip source into one state graph.
///
/// Invalid timing fails the whole run before any clip is built. Unparseable names, empty frame
/// lists and keys already claimed by an earlier source are skipped and reported, so the graph
/// build never sees a duplicate key.
#[tracing::instrument(skip(sources, cfg), fields(sources = sources.len()))]
pub fn run_clip_batch(sources: &[ClipSource], cfg: &PipelineConfig) -> ForgeResult<ClipBatchOutput> {
    cfg.validate()?;
    let timing = cfg.timing.clip_timing();

    let mut report = BatchReport::default();
    let mut claimed: HashMap<AxisValues, &str> = HashMap::new();
    let mut clips: Vec<MotionClip> = Vec::new();

    for source in sources {
        let axis = match parse(&source.name) {
            Ok(axis) => axis,
            Err(err) => {
                report.record_skip(&source.name, &err);
                continue;
            }
        };

        if let Some(kept) = claimed.get(&axis) {
            let err = ForgeError::duplicate_axis_values(format!(
                "{axis} already produced by '{kept}'"
            ));
            report.record_skip(&source.name, &err);
            continue;
        }

        match synthesize(axis, &source.frames, &timing, cfg.timing.fps) {
            Ok(clip) => {
                claimed.insert(axis, &source.name);
                report.record_ok();
                clips.push(clip);
            }
            Err(err) => report.record_skip(&source.name, &err),
        }
    }

    let entries: Vec<(AxisValues, ClipRef)> = clips
        .iter()
        .map(|c| (c.axis, ClipRef(c.name.clone())))
        .collect();
    // Keys are unique after the dedup above.
    let graph = build(&entries)?.into_strict()?;

    tracing::info!(
        clips = clips.len(),
        skipped = report.skipped,
        "clip batch complete"
    );

    Ok(ClipBatchOutput {
        clips,
        graph,
        report,
    })
}

/// Persist every clip and the graph through `sink`.
pub fn export(
    output: &ClipBatchOutput,
    graph_name: &str,
    sink: &mut dyn AssetSink,
) -> ForgeResult<()> {
    for clip in &output.clips {
        sink.write_clip(clip)?;
    }
    sink.write_graph(graph_name, &output.graph)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/batch.rs"]
mod tests;
