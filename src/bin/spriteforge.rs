use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "spriteforge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cut a sprite sheet into named frames.
    Slice(SliceArgs),
    /// Synthesize clips and the state graph from a clip manifest.
    Build(BuildArgs),
}

#[derive(Parser, Debug)]
struct SliceArgs {
    /// Input sprite sheet (PNG or any format `image` decodes).
    #[arg(long)]
    image: PathBuf,

    /// Action the sheet animates (Slice, Pierce, Crush, Watering, Fish).
    #[arg(long)]
    action: spriteforge::Action,

    /// Facing of the sheet (Down, Up, Side; Left/Right map to Side).
    #[arg(long)]
    direction: String,

    /// Output directory.
    #[arg(long)]
    out: PathBuf,

    /// Pipeline config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the alpha threshold from the config.
    #[arg(long)]
    alpha_threshold: Option<u8>,

    /// Override the merge gap (pixels) from the config.
    #[arg(long)]
    merge_gap: Option<u32>,

    /// Also write one cropped PNG per frame.
    #[arg(long, default_value_t = false)]
    export_frames: bool,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Clip manifest JSON (`{ "clips": [{ "name": ..., "frames": [...] }] }`).
    #[arg(long)]
    manifest: PathBuf,

    /// Output directory for clip and graph JSON.
    #[arg(long)]
    out: PathBuf,

    /// Pipeline config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the generated state graph.
    #[arg(long, default_value = "ToolActions")]
    graph_name: String,

    /// Also write cosmetic node positions next to the graph.
    #[arg(long, default_value_t = false)]
    layout: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Slice(args) => cmd_slice(args),
        Command::Build(args) => cmd_build(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<spriteforge::PipelineConfig> {
    let cfg = match path {
        Some(p) => spriteforge::PipelineConfig::from_json_file(p)
            .with_context(|| format!("load config '{}'", p.display()))?,
        None => spriteforge::PipelineConfig::default(),
    };
    cfg.validate()?;
    Ok(cfg)
}

fn cmd_slice(args: SliceArgs) -> anyhow::Result<()> {
    let mut cfg = load_config(args.config.as_deref())?;
    if let Some(t) = args.alpha_threshold {
        cfg.segmentation.alpha_threshold = t;
    }
    if let Some(g) = args.merge_gap {
        cfg.segmentation.merge_gap = g;
    }

    let direction = spriteforge::Direction::from_label(&args.direction)?;
    let (mask, img) = spriteforge::PixelMask::open(&args.image)?;
    let frames = spriteforge::slice_sheet(&mask, args.action, direction, &cfg.segmentation)?;

    let sheet = spriteforge::SlicedSheet {
        label: args.image.display().to_string(),
        action: args.action,
        direction,
        frames,
    };

    let manifest_path = args
        .out
        .join(format!("{}_{}.frames.json", args.action, direction));
    spriteforge::write_json(&manifest_path, &sheet)?;

    if args.export_frames {
        for frame in &sheet.frames {
            let crop = spriteforge::crop_region(&img, &frame.region)?;
            let path = args.out.join(format!("{}.png", frame.name));
            crop.save(&path)
                .with_context(|| format!("write png '{}'", path.display()))?;
        }
    }

    eprintln!(
        "wrote {} frames to {}",
        sheet.frames.len(),
        manifest_path.display()
    );
    Ok(())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;
    let manifest = spriteforge::ClipManifest::from_json_file(&args.manifest)?;

    let output = spriteforge::run_clip_batch(&manifest.clips, &cfg)?;

    let mut sink = spriteforge::JsonDirSink::new(args.out.clone());
    spriteforge::export(&output, &args.graph_name, &mut sink)?;
    if args.layout {
        let positions =
            spriteforge::grid_layout(&output.graph, &spriteforge::LayoutOptions::default());
        let path = args.out.join(format!("{}.layout.json", args.graph_name));
        spriteforge::write_json(&path, &positions)?;
    }

    eprintln!("{}", output.report.summary());
    eprintln!(
        "wrote {} clips and {}",
        output.clips.len(),
        sink.graph_path(&args.graph_name).display()
    );
    Ok(())
}
