use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use epicycler::{
    Canvas, Fps, FrameIndex, FrequencyComponent, Point, Trace, advance, analyze,
    ascending_frequencies, oval_points, rect_points, resample,
};

mod document;
mod scene;

#[derive(Parser, Debug)]
#[command(name = "epicycler", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single animation frame as a PNG.
    Frame(FrameArgs),
    /// Render a PNG frame sequence.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct SourceArgs {
    /// Input SVG document; every <path>'s `d` attribute is sampled.
    #[arg(long = "in", conflicts_with = "shape")]
    in_path: Option<PathBuf>,

    /// Synthetic path source, when no document is at hand.
    #[arg(long, value_enum)]
    shape: Option<ShapeKind>,

    /// Number of integer frequencies to analyze (1..=N).
    #[arg(long, default_value_t = 100)]
    freqs: usize,

    /// Optional resample spacing: densify samples so no gap exceeds this.
    #[arg(long)]
    spacing: Option<f64>,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 500)]
    height: u32,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeKind {
    /// An oval spanning most of the canvas.
    Oval,
    /// A small centered square.
    Rect,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Frame index (0-based). The trace is replayed from frame 0.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Frames per second used to map frame index to time.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of frames to render. The default covers one full cycle
    /// (2*pi seconds) at 60 fps.
    #[arg(long, default_value_t = 377)]
    frames: u64,

    /// Frames per second of the sequence.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Output directory for frame_NNNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let canvas = args.source.canvas();
    let components = args.source.components(canvas)?;
    let fps = Fps::new(args.fps, 1)?;
    let origin = canvas.center();

    let mut trace = Trace::new();
    let mut synthesis = advance(&components, 0.0, origin);
    trace.push(synthesis.tip);
    for frame in 1..=args.frame {
        synthesis = advance(&components, fps.time_at(FrameIndex(frame)), origin);
        trace.push(synthesis.tip);
    }

    let frame = scene::draw_frame(canvas, &components, origin, &synthesis, &trace)?;
    write_png(&args.out, &frame)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let canvas = args.source.canvas();
    let components = args.source.components(canvas)?;
    let fps = Fps::new(args.fps, 1)?;
    let origin = canvas.center();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let mut trace = Trace::new();
    for frame in 0..args.frames {
        let synthesis = advance(&components, fps.time_at(FrameIndex(frame)), origin);
        trace.push(synthesis.tip);

        let rendered = scene::draw_frame(canvas, &components, origin, &synthesis, &trace)?;
        let out = args.out_dir.join(format!("frame_{frame:05}.png"));
        write_png(&out, &rendered)?;
    }

    eprintln!("wrote {} frames to {}", args.frames, args.out_dir.display());
    Ok(())
}

impl SourceArgs {
    fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Run the analysis half of the pipeline: points, optional resample, DFT.
    fn components(&self, canvas: Canvas) -> anyhow::Result<Vec<FrequencyComponent>> {
        let mut points = match (&self.in_path, self.shape) {
            (Some(path), _) => document::load_points(path)?,
            (None, Some(ShapeKind::Oval)) => oval_points(
                canvas.center(),
                0.4 * f64::from(canvas.width),
                0.2 * f64::from(canvas.height),
                1000,
            ),
            (None, Some(ShapeKind::Rect)) => rect_points(Point::ZERO, 25.0, 25.0),
            (None, None) => anyhow::bail!("provide an input document (--in) or a --shape"),
        };

        if let Some(spacing) = self.spacing {
            points = resample(&points, spacing)?;
        }

        if points.is_empty() {
            tracing::warn!("no path samples extracted, rendering an empty scene");
            return Ok(Vec::new());
        }

        Ok(analyze(&points, &ascending_frequencies(self.freqs))?)
    }
}

fn write_png(out: &std::path::Path, frame: &scene::FrameRgba) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))
}
