use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "flowmark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Export one full animation loop as an animated GIF.
    Export(ExportArgs),
    /// Run the animation headless at its target frame rate.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
struct SketchArgs {
    /// Optional JSON config; missing fields use the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the canvas width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the canvas height.
    #[arg(long)]
    height: Option<u32>,

    /// Override the marker speed seed.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Frame index (0-based); earlier frames are simulated so markers match a live run.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Output GIF path.
    #[arg(long, default_value = flowmark::DEFAULT_GIF_NAME)]
    out: PathBuf,

    /// Fail instead of replacing an existing file.
    #[arg(long)]
    no_overwrite: bool,

    /// GIF palette quantization speed, 1 (best) ..= 30 (fastest).
    #[arg(long, default_value_t = 10)]
    quantize_speed: i32,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    sketch: SketchArgs,

    /// Stop after this many frames (default: run until interrupted).
    #[arg(long)]
    frames: Option<u64>,

    /// Do not sleep between frames.
    #[arg(long)]
    unpaced: bool,

    /// Write the last rendered frame to this PNG when stopping.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Export(args) => cmd_export(args),
        Command::Play(args) => cmd_play(args),
    }
}

fn load_config(args: &SketchArgs) -> anyhow::Result<flowmark::SketchConfig> {
    let mut cfg = match &args.config {
        Some(path) => flowmark::SketchConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => flowmark::SketchConfig::default(),
    };
    if let Some(w) = args.width {
        cfg.canvas.width = w;
    }
    if let Some(h) = args.height {
        cfg.canvas.height = h;
    }
    if let Some(seed) = args.seed {
        cfg.seed = seed;
    }
    cfg.validate().context("invalid sketch config")?;
    Ok(cfg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.sketch)?;
    let mut driver = flowmark::FrameDriver::new(cfg)?;
    let mut surface = flowmark::CpuSurface::new(cfg.canvas)?;

    driver.skip_to(flowmark::FrameIndex(args.frame));
    let frame = driver.render_frame(&mut surface);
    flowmark::write_png(&frame, &args.out, cfg.palette.background.to_array())?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.sketch)?;
    let mut driver = flowmark::FrameDriver::new(cfg)?;

    let mut sink = flowmark::GifSink::new(flowmark::GifSinkOpts {
        overwrite: !args.no_overwrite,
        bg_rgba: cfg.palette.background.to_array(),
        quantize_speed: args.quantize_speed,
        ..flowmark::GifSinkOpts::new(&args.out)
    });

    tracing::info!(
        frames = driver.total_loop_frames(),
        fps = cfg.fps.as_f64(),
        "starting gif capture"
    );
    if let Err(e) = driver.export_loop(&mut sink) {
        tracing::error!(error = %e, out = %args.out.display(), "gif export failed");
        return Err(e.into());
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.sketch)?;
    let mut driver = flowmark::FrameDriver::new(cfg)?;
    let mut host = flowmark::RunLoop::new(
        &driver,
        flowmark::RunLoopOpts {
            max_frames: args.frames,
            unpaced: args.unpaced,
        },
    )?;

    let stats = host.run(&mut driver);
    eprintln!(
        "rendered {} frames ({} loops, {} late)",
        stats.frames, stats.loops_completed, stats.late_frames
    );

    if let Some(path) = args.snapshot.as_deref() {
        write_snapshot(&host, path, cfg.palette.background.to_array())?;
    }
    Ok(())
}

fn write_snapshot(host: &flowmark::RunLoop, path: &Path, bg: [u8; 4]) -> anyhow::Result<()> {
    let frame = host
        .last_frame()
        .context("no frame was rendered, nothing to snapshot")?;
    flowmark::write_png(frame, path, bg)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}
