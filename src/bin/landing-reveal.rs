use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use landing_reveal::{
    LandingConfig, LandingView, Playback, PointerScript, Rasterizer, ScriptedMove, stage_to_svg,
};

#[derive(Parser, Debug)]
#[command(name = "landing-reveal", version)]
struct Cli {
    /// JSON config overriding the built-in timings, viewport, and asset paths.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the page headlessly and print JSON-lines snapshots.
    Trace(TraceArgs),
    /// Render the page at a point in time as PNG (or SVG with `--svg`).
    Frame(FrameArgs),
    /// Print the effective configuration as JSON.
    Config,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Seconds of playback.
    #[arg(long, default_value_t = 4.0)]
    duration: f64,

    /// Emit a snapshot every N frames (the last frame is always emitted).
    #[arg(long, default_value_t = 1)]
    every: u64,

    /// Scripted pointer move, `T:X` or `T:X:Y`. Repeatable.
    #[arg(long = "pointer")]
    pointer: Vec<ScriptedMove>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Playback time in seconds.
    #[arg(long)]
    time: f64,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Write the SVG document instead of rasterizing it.
    #[arg(long)]
    svg: bool,

    /// Directory image hrefs are resolved against (defaults to the output's directory).
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Scripted pointer move, `T:X` or `T:X:Y`. Repeatable.
    #[arg(long = "pointer")]
    pointer: Vec<ScriptedMove>,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    match cli.cmd {
        Command::Trace(args) => cmd_trace(config, args),
        Command::Frame(args) => cmd_frame(config, args),
        Command::Config => cmd_config(&config),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<LandingConfig> {
    match path {
        Some(p) => LandingConfig::from_json_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(LandingConfig::default()),
    }
}

fn cmd_trace(config: LandingConfig, args: TraceArgs) -> anyhow::Result<()> {
    let every = args.every.max(1);
    let frames = config.fps.secs_to_frames_ceil(args.duration);
    let script = PointerScript::new(args.pointer);
    let mut view = LandingView::new(config).context("build view")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    Playback::run(&mut view, args.duration, &script, |report, view| {
        let last = report.frame.0 + 1 == frames;
        if report.frame.0 % every == 0 || last {
            let line = serde_json::to_string(&view.snapshot())?;
            writeln!(out, "{line}").map_err(anyhow::Error::from)?;
        }
        Ok(())
    })
    .context("play back")?;
    view.unmount();
    Ok(())
}

fn cmd_frame(config: LandingConfig, args: FrameArgs) -> anyhow::Result<()> {
    let viewport = config.viewport;
    let script = PointerScript::new(args.pointer);
    let mut view = LandingView::new(config).context("build view")?;
    Playback::run(&mut view, args.time, &script, |_, _| Ok(())).context("play back")?;
    let svg = stage_to_svg(view.stage());

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    if args.svg {
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    } else {
        let assets_root = args
            .assets
            .clone()
            .or_else(|| {
                args.out
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
            })
            .unwrap_or_else(|| PathBuf::from("."));
        let frame = Rasterizer::new(Some(assets_root.as_path()))
            .rasterize(&svg, viewport)
            .context("rasterize frame")?;
        image::save_buffer_with_format(
            &args.out,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    }

    view.unmount();
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_config(config: &LandingConfig) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(config).context("serialize config")?;
    println!("{json}");
    Ok(())
}
