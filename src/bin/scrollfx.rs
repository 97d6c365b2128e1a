use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scrollfx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scroll through a scene, printing one JSON frame per line.
    Sweep(SweepArgs),
    /// Jump to one scroll offset and print the settled frame.
    Frame(FrameArgs),
    /// Print how a counter label is split into prefix, magnitude and rest.
    Label(LabelArgs),
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First scroll offset.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last scroll offset (defaults to the bottom of the last section).
    #[arg(long)]
    to: Option<f64>,

    /// Scroll distance per frame.
    #[arg(long, default_value_t = 50.0)]
    step: f64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Scroll offset in pixels.
    #[arg(long)]
    scroll: f64,

    /// Seconds of frames to run after scrolling.
    #[arg(long, default_value_t = 0.0)]
    settle: f64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct LabelArgs {
    /// Label text, e.g. "£33m".
    text: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Sweep(args) => cmd_sweep(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Label(args) => cmd_label(args),
    }
}

fn read_scene_json(path: &Path) -> anyhow::Result<scrollfx::SceneDef> {
    let f = File::open(path).with_context(|| format!("open scene '{}'", path.display()))?;
    let r = BufReader::new(f);
    let def: scrollfx::SceneDef =
        serde_json::from_reader(r).with_context(|| "parse scene JSON")?;
    Ok(def)
}

fn frame_interval(fps: f64) -> anyhow::Result<f64> {
    if !fps.is_finite() || fps <= 0.0 {
        anyhow::bail!("--fps must be positive, got {fps}");
    }
    Ok(1.0 / fps)
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let def = read_scene_json(&args.in_path)?;
    let mut scene = scrollfx::Scene::from_def(&def)?;
    let dt = frame_interval(args.fps)?;
    if !args.step.is_finite() || args.step <= 0.0 {
        anyhow::bail!("--step must be positive, got {}", args.step);
    }

    let to = args.to.unwrap_or_else(|| {
        def.sections
            .iter()
            .map(|s| s.rect.top + s.rect.height)
            .fold(0.0, f64::max)
    });

    if !args.from.is_finite() || !to.is_finite() {
        anyhow::bail!("sweep range must be finite, got {}..{to}", args.from);
    }

    // Offsets are derived from the step index so large offsets still advance.
    let frames = if to >= args.from {
        ((to - args.from) / args.step).floor() as usize + 1
    } else {
        0
    };
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for i in 0..frames {
        scene.on_scroll(args.from + i as f64 * args.step);
        scene.on_frame(i as f64 * dt);
        serde_json::to_writer(&mut out, &scene.snapshot()).with_context(|| "write frame")?;
        writeln!(out).with_context(|| "write frame")?;
    }
    out.flush().with_context(|| "flush stdout")?;

    tracing::info!(frames, "sweep finished");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let def = read_scene_json(&args.in_path)?;
    let mut scene = scrollfx::Scene::from_def(&def)?;
    let dt = frame_interval(args.fps)?;

    scene.on_scroll(args.scroll);
    let mut now = 0.0;
    while now <= args.settle {
        scene.on_frame(now);
        now += dt;
    }

    let json = serde_json::to_string_pretty(&scene.snapshot()).with_context(|| "encode frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_label(args: LabelArgs) -> anyhow::Result<()> {
    let label = scrollfx::LabelDescriptor::parse(&args.text);
    let json = serde_json::to_string_pretty(&label).with_context(|| "encode label")?;
    println!("{json}");
    Ok(())
}
