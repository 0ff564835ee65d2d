use std::{
    cell::Cell,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
    rc::Rc,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pathmotion::{
    ManualClock, MotionConfig, MotionEngine, PathDefinition, Phase, RouteFile, Scheduler,
    SystemClock,
};

#[derive(Parser, Debug)]
#[command(name = "pathmotion", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one animation on a synthetic clock and print every snapshot as a JSON line.
    Simulate(SimulateArgs),
    /// Run one animation in real time, reporting progress on stderr.
    Play(PlayArgs),
    /// Print the head sample and trail at a fixed eased progress.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct RouteArgs {
    /// Route JSON (`from`, `to`, `svg_path`, `config`). Defaults to the built-in arc.
    #[arg(long)]
    route: Option<PathBuf>,

    /// Override the run duration in milliseconds.
    #[arg(long)]
    duration_ms: Option<f64>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Synthetic frame rate.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Stop simulating after this much synthetic time, even if unfinished.
    #[arg(long, default_value_t = 60_000.0)]
    until_ms: f64,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Frame rate of the real-time clock.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    route: RouteArgs,

    /// Eased progress in [0, 1].
    #[arg(long)]
    progress: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Play(args) => cmd_play(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn load_route(args: &RouteArgs) -> anyhow::Result<(PathDefinition, MotionConfig)> {
    let route = match &args.route {
        Some(p) => read_route_json(p)?,
        None => RouteFile::default(),
    };
    let (path, mut config) = route.resolve().context("resolve route")?;
    if let Some(ms) = args.duration_ms {
        if !ms.is_finite() {
            anyhow::bail!("--duration-ms must be a finite number (got {ms})");
        }
        config.duration_ms = ms;
    }
    Ok((path, config))
}

fn read_route_json(path: &Path) -> anyhow::Result<RouteFile> {
    RouteFile::from_path(path).with_context(|| format!("load route '{}'", path.display()))
}

fn frame_interval_ms(fps: f64) -> anyhow::Result<f64> {
    if !(fps.is_finite() && fps > 0.0) {
        anyhow::bail!("--fps must be a positive number (got {fps})");
    }
    Ok(1000.0 / fps)
}

fn completion_flag<S: Scheduler>(engine: &mut MotionEngine<S>) -> Rc<Cell<bool>> {
    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);
    engine.on_complete(move || {
        flag.set(true);
        Ok(())
    });
    done
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let (path, config) = load_route(&args.route)?;
    let clock = ManualClock::new(frame_interval_ms(args.fps)?);
    let mut engine = MotionEngine::new(clock, path, config)?;
    let done = completion_flag(&mut engine);

    let mut out = BufWriter::new(std::io::stdout().lock());
    engine.play();
    engine.scheduler_mut().advance(0.0);
    let mut frames = 0u64;
    loop {
        for snap in engine.pump()? {
            serde_json::to_writer(&mut out, &snap).context("write snapshot")?;
            out.write_all(b"\n")?;
            frames += 1;
        }
        if done.get() || engine.scheduler().now_ms() >= args.until_ms {
            break;
        }
        engine.scheduler_mut().step();
    }
    out.flush()?;

    if done.get() {
        tracing::info!(frames, "simulation complete");
    } else {
        tracing::warn!(frames, until_ms = args.until_ms, "simulation stopped before completion");
        engine.stop();
    }
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let (path, config) = load_route(&args.route)?;
    let clock = SystemClock::new(frame_interval_ms(args.fps)?);
    let mut engine = MotionEngine::new(clock, path, config)?;
    let done = completion_flag(&mut engine);

    let from = engine.path().origin().clone();
    let to = engine.path().destination().clone();
    eprintln!("{} ({}) -> {} ({})", from.name, from.code, to.name, to.code);

    engine.play();
    let mut last_percent = None;
    while engine.phase() != Phase::Idle {
        engine.scheduler().wait();
        for snap in engine.pump()? {
            if last_percent != Some(snap.progress_percent) {
                last_percent = Some(snap.progress_percent);
                eprintln!("{:>3}% complete", snap.progress_percent);
            }
        }
    }

    if done.get() {
        eprintln!("journey complete");
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let (path, config) = load_route(&args.route)?;
    let out = serde_json::json!({
        "head": pathmotion::sample(&path, args.progress),
        "trail": pathmotion::trail(&path, args.progress, &config.trail),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
