use std::{fs, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use scrolly::{ContainerBounds, Engine, Storyboard, presets};

#[derive(Parser, Debug)]
#[command(name = "scrolly", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse and validate a storyboard JSON.
    Validate(ValidateArgs),
    /// Drive a linear scroll trace through a mounted engine and print the
    /// evaluated frames as JSON lines, followed by the settle decision.
    Simulate(SimulateArgs),
    /// Resolve one candidate scroll position against the storyboard's
    /// pinned regions.
    Snap(SnapArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input storyboard JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input storyboard JSON; omitted = the built-in gallery.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Number of scroll steps from top to bottom.
    #[arg(long, default_value_t = 60)]
    steps: u32,

    /// Viewport height in scroll units.
    #[arg(long, default_value_t = 1000.0)]
    viewport: f64,
}

#[derive(Parser, Debug)]
struct SnapArgs {
    /// Input storyboard JSON; omitted = the built-in gallery.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Candidate position, normalized to [0,1].
    #[arg(long)]
    at: f64,

    /// Viewport height in scroll units.
    #[arg(long, default_value_t = 1000.0)]
    viewport: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Snap(args) => cmd_snap(args),
    }
}

fn read_storyboard(path: Option<&PathBuf>) -> anyhow::Result<Storyboard> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("open storyboard '{}'", path.display()))?;
            Ok(Storyboard::from_json(&json)?)
        }
        None => Ok(presets::gallery()),
    }
}

/// Stack the sections consecutively and register every pinned region. The
/// document extent becomes the sum of the pinned spans.
fn mount(board: &Storyboard, viewport: f64) -> anyhow::Result<Engine> {
    let mut engine = Engine::new(board)?;

    let max_scroll: f64 = board
        .sections
        .iter()
        .map(|s| s.config.pin_span * viewport)
        .sum();
    engine.resize(max_scroll, viewport);

    let mut top = 0.0;
    for section in &board.sections {
        engine.activate_section(&section.id, ContainerBounds {
            top,
            height: viewport,
        })?;
        top += section.config.pin_span * viewport;
    }
    Ok(engine)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let board = read_storyboard(Some(&args.in_path))?;
    eprintln!(
        "ok: {} sections, snap buffer {}",
        board.sections.len(),
        board.snap.buffer
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.steps > 0, "steps must be > 0");
    anyhow::ensure!(args.viewport > 0.0, "viewport must be > 0");

    let board = read_storyboard(args.in_path.as_ref())?;
    let mut engine = mount(&board, args.viewport)?;
    let max_scroll = engine.metrics().max_offset;

    for step in 0..=args.steps {
        let offset = max_scroll * f64::from(step) / f64::from(args.steps);
        engine.record_scroll(offset);
        let update = engine
            .tick()
            .context("engine went away mid-simulation (bug)")?;
        println!("{}", serde_json::to_string(&update)?);
    }

    match engine.settle() {
        Some(decision) => eprintln!(
            "settle: snap to {:.4} ({:.0} abs) over {:.2}s",
            decision.target,
            engine.to_offset(decision.target),
            decision.duration_secs
        ),
        None => eprintln!("settle: free (no snap)"),
    }

    engine.teardown();
    Ok(())
}

fn cmd_snap(args: SnapArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.at),
        "candidate position must be in [0,1]"
    );

    let board = read_storyboard(args.in_path.as_ref())?;
    let mut engine = mount(&board, args.viewport)?;

    engine.record_scroll(engine.to_offset(args.at));
    match engine.settle() {
        Some(decision) => println!("{}", serde_json::to_string(&decision)?),
        None => println!("{{\"target\":{},\"free\":true}}", args.at),
    }

    engine.teardown();
    Ok(())
}
