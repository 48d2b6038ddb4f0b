use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use slidefx::{CompletionPolicy, Millis, Shape, Simulator, SliderConfig};

#[derive(Parser, Debug)]
#[command(name = "slidefx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a navigation script on a virtual clock and print the event log as JSON.
    Simulate(SimulateArgs),
    /// Print the resolved configuration as JSON.
    Config(ConfigArgs),
    /// Print the SVG markup of every item, optionally after running a script.
    Markup(MarkupArgs),
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Slider options JSON (merged shallowly over the defaults).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Number of items in the carousel.
    #[arg(long, default_value_t = 3)]
    items: usize,

    /// Steps separated by commas or spaces: `next`, `prev`, `wait:<ms>`, `end`.
    #[arg(long, default_value = "")]
    script: String,

    /// Simulate an environment without transition-end events.
    #[arg(long, default_value_t = false)]
    no_transition_end: bool,

    /// Only deliver transition-end on explicit `end` steps.
    #[arg(long, default_value_t = false)]
    manual_end: bool,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Pretty-print the JSON report.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct MarkupArgs {
    #[command(flatten)]
    run: RunArgs,

    /// Virtual time to sample the outlines at (defaults to the end of the script).
    #[arg(long)]
    at: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Config(args) => cmd_config(args),
        Command::Markup(args) => cmd_markup(args),
    }
}

fn load_config(args: &ConfigArgs) -> anyhow::Result<SliderConfig> {
    let cfg = match &args.config {
        Some(path) => SliderConfig::from_path(path)
            .with_context(|| format!("load slider options '{}'", path.display()))?,
        None => SliderConfig::new()?,
    };
    Ok(cfg)
}

fn run_script(args: &RunArgs) -> anyhow::Result<Simulator> {
    let cfg = load_config(&args.config)?;
    let steps = slidefx::parse_script(&args.script).context("parse script")?;
    let policy = if args.no_transition_end {
        CompletionPolicy::Immediate
    } else {
        CompletionPolicy::TransitionEnd
    };
    let mut sim = Simulator::new(args.items, cfg, policy, !args.manual_end)?;
    sim.run(&steps);
    Ok(sim)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let sim = run_script(&args.run)?;
    let report = sim.report();
    let out = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

fn cmd_markup(args: MarkupArgs) -> anyhow::Result<()> {
    let mut sim = run_script(&args.run)?;
    if let Some(at) = args.at {
        let at = Millis(at);
        if at < sim.now() {
            anyhow::bail!("--at {at} is before the end of the script ({})", sim.now());
        }
        sim.advance_to(at);
    }
    for (i, path) in sim.item_paths().iter().enumerate() {
        let shape = Shape::parse(&path.to_svg()).with_context(|| format!("item {i} outline"))?;
        println!("{}", slidefx::item_svg_markup(&shape)?);
    }
    Ok(())
}
