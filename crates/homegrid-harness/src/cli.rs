use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use homegrid::{
    Grid, HomeConfig, HomeSession, IconId, LayoutSnapshot, LayoutState, MemoryStore, Surface,
    TracingTelemetry, default_state, place, write_atomic,
};
use web_time::Instant;

use crate::error::{HarnessError, Result};
use crate::render::render_grid;
use crate::trace::{parse_trace, replay};

#[derive(Debug, Parser)]
#[command(
    name = "homegrid",
    about = "Inspect launcher layouts and replay pointer traces",
    version
)]
pub struct Cli {
    /// Engine config (TOML, or JSON when the extension is `.json`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log engine decisions at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a layout.
    Show(ShowArgs),

    /// Move one icon and print the resolved layout.
    Place(PlaceArgs),

    /// Feed a recorded pointer trace through a home session.
    Replay(ReplayArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Layout document to read; the built-in catalog when omitted.
    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Surface to print instead of the one stored in the layout.
    #[arg(long, value_parser = parse_surface)]
    pub surface: Option<Surface>,
}

#[derive(Debug, Clone, Args)]
pub struct PlaceArgs {
    /// Icon to move.
    #[arg(long)]
    pub id: String,

    /// Target cell index (row-major).
    #[arg(long)]
    pub to: usize,

    /// Destination surface; the layout's current surface when omitted.
    #[arg(long, value_parser = parse_surface)]
    pub surface: Option<Surface>,

    #[arg(long)]
    pub state: Option<PathBuf>,

    /// Write the result back to `--state`.
    #[arg(long)]
    pub write: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// JSON trace file.
    pub trace: PathBuf,

    /// Layout to seed the session with. Invalid documents fall back to
    /// the built-in catalog, as a real host would.
    #[arg(long)]
    pub state: Option<PathBuf>,
}

fn parse_surface(raw: &str) -> std::result::Result<Surface, String> {
    let number: u8 = raw
        .parse()
        .map_err(|_| format!("surface must be 1 or 2, got {raw:?}"))?;
    Surface::try_from(number)
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    crate::init_logging(cli.verbose);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(cli, &mut out)
}

pub fn run_with(cli: Cli, out: &mut impl Write) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Show(args) => run_show(&config, &args, cli.json, out),
        Commands::Place(args) => run_place(&config, &args, cli.json, out),
        Commands::Replay(args) => run_replay(config, &args, cli.json, out),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn run_show(config: &HomeConfig, args: &ShowArgs, json: bool, out: &mut impl Write) -> Result<()> {
    let grid = config.grid()?;
    let mut state = read_state(args.state.as_deref(), &grid)?;
    if let Some(surface) = args.surface {
        state.surface = surface;
    }
    print_state(&grid, &state, json, out)
}

fn run_place(
    config: &HomeConfig,
    args: &PlaceArgs,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    if args.write && args.state.is_none() {
        return Err(HarnessError::invalid("--write needs --state"));
    }
    let grid = config.grid()?;
    let mut state = read_state(args.state.as_deref(), &grid)?;
    let surface = args.surface.unwrap_or(state.surface);
    let moving = IconId::new(args.id.as_str());

    state.icons = place(&grid, &state.icons, &moving, args.to, surface)?;
    state.surface = surface;
    tracing::info!(icon = %moving, to = args.to, %surface, "placed");

    if args.write
        && let Some(path) = &args.state
    {
        write_state(path, &state)?;
    }
    print_state(&grid, &state, json, out)
}

fn run_replay(
    config: HomeConfig,
    args: &ReplayArgs,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let steps = parse_trace(&std::fs::read_to_string(&args.trace)?)?;

    let mut store = MemoryStore::new();
    if let Some(path) = &args.state {
        store = store.with_entry(
            config.home.storage_key.clone(),
            std::fs::read_to_string(path)?,
        );
    }
    let mut session = HomeSession::new(config, store, TracingTelemetry)?;
    let entries = replay(&mut session, &steps, Instant::now());

    if json {
        let report = serde_json::json!({
            "actions": entries,
            "layout": LayoutSnapshot::from_state(session.state()),
            "editing": session.is_editing(),
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    for entry in &entries {
        writeln!(out, "{:>6} ms  {:?}", entry.t_ms, entry.action)?;
    }
    if session.is_editing() {
        writeln!(out, "(edit mode)")?;
    }
    write!(
        out,
        "{}",
        render_grid(session.grid(), session.displayed_icons(), session.surface())
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Layout files
// ---------------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<HomeConfig> {
    let Some(path) = path else {
        return Ok(HomeConfig::default());
    };
    let config = if path.extension().is_some_and(|ext| ext == "json") {
        HomeConfig::from_json_file(path)?
    } else {
        HomeConfig::from_toml_file(path)?
    };
    Ok(config.validated()?)
}

/// Strict read: unlike a session start, a bad document is an error here.
fn read_state(path: Option<&Path>, grid: &Grid) -> Result<LayoutState> {
    let Some(path) = path else {
        return Ok(default_state());
    };
    let snapshot: LayoutSnapshot = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    Ok(snapshot.into_state(grid)?)
}

fn write_state(path: &Path, state: &LayoutState) -> Result<()> {
    let json = serde_json::to_string_pretty(&LayoutSnapshot::from_state(state))?;
    write_atomic(path, &json)?;
    Ok(())
}

fn print_state(grid: &Grid, state: &LayoutState, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        let snapshot = LayoutSnapshot::from_state(state);
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    } else {
        write!(out, "{}", render_grid(grid, &state.icons, state.surface))?;
    }
    Ok(())
}
