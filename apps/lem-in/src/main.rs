//! lem-in: move every ant from `##start` to `##end` in as few turns as
//! possible and print the moves, one line per turn.
//!
//! ```text
//! lem-in farm.txt                       # L1-a L2-b ... on stdout
//! lem-in farm.txt --format csv -o out   # out/moves.csv
//! RUST_LOG=debug lem-in farm.txt        # planning details on stderr
//! ```

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use colony_graph::Path;
use colony_input::load_colony_path;
use colony_output::{CsvWriter, LineWriter, OutputWriter, SimOutputObserver};
use colony_sim::{Sim, SimBuilder, SimSummary};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `L<ant>-<room>` tokens on stdout.
    Text,
    /// `moves.csv` in the output directory.
    Csv,
    /// `output.db` in the output directory (needs the `sqlite` feature).
    Sqlite,
}

#[derive(Debug, Parser)]
#[command(name = "lem-in", version, about)]
struct Args {
    /// Ant farm description.
    file: PathBuf,

    /// Where the turn records go.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Directory for file-based formats.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Suppress the run summary on stderr.
    #[arg(short, long)]
    quiet: bool,
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only turn lines.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let t0 = Instant::now();
    let input = load_colony_path(&args.file)
        .with_context(|| format!("loading {}", args.file.display()))?;
    let config = input.config();

    let mut sim = SimBuilder::new(config, input.colony)
        .build()
        .context("planning routes")?;
    info!(
        routes = sim.paths.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "routes planned"
    );
    for path in &sim.paths {
        debug!(route = %path.describe(&sim.colony), hops = path.hops());
    }

    let summary = match args.format {
        Format::Text => {
            let stdout = BufWriter::new(io::stdout().lock());
            run_with(&mut sim, LineWriter::new(stdout))?
        }
        Format::Csv => {
            std::fs::create_dir_all(&args.output)
                .with_context(|| format!("creating {}", args.output.display()))?;
            run_with(&mut sim, CsvWriter::new(&args.output)?)?
        }
        Format::Sqlite => run_sqlite(&mut sim, &args.output)?,
    };

    if !args.quiet {
        report(&summary, &sim.paths, &args, t0);
    }
    Ok(())
}

/// Run the simulation to completion, streaming every turn into `writer`.
fn run_with<W: OutputWriter>(sim: &mut Sim, writer: W) -> Result<SimSummary> {
    let mut observer = SimOutputObserver::new(writer);
    let summary = sim.run(&mut observer);
    if let Some(err) = observer.take_error() {
        return Err(err).context("writing turn records");
    }
    Ok(summary)
}

#[cfg(feature = "sqlite")]
fn run_sqlite(sim: &mut Sim, dir: &std::path::Path) -> Result<SimSummary> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    run_with(sim, colony_output::SqliteWriter::new(dir)?)
}

#[cfg(not(feature = "sqlite"))]
fn run_sqlite(_sim: &mut Sim, _dir: &std::path::Path) -> Result<SimSummary> {
    anyhow::bail!("sqlite output needs a build with `--features sqlite`")
}

fn report(summary: &SimSummary, paths: &[Path], args: &Args, t0: Instant) {
    let longest = paths.iter().map(Path::hops).max().unwrap_or(0);
    eprintln!();
    eprintln!("=== lem-in ===");
    eprintln!("Ants:    {}  |  Routes: {}  |  Longest route: {longest} hops", summary.ants, paths.len());
    eprintln!("Turns:   {}  |  Arrived: {}/{}", summary.turns, summary.arrived, summary.ants);
    if args.format != Format::Text {
        eprintln!("Output:  {}", args.output.display());
    }
    eprintln!("Elapsed: {:.2?}", t0.elapsed());
}
