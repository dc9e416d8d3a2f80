//! slab — relax a fully occupied crystal slab by surface diffusion.
//!
//! Starts from a `width × height` block of atoms between two empty guard
//! rows and runs the KMC engine until the step limit, the time limit, or a
//! stall.  Prints the lattice before and after, and optionally writes
//! `steps.csv` / `snapshots.csv` to an output directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;

use kmc_core::{Dims, KmcConfig, PolicyKind, SimClock};
use kmc_events::EventPolicy;
use kmc_lattice::Lattice;
use kmc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use kmc_sim::{MoveRecord, RunSummary, SimBuilder, SimObserver, StallReason};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "slab")]
#[command(about = "Kinetic Monte Carlo surface diffusion on a 2D slab")]
#[command(version)]
struct Cli {
    /// JSON config file (a serialized `KmcConfig`); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lattice width (columns, periodic)
    #[arg(long)]
    width: Option<usize>,

    /// Lattice height (interior rows)
    #[arg(long)]
    height: Option<usize>,

    /// Maximum number of accepted steps
    #[arg(short, long)]
    steps: Option<u64>,

    /// Stop once simulated time reaches this many seconds
    #[arg(long)]
    max_time: Option<f64>,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Eligibility policy: vacancy, atom_fixed, atom_refined
    #[arg(short, long)]
    policy: Option<PolicyKind>,

    /// Temperature, K
    #[arg(short, long)]
    temperature: Option<f64>,

    /// Snapshot every N steps (0 = no snapshots)
    #[arg(long)]
    interval: Option<u64>,

    /// Directory for steps.csv / snapshots.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the lattice at every snapshot
    #[arg(short, long)]
    render: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<(KmcConfig, Option<PathBuf>, bool)> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => KmcConfig::default(),
        };

        let dims = Dims::new(
            self.width.unwrap_or(config.dims.width),
            self.height.unwrap_or(config.dims.height),
        );
        config.dims = dims;
        if let Some(steps) = self.steps {
            config.run.max_steps = steps;
        }
        if self.max_time.is_some() {
            config.run.max_time = self.max_time;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
        if let Some(t) = self.temperature {
            config.physics.temperature = t;
        }
        if let Some(interval) = self.interval {
            config.run.output_interval_steps = interval;
        }
        Ok((config, self.output, self.render))
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts moves per direction, optionally renders snapshots, and forwards
/// everything to the CSV observer when one is configured.
struct SlabObserver<W: OutputWriter> {
    inner:     Option<SimOutputObserver<W>>,
    render:    bool,
    moves:     [u64; 4],
    snapshots: usize,
}

impl<W: OutputWriter> SlabObserver<W> {
    fn new(inner: Option<SimOutputObserver<W>>, render: bool) -> Self {
        Self { inner, render, moves: [0; 4], snapshots: 0 }
    }
}

impl<W: OutputWriter> SimObserver for SlabObserver<W> {
    fn on_step(&mut self, record: &MoveRecord, lattice: &Lattice) {
        self.moves[record.direction as usize] += 1;
        if let Some(inner) = &mut self.inner {
            inner.on_step(record, lattice);
        }
    }

    fn on_snapshot(&mut self, clock: &SimClock, lattice: &Lattice) {
        self.snapshots += 1;
        if self.render {
            println!("── {clock} ──");
            print!("{lattice}");
        }
        if let Some(inner) = &mut self.inner {
            inner.on_snapshot(clock, lattice);
        }
    }

    fn on_stall(&mut self, clock: &SimClock, reason: StallReason) {
        println!("stalled at {clock}: {reason}");
        if let Some(inner) = &mut self.inner {
            inner.on_stall(clock, reason);
        }
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        if let Some(inner) = &mut self.inner {
            inner.on_run_end(summary);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let (config, output_dir, render) = cli.into_config()?;

    println!("=== slab — surface_kmc ===");
    println!(
        "Lattice: {}×{}  |  Policy: {}  |  T = {} K  |  Seed: {}",
        config.dims.width,
        config.dims.height,
        config.policy.as_str(),
        config.physics.temperature,
        config.seed,
    );
    println!();

    // 1. Build sim.
    let mut sim = SimBuilder::from_config(&config)?.build()?;
    info!("{} atoms, policy {}", sim.lattice().atom_count(), sim.policy().name());
    if !render {
        print!("{}", sim.lattice());
        println!();
    }

    // 2. Set up output.
    let inner = match &output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            Some(SimOutputObserver::new(CsvWriter::new(Path::new(dir))?))
        }
        None => None,
    };
    let mut obs = SlabObserver::new(inner, render);

    // 3. Run.
    let t0 = Instant::now();
    let summary = sim.run(&mut obs)?;
    let wall = t0.elapsed();

    if let Some(e) = obs.inner.as_mut().and_then(SimOutputObserver::take_error) {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!();
    if !render {
        print!("{}", sim.lattice());
        println!();
    }
    println!("Run complete in {:.3} s ({:?})", wall.as_secs_f64(), summary.stop);
    println!("  steps     : {}", summary.total_steps);
    println!("  sim time  : {:.6e} s", summary.elapsed);
    println!("  snapshots : {}", obs.snapshots);
    println!(
        "  moves     : left {}  right {}  up {}  down {}",
        obs.moves[0], obs.moves[1], obs.moves[2], obs.moves[3]
    );
    if let Some(dir) = &output_dir {
        println!("  output    : {}", dir.display());
    }

    Ok(())
}
