//! Command-line entry point: read stops, fetch distances, solve, print.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{info, span, Instrument, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{DEPOT, MAX_ELEMENTS, RUNS, SEED};
use crate::config::Settings;
use crate::distance::providers::GoogleDistanceMatrix;
use crate::output::{save_history, write_report};
use crate::setup::init::setup;
use crate::solver::{CheapestArc, RouteSolver, SolverConfig, TabuSearch};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Cheapest-arc construction followed by tabu search
    Tabu,
    /// Cheapest-arc construction only
    CheapestArc,
}

#[derive(Debug, Parser)]
#[command(name = "tsp-solver", version, about = "Shortest round trip through a list of stops")]
pub struct Cli {
    /// Stops file: header row with lat, long and label columns
    pub input: PathBuf,

    /// Maximum origins x destinations elements per distance matrix request
    #[arg(long, default_value_t = MAX_ELEMENTS)]
    pub max_elements: usize,

    #[arg(long, value_enum, default_value_t = Strategy::Tabu)]
    pub strategy: Strategy,

    /// Tabu search iteration limit
    #[arg(long, default_value_t = RUNS)]
    pub iterations: usize,

    #[arg(long, default_value_t = SEED)]
    pub seed: u64,

    /// Write the best-so-far improvements of the search to this CSV file
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn solver(&self) -> Box<dyn RouteSolver> {
        match self.strategy {
            Strategy::Tabu => Box::new(TabuSearch::new(SolverConfig {
                max_iterations: self.iterations,
                seed: self.seed,
                ..SolverConfig::default()
            })),
            Strategy::CheapestArc => Box::new(CheapestArc),
        }
    }
}

/// Initialize tracing. Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

pub async fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings::from_env()?;
    let source = GoogleDistanceMatrix::new(settings.api_key, settings.distance_matrix_url);

    let problem_instance = setup(&cli.input, &source, cli.max_elements)
        .instrument(span!(Level::INFO, "setup"))
        .await?;

    let solution = cli.solver().solve(&problem_instance.distance_matrix, DEPOT)?;
    info!(
        "Route through {} stops: {:.2} km",
        problem_instance.stops.len(),
        solution.route.distance as f64 / 1000.0
    );

    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &problem_instance.stops, &solution.route)?;

    if let Some(path) = &cli.history {
        save_history(&solution.improvements, path)?;
    }

    Ok(())
}
