use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sexratio::{
    error::Result,
    heredity::{Heredity, ParentalAverage, Patrilineal},
    rng::RandomNumberGenerator,
    simulation::{
        options::{
            DEFAULT_CONCENTRATION, DEFAULT_INITIAL_POPULATION, DEFAULT_INITIAL_RATIO,
            DEFAULT_NUM_GENERATIONS, DEFAULT_PARALLEL_THRESHOLD,
        },
        write_sperm_ratios_to_file, ConsoleReporter, LogLevel, Simulation, SimulationOptions,
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeredityArg {
    /// Child's ratio is drawn around the mean of both parents
    Average,
    /// Child's ratio is drawn around the father's ratio
    Paternal,
}

/// Simulate the evolution of heritable sex-ratio genes.
#[derive(Parser, Debug)]
#[command(name = "sexratio", version, about)]
struct Args {
    /// Number of founders
    #[arg(short = 'n', long, default_value_t = DEFAULT_INITIAL_POPULATION)]
    population: usize,

    /// Fraction of founders that are male, also the founders' mean sperm ratio
    #[arg(short, long, default_value_t = DEFAULT_INITIAL_RATIO)]
    ratio: f64,

    /// Number of generations
    #[arg(short, long, default_value_t = DEFAULT_NUM_GENERATIONS)]
    generations: usize,

    /// Beta concentration constant; smaller values mean more variation
    #[arg(short = 'v', long, default_value_t = DEFAULT_CONCENTRATION)]
    concentration: f64,

    /// Random seed; drawn from system entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// File receiving the final sperm ratios, one per line
    #[arg(short, long, default_value = "ratios.csv")]
    output: PathBuf,

    /// Heredity rule
    #[arg(long, value_enum, default_value = "average")]
    heredity: HeredityArg,

    /// Do not keep parent links (ancestry traces show only the parents)
    #[arg(long)]
    no_lineage: bool,

    /// Maximum depth of ancestry traces
    #[arg(long)]
    lineage_depth: Option<usize>,

    /// Minimum number of pairs before a generation is evaluated in parallel
    #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    /// Log the trait distribution of every generation
    #[arg(long)]
    verbose: bool,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

impl Args {
    fn options(&self) -> SimulationOptions {
        let mut options = SimulationOptions::new(
            self.population,
            self.ratio,
            self.generations,
            self.concentration,
        );
        options.set_track_lineage(!self.no_lineage);
        options.set_lineage_depth(self.lineage_depth);
        options.set_parallel_threshold(self.parallel_threshold);
        options.set_log_level(if self.verbose {
            LogLevel::Verbose
        } else {
            LogLevel::None
        });
        options
    }
}

fn execute<H: Heredity>(
    options: SimulationOptions,
    heredity: H,
    rng: &mut RandomNumberGenerator,
    output: &Path,
) -> Result<()> {
    let simulation = Simulation::with_heredity(options, heredity)?;
    let mut console = ConsoleReporter::stdout();

    let outcome = simulation.run(rng, &mut console)?;

    let written = write_sperm_ratios_to_file(&outcome.population, output)?;
    info!(written, path = %output.display(), "Wrote final sperm ratios");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "Seeding random number generator");
    let mut rng = RandomNumberGenerator::from_seed(seed);

    let options = args.options();
    let result = match args.heredity {
        HeredityArg::Average => execute(options, ParentalAverage, &mut rng, &args.output),
        HeredityArg::Paternal => execute(options, Patrilineal, &mut rng, &args.output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
