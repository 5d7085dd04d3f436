//! CLI for the pair-sum benchmark.
//!
//! Usage:
//!   pair-sum run --sizes 100,1000,10000,100000   # Synthetic datasets
//!   pair-sum run --data-dir GreenIT_data         # data_list_<N>.csv files
//!   pair-sum generate --out GreenIT_data --sizes 100,1000
//!   pair-sum list                                # Show strategies

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use pair_sum_bench::config::DEFAULT_TARGET;
use pair_sum_bench::dataset::{write_dataset, CsvDirSource, DatasetSource, SyntheticSource};
use pair_sum_bench::extrapolate::DEFAULT_CUTOFF;
use pair_sum_bench::pair_sum::available_variants;
use pair_sum_bench::utils::{export_csv, tui};
use pair_sum_bench::{BenchConfig, BenchError, ResultCollector};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_SIZES: &[usize] = &[100, 1_000, 10_000, 100_000, 1_000_000];

/// Compare brute force, sort + two pointers and hash table pair-sum search
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark and print the result table
    Run(RunArgs),

    /// Write synthetic data_list_<N>.csv datasets
    Generate {
        /// Output directory (created if missing)
        #[arg(short, long)]
        out: PathBuf,

        /// Comma-separated dataset sizes
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES.to_vec())]
        sizes: Vec<usize>,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// List the strategies being compared
    List,
}

#[derive(Args)]
struct RunArgs {
    /// Directory with data_list_<N>.csv files (a "Value" column each)
    #[arg(long, conflicts_with = "sizes")]
    data_dir: Option<PathBuf>,

    /// Comma-separated sizes for synthetic datasets
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Random seed for synthetic datasets
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Largest size for which brute force is measured instead of estimated
    #[arg(long, default_value_t = DEFAULT_CUTOFF)]
    cutoff: usize,

    /// Target sum, applied to every dataset
    #[arg(long, default_value_t = DEFAULT_TARGET, allow_hyphen_values = true)]
    target: i64,

    /// Export the result table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Do not pin the thread to a core while timing
    #[arg(long)]
    no_pin: bool,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let outcome = match cli.command {
        Commands::Run(args) => run(args),
        Commands::Generate { out, sizes, seed } => generate(out, &sizes, seed),
        Commands::List => {
            println!("Available strategies:");
            println!();
            for variant in available_variants() {
                println!("  {:<16} {}", variant.name, variant.description);
            }
            Ok(())
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: RunArgs) -> Result<(), BenchError> {
    let mut config = BenchConfig::new()
        .with_cutoff(args.cutoff)
        .with_target(args.target)
        .with_pin_cpu(!args.no_pin);
    if let Some(path) = args.csv {
        config = config.with_csv_output(path);
    }

    let source: Box<dyn DatasetSource> = match args.data_dir {
        Some(dir) => Box::new(CsvDirSource::new(dir).scan().map_err(BenchError::Discovery)?),
        None => {
            let sizes = args.sizes.unwrap_or_else(|| DEFAULT_SIZES.to_vec());
            Box::new(SyntheticSource::new(sizes, args.seed))
        }
    };

    tui::print_header();
    tui::print_variants_box(config.cutoff(), config.target());

    let report = ResultCollector::new(&config).run(source.as_ref())?;

    tui::print_results_table(&report.table);
    if report.table.rows().iter().any(|r| r.brute_force_is_estimated()) {
        tui::print_calibration(report.final_calibration.as_ref());
    }
    tui::print_skipped(&report.skipped);

    if let Some(path) = config.csv_output_path() {
        export_csv(path, &report.table).map_err(|source| BenchError::Export {
            path: path.to_path_buf(),
            source,
        })?;
        println!("  Results exported to: {}", path.display());
    }

    Ok(())
}

fn generate(out: PathBuf, sizes: &[usize], seed: u64) -> Result<(), BenchError> {
    let write_err = |source| BenchError::Export {
        path: out.clone(),
        source,
    };

    std::fs::create_dir_all(&out).map_err(write_err)?;
    let source = SyntheticSource::new(sizes.to_vec(), seed);

    for &size in sizes {
        let path = write_dataset(&out, &source.generate(size)).map_err(write_err)?;
        info!(size, path = %path.display(), "dataset written");
    }
    println!("Wrote {} datasets to {}", sizes.len(), out.display());
    Ok(())
}
