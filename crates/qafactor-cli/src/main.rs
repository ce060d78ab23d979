//! qafactor Command-Line Interface
//!
//! Places the 3×3-bit multiplier on a Chimera annealer, fits anneal
//! offsets to it and factors small integers.
//!
//! ```text
//!   qafactor search                     best placement and its offsets
//!   qafactor factor  -p 21              one product, one batch of reads
//!   qafactor sweep   -P 49,21,12 -n 10  repeated trials, JSON records
//!   qafactor report  -d runs/           valid-read statistics per product
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{factor, report, search, sweep, version};

/// qafactor - integer factoring on quantum annealers with chain-aware anneal offsets
#[derive(Parser)]
#[command(name = "qafactor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML run file with `factoring:` and `sampler:` sections
    #[arg(short, long, global = true, env = "QAFACTOR_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the multiplier placement with the widest offset range
    Search {
        /// Write the placement and its offsets as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Factor one product
    Factor {
        /// Product to factor (at most 63)
        #[arg(short, long)]
        product: u64,

        /// Placement JSON from an earlier `search`
        #[arg(long)]
        placement: Option<PathBuf>,

        /// Number of reads
        #[arg(short, long)]
        reads: Option<u32>,

        /// Write the full output as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Factor several products over repeated trials
    Sweep {
        /// Products to factor in every trial
        #[arg(short = 'P', long, value_delimiter = ',', required = true)]
        products: Vec<u64>,

        /// Number of trials
        #[arg(short = 'n', long, default_value = "1")]
        trials: u32,

        /// Directory for trial records
        #[arg(short, long, default_value = "runs")]
        output_dir: PathBuf,

        /// Reuse this placement instead of searching per trial
        #[arg(long)]
        placement: Option<PathBuf>,

        /// Number of reads per product
        #[arg(short, long)]
        reads: Option<u32>,
    },

    /// Summarize the trial records of a sweep
    Report {
        /// Directory with trial records
        #[arg(short, long, default_value = "runs")]
        dir: PathBuf,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Search { output } => search::execute(config, output.as_deref()).await,

        Commands::Factor {
            product,
            placement,
            reads,
            output,
        } => {
            factor::execute(
                config,
                product,
                placement.as_deref(),
                reads,
                output.as_deref(),
            )
            .await
        }

        Commands::Sweep {
            products,
            trials,
            output_dir,
            placement,
            reads,
        } => {
            sweep::execute(
                config,
                &products,
                trials,
                &output_dir,
                placement.as_deref(),
                reads,
            )
            .await
        }

        Commands::Report { dir, format } => report::execute(&dir, &format),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
