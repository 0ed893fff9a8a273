//! phishbuster CLI: terminal front end for the phishing quiz.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod display;

#[derive(Parser)]
#[command(
    name = "phishbuster",
    version,
    about = "Learn to spot phishing emails with quick, interactive rounds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz in the terminal
    Play {
        /// Sample CSV file (overrides config)
        #[arg(long)]
        samples: Option<PathBuf>,

        /// RNG seed for a repeatable sequence of messages
        #[arg(long)]
        seed: Option<u64>,

        /// Don't print tips at start
        #[arg(long)]
        no_tips: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a sample CSV file
    Validate {
        /// Sample CSV file (overrides config)
        #[arg(long)]
        samples: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the samples in a CSV file
    List {
        /// Sample CSV file (overrides config)
        #[arg(long)]
        samples: Option<PathBuf>,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and sample file
    Init,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            samples,
            seed,
            no_tips,
            config,
        } => commands::play::execute(samples, seed, no_tips, config),
        Commands::Validate { samples, config } => commands::validate::execute(samples, config),
        Commands::List {
            samples,
            format,
            config,
        } => commands::list::execute(samples, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
