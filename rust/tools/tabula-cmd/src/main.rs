use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{TableArgs, floats::FloatFunction, ints::IntFunction};

#[derive(Parser, Debug)]
#[command(name = "tabula-cmd")]
#[command(about = "Prints X/Y tables of numeric functions")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tabulate a function over an integer progression
    Ints {
        /// First X value
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        start: i64,

        /// Step between consecutive X values
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        inc: i64,

        /// Number of X values
        #[arg(long)]
        count: usize,

        /// Function applied to each X
        function: IntFunction,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Tabulate a function, or its inverse, over a float progression
    Floats {
        /// First X value
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        start: f64,

        /// Step between consecutive X values
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        inc: f64,

        /// Number of X values
        #[arg(long)]
        count: usize,

        /// Function applied to (or inverted at) each X
        function: FloatFunction,

        /// Solve function(y) = x for y in [lower, upper] instead of applying it
        #[arg(long, requires_all = ["lower", "upper"])]
        inverse: bool,

        /// Lower bound of the inverse search interval
        #[arg(long, requires = "inverse", allow_hyphen_values = true)]
        lower: Option<f64>,

        /// Upper bound of the inverse search interval
        #[arg(long, requires = "inverse", allow_hyphen_values = true)]
        upper: Option<f64>,

        #[command(flatten)]
        table: TableArgs,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Ints {
            start,
            inc,
            count,
            function,
            table,
        } => commands::ints::run(start, inc, count, function, table),
        Commands::Floats {
            start,
            inc,
            count,
            function,
            inverse,
            lower,
            upper,
            table,
        } => {
            let bounds = if inverse { lower.zip(upper) } else { None };
            commands::floats::run(start, inc, count, function, bounds, table)
        }
    }
}
