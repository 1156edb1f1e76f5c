//! CLI binary entry point for csv2sql

use std::path::PathBuf;

use clap::Parser;
use csv2sql::cli::commands::update::{UpdateArgs, handle_update};

/// Converts a CSV file to a set of SQL updates
#[derive(Parser)]
#[command(name = "csv2sql")]
#[command(about = "Converts a CSV file to a set of SQL updates")]
#[command(version)]
struct Cli {
    /// Input CSV file
    #[arg(value_name = "CSV")]
    csv_path: PathBuf,

    /// CSV field holding the primary key ("csvcol" or "csvcol->sqlcol")
    #[arg(long = "pk")]
    primary_key: String,

    /// Target table name
    #[arg(short, long)]
    table: String,

    /// Columns to include; to provide an alias in the output sql, use the format "csvcol->sqlcol"
    #[arg(short, long = "column", required = true)]
    columns: Vec<String>,

    /// Transform values: "csvval->sqlval"
    #[arg(short = 'f', long = "transform")]
    transforms: Vec<String>,

    /// Dump intermediate pipeline state to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Route diagnostics to stderr so stdout stays clean SQL.
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let args = UpdateArgs {
        csv_path: cli.csv_path,
        primary_key: cli.primary_key,
        table: cli.table,
        columns: cli.columns,
        transforms: cli.transforms,
        verbose: cli.verbose,
    };

    match handle_update(&args) {
        Ok(sql) => println!("{}", sql),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
