//! Command-line front end for the garage record store.
//!
//! # Responsibility
//! - Load a data directory, run one store operation and print JSON.
//! - Save the data directory back after mutating commands.
//!
//! # Invariants
//! - A mutating command never saves over rows that failed to load unless
//!   `--force` is given; those rows would otherwise be dropped from disk.

use clap::{Parser, Subcommand};
use garage_core::{
    core_version, default_log_level, init_logging, LoadReport, LogTarget, Owner, RecordStore,
};
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "garage", about = "Inspect and edit repair-shop records")]
struct Cli {
    /// Directory holding owners.csv, mechanics.csv, cars.csv, workshops.csv and orders.csv.
    #[arg(long, env = "GARAGE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// trace|debug|info|warn|error; defaults to debug in debug builds, info otherwise.
    #[arg(long, env = "GARAGE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Write rotated log files here instead of stderr.
    #[arg(long, env = "GARAGE_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Save after a mutating command even if some rows were skipped on load.
    #[arg(long)]
    force: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summary figures over all repair orders.
    Stats,
    /// Revenue summed per workshop.
    Revenue,
    /// Number of orders per mechanic.
    OrdersByMechanic,
    SearchOwners {
        term: String,
    },
    SearchMechanics {
        term: String,
    },
    FindOwner {
        license_number: String,
    },
    AddOwner {
        license_number: String,
        full_name: String,
        address: String,
        phone: String,
    },
    DeleteOwner {
        license_number: String,
    },
    /// Print the core library version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let level = cli
        .log_level
        .unwrap_or_else(|| default_log_level().to_string());
    let target = match cli.log_dir {
        Some(dir) => LogTarget::Directory(absolutize(&dir)?),
        None => LogTarget::Stderr,
    };
    init_logging(&level, target)?;

    if let Command::Version = cli.command {
        println!("{}", core_version());
        return Ok(());
    }

    let mut store = RecordStore::new();
    let report = store.load_all(&cli.data_dir)?;
    info!(
        "event=cli_load module=cli status=ok data_dir={} loaded={} skipped={}",
        cli.data_dir.display(),
        report.total_loaded(),
        report.total_skipped()
    );

    match cli.command {
        Command::Stats => print_json(&store.statistics()),
        Command::Revenue => print_json(&store.revenue_by_workshop()),
        Command::OrdersByMechanic => print_json(&store.orders_by_mechanic()),
        Command::SearchOwners { term } => print_json(&store.search_owners(&term)),
        Command::SearchMechanics { term } => print_json(&store.search_mechanics(&term)),
        Command::FindOwner { license_number } => match store.find_owner(&license_number) {
            Some(owner) => print_json(owner),
            None => Err(format!("owner not found: `{license_number}`").into()),
        },
        Command::AddOwner {
            license_number,
            full_name,
            address,
            phone,
        } => {
            store.add_owner(Owner::new(license_number, full_name, address, phone));
            save_checked(&store, &cli.data_dir, &report, cli.force)?;
            Ok(())
        }
        Command::DeleteOwner { license_number } => {
            let removed = store.delete_owner(&license_number)?;
            save_checked(&store, &cli.data_dir, &report, cli.force)?;
            println!("removed {removed}");
            Ok(())
        }
        Command::Version => Ok(()),
    }
}

/// Saves `store` unless the load behind it skipped rows and `force` is off.
fn save_checked(
    store: &RecordStore,
    data_dir: &Path,
    report: &LoadReport,
    force: bool,
) -> Result<(), Box<dyn Error>> {
    let skipped = report.total_skipped();
    if skipped > 0 {
        if !force {
            return Err(format!(
                "{skipped} row(s) under `{}` could not be loaded and would be lost on save; \
                 fix them or rerun with --force",
                data_dir.display()
            )
            .into());
        }
        warn!(
            "event=cli_save module=cli status=forced data_dir={} dropped={}",
            data_dir.display(),
            skipped
        );
    }
    store.save_all(data_dir)?;
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn absolutize(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
