//! # Solar Calculator CLI
//!
//! Terminal front end for the solar_core calculators.
//!
//! Usage:
//!   solar_cli                   Interactive menu
//!   solar_cli --json <file>     Run one calculation from a JSON file ("-" for stdin)
//!   solar_cli --list-systems    Print the racking system catalog
//!
//! Set `RUST_LOG=debug` (or e.g. `RUST_LOG=solar_core=debug`) to see
//! calculation traces on stderr.

mod prompt;
mod screens;

use std::env;
use std::fs;
use std::io::{self, Read};

use solar_core::calculations::CalculationItem;
use solar_core::errors::{CalcError, CalcResult};
use solar_core::racking;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::prompt::Prompter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {
            info!("starting interactive session");
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            screens::run(&mut prompter);
        }
        Some("--help") | Some("-h") => print_usage(),
        Some("--list-systems") => list_systems(),
        Some("--json") => match args.get(2) {
            Some(path) => {
                if let Err(e) = run_json(path) {
                    print_error(&e);
                    std::process::exit(1);
                }
            }
            None => {
                eprintln!("--json needs a file path (or - for stdin)");
                std::process::exit(2);
            }
        },
        Some(other) => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(2);
        }
    }
}

fn print_usage() {
    println!("Solar Calculator - rails, clamps, DC cable and string sizing");
    println!();
    println!("Usage:");
    println!("  solar_cli                   Interactive menu");
    println!("  solar_cli --json <file>     Run one calculation from JSON (- for stdin)");
    println!("  solar_cli --list-systems    Print the racking system catalog");
    println!("  solar_cli --help            Show this message");
}

fn list_systems() {
    println!("{:<20} {:<22} {:>8} {:>10} {:>8}", "ID", "NAME", "GAP", "OVERHANG", "RAIL");
    for system in racking::all() {
        println!(
            "{:<20} {:<22} {:>6}mm {:>8}mm {:>6}mm",
            system.id, system.name, system.default_gap_mm, system.default_overhang_mm, system.rail_length_mm
        );
    }
}

/// Read a `CalculationItem` document, run it and print the result as JSON.
fn run_json(path: &str) -> CalcResult<()> {
    let json = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CalcError::file_error("read", "<stdin>", e.to_string()))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| CalcError::file_error("read", path, e.to_string()))?
    };

    let item = CalculationItem::from_json(&json)?;
    info!(calculator = %item.kind(), "running calculation from JSON");
    let output = item.calculate()?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_file_is_file_error() {
        let err = run_json("does-not-exist/layout.json").unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
        assert!(matches!(err, CalcError::FileError { ref path, .. } if path == "does-not-exist/layout.json"));
    }
}
