//! Main entry point for the zipzone CLI application.
//!
//! This binary provides a command-line interface for classifying ZIP
//! codes against a delivery-coverage CSV loaded from the local
//! filesystem or a remote HTTP URL.

use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use zipzone::{
    load_table, Cli, CoverageService, CoverageTable, FetchSource, HttpSource, LocalFileSource,
};

/// Application entry point.
///
/// Parses command-line arguments and dispatches to the appropriate
/// source based on whether the input is a local file or HTTP URL.
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.is_http_url() {
        // Remote coverage resource fetched over HTTP
        let source = HttpSource::new(cli.source.clone())?;
        process_coverage(&source, &cli).await
    } else {
        // Local coverage file
        let source = LocalFileSource::new(PathBuf::from(&cli.source));
        process_coverage(&source, &cli).await
    }
}

/// Run the session against one coverage source.
///
/// Ingestion happens exactly once; the resulting table (or the latched
/// load failure) then serves every query of the invocation.
///
/// # Arguments
///
/// * `source` - A source implementing `FetchSource` for the coverage CSV
/// * `cli` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if ingestion fails.
async fn process_coverage<S: FetchSource>(source: &S, cli: &Cli) -> Result<()> {
    let service = CoverageService::from_load_result(load_table(source).await);

    // Ingestion failure is a blocking error state: no queries are
    // attempted against a partial or absent table.
    if let Some(message) = service.load_error() {
        bail!("{message}");
    }
    let table = service
        .table()
        .ok_or_else(|| anyhow::anyhow!("Coverage table is not available yet"))?;

    if !cli.is_quiet() {
        eprintln!(
            "Loaded {} covered ZIP codes from {}",
            table.len(),
            source.origin()
        );
    }

    // List mode: display the coverage table and exit
    if cli.list || cli.verbose {
        return list_records(table, cli.verbose);
    }

    // Query mode: classify each ZIP argument independently
    if cli.zips.is_empty() {
        println!("{}", summary_line(table));
        return Ok(());
    }

    for zip in &cli.zips {
        let outcome = service.classify(zip)?;
        if cli.is_very_quiet() {
            println!("{}", outcome.message());
        } else {
            println!("{}: {}", zip, outcome.message());
        }
    }

    Ok(())
}

/// List the records of the coverage table.
///
/// Supports two output formats:
/// - Simple format (`-l`): Just the covered ZIPs, one per line
/// - Verbose format (`-v`): Table with zone, city, and delivery days
///
/// # Arguments
///
/// * `table` - The loaded coverage table
/// * `verbose` - If true, display detailed information in table format
fn list_records(table: &CoverageTable, verbose: bool) -> Result<()> {
    if verbose {
        // Print table header for verbose output
        println!("{:>5}  {:<12}  {:<24}  Delivery days", "Zip", "Zone", "City");
        println!("{}", "-".repeat(70));
    }

    for record in table.records() {
        if verbose {
            let days = if record.is_affiliate() {
                "(affiliate)"
            } else {
                record.delivery_days.as_str()
            };
            println!(
                "{:>5}  {:<12}  {:<24}  {}",
                record.zip, record.zone, record.city, days
            );
        } else {
            // Simple format: just the ZIP code
            println!("{}", record.zip);
        }
    }

    // Print summary line in verbose mode
    if verbose {
        println!("{}", "-".repeat(70));
        println!("{}", summary_line(table));
    }

    Ok(())
}

/// Format the one-line coverage summary shared by the verbose listing
/// and the no-arguments mode.
fn summary_line(table: &CoverageTable) -> String {
    let affiliate = table.records().filter(|r| r.is_affiliate()).count();
    format!(
        "{} ZIP codes covered ({} direct, {} affiliate)",
        table.len(),
        table.len() - affiliate,
        affiliate
    )
}
