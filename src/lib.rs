//! # zipzone
//!
//! A ZIP-code delivery-coverage lookup with HTTP URL support.
//!
//! This library loads a delivery-coverage table from a CSV resource on
//! the local filesystem or a remote HTTP server, normalizes the records,
//! and classifies 5-digit US ZIP codes into coverage outcomes: not
//! covered, covered through an affiliate partner, or covered directly
//! with delivery-day metadata.
//!
//! ## Features
//!
//! - Load coverage tables from local CSV files or HTTP/HTTPS URLs
//! - Header-name column matching (column order irrelevant)
//! - Leading-zero-safe ZIP normalization (ZIPs are text, never numbers)
//! - First-wins deduplication of repeated ZIP rows
//! - Load-state gating so queries are only answered once a table exists
//!
//! ## Example
//!
//! ```no_run
//! use zipzone::{load_table, LocalFileSource};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load a coverage table from a local CSV file
//!     let source = LocalFileSource::new(PathBuf::from("coverage.csv"));
//!     let table = load_table(&source).await?;
//!
//!     // Classify a user-entered ZIP
//!     let outcome = table.classify("08901");
//!     println!("{}", outcome.message());
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod coverage;
pub mod io;

pub use cli::Cli;
pub use coverage::{
    build_table, load_table, CoverageRecord, CoverageService, CoverageTable, LoadState, Outcome,
};
pub use io::{FetchSource, HttpSource, LocalFileSource};
