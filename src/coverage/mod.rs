//! ZIP coverage ingestion and classification.
//!
//! This module loads a delivery-coverage table from a CSV resource and
//! answers classification queries for 5-digit US ZIP codes.
//!
//! ## Architecture
//!
//! The module is organized into four components:
//!
//! - [`record`]: Data model (coverage records, query outcomes) and field
//!   normalization rules
//! - [`ingest`]: CSV parsing and table construction from a fetched
//!   resource
//! - [`table`]: The immutable lookup table and the `classify` query
//! - [`service`]: Load-state gating for callers that need a readiness
//!   flag before querying
//!
//! ## Data Flow
//!
//! CSV resource → parse → normalize → [`CoverageTable`] → classify.
//! The table is built once per session and never mutated afterwards;
//! classification is a pure synchronous function over that snapshot.
//!
//! ## Classification
//!
//! A query has four outcomes: the input is not a valid 5-digit ZIP, the
//! ZIP is absent from the table, the ZIP is served by an affiliate
//! partner (delivery-days sentinel `DNT`), or the ZIP is in the direct
//! delivery area with its delivery days.
//!
//! ## Limitations
//!
//! - US 5-digit ZIPs only (no ZIP+4)
//! - Duplicate ZIP rows in the source are resolved first-wins, silently

mod ingest;
mod record;
mod service;
mod table;

pub use ingest::{build_table, load_table};
pub use record::{
    is_valid_zip, normalize_zip, CoverageRecord, Outcome, AFFILIATE_SENTINEL, CONTACT_MESSAGE,
};
pub use service::{CoverageService, LoadState};
pub use table::CoverageTable;
