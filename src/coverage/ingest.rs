//! Coverage CSV ingestion.
//!
//! This module turns the raw bytes of a coverage resource into a
//! [`CoverageTable`], reading from any source that implements the
//! [`FetchSource`] trait.
//!
//! ## Ingestion Strategy
//!
//! The resource is fetched exactly once per session:
//! 1. Fetch the full resource body from the source
//! 2. Read the header row and locate columns by name
//! 3. Normalize each data row and insert it into the table
//!
//! Columns are matched by header name (`Zone`, `Zip`, `City`,
//! `DeliveryDays`), so column order is irrelevant and extra columns are
//! ignored. A column missing from the header defaults every row's field
//! to the empty string.
//!
//! The ZIP column is treated as text the whole way through; parsing it
//! as a number would destroy the leading zeros that northeastern US
//! ZIP codes carry.

use log::debug;
use std::collections::BTreeMap;

use crate::io::FetchSource;
use anyhow::{Context, Result};

use super::record::{is_valid_zip, normalize_zip, CoverageRecord};
use super::table::CoverageTable;

/// Expected header names in the coverage resource.
///
/// Matching is exact after trimming surrounding whitespace.
const ZONE_HEADER: &str = "Zone";
const ZIP_HEADER: &str = "Zip";
const CITY_HEADER: &str = "City";
const DELIVERY_DAYS_HEADER: &str = "DeliveryDays";

/// Fetch a coverage resource and build its lookup table.
///
/// This is the single ingestion pass of a session: one fetch, one parse,
/// one immutable table. On fetch or parse failure no partial table is
/// produced.
///
/// # Errors
///
/// Returns an error if the source cannot be fetched or the body is not
/// well-formed CSV.
pub async fn load_table<S: FetchSource + ?Sized>(source: &S) -> Result<CoverageTable> {
    let data = source.fetch().await?;
    build_table(&data).with_context(|| format!("Failed to parse coverage data from {}", source.origin()))
}

/// Build a [`CoverageTable`] from raw CSV bytes.
///
/// Rows are processed in resource order. The first occurrence of a
/// normalized ZIP wins; later duplicates are dropped without error.
/// Every table key is exactly 5 ASCII digits: rows whose ZIP field
/// contains no digits (empty key) or more than 5 digits are excluded.
///
/// # Errors
///
/// Returns an error if the CSV is malformed (for example a row with a
/// field count that does not match the header).
pub fn build_table(data: &[u8]) -> Result<CoverageTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data);

    // Locate columns by header name; order is irrelevant and unknown
    // columns are ignored.
    let headers = reader
        .headers()
        .context("Failed to read coverage header row")?;
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);
    let zone_idx = position(ZONE_HEADER);
    let zip_idx = position(ZIP_HEADER);
    let city_idx = position(CITY_HEADER);
    let days_idx = position(DELIVERY_DAYS_HEADER);

    let mut records: BTreeMap<String, CoverageRecord> = BTreeMap::new();
    let mut total_rows = 0usize;
    let mut skipped = 0usize;
    let mut duplicates = 0usize;

    for row in reader.records() {
        let row = row.context("Failed to read coverage row")?;
        total_rows += 1;

        // A column absent from the header defaults to the empty string.
        let field = |idx: Option<usize>| idx.and_then(|i| row.get(i)).unwrap_or("");

        // Every table key must be exactly 5 ASCII digits; rows that
        // normalize to an empty or overlong key are excluded.
        let zip = normalize_zip(field(zip_idx));
        if !is_valid_zip(&zip) {
            skipped += 1;
            continue;
        }

        let record = CoverageRecord {
            zone: field(zone_idx).trim().to_string(),
            zip: zip.clone(),
            city: field(city_idx).trim().to_string(),
            delivery_days: field(days_idx).trim().to_uppercase(),
        };

        // First occurrence of a ZIP wins; later duplicates are dropped.
        if records.contains_key(&zip) {
            duplicates += 1;
        } else {
            records.insert(zip, record);
        }
    }

    debug!(
        "Coverage ingest: {} rows, {} usable, {} skipped, {} duplicates",
        total_rows,
        records.len(),
        skipped,
        duplicates
    );

    Ok(CoverageTable::new(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(csv: &str) -> CoverageTable {
        build_table(csv.as_bytes()).unwrap()
    }

    #[test]
    fn builds_table_from_simple_csv() {
        let t = table(
            "Zone,Zip,City,DeliveryDays\n\
             North,08901,New Brunswick,MON-FRI\n\
             North,08817,Edison,DNT\n",
        );
        assert_eq!(t.len(), 2);
        let rec = t.get("08901").unwrap();
        assert_eq!(rec.city, "New Brunswick");
        assert_eq!(rec.delivery_days, "MON-FRI");
        assert!(t.get("08817").unwrap().is_affiliate());
    }

    #[test]
    fn zip_column_keeps_leading_zeros_and_pads() {
        let t = table("Zone,Zip,City,DeliveryDays\nNorth,7601,Hackensack,MON\n");
        assert!(t.get("07601").is_some());
    }

    #[test]
    fn column_order_is_irrelevant_and_extras_ignored() {
        let t = table(
            "State,DeliveryDays,City,Zip,Zone\n\
             NJ,tue-thu,Camden,08102,South\n",
        );
        let rec = t.get("08102").unwrap();
        assert_eq!(rec.zone, "South");
        assert_eq!(rec.city, "Camden");
        // DeliveryDays is trimmed and upper-cased
        assert_eq!(rec.delivery_days, "TUE-THU");
    }

    #[test]
    fn missing_columns_default_to_empty() {
        let t = table("Zip\n08901\n");
        let rec = t.get("08901").unwrap();
        assert_eq!(rec.zone, "");
        assert_eq!(rec.city, "");
        assert_eq!(rec.delivery_days, "");
    }

    #[test]
    fn first_duplicate_wins() {
        let t = table(
            "Zone,Zip,City,DeliveryDays\n\
             North,08901,New Brunswick,MON-FRI\n\
             South,08901,Somewhere Else,DNT\n",
        );
        assert_eq!(t.len(), 1);
        let rec = t.get("08901").unwrap();
        assert_eq!(rec.delivery_days, "MON-FRI");
        assert_eq!(rec.city, "New Brunswick");
    }

    #[test]
    fn every_table_key_is_exactly_five_digits() {
        let t = table(
            "Zone,Zip,City,DeliveryDays\n\
             North,089011,Sixtown,MON\n\
             North,08901,New Brunswick,MON-FRI\n",
        );
        assert_eq!(t.len(), 1);
        assert!(t.get("089011").is_none());
        assert!(t.records().all(|r| r.zip.len() == 5));
    }

    #[test]
    fn rows_without_digits_in_zip_are_excluded() {
        let t = table(
            "Zone,Zip,City,DeliveryDays\n\
             North,N/A,Nowhere,MON\n\
             North,08901,New Brunswick,MON-FRI\n",
        );
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn malformed_rows_fail_ingestion() {
        let result = build_table(
            "Zone,Zip,City,DeliveryDays\n\
             North,08901\n"
                .as_bytes(),
        );
        assert!(result.is_err());
    }
}
