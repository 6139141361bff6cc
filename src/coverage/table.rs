use std::collections::BTreeMap;

use super::record::{is_valid_zip, CoverageRecord, Outcome, CONTACT_MESSAGE};

/// Immutable ZIP → record lookup table.
///
/// Built once per session by ingestion and never mutated afterwards.
/// Every key is a normalized ZIP: digits only, left-padded to 5.
pub struct CoverageTable {
    records: BTreeMap<String, CoverageRecord>,
}

impl CoverageTable {
    pub(crate) fn new(records: BTreeMap<String, CoverageRecord>) -> Self {
        Self { records }
    }

    /// Number of covered ZIPs in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record for a normalized ZIP
    pub fn get(&self, zip: &str) -> Option<&CoverageRecord> {
        self.records.get(zip)
    }

    /// Iterate over all records in ascending ZIP order
    pub fn records(&self) -> impl Iterator<Item = &CoverageRecord> {
        self.records.values()
    }

    /// Classify a raw user-entered ZIP query.
    ///
    /// Pure function of the input and this table snapshot: the input is
    /// trimmed and must be exactly 5 ASCII digits, otherwise
    /// [`Outcome::InvalidInput`] is returned without any lookup.
    pub fn classify(&self, raw_input: &str) -> Outcome {
        let input = raw_input.trim();
        if !is_valid_zip(input) {
            return Outcome::InvalidInput;
        }

        match self.records.get(input) {
            None => Outcome::NotCovered {
                contact: CONTACT_MESSAGE.to_string(),
            },
            Some(record) if record.is_affiliate() => Outcome::AffiliateCovered {
                zip: record.zip.clone(),
                city: record.city_opt(),
            },
            Some(record) => Outcome::Covered {
                zip: record.zip.clone(),
                city: record.city_opt(),
                delivery_days: record.delivery_days.clone(),
            },
        }
    }
}
