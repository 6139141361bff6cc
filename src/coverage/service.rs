use anyhow::{bail, Result};

use super::record::Outcome;
use super::table::CoverageTable;

/// Load state of the session's coverage table.
///
/// Ingestion either completes (table ready) or fails (error latched);
/// there is no automatic retry, so a failed state persists for the
/// session.
pub enum LoadState {
    Pending,
    Ready(CoverageTable),
    Failed(String),
}

/// Query facade over the session's coverage table.
///
/// The table is an injected, read-only dependency constructed once at
/// startup. Queries are rejected with a "not yet available" error while
/// the table is pending or failed, which is distinct from a ZIP simply
/// not being covered.
pub struct CoverageService {
    state: LoadState,
}

impl CoverageService {
    pub fn pending() -> Self {
        Self {
            state: LoadState::Pending,
        }
    }

    pub fn ready(table: CoverageTable) -> Self {
        Self {
            state: LoadState::Ready(table),
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            state: LoadState::Failed(message),
        }
    }

    /// Latch the result of the session's single ingestion pass
    pub fn from_load_result(result: Result<CoverageTable>) -> Self {
        match result {
            Ok(table) => Self::ready(table),
            Err(e) => Self::failed(format!("{e:#}")),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// Load failure message, if ingestion failed
    pub fn load_error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn table(&self) -> Option<&CoverageTable> {
        match &self.state {
            LoadState::Ready(table) => Some(table),
            _ => None,
        }
    }

    /// Classify a ZIP query against the loaded table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not available (still pending or
    /// failed to load); callers should disable the query affordance
    /// until [`is_ready()`](Self::is_ready) reports `true`.
    pub fn classify(&self, raw_input: &str) -> Result<Outcome> {
        match &self.state {
            LoadState::Ready(table) => Ok(table.classify(raw_input)),
            LoadState::Pending => bail!("Coverage table is not available yet"),
            LoadState::Failed(message) => {
                bail!("Coverage table failed to load: {message}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::build_table;

    #[test]
    fn pending_service_rejects_queries() {
        let service = CoverageService::pending();
        assert!(!service.is_ready());
        assert!(service.classify("08901").is_err());
    }

    #[test]
    fn failed_service_surfaces_load_error() {
        let service = CoverageService::failed("boom".to_string());
        assert_eq!(service.load_error(), Some("boom"));
        assert!(service.classify("08901").is_err());
    }

    #[test]
    fn ready_service_classifies() {
        let table =
            build_table("Zone,Zip,City,DeliveryDays\nNorth,08901,New Brunswick,MON-FRI\n".as_bytes())
                .unwrap();
        let service = CoverageService::ready(table);
        assert!(service.is_ready());
        assert!(service.load_error().is_none());
        assert!(matches!(
            service.classify("08901").unwrap(),
            Outcome::Covered { .. }
        ));
    }
}
