//! Append-only local log of visitor reports.
//!
//! The whole sequence lives under one storage key as a JSON array, most
//! recent first. Every write rewrites the full array.

use crate::domain::a002_crime_report::{CrimeReport, ReportError, ReportId, ReportReceipt};
use crate::shared::date_utils::format_submitted_at;
use crate::shared::storage::KeyValueStorage;
use chrono::{DateTime, Local};

/// What the "recent reports" section renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportListing {
    Empty,
    Entries(Vec<CrimeReport>),
    /// The stored log exists but does not parse.
    Unreadable,
}

pub struct ReportStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ReportStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Every stored report, most recent first.
    ///
    /// A missing key is an empty log. An unreadable value is reported as
    /// `ReportError::Corrupt` so the caller can decide whether to carry on.
    pub fn list(&self) -> Result<Vec<CrimeReport>, ReportError> {
        match self.storage.get_item(&self.key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// First `limit` reports, or `Empty` when nothing was ever submitted.
    pub fn recent(&self, limit: usize) -> Result<ReportListing, ReportError> {
        let reports = self.list()?;
        if reports.is_empty() {
            return Ok(ReportListing::Empty);
        }
        Ok(ReportListing::Entries(
            reports.into_iter().take(limit).collect(),
        ))
    }

    pub fn submit(&self, report: CrimeReport) -> Result<ReportReceipt, ReportError> {
        self.submit_at(report, Local::now())
    }

    /// What the page lists: the first `limit` reports, or `Unreadable` when
    /// the stored log cannot be read.
    pub fn listing(&self, limit: usize) -> ReportListing {
        self.recent(limit).unwrap_or_else(|e| {
            log::error!("Failed to load reports from `{}`: {}", self.key, e);
            ReportListing::Unreadable
        })
    }

    /// Validate, stamp and prepend `report`, then persist the full log.
    ///
    /// Validation happens before any storage access, so a rejected report
    /// leaves the log untouched. An unreadable log is never overwritten;
    /// the submission fails with `ReportError::Corrupt` instead.
    pub fn submit_at(
        &self,
        mut report: CrimeReport,
        submitted_at: DateTime<Local>,
    ) -> Result<ReportReceipt, ReportError> {
        report.validate()?;

        let existing = self.list()?;

        let id = ReportId::generate();
        report.id = Some(id.clone());

        let mut reports = Vec::with_capacity(existing.len() + 1);
        reports.push(report);
        reports.extend(existing);

        let raw = serde_json::to_string(&reports)?;
        self.storage.set_item(&self.key, &raw)?;
        log::info!("Stored report {} ({} total)", id, reports.len());

        Ok(ReportReceipt {
            id,
            submitted_at: format_submitted_at(submitted_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::InMemoryStorage;
    use std::collections::HashSet;

    const KEY: &str = "crimeReports";

    fn store() -> (ReportStore<InMemoryStorage>, InMemoryStorage) {
        let storage = InMemoryStorage::new();
        (ReportStore::new(storage.clone(), KEY), storage)
    }

    #[test]
    fn test_empty_store() {
        let (store, _) = store();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.recent(10).unwrap(), ReportListing::Empty);
    }

    #[test]
    fn test_submit_without_date_goes_first() {
        let (store, _) = store();
        store
            .submit(CrimeReport::new("Assault", "Morabadi", "2024-03-15T14:02", "Fight"))
            .unwrap();
        let receipt = store
            .submit(CrimeReport::new("Theft", "Harmu", "", "Bag stolen"))
            .unwrap();

        let reports = store.list().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].crime_type, "Theft");
        assert_eq!(reports[0].area_label, "Harmu");
        assert_eq!(reports[0].id.as_ref(), Some(&receipt.id));
        assert_eq!(reports[1].crime_type, "Assault");
    }

    #[test]
    fn test_rejected_report_changes_nothing() {
        let (store, storage) = store();
        store
            .submit(CrimeReport::new("Theft", "Harmu", "", "Bag stolen"))
            .unwrap();
        let before = storage.get_item(KEY).unwrap();

        for report in [
            CrimeReport::new("Theft", "Harmu", "", ""),
            CrimeReport::new("", "Harmu", "", "Bag stolen"),
            CrimeReport::new("Theft", "", "", "Bag stolen"),
        ] {
            assert!(matches!(store.submit(report), Err(ReportError::MissingField(_))));
        }

        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(storage.get_item(KEY).unwrap(), before);
    }

    #[test]
    fn test_recent_is_capped_but_store_is_not() {
        let (store, _) = store();
        for i in 0..12 {
            store
                .submit(CrimeReport::new("Theft", format!("Area {i}"), "", "x"))
                .unwrap();
        }
        assert_eq!(store.list().unwrap().len(), 12);
        match store.recent(10).unwrap() {
            ReportListing::Entries(entries) => {
                assert_eq!(entries.len(), 10);
                assert_eq!(entries[0].area_label, "Area 11");
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }

    #[test]
    fn test_ids_unique_across_recent_submissions() {
        let (store, _) = store();
        let ids: HashSet<_> = (0..50)
            .map(|_| {
                store
                    .submit(CrimeReport::new("Theft", "Harmu", "", "x"))
                    .unwrap()
                    .id
            })
            .collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_reads_entries_without_report_numbers() {
        let (store, storage) = store();
        storage
            .set_item(
                KEY,
                r#"[{"crimeType":"Robbery","area":"Dhurwa","dateTime":"","description":"Phone"}]"#,
            )
            .unwrap();
        store
            .submit(CrimeReport::new("Theft", "Harmu", "", "Bag stolen"))
            .unwrap();
        let reports = store.list().unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].id, None);
        assert_eq!(reports[1].crime_type, "Robbery");
    }

    #[test]
    fn test_unreadable_log_is_kept_on_submit() {
        let (store, storage) = store();
        let raw = r#"[{"crimeType":"Robbery","area":"Dhurwa","dateTime":"","description":"Phone"},{"crimeType":"Theft","area":"Harmu","dateTime":"","description":5}]"#;
        storage.set_item(KEY, raw).unwrap();
        assert!(matches!(store.list(), Err(ReportError::Corrupt(_))));

        let result = store.submit(CrimeReport::new("Assault", "Morabadi", "", "Fight"));

        assert!(matches!(result, Err(ReportError::Corrupt(_))));
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some(raw));
    }

    #[test]
    fn test_listing_reports_unreadable_log() {
        let (store, storage) = store();
        assert_eq!(store.listing(10), ReportListing::Empty);

        storage.set_item(KEY, "not json").unwrap();
        assert_eq!(store.listing(10), ReportListing::Unreadable);

        storage.set_item(KEY, "[]").unwrap();
        assert_eq!(store.listing(10), ReportListing::Empty);
    }
}
