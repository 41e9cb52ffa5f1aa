use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use crate::core::error::{AppError, Result};
use crate::features::records::dtos::{RecordSearchQuery, RecordSummaryDto};
use crate::features::records::models::{CitizenRecord, RecordStatus};
use crate::features::records::seed;
use crate::shared::types::PaginationQuery;

pub struct RecordService {
    records: RwLock<Vec<CitizenRecord>>,
}

impl RecordService {
    pub fn new() -> Self {
        Self::with_records(seed::sample_records())
    }

    pub fn with_records(records: Vec<CitizenRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<CitizenRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records matching the query, paginated.
    /// Returns (records, total_count)
    pub fn search(
        &self,
        query: &RecordSearchQuery,
        pagination: &PaginationQuery,
    ) -> (Vec<CitizenRecord>, i64) {
        let needle = query
            .q
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let matching: Vec<CitizenRecord> = self
            .read()
            .iter()
            .filter(|r| query.status.map_or(true, |status| r.status == status))
            .filter(|r| needle.as_deref().map_or(true, |needle| r.matches(needle)))
            .cloned()
            .collect();

        tracing::debug!(
            "Record search q={:?} status={:?}: {} matches",
            needle,
            query.status,
            matching.len()
        );

        let total = matching.len() as i64;
        let page = matching
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.limit() as usize)
            .collect();

        (page, total)
    }

    pub fn get(&self, id: &str) -> Result<CitizenRecord> {
        self.read()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Record {} not found", id)))
    }

    pub fn summary(&self) -> RecordSummaryDto {
        let records = self.read();
        RecordSummaryDto {
            total: records.len(),
            open_cases: records.iter().filter(|r| r.status.is_open()).count(),
            wanted: records
                .iter()
                .filter(|r| r.status == RecordStatus::Wanted)
                .count(),
        }
    }
}

impl Default for RecordService {
    fn default() -> Self {
        Self::new()
    }
}
