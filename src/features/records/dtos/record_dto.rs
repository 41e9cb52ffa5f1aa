use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::records::models::{CitizenRecord, RecordStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordResponseDto {
    pub id: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub status: RecordStatus,
    pub status_label: String,
}

impl From<CitizenRecord> for RecordResponseDto {
    fn from(r: CitizenRecord) -> Self {
        Self {
            id: r.id,
            full_name: r.full_name,
            date_of_birth: r.date_of_birth,
            address: r.address,
            status_label: r.status.label().to_string(),
            status: r.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RecordSearchQuery {
    /// Case-insensitive text matched against name, address and status
    pub q: Option<String>,
    /// Only records with this status
    pub status: Option<RecordStatus>,
}

/// Counters shown above the registry table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordSummaryDto {
    pub total: usize,
    /// Records whose case is not closed
    pub open_cases: usize,
    pub wanted: usize,
}
