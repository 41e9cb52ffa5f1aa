use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    Wanted,
    UnderSurveillance,
    Active,
    Closed,
}

impl RecordStatus {
    pub fn label(&self) -> &'static str {
        match self {
            RecordStatus::Wanted => "В розыске",
            RecordStatus::UnderSurveillance => "Под наблюдением",
            RecordStatus::Active => "Активно",
            RecordStatus::Closed => "Закрыто",
        }
    }

    /// Open cases that still need attention
    pub fn is_open(&self) -> bool {
        !matches!(self, RecordStatus::Closed)
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordStatus::Wanted => write!(f, "wanted"),
            RecordStatus::UnderSurveillance => write!(f, "under_surveillance"),
            RecordStatus::Active => write!(f, "active"),
            RecordStatus::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CitizenRecord {
    pub id: String,
    pub full_name: String,
    pub date_of_birth: NaiveDate,
    pub address: String,
    pub status: RecordStatus,
}

impl CitizenRecord {
    /// Case-insensitive match on name, address or status label.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.full_name.to_lowercase().contains(needle)
            || self.address.to_lowercase().contains(needle)
            || self.status.label().to_lowercase().contains(needle)
    }
}
