use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::incidents::models::Crew;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    Day,
    Night,
}

impl ShiftType {
    pub fn label(&self) -> &'static str {
        match self {
            ShiftType::Day => "Дневная",
            ShiftType::Night => "Ночная",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShiftType::Day => write!(f, "day"),
            ShiftType::Night => write!(f, "night"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub officer_name: String,
    pub partner_name: String,
    pub crew: Crew,
    pub shift_type: ShiftType,
    pub started_at: DateTime<Utc>,
    /// "На связи" when true, "Отошел" otherwise
    pub online: bool,
}
