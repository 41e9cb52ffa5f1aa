use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::Crew;

/// Incident category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IncidentType {
    Assault,
    Theft,
    Fire,
    Accident,
    Medical,
    PublicDisorder,
    Other,
}

impl IncidentType {
    pub const ALL: [IncidentType; 7] = [
        IncidentType::Assault,
        IncidentType::Theft,
        IncidentType::Fire,
        IncidentType::Accident,
        IncidentType::Medical,
        IncidentType::PublicDisorder,
        IncidentType::Other,
    ];

    /// Label shown to dispatchers
    pub fn label(&self) -> &'static str {
        match self {
            IncidentType::Assault => "Нападение",
            IncidentType::Theft => "Кража",
            IncidentType::Fire => "Пожар",
            IncidentType::Accident => "ДТП",
            IncidentType::Medical => "Медицинская помощь",
            IncidentType::PublicDisorder => "Нарушение порядка",
            IncidentType::Other => "Другое",
        }
    }
}

impl std::fmt::Display for IncidentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentType::Assault => write!(f, "assault"),
            IncidentType::Theft => write!(f, "theft"),
            IncidentType::Fire => write!(f, "fire"),
            IncidentType::Accident => write!(f, "accident"),
            IncidentType::Medical => write!(f, "medical"),
            IncidentType::PublicDisorder => write!(f, "public_disorder"),
            IncidentType::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Высокий",
            Priority::Medium => "Средний",
            Priority::Low => "Низкий",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Incident lifecycle state: new -> in_progress -> resolved -> archived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum IncidentStatus {
    New,
    InProgress,
    Resolved,
    Archived,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 4] = [
        IncidentStatus::New,
        IncidentStatus::InProgress,
        IncidentStatus::Resolved,
        IncidentStatus::Archived,
    ];

    /// The only state this one may advance to
    pub fn next(&self) -> Option<IncidentStatus> {
        match self {
            IncidentStatus::New => Some(IncidentStatus::InProgress),
            IncidentStatus::InProgress => Some(IncidentStatus::Resolved),
            IncidentStatus::Resolved => Some(IncidentStatus::Archived),
            IncidentStatus::Archived => None,
        }
    }
}

impl std::fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IncidentStatus::New => write!(f, "new"),
            IncidentStatus::InProgress => write!(f, "in_progress"),
            IncidentStatus::Resolved => write!(f, "resolved"),
            IncidentStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Reporting party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Caller {
    pub name: String,
    pub phone: String,
}

/// In-memory incident record
#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    pub id: String,
    pub incident_type: IncidentType,
    pub location: String,
    pub description: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
    pub status: IncidentStatus,
    pub caller: Option<Caller>,
    pub assigned_crew: Option<Crew>,
    pub report: Option<String>,
}

/// Data for creating a new incident from the operator form
#[derive(Debug, Clone)]
pub struct NewIncident {
    pub incident_type: IncidentType,
    pub location: String,
    pub description: String,
    pub priority: Priority,
    pub caller: Option<Caller>,
}

impl Incident {
    /// Build a fresh incident with a generated id, stamped at `now`, status new
    pub fn from_new(data: NewIncident, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            incident_type: data.incident_type,
            location: data.location,
            description: data.description,
            priority: data.priority,
            timestamp: now,
            status: IncidentStatus::New,
            caller: data.caller,
            assigned_crew: None,
            report: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status != IncidentStatus::Archived
    }
}

/// Incidents that are not archived, in board order
pub fn active_incidents(incidents: &[Incident]) -> Vec<Incident> {
    incidents.iter().filter(|i| i.is_active()).cloned().collect()
}
