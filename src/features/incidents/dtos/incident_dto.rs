use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::incidents::lifecycle::TransitionContext;
use crate::features::incidents::models::{
    Caller, Crew, Incident, IncidentStatus, IncidentType, NewIncident, Priority,
};
use crate::shared::validation::not_blank;

/// Response DTO for incident
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IncidentResponseDto {
    pub id: String,
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub type_label: String,
    pub location: String,
    pub description: String,
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
    pub status: IncidentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<Caller>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_crew: Option<Crew>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl From<Incident> for IncidentResponseDto {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            type_label: i.incident_type.label().to_string(),
            incident_type: i.incident_type,
            location: i.location,
            description: i.description,
            priority: i.priority,
            timestamp: i.timestamp,
            status: i.status,
            caller: i.caller,
            assigned_crew: i.assigned_crew,
            report: i.report,
        }
    }
}

fn default_incident_type() -> IncidentType {
    IncidentType::Other
}

fn default_priority() -> Priority {
    Priority::Medium
}

/// Request DTO for the "new call" form
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateIncidentDto {
    /// Incident category (default: other)
    #[serde(rename = "type", default = "default_incident_type")]
    pub incident_type: IncidentType,

    /// Address of the incident (required)
    #[validate(custom(function = "not_blank", message = "Location is required"))]
    pub location: String,

    /// Priority (default: medium)
    #[serde(default = "default_priority")]
    pub priority: Priority,

    /// What happened (required)
    #[validate(custom(function = "not_blank", message = "Description is required"))]
    pub description: String,

    /// Optional name of the reporting party
    #[validate(length(max = 255, message = "Caller name must not exceed 255 characters"))]
    pub caller_name: Option<String>,

    /// Optional phone of the reporting party
    #[validate(length(max = 32, message = "Caller phone must not exceed 32 characters"))]
    pub caller_phone: Option<String>,
}

impl From<CreateIncidentDto> for NewIncident {
    fn from(dto: CreateIncidentDto) -> Self {
        let name = dto.caller_name.filter(|s| !s.trim().is_empty());
        let phone = dto.caller_phone.filter(|s| !s.trim().is_empty());

        // A caller is recorded when either part was filled in
        let caller = match (name, phone) {
            (None, None) => None,
            (name, phone) => Some(Caller {
                name: name.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
            }),
        };

        Self {
            incident_type: dto.incident_type,
            location: dto.location,
            description: dto.description,
            priority: dto.priority,
            caller,
        }
    }
}

/// Request DTO for a status change
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateIncidentStatusDto {
    /// Target status; must be the next step of the lifecycle
    pub status: IncidentStatus,
    /// Crew to assign; defaults to the crew already on the incident
    pub crew: Option<Crew>,
    /// Closure report
    pub report: Option<String>,
    /// Set by the full-detail view, where resolving needs a report
    #[serde(default)]
    pub require_report: bool,
}

impl From<&UpdateIncidentStatusDto> for TransitionContext {
    fn from(dto: &UpdateIncidentStatusDto) -> Self {
        Self {
            crew: dto.crew,
            report: dto.report.clone(),
            require_report: dto.require_report,
        }
    }
}

/// Archive search query
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ArchiveSearchQuery {
    /// Case-insensitive text matched against type, location and description
    pub q: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(location: &str, description: &str) -> CreateIncidentDto {
        CreateIncidentDto {
            incident_type: IncidentType::Fire,
            location: location.to_string(),
            description: description.to_string(),
            priority: Priority::High,
            caller_name: None,
            caller_phone: None,
        }
    }

    #[test]
    fn test_form_requires_location_and_description() {
        assert!(form("пр. Мира, 42", "Пожар в квартире").validate().is_ok());
        assert!(form("  ", "Пожар в квартире").validate().is_err());
        assert!(form("пр. Мира, 42", "").validate().is_err());
    }

    #[test]
    fn test_form_defaults() {
        let dto: CreateIncidentDto =
            serde_json::from_str(r#"{"location": "ул. Ленина, 15", "description": "Шум"}"#)
                .unwrap();
        assert_eq!(dto.incident_type, IncidentType::Other);
        assert_eq!(dto.priority, Priority::Medium);
    }

    #[test]
    fn test_caller_recorded_only_when_given() {
        let data = NewIncident::from(form("a", "b"));
        assert!(data.caller.is_none());

        let mut with_blank = form("a", "b");
        with_blank.caller_name = Some("   ".to_string());
        assert!(NewIncident::from(with_blank).caller.is_none());

        let mut with_phone = form("a", "b");
        with_phone.caller_phone = Some("+79001234567".to_string());
        let caller = NewIncident::from(with_phone).caller.unwrap();
        assert_eq!(caller.phone, "+79001234567");
        assert_eq!(caller.name, "");
    }

    #[test]
    fn test_response_uses_type_key_and_label() {
        let incident = Incident::from_new(NewIncident::from(form("a", "b")), Utc::now());
        let json = serde_json::to_value(IncidentResponseDto::from(incident)).unwrap();

        assert_eq!(json["type"], "fire");
        assert_eq!(json["type_label"], "Пожар");
        assert_eq!(json["status"], "new");
        assert!(json.get("assigned_crew").is_none());
    }
}
