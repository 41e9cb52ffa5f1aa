use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::incidents::models::Crew;
use crate::features::shifts::models::{Shift, ShiftType};
use crate::shared::validation::not_blank;

/// Message returned for any missing or blank field of the start form
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Request DTO for the "start shift" form
///
/// Every field is optional on the wire so an incomplete form reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct StartShiftDto {
    #[validate(
        required(message = "All fields are required"),
        custom(function = "not_blank", message = "All fields are required")
    )]
    pub officer_name: Option<String>,

    #[validate(
        required(message = "All fields are required"),
        custom(function = "not_blank", message = "All fields are required")
    )]
    pub partner_name: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "All fields are required"))]
    pub crew: Option<Crew>,

    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "All fields are required"))]
    pub shift_type: Option<ShiftType>,
}

/// Unselected dropdowns arrive as "" and count as missing
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShiftResponseDto {
    pub officer_name: String,
    pub partner_name: String,
    pub crew: Crew,
    pub shift_type: ShiftType,
    pub shift_type_label: String,
    pub started_at: DateTime<Utc>,
    pub online: bool,
}

impl From<Shift> for ShiftResponseDto {
    fn from(s: Shift) -> Self {
        Self {
            officer_name: s.officer_name,
            partner_name: s.partner_name,
            crew: s.crew,
            shift_type_label: s.shift_type.label().to_string(),
            shift_type: s.shift_type,
            started_at: s.started_at,
            online: s.online,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> StartShiftDto {
        StartShiftDto {
            officer_name: Some("Иванов И.И.".to_string()),
            partner_name: Some("Петров П.П.".to_string()),
            crew: Some(Crew::Pps101),
            shift_type: Some(ShiftType::Night),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert!(complete_form().validate().is_ok());
    }

    #[test]
    fn test_missing_or_blank_fields_rejected() {
        assert!(StartShiftDto::default().validate().is_err());

        let blank_partner = StartShiftDto {
            partner_name: Some("  ".to_string()),
            ..complete_form()
        };
        assert!(blank_partner.validate().is_err());

        let no_crew = StartShiftDto {
            crew: None,
            ..complete_form()
        };
        assert!(no_crew.validate().is_err());
    }

    #[test]
    fn test_unselected_dropdowns_deserialize_as_missing() {
        let dto: StartShiftDto = serde_json::from_str(
            r#"{"officer_name":"Иванов","partner_name":"Петров","crew":"","shift_type":""}"#,
        )
        .unwrap();
        assert!(dto.crew.is_none());
        assert!(dto.shift_type.is_none());

        let dto: StartShiftDto =
            serde_json::from_str(r#"{"crew":"АП-2","shift_type":"night"}"#).unwrap();
        assert_eq!(dto.crew, Some(Crew::Ap2));
        assert_eq!(dto.shift_type, Some(ShiftType::Night));

        assert!(serde_json::from_str::<StartShiftDto>(r#"{"crew":"АП-9"}"#).is_err());
    }
}
