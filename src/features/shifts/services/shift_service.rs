use std::sync::{PoisonError, RwLock};

use chrono::Utc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::shifts::dtos::{StartShiftDto, ALL_FIELDS_REQUIRED};
use crate::features::shifts::models::Shift;

/// Holds the operator's current shift, at most one at a time
#[derive(Default)]
pub struct ShiftService {
    current: RwLock<Option<Shift>>,
}

impl ShiftService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Shift> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Start a shift and go online
    pub fn start(&self, dto: StartShiftDto) -> Result<Shift> {
        dto.validate()
            .map_err(|_| AppError::Validation(ALL_FIELDS_REQUIRED.to_string()))?;

        let (Some(officer_name), Some(partner_name), Some(crew), Some(shift_type)) =
            (dto.officer_name, dto.partner_name, dto.crew, dto.shift_type)
        else {
            return Err(AppError::Validation(ALL_FIELDS_REQUIRED.to_string()));
        };

        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(active) = current.as_ref() {
            return Err(AppError::Conflict(format!(
                "Shift of crew {} is already in progress",
                active.crew
            )));
        }

        let shift = Shift {
            officer_name: officer_name.trim().to_string(),
            partner_name: partner_name.trim().to_string(),
            crew,
            shift_type,
            started_at: Utc::now(),
            online: true,
        };

        tracing::info!(
            "Shift started: crew={}, officer={}, partner={}, type={}",
            shift.crew,
            shift.officer_name,
            shift.partner_name,
            shift.shift_type
        );

        *current = Some(shift.clone());
        Ok(shift)
    }

    /// End the current shift, returning it with `online` cleared
    pub fn end(&self) -> Result<Shift> {
        let mut shift = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .ok_or_else(|| AppError::NotFound("No active shift".to_string()))?;

        shift.online = false;
        tracing::info!("Shift ended: crew={}", shift.crew);
        Ok(shift)
    }

    /// Flip between online and away
    pub fn toggle_online(&self) -> Result<Shift> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let shift = current
            .as_mut()
            .ok_or_else(|| AppError::NotFound("No active shift".to_string()))?;

        shift.online = !shift.online;
        tracing::debug!("Crew {} online={}", shift.crew, shift.online);
        Ok(shift.clone())
    }
}
