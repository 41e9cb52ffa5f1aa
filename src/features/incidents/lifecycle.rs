//! Operator-driven incident lifecycle.
//!
//! ```text
//! new --(crew)--> in_progress --(crew [+ report])--> resolved --> archived
//! ```
//!
//! Transitions only move forward one step at a time. A rejected transition
//! leaves the incident untouched.

use thiserror::Error;

use crate::core::error::AppError;
use crate::features::incidents::models::{Crew, Incident, IncidentStatus};

/// Operator input accompanying a status change
#[derive(Debug, Clone, Default)]
pub struct TransitionContext {
    /// Crew selected in the form; falls back to the incident's current crew
    pub crew: Option<Crew>,
    /// Closure report typed by the operator
    pub report: Option<String>,
    /// Full-detail view: resolving needs a non-blank report
    pub require_report: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionRejection {
    #[error("A crew must be assigned before moving to {0}")]
    CrewRequired(IncidentStatus),

    #[error("A report is required to resolve the incident")]
    ReportRequired,

    #[error("Cannot move incident from {from} to {to}")]
    InvalidTransition {
        from: IncidentStatus,
        to: IncidentStatus,
    },
}

impl From<TransitionRejection> for AppError {
    fn from(rejection: TransitionRejection) -> Self {
        match rejection {
            TransitionRejection::CrewRequired(_) | TransitionRejection::ReportRequired => {
                AppError::Validation(rejection.to_string())
            }
            TransitionRejection::InvalidTransition { .. } => {
                AppError::Conflict(rejection.to_string())
            }
        }
    }
}

/// Apply `target` to a copy of `incident` if the lifecycle rules allow it
pub fn attempt_transition(
    incident: &Incident,
    target: IncidentStatus,
    context: &TransitionContext,
) -> Result<Incident, TransitionRejection> {
    if incident.status.next() != Some(target) {
        return Err(TransitionRejection::InvalidTransition {
            from: incident.status,
            to: target,
        });
    }

    let mut updated = incident.clone();

    match target {
        IncidentStatus::InProgress => {
            let crew = context
                .crew
                .or(incident.assigned_crew)
                .ok_or(TransitionRejection::CrewRequired(target))?;
            updated.assigned_crew = Some(crew);
        }
        IncidentStatus::Resolved => {
            let crew = context
                .crew
                .or(incident.assigned_crew)
                .ok_or(TransitionRejection::CrewRequired(target))?;

            let report = context
                .report
                .as_ref()
                .filter(|r| !r.trim().is_empty())
                .cloned();
            if context.require_report && report.is_none() {
                return Err(TransitionRejection::ReportRequired);
            }

            updated.assigned_crew = Some(crew);
            if report.is_some() {
                updated.report = report;
            }
        }
        // `next()` never yields New
        IncidentStatus::Archived | IncidentStatus::New => {}
    }

    updated.status = target;
    Ok(updated)
}
