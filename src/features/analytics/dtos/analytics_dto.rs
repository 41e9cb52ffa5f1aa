use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::incidents::models::{IncidentStatus, IncidentType, Priority};

// ============================================================================
// Mock statistics
// ============================================================================

/// Monthly counts for one incident type, aligned with `IncidentStatsDto::months`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TypeSeriesDto {
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub name: String,
    pub data: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriorityShareDto {
    pub priority: Priority,
    pub name: String,
    pub value: u32,
}

/// Statistics behind the analytics charts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IncidentStatsDto {
    /// Month labels, oldest first, ending with the current month
    pub months: Vec<String>,
    pub incidents_by_type: Vec<TypeSeriesDto>,
    pub priority_distribution: Vec<PriorityShareDto>,
    /// Incidents in the most recent period
    pub total_incidents: u32,
    pub resolved_incidents: u32,
    /// Minutes
    pub average_response_time: u32,
}

// ============================================================================
// Live board summary
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusCountDto {
    pub status: IncidentStatus,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TypeCountDto {
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PriorityCountDto {
    pub priority: Priority,
    pub name: String,
    pub count: usize,
}

/// Counts over the incidents currently on the board
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoardSummaryDto {
    pub total: usize,
    pub active: usize,
    pub by_status: Vec<StatusCountDto>,
    pub by_type: Vec<TypeCountDto>,
    pub by_priority: Vec<PriorityCountDto>,
}
