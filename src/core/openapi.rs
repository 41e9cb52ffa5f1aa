use utoipa::{Modify, OpenApi};

use crate::features::analytics::{dtos as analytics_dtos, handlers as analytics_handlers};
use crate::features::chat::{dtos as chat_dtos, handlers as chat_handlers};
use crate::features::feed::{dtos as feed_dtos, handlers as feed_handlers};
use crate::features::incidents::{
    dtos as incidents_dtos, handlers as incidents_handlers, models as incidents_models,
};
use crate::features::records::{
    dtos as records_dtos, handlers as records_handlers, models as records_models,
};
use crate::features::shifts::{
    dtos as shifts_dtos, handlers as shifts_handlers, models as shifts_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Incidents
        incidents_handlers::list_incidents,
        incidents_handlers::create_incident,
        incidents_handlers::get_incident,
        incidents_handlers::update_incident_status,
        incidents_handlers::archive_incident,
        incidents_handlers::list_archive,
        // Feed
        feed_handlers::get_status,
        feed_handlers::connect,
        feed_handlers::disconnect,
        feed_handlers::stream,
        // Analytics
        analytics_handlers::get_stats,
        analytics_handlers::get_summary,
        // Shift
        shifts_handlers::get_current,
        shifts_handlers::start_shift,
        shifts_handlers::end_shift,
        shifts_handlers::toggle_online,
        // Records
        records_handlers::list_records,
        records_handlers::get_summary,
        records_handlers::get_record,
        // Chat
        chat_handlers::list_messages,
        chat_handlers::send_message,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Incidents
            incidents_models::IncidentType,
            incidents_models::Priority,
            incidents_models::IncidentStatus,
            incidents_models::Crew,
            incidents_models::Caller,
            incidents_dtos::IncidentResponseDto,
            incidents_dtos::CreateIncidentDto,
            incidents_dtos::UpdateIncidentStatusDto,
            ApiResponse<incidents_dtos::IncidentResponseDto>,
            ApiResponse<Vec<incidents_dtos::IncidentResponseDto>>,
            // Feed
            feed_dtos::FeedStatusDto,
            ApiResponse<feed_dtos::FeedStatusDto>,
            // Analytics
            analytics_dtos::TypeSeriesDto,
            analytics_dtos::PriorityShareDto,
            analytics_dtos::IncidentStatsDto,
            analytics_dtos::StatusCountDto,
            analytics_dtos::TypeCountDto,
            analytics_dtos::PriorityCountDto,
            analytics_dtos::BoardSummaryDto,
            ApiResponse<analytics_dtos::IncidentStatsDto>,
            ApiResponse<analytics_dtos::BoardSummaryDto>,
            // Shift
            shifts_models::ShiftType,
            shifts_dtos::StartShiftDto,
            shifts_dtos::ShiftResponseDto,
            ApiResponse<shifts_dtos::ShiftResponseDto>,
            // Records
            records_models::RecordStatus,
            records_dtos::RecordResponseDto,
            records_dtos::RecordSummaryDto,
            ApiResponse<records_dtos::RecordResponseDto>,
            ApiResponse<Vec<records_dtos::RecordResponseDto>>,
            ApiResponse<records_dtos::RecordSummaryDto>,
            // Chat
            chat_dtos::ChatMessageDto,
            chat_dtos::SendMessageDto,
            ApiResponse<chat_dtos::ChatMessageDto>,
            ApiResponse<Vec<chat_dtos::ChatMessageDto>>,
        )
    ),
    tags(
        (name = "incidents", description = "Incident board and lifecycle"),
        (name = "feed", description = "Simulated live incident feed"),
        (name = "analytics", description = "Charts and board counts"),
        (name = "shift", description = "Crew shift session"),
        (name = "records", description = "Citizen records registry"),
        (name = "chat", description = "Chat with the dispatch centre"),
    ),
    info(
        title = "Dispatch Desk API",
        version = "0.1.0",
        description = "API documentation for the dispatcher incident dashboard",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
