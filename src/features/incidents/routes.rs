use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::incidents::handlers;
use crate::features::incidents::services::IncidentService;

/// Create routes for the incidents feature
pub fn routes(service: Arc<IncidentService>) -> Router {
    Router::new()
        .route(
            "/api/incidents",
            get(handlers::list_incidents).post(handlers::create_incident),
        )
        .route("/api/incidents/archive", get(handlers::list_archive))
        .route("/api/incidents/{id}", get(handlers::get_incident))
        .route(
            "/api/incidents/{id}/status",
            patch(handlers::update_incident_status),
        )
        .route(
            "/api/incidents/{id}/archive",
            post(handlers::archive_incident),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::feed::services::IncidentFeed;
    use crate::features::incidents::dtos::IncidentResponseDto;
    use crate::features::incidents::models::{Crew, IncidentStatus};
    use crate::shared::test_helpers::test_feed_config;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::Utc;
    use serde_json::json;

    fn server() -> TestServer {
        let feed = Arc::new(IncidentFeed::new(test_feed_config()));
        let service = IncidentService::new(feed, Utc::now());
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_active_incidents() {
        let server = server();

        let response = server.get("/api/incidents").await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<IncidentResponseDto>> = response.json();
        let ids: Vec<String> = body.data.unwrap().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["inc-001", "inc-002"]);
        assert_eq!(body.meta.unwrap().total, 2);
    }

    #[tokio::test]
    async fn test_create_then_listed_first() {
        let server = server();

        let response = server
            .post("/api/incidents")
            .json(&json!({
                "type": "fire",
                "location": "ул. Гагарина, 78",
                "priority": "high",
                "description": "Горит мусорный бак",
                "caller_name": "Козлов К.К."
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created = response
            .json::<ApiResponse<IncidentResponseDto>>()
            .data
            .unwrap();
        assert_eq!(created.status, IncidentStatus::New);
        assert_eq!(created.location, "ул. Гагарина, 78");

        let list: ApiResponse<Vec<IncidentResponseDto>> = server.get("/api/incidents").await.json();
        let list = list.data.unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_requires_location() {
        let server = server();

        let response = server
            .post("/api/incidents")
            .json(&json!({ "location": "", "description": "Шум" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
        assert!(body.errors.is_some());
    }

    #[tokio::test]
    async fn test_status_change_rules() {
        let server = server();

        server
            .patch("/api/incidents/inc-002/status")
            .json(&json!({ "status": "in_progress" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .patch("/api/incidents/inc-002/status")
            .json(&json!({ "status": "in_progress", "crew": "АП-3" }))
            .await;
        response.assert_status_ok();
        let updated = response
            .json::<ApiResponse<IncidentResponseDto>>()
            .data
            .unwrap();
        assert_eq!(updated.assigned_crew, Some(Crew::Ap3));

        server
            .patch("/api/incidents/inc-002/status")
            .json(&json!({ "status": "in_progress", "crew": "АП-3" }))
            .await
            .assert_status(StatusCode::CONFLICT);

        server
            .post("/api/incidents/inc-002/archive")
            .await
            .assert_status(StatusCode::CONFLICT);

        server
            .patch("/api/incidents/missing/status")
            .json(&json!({ "status": "in_progress", "crew": "АП-3" }))
            .await
            .assert_status_not_found();
    }

    #[tokio::test]
    async fn test_archive_listing() {
        let server = server();

        let response = server
            .get("/api/incidents/archive")
            .add_query_param("q", "парк")
            .await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<IncidentResponseDto>> = response.json();
        let data = body.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].id, "arc-001");
        assert_eq!(body.meta.unwrap().total, 1);
    }

    #[tokio::test]
    async fn test_archive_page_past_the_end_is_empty() {
        let server = server();

        let response = server
            .get("/api/incidents/archive")
            .add_query_param("page", i64::MAX)
            .await;
        response.assert_status_ok();

        let body: ApiResponse<Vec<IncidentResponseDto>> = response.json();
        assert!(body.data.unwrap().is_empty());
        assert_eq!(body.meta.unwrap().total, 3);
    }

    #[tokio::test]
    async fn test_malformed_body_uses_error_envelope() {
        let server = server();

        let response = server
            .patch("/api/incidents/inc-001/status")
            .json(&json!({ "status": "teleported" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(!response.json::<ApiResponse<()>>().success);
    }
}
