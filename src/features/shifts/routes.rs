use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::features::shifts::handlers;
use crate::features::shifts::services::ShiftService;

/// Create shift routes
pub fn routes(shift_service: Arc<ShiftService>) -> Router {
    Router::new()
        .route(
            "/api/shift",
            get(handlers::get_current)
                .post(handlers::start_shift)
                .delete(handlers::end_shift),
        )
        .route("/api/shift/online", post(handlers::toggle_online))
        .with_state(shift_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::shifts::dtos::ShiftResponseDto;
    use crate::shared::types::ApiResponse;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(ShiftService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_shift_session() {
        let server = server();

        let current: ApiResponse<ShiftResponseDto> = server.get("/api/shift").await.json();
        assert!(current.data.is_none());

        let response = server
            .post("/api/shift")
            .json(&json!({
                "officer_name": "Иванов И.И.",
                "partner_name": "Петров П.П.",
                "crew": "ППС-102",
                "shift_type": "night"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let shift = response.json::<ApiResponse<ShiftResponseDto>>().data.unwrap();
        assert!(shift.online);
        assert_eq!(shift.shift_type_label, "Ночная");

        let toggled: ApiResponse<ShiftResponseDto> =
            server.post("/api/shift/online").await.json();
        assert!(!toggled.data.unwrap().online);

        server.delete("/api/shift").await.assert_status_ok();
        server
            .delete("/api/shift")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_blank_field_rejected() {
        let server = server();

        let response = server
            .post("/api/shift")
            .json(&json!({
                "officer_name": "Иванов И.И.",
                "partner_name": "",
                "crew": "",
                "shift_type": "day"
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ApiResponse<()> = response.json();
        assert_eq!(body.message.as_deref(), Some("All fields are required"));
    }
}
