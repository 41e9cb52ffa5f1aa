use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::records::handlers;
use crate::features::records::services::RecordService;

/// Create citizen registry routes
pub fn routes(record_service: Arc<RecordService>) -> Router {
    Router::new()
        .route("/api/records", get(handlers::list_records))
        .route("/api/records/summary", get(handlers::get_summary))
        .route("/api/records/{id}", get(handlers::get_record))
        .with_state(record_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::records::dtos::{RecordResponseDto, RecordSummaryDto};
    use crate::shared::types::ApiResponse;
    use axum_test::TestServer;

    fn server() -> TestServer {
        TestServer::new(routes(Arc::new(RecordService::new()))).unwrap()
    }

    #[tokio::test]
    async fn test_list_and_search() {
        let server = server();

        let body: ApiResponse<Vec<RecordResponseDto>> = server.get("/api/records").await.json();
        assert_eq!(body.meta.unwrap().total, 4);
        assert_eq!(body.data.unwrap()[0].status_label, "В розыске");

        let response = server
            .get("/api/records")
            .add_query_param("q", "гагарина")
            .await;
        response.assert_status_ok();
        let body: ApiResponse<Vec<RecordResponseDto>> = response.json();
        let data = body.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].id, "rec2");
    }

    #[tokio::test]
    async fn test_status_filter_and_pagination() {
        let server = server();

        let body: ApiResponse<Vec<RecordResponseDto>> = server
            .get("/api/records")
            .add_query_param("status", "closed")
            .await
            .json();
        assert_eq!(body.data.unwrap()[0].id, "rec3");

        let body: ApiResponse<Vec<RecordResponseDto>> = server
            .get("/api/records")
            .add_query_param("page", 2)
            .add_query_param("page_size", 3)
            .await
            .json();
        assert_eq!(body.data.unwrap().len(), 1);
        assert_eq!(body.meta.unwrap().total, 4);
    }

    #[tokio::test]
    async fn test_get_and_summary() {
        let server = server();

        server.get("/api/records/rec4").await.assert_status_ok();
        server.get("/api/records/nope").await.assert_status_not_found();

        let summary: ApiResponse<RecordSummaryDto> =
            server.get("/api/records/summary").await.json();
        let summary = summary.data.unwrap();
        assert_eq!(summary.open_cases, 3);
        assert_eq!(summary.wanted, 1);
    }
}
