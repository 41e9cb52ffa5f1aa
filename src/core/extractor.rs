use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;

use crate::core::error::AppError;

/// JSON body extractor whose rejections render as the `ApiResponse` error envelope.
///
/// Forms such as "new call" and "start shift" post through this, so a body
/// with a bad enum value (an unknown crew, say) answers 400 in the usual shape.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());

        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return AppError::PayloadTooLarge("Request body is too large".to_string());
        }

        match rejection {
            JsonRejection::JsonDataError(err) => {
                AppError::BadRequest(format!("Invalid field value: {}", err.body_text()))
            }
            JsonRejection::JsonSyntaxError(_) => {
                AppError::BadRequest("Request body is not valid JSON".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => AppError::BadRequest(
                "Expected request with `Content-Type: application/json`".to_string(),
            ),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::incidents::models::Crew;
    use crate::shared::types::ApiResponse;
    use axum::extract::DefaultBodyLimit;
    use axum::routing::post;
    use axum::{Json, Router};
    use axum_test::TestServer;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct CrewForm {
        crew: Crew,
    }

    async fn echo_crew(AppJson(form): AppJson<CrewForm>) -> Json<String> {
        Json(form.crew.call_sign().to_string())
    }

    fn server() -> TestServer {
        let app = Router::new()
            .route("/crew", post(echo_crew))
            .layer(DefaultBodyLimit::max(64));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let response = server().post("/crew").json(&json!({ "crew": "АП-2" })).await;
        response.assert_status_ok();
        assert_eq!(response.json::<String>(), "АП-2");
    }

    #[tokio::test]
    async fn test_unknown_crew_is_bad_request_envelope() {
        let response = server().post("/crew").json(&json!({ "crew": "АП-9" })).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: ApiResponse<()> = response.json();
        assert!(!body.success);
        assert!(body.message.unwrap().starts_with("Invalid field value"));
    }

    #[tokio::test]
    async fn test_syntax_error_and_missing_content_type() {
        let server = server();

        let response = server
            .post("/crew")
            .content_type("application/json")
            .text("{ crew: ")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<ApiResponse<()>>().message.as_deref(),
            Some("Request body is not valid JSON")
        );

        server
            .post("/crew")
            .text(r#"{"crew":"АП-1"}"#)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_oversized_body_is_payload_too_large() {
        let padding = "x".repeat(256);
        let response = server()
            .post("/crew")
            .json(&json!({ "crew": "АП-1", "note": padding }))
            .await;
        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(!response.json::<ApiResponse<()>>().success);
    }
}
