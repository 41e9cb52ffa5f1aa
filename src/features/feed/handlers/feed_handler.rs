use std::sync::Arc;

use axum::{
    extract::State,
    response::{sse::Event, IntoResponse, Response, Sse},
    Json,
};
use tokio_stream::StreamExt;

use crate::core::error::Result;
use crate::features::feed::dtos::FeedStatusDto;
use crate::features::feed::services::IncidentFeed;
use crate::features::incidents::dtos::IncidentResponseDto;
use crate::shared::types::ApiResponse;

/// Get feed connection status
#[utoipa::path(
    get,
    path = "/api/feed",
    responses(
        (status = 200, description = "Feed status", body = ApiResponse<FeedStatusDto>),
    ),
    tag = "feed"
)]
pub async fn get_status(
    State(feed): State<Arc<IncidentFeed>>,
) -> Result<Json<ApiResponse<FeedStatusDto>>> {
    Ok(Json(ApiResponse::success(
        Some(FeedStatusDto::from(feed.as_ref())),
        None,
        None,
    )))
}

/// Connect the feed (go online)
#[utoipa::path(
    post,
    path = "/api/feed/connect",
    responses(
        (status = 200, description = "Feed connected", body = ApiResponse<FeedStatusDto>),
    ),
    tag = "feed"
)]
pub async fn connect(
    State(feed): State<Arc<IncidentFeed>>,
) -> Result<Json<ApiResponse<FeedStatusDto>>> {
    feed.connect();
    Ok(Json(ApiResponse::success(
        Some(FeedStatusDto::from(feed.as_ref())),
        Some("Feed connected".to_string()),
        None,
    )))
}

/// Disconnect the feed (go offline)
#[utoipa::path(
    post,
    path = "/api/feed/disconnect",
    responses(
        (status = 200, description = "Feed disconnected", body = ApiResponse<FeedStatusDto>),
    ),
    tag = "feed"
)]
pub async fn disconnect(
    State(feed): State<Arc<IncidentFeed>>,
) -> Result<Json<ApiResponse<FeedStatusDto>>> {
    feed.disconnect();
    Ok(Json(ApiResponse::success(
        Some(FeedStatusDto::from(feed.as_ref())),
        Some("Feed disconnected".to_string()),
        None,
    )))
}

/// Stream incidents as they are emitted
///
/// Each SSE event is named `incident` and carries an `IncidentResponseDto`.
/// The listener is removed when the client goes away.
#[utoipa::path(
    get,
    path = "/api/feed/stream",
    responses(
        (status = 200, description = "SSE stream of incidents", content_type = "text/event-stream"),
    ),
    tag = "feed"
)]
pub async fn stream(State(feed): State<Arc<IncidentFeed>>) -> Response {
    let events = feed.subscribe().map(|incident| {
        Event::default()
            .event("incident")
            .json_data(IncidentResponseDto::from(incident))
    });

    Sse::new(events)
        .keep_alive(
            axum::response::sse::KeepAlive::new()
                .interval(std::time::Duration::from_secs(15))
                .text("ping"),
        )
        .into_response()
}
