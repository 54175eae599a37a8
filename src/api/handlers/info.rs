use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::AppState;
use crate::service::RequestInfo;

/// GET /
///
/// Service metadata, host facts, uptime and the caller's request details.
pub async fn service_info(State(state): State<Arc<AppState>>, request: Request) -> impl IntoResponse {
    let request_info = RequestInfo::from_request(&request);
    tracing::info!(
        "Request received: {} {}",
        request_info.method,
        request_info.path
    );

    (StatusCode::OK, Json(state.info.build_info(request_info)))
}
