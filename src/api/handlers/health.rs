use axum::{
    Json,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::AppState;

/// GET /health
///
/// Liveness probe for load balancers and orchestrators.
/// Always answers 200 with status "healthy" while the process is serving.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> impl IntoResponse {
    tracing::info!("Request received: {} {}", method, uri.path());
    let response = state.health.build_health();
    tracing::debug!("Health check, uptime {}s", response.uptime_seconds);

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::StartupClock;
    use crate::host::SystemHostInfo;

    #[tokio::test]
    async fn test_health_check() {
        let state = Arc::new(AppState::new(StartupClock::new(), Arc::new(SystemHostInfo)));
        let response = health_check(State(state), Method::GET, Uri::from_static("/health"))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
