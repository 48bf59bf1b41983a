//! Health check route

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// GET /health - liveness probe for orchestration
///
/// Fixed payload, never touches the pool: the probe reports process
/// liveness, not database reachability.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn payload_is_fixed() {
        let Json(body) = health().await;
        assert_eq!(serde_json::to_value(&body).unwrap()["status"], "healthy");
    }
}
