//! Health handler.
//!
//! - GET /healthz  -> simple liveness ("ok")

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// `GET /healthz`
///
/// Very small liveness probe — always returns 200 OK with a plain JSON body.
/// This endpoint should be cheap and never perform I/O.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

#[cfg(test)]
mod tests {
    use crate::{routes::routes::routes, services::command_service::CommandService};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn healthz_returns_200() {
        let server = TestServer::new(routes().with_state(CommandService::default())).unwrap();
        let response = server.get("/healthz").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}
