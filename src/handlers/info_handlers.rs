//! Static fixture endpoints.
//!
//! - GET /          -> fixed greeting text
//! - GET /api/data  -> fixed JSON payload

use axum::Json;
use serde::Serialize;

/// `GET /`
///
/// Fixed greeting. Query parameters are ignored entirely.
pub async fn home() -> &'static str {
    "Hello, DevSecOps Pipeline!"
}

/// `GET /api/data`
///
/// Fixed JSON payload with no inputs and no failure modes.
pub async fn api_data() -> Json<ApiDataResponse> {
    Json(ApiDataResponse {
        message: "This is some API data",
    })
}

#[derive(Serialize)]
pub struct ApiDataResponse {
    message: &'static str,
}

#[cfg(test)]
mod tests {
    use crate::{routes::routes::routes, services::command_service::CommandService};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    fn server() -> TestServer {
        TestServer::new(routes().with_state(CommandService::default())).unwrap()
    }

    #[tokio::test]
    async fn home_returns_fixed_greeting() {
        let server = server();
        let response = server.get("/").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "Hello, DevSecOps Pipeline!");
    }

    #[tokio::test]
    async fn home_ignores_query_parameters() {
        let server = server();
        let response = server.get("/").add_query_param("cmd", "whoami").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "Hello, DevSecOps Pipeline!");
    }

    #[tokio::test]
    async fn api_data_returns_exact_payload() {
        let server = server();
        let response = server.get("/api/data").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({"message": "This is some API data"})
        );
    }
}
