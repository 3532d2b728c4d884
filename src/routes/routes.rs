//! Defines routes for the fixture's HTTP surface.
//!
//! ## Structure
//! - **Static endpoints**
//!   - `GET  /`            — fixed greeting text
//!   - `GET  /api/data`    — fixed JSON payload
//!   - `GET  /healthz`     — liveness probe
//!
//! - **Parameterized endpoints**
//!   - `GET  /run-command` — allow-listed diagnostic execution (`cmd` param)
//!   - `GET  /users`       — parameterized user lookup rendering (`id` param)
//!   - `POST /register`    — registration acknowledgement (JSON body)

use crate::{
    handlers::{
        command_handlers::run_command,
        health_handlers::healthz,
        info_handlers::{api_data, home},
        user_handlers::{get_user, register},
    },
    services::command_service::CommandService,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Build and return the router for all fixture routes.
///
/// The router carries shared state (`CommandService`) to the one handler
/// that spawns anything; every other handler is a pure function of its
/// request.
pub fn routes() -> Router<CommandService> {
    Router::new()
        // health endpoint (mounted at root)
        .route("/healthz", get(healthz))
        // Static fixture surface
        .route("/", get(home))
        .route("/api/data", get(api_data))
        // Parameterized fixture surface
        .route("/run-command", get(run_command))
        .route("/users", get(get_user))
        .route("/register", post(register))
}
