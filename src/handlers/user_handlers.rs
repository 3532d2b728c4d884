//! Handlers for the user lookup and registration fixture endpoints.
//!
//! - GET  /users?id=...  -> parameterized query representation
//! - POST /register      -> acknowledge without echoing the password

use axum::{
    Json,
    extract::{Query, rejection::JsonRejection},
};
use serde::Deserialize;

use crate::{
    errors::AppError,
    models::{
        registration::{RegisterRequest, RegisterResponse, RegistrationRecord},
        user_query::BoundUserQuery,
    },
};

/// Query params accepted by `GET /users`.
#[derive(Debug, Deserialize)]
pub struct UserLookupQuery {
    pub id: Option<String>,
}

/// `GET /users`
///
/// Validates the identifier as a numeric scalar, then renders the lookup
/// it would execute with the identifier bound as a parameter. An absent
/// `id` behaves exactly like `id=1`.
pub async fn get_user(Query(q): Query<UserLookupQuery>) -> Result<String, AppError> {
    let raw = q.id.unwrap_or_else(|| "1".to_string());
    let id: i64 = raw
        .parse()
        .map_err(|_| AppError::bad_request("id must be an integer"))?;

    Ok(BoundUserQuery::new(id).to_string())
}

/// `POST /register`
///
/// Acknowledges a registration. The plaintext password is reduced to a
/// salted digest on arrival; neither the plaintext nor the digest appears
/// in the response or the logs.
pub async fn register(
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, AppError> {
    let Json(req) = payload.map_err(|rej| AppError::bad_request(rejection_reason(&rej)))?;

    if req.username.is_empty() || req.password.is_empty() {
        return Err(AppError::bad_request("username and password are required"));
    }

    let record = RegistrationRecord::from_request(req);
    tracing::info!(username = %record.username, "user registered");
    tracing::debug!(
        digest_len = record.password_digest.len(),
        "registration record built; no store is attached, dropping it"
    );

    Ok(Json(RegisterResponse::acknowledge(&record)))
}

/// Collapse body rejections to short machine-readable reasons without
/// leaking deserializer internals.
fn rejection_reason(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "body must be JSON",
        JsonRejection::JsonDataError(_) => "username and password are required",
        JsonRejection::JsonSyntaxError(_) => "body is not valid JSON",
        _ => "invalid body",
    }
}
