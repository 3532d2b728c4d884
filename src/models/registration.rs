//! Registration payloads and the record a user store would receive.

use serde::{Deserialize, Serialize};

use crate::services::password_service;

/// Body of `POST /register`. Both fields are required.
///
/// No `Debug` impl: the plaintext password must never be formattable
/// into a log line, even by accident.
#[derive(Deserialize)]
pub struct RegisterRequest {
    /// Account name, echoed back in the acknowledgement.
    pub username: String,

    /// Plaintext password. Consumed on arrival; only its salted digest
    /// survives the request.
    pub password: String,
}

/// What registration would persist if a store existed.
#[derive(Debug, Clone)]
pub struct RegistrationRecord {
    /// Account name.
    pub username: String,

    /// Salted one-way digest of the submitted password.
    pub password_digest: String,
}

impl RegistrationRecord {
    /// Build a record from a validated request, consuming the plaintext.
    pub fn from_request(req: RegisterRequest) -> Self {
        Self {
            password_digest: password_service::salted_digest(&req.password),
            username: req.username,
        }
    }
}

/// Acknowledgement body for `POST /register`.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}

/// Public view of a registered user. Deliberately has no secret fields.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub username: String,
}

impl RegisterResponse {
    /// Acknowledge a registration without exposing the digest.
    pub fn acknowledge(record: &RegistrationRecord) -> Self {
        Self {
            message: "User registered".into(),
            user: RegisteredUser {
                username: record.username.clone(),
            },
        }
    }
}
