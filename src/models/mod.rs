//! Request-scoped data models for the fixture service.
//!
//! Every entity here lives for exactly one request: built from the
//! incoming payload, rendered into the response, then dropped. There is
//! no store behind any of them.

pub mod registration;
pub mod user_query;
