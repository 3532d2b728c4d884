//! Handler for the command execution fixture endpoint.
//!
//! - GET /run-command?cmd=...  -> stdout of an allow-listed diagnostic
//!
//! The request string is untrusted data. Everything that makes running it
//! safe (tokenization, allow-list, timeout, output cap) lives in
//! `CommandService`; this handler only defaults the parameter and maps
//! failures onto 4xx responses.

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::{errors::AppError, services::command_service::CommandService};

/// Run when the caller supplies no `cmd` parameter. The quotes make the
/// message a single argument to `echo`, so the output carries no quotes.
const DEFAULT_COMMAND: &str = r#"echo "No command provided""#;

/// Query params accepted by `GET /run-command`.
#[derive(Debug, Deserialize)]
pub struct RunCommandQuery {
    pub cmd: Option<String>,
}

/// `GET /run-command`
///
/// Runs the requested command through the execution boundary and returns
/// its captured stdout as plain text.
pub async fn run_command(
    State(runner): State<CommandService>,
    Query(q): Query<RunCommandQuery>,
) -> Result<String, AppError> {
    let raw = q.cmd.unwrap_or_else(|| DEFAULT_COMMAND.to_string());
    let output = runner.run(&raw).await?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::{routes::routes::routes, services::command_service::CommandService};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    fn server() -> TestServer {
        TestServer::new(routes().with_state(CommandService::default())).unwrap()
    }

    #[tokio::test]
    async fn missing_cmd_runs_default_echo() {
        let server = server();
        let response = server.get("/run-command").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "No command provided\n");
    }

    #[tokio::test]
    async fn allow_listed_command_returns_stdout() {
        let server = server();
        let response = server
            .get("/run-command")
            .add_query_param("cmd", "echo hello")
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), "hello\n");
    }

    #[tokio::test]
    async fn shell_metacharacters_are_rejected() {
        let server = server();
        let response = server
            .get("/run-command")
            .add_query_param("cmd", "echo hi; rm -rf /")
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn programs_off_the_allow_list_are_forbidden() {
        let server = server();
        let response = server
            .get("/run-command")
            .add_query_param("cmd", "rm -rf /tmp/whatever")
            .await;
        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn blank_cmd_is_a_bad_request() {
        let server = server();
        let response = server.get("/run-command").add_query_param("cmd", " ").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }
}
