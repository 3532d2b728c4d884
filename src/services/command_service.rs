//! src/services/command_service.rs
//!
//! CommandService — the boundary through which caller-requested diagnostic
//! commands are executed. Requests arrive as a single untrusted string; it
//! is split into an argument vector (never handed to a shell), the program
//! name is checked against a fixed allow-list, and the child runs with a
//! scrubbed environment, a bounded timeout, and a capped amount of
//! captured output.

use std::{io, process::Stdio, time::Duration};
use thiserror::Error;
use tokio::{process::Command, time};

/// Programs that `/run-command` may execute. All read-only diagnostics.
const ALLOWED_COMMANDS: [&str; 6] = ["date", "echo", "hostname", "uname", "uptime", "whoami"];

/// Environment variables forwarded to the child. Everything else is
/// dropped so credential material in the service environment can never
/// reach a spawned process.
const PASSTHROUGH_ENV_VARS: [&str; 3] = ["PATH", "LANG", "LC_ALL"];

/// Characters that carry meaning in a shell. They have no business in an
/// argument vector, so their unquoted presence fails the whole request.
const DENIED_METACHARACTERS: [char; 15] = [
    ';', '|', '&', '$', '`', '(', ')', '<', '>', '{', '}', '*', '?', '!', '\\',
];

const TRUNCATION_MARKER: &str = "\n[output truncated]";

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unterminated quote in command")]
    UnterminatedQuote,
    #[error("character `{0}` is not allowed outside quotes")]
    DeniedCharacter(char),
    #[error("command `{0}` is not on the allow-list")]
    Disallowed(String),
    #[error("command timed out after {}s", .0.as_secs())]
    TimedOut(Duration),
    #[error("command exited with status {0}")]
    Failed(i32),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// CommandService runs allow-listed diagnostic commands on behalf of
/// `/run-command`:
/// - Splits the raw request string into discrete tokens (quote-aware,
///   shell metacharacters rejected)
/// - Spawns the program directly with those tokens as its argument vector
/// - Enforces a wall-clock timeout and kills the child on expiry
/// - Caps how much stdout is returned to the caller
///
/// Cloned into every handler invocation as router state; holds no mutable
/// state of its own.
#[derive(Clone, Debug)]
pub struct CommandService {
    timeout: Duration,
    max_output_bytes: usize,
}

impl CommandService {
    /// Create a new CommandService with the given execution limits.
    pub fn new(timeout: Duration, max_output_bytes: usize) -> Self {
        Self {
            timeout,
            max_output_bytes,
        }
    }

    /// Run a raw command-line string and return its captured stdout.
    ///
    /// The string is tokenized and validated before anything is spawned;
    /// a request that fails validation never creates a process.
    pub async fn run(&self, raw: &str) -> CommandResult<String> {
        let argv = split_command_line(raw)?;
        let (program, args) = argv.split_first().ok_or(CommandError::Empty)?;
        ensure_allowed(program)?;

        tracing::debug!(program = %program, args = args.len(), "spawning allow-listed command");

        let child = Command::new(program)
            .args(args)
            .env_clear()
            .envs(passthrough_env())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = time::timeout(self.timeout, child)
            .await
            .map_err(|_| CommandError::TimedOut(self.timeout))??;

        if !output.status.success() {
            return Err(CommandError::Failed(output.status.code().unwrap_or(-1)));
        }

        Ok(self.cap_output(output.stdout))
    }

    /// Convert captured stdout to text, truncating at the configured cap.
    fn cap_output(&self, mut stdout: Vec<u8>) -> String {
        if stdout.len() <= self.max_output_bytes {
            return String::from_utf8_lossy(&stdout).into_owned();
        }
        stdout.truncate(self.max_output_bytes);
        let mut text = String::from_utf8_lossy(&stdout).into_owned();
        text.push_str(TRUNCATION_MARKER);
        text
    }
}

impl Default for CommandService {
    fn default() -> Self {
        Self::new(Duration::from_secs(5), 64 * 1024)
    }
}

/// Check the program name against ALLOWED_COMMANDS.
///
/// Path-qualified names are rejected outright so the allow-list cannot be
/// sidestepped with `/bin/...` or relative paths.
fn ensure_allowed(program: &str) -> CommandResult<()> {
    if program.contains('/') || !ALLOWED_COMMANDS.contains(&program) {
        return Err(CommandError::Disallowed(program.to_string()));
    }
    Ok(())
}

/// Split a raw command line into discrete argument tokens.
///
/// Whitespace separates tokens. Single and double quotes group characters
/// into one token, and anything inside quotes is plain data (it ends up as
/// one argv element, so a quoted `;` cannot start a second command).
/// Outside quotes, shell metacharacters fail the parse.
fn split_command_line(raw: &str) -> CommandResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for ch in raw.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '\'' || ch == '"' => {
                quote = Some(ch);
                in_token = true;
            }
            None if ch.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None if DENIED_METACHARACTERS.contains(&ch) => {
                return Err(CommandError::DeniedCharacter(ch));
            }
            None => {
                current.push(ch);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err(CommandError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    if tokens.is_empty() {
        return Err(CommandError::Empty);
    }
    Ok(tokens)
}

/// The subset of this process's environment a child is allowed to see.
fn passthrough_env() -> impl Iterator<Item = (String, String)> {
    PASSTHROUGH_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok().map(|v| ((*name).to_string(), v)))
}
