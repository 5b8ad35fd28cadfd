// ABOUTME: CommandRunner capability consumed by the platform operations.
// ABOUTME: Runs cf-style commands and hands back their captured output lines.

use async_trait::async_trait;

/// Runs platform CLI commands on behalf of [`Platform`](super::Platform).
///
/// Management API calls travel through the same interface as `curl`
/// commands (`["curl", "/v2/apps/...", "-X", "PUT", "-d", body]`).
/// Implementations decide how commands are launched and may enforce a
/// deadline; the platform operations never retry.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command without echoing its output to the terminal.
    async fn run(&self, args: &[&str]) -> Result<Vec<String>, RunError>;

    /// Run a command while letting its output reach the terminal.
    ///
    /// The output is still captured and returned.
    async fn run_interactive(&self, args: &[&str]) -> Result<Vec<String>, RunError>;
}

/// A command that could not be run or reported failure.
///
/// The captured output travels with the error: the platform's own messages
/// are usually more useful than `message`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct RunError {
    pub message: String,
    pub output: Vec<String>,
}

/// Marker the cf CLI prints when a command fails at the domain level.
pub const FAILURE_MARKER: &str = "FAILED";

impl RunError {
    pub fn new(message: impl Into<String>, output: Vec<String>) -> Self {
        Self {
            message: message.into(),
            output,
        }
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Whether any captured line carries the CLI's failure marker.
    pub fn has_failure_marker(&self) -> bool {
        has_failure_marker(&self.output)
    }
}

/// Whether any line carries the CLI's failure marker.
///
/// The cf CLI sometimes prints the marker and still exits zero, so output
/// from successful runs is checked too.
pub fn has_failure_marker(lines: &[String]) -> bool {
    lines.iter().any(|line| line.contains(FAILURE_MARKER))
}
