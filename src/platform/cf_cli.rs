// ABOUTME: CommandRunner backed by the cf command-line tool.
// ABOUTME: Spawns cf with tokio::process and captures stdout and stderr lines.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

use super::runner::{CommandRunner, RunError};

/// Runs commands through a local `cf` binary.
///
/// A successful run yields stdout only, so `cf curl` bodies decode cleanly
/// even when the CLI prints notices on stderr. A non-zero exit becomes a
/// [`RunError`] carrying everything the command printed, stdout first, then
/// stderr.
#[derive(Debug, Clone)]
pub struct CfCli {
    binary: PathBuf,
    cf_home: Option<PathBuf>,
    command_timeout: Option<Duration>,
}

impl CfCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            cf_home: None,
            command_timeout: None,
        }
    }

    /// Point the CLI at a different login state directory (`CF_HOME`).
    pub fn cf_home(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cf_home = Some(dir.into());
        self
    }

    /// Abort any single command that runs longer than `timeout`.
    pub fn command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.command_timeout = timeout;
        self
    }

    async fn execute(&self, args: &[&str], echo: bool) -> Result<Vec<String>, RunError> {
        match self.command_timeout {
            Some(limit) => tokio::time::timeout(limit, self.capture(args, echo))
                .await
                .map_err(|_| {
                    RunError::new(
                        format!("cf {} timed out after {:?}", args.join(" "), limit),
                        Vec::new(),
                    )
                })?,
            None => self.capture(args, echo).await,
        }
    }

    async fn capture(&self, args: &[&str], echo: bool) -> Result<Vec<String>, RunError> {
        let mut command = Command::new(&self.binary);
        if let Some(ref home) = self.cf_home {
            command.env("CF_HOME", home);
        }

        let mut child = command
            .args(args)
            .stdin(if echo { Stdio::inherit() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                RunError::new(
                    format!("failed to launch {}: {}", self.binary.display(), e),
                    Vec::new(),
                )
            })?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(RunError::new("cf output pipes unavailable", Vec::new()));
        };

        // Drain stderr alongside stdout so neither pipe can fill up and stall.
        let stderr_task = tokio::spawn(read_lines(stderr, false));
        let mut lines = read_lines(stdout, echo).await;
        let stderr_lines = stderr_task.await.unwrap_or_default();

        if echo {
            for line in &stderr_lines {
                eprintln!("{line}");
            }
        }

        let status = match child.wait().await {
            Ok(status) => status,
            Err(e) => {
                lines.extend(stderr_lines);
                return Err(RunError::new(format!("failed waiting for cf: {e}"), lines));
            }
        };

        if status.success() {
            if !stderr_lines.is_empty() {
                tracing::debug!(
                    command = %args.join(" "),
                    stderr = %stderr_lines.join("\n"),
                    "cf wrote to stderr"
                );
            }
            Ok(lines)
        } else {
            tracing::debug!(command = %args.join(" "), %status, "cf command failed");
            lines.extend(stderr_lines);
            Err(RunError::new(
                format!("cf {} failed with {}", args.first().unwrap_or(&""), status),
                lines,
            ))
        }
    }
}

async fn read_lines<S: AsyncRead + Unpin>(stream: S, echo: bool) -> Vec<String> {
    let mut reader = BufReader::new(stream).split(b'\n');
    let mut lines = Vec::new();
    loop {
        let raw = match reader.next_segment().await {
            Ok(Some(raw)) => raw,
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(error = %e, lines = lines.len(), "stopped reading cf output");
                break;
            }
        };
        let line = String::from_utf8_lossy(&raw).trim_end_matches('\r').to_string();
        if echo {
            println!("{line}");
        }
        lines.push(line);
    }
    lines
}

#[async_trait]
impl CommandRunner for CfCli {
    async fn run(&self, args: &[&str]) -> Result<Vec<String>, RunError> {
        self.execute(args, false).await
    }

    async fn run_interactive(&self, args: &[&str]) -> Result<Vec<String>, RunError> {
        self.execute(args, true).await
    }
}
