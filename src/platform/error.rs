// ABOUTME: Error taxonomy for platform operations.
// ABOUTME: Separates domain failures (not found, not targeted) from transport faults.

use super::runner::RunError;

/// Errors from [`Platform`](super::Platform) operations.
///
/// Every variant keeps the raw command output that accompanied it.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("app {name} not found")]
    AppNotFound { name: String, output: Vec<String> },

    #[error("space {name} not found")]
    SpaceNotFound { name: String, output: Vec<String> },

    #[error("currently not targeted to a space")]
    NotTargeted { output: Vec<String> },

    #[error("no domain available")]
    NoDomainAvailable { output: Vec<String> },

    #[error("'{field}' field not found in response")]
    MissingField {
        field: &'static str,
        output: Vec<String>,
    },

    #[error("failed to decode response: {source}")]
    Decode {
        source: serde_json::Error,
        output: Vec<String>,
    },

    #[error("`cf {command}` returned no output")]
    EmptyOutput { command: String },

    #[error(transparent)]
    Transport(#[from] RunError),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformErrorKind {
    /// Application or space lookup reported a failure marker.
    NotFound,
    /// No space targeted, or target output had an unexpected shape.
    NotTargeted,
    /// Domain listing was too short.
    NoDomainAvailable,
    /// Expected field missing from a payload, or the payload did not decode.
    MalformedResponse,
    /// The command itself failed.
    Transport,
}

impl PlatformError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> PlatformErrorKind {
        match self {
            PlatformError::AppNotFound { .. } | PlatformError::SpaceNotFound { .. } => {
                PlatformErrorKind::NotFound
            }
            PlatformError::NotTargeted { .. } => PlatformErrorKind::NotTargeted,
            PlatformError::NoDomainAvailable { .. } => PlatformErrorKind::NoDomainAvailable,
            PlatformError::MissingField { .. }
            | PlatformError::Decode { .. }
            | PlatformError::EmptyOutput { .. } => PlatformErrorKind::MalformedResponse,
            PlatformError::Transport(_) => PlatformErrorKind::Transport,
        }
    }

    /// Raw command output captured alongside the error.
    pub fn output(&self) -> &[String] {
        match self {
            PlatformError::AppNotFound { output, .. }
            | PlatformError::SpaceNotFound { output, .. }
            | PlatformError::NotTargeted { output }
            | PlatformError::NoDomainAvailable { output }
            | PlatformError::MissingField { output, .. }
            | PlatformError::Decode { output, .. } => output.as_slice(),
            PlatformError::EmptyOutput { .. } => &[],
            PlatformError::Transport(e) => e.output(),
        }
    }
}
