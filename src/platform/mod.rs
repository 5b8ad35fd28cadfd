// ABOUTME: Cloud Foundry platform operations behind an injected command runner.
// ABOUTME: Exposes the operations, their error taxonomy, and the cf CLI runner.

mod cf_cli;
mod error;
pub mod listing;
mod operations;
mod runner;
mod summary;

pub use cf_cli::CfCli;
pub use error::{PlatformError, PlatformErrorKind};
pub use operations::Platform;
pub use runner::{CommandRunner, FAILURE_MARKER, RunError, has_failure_marker};
pub use summary::{AppSummary, HEALTH_CHECK_FIELD, RouteReference};
