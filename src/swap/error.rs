// ABOUTME: Swap workflow errors with SNAFU context per step.
// ABOUTME: Records which step failed while keeping the platform error and its output.

use snafu::Snafu;

use super::plan::SwapStep;
use crate::platform::PlatformError;

/// A swap that stopped partway. Earlier steps are not undone.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SwapError {
    #[snafu(display("invalid swap: {reason}"))]
    InvalidPlan { reason: String },

    #[snafu(display("failed to resolve app {name}: {source}"))]
    ResolveApp { name: String, source: PlatformError },

    #[snafu(display("failed to resolve target space: {source}"))]
    ResolveSpace { source: PlatformError },

    #[snafu(display("failed to resolve shared domain: {source}"))]
    ResolveDomain { source: PlatformError },

    #[snafu(display("failed to create route {route}: {source}"))]
    CreateRoute { route: String, source: PlatformError },

    #[snafu(display("failed to map route {route} to {app}: {source}"))]
    MapRoute {
        route: String,
        app: String,
        source: PlatformError,
    },

    #[snafu(display("failed to carry health check from {from} to {to}: {source}"))]
    CarryHealthCheck {
        from: String,
        to: String,
        source: PlatformError,
    },

    #[snafu(display("failed to detach routes from {app}: {source}"))]
    DetachRoutes { app: String, source: PlatformError },

    #[snafu(display("failed to rename {app} to {new_name}: {source}"))]
    Rename {
        app: String,
        new_name: String,
        source: PlatformError,
    },

    #[snafu(display("failed to start {app}: {source}"))]
    Start { app: String, source: PlatformError },
}

impl SwapError {
    /// The step that failed, or `None` if the plan was rejected up front.
    pub fn step(&self) -> Option<SwapStep> {
        match self {
            SwapError::InvalidPlan { .. } => None,
            SwapError::ResolveApp { .. } => Some(SwapStep::ResolveApps),
            SwapError::ResolveSpace { .. } => Some(SwapStep::ResolveSpace),
            SwapError::ResolveDomain { .. } => Some(SwapStep::ResolveDomain),
            SwapError::CreateRoute { .. } => Some(SwapStep::CreateRoute),
            SwapError::MapRoute { .. } => Some(SwapStep::MapRoute),
            SwapError::CarryHealthCheck { .. } => Some(SwapStep::CarryHealthCheck),
            SwapError::DetachRoutes { .. } => Some(SwapStep::DetachRoutes),
            SwapError::Rename { .. } => Some(SwapStep::Rename),
            SwapError::Start { .. } => Some(SwapStep::Start),
        }
    }

    /// The underlying platform failure.
    pub fn platform_error(&self) -> Option<&PlatformError> {
        match self {
            SwapError::InvalidPlan { .. } => None,
            SwapError::ResolveApp { source, .. }
            | SwapError::ResolveSpace { source }
            | SwapError::ResolveDomain { source }
            | SwapError::CreateRoute { source, .. }
            | SwapError::MapRoute { source, .. }
            | SwapError::CarryHealthCheck { source, .. }
            | SwapError::DetachRoutes { source, .. }
            | SwapError::Rename { source, .. }
            | SwapError::Start { source, .. } => Some(source),
        }
    }

    /// Platform output captured with the failure.
    pub fn output(&self) -> &[String] {
        self.platform_error().map(PlatformError::output).unwrap_or(&[])
    }
}
