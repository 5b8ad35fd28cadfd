// ABOUTME: Inputs, steps, and outcome of a swap.
// ABOUTME: SwapPlan names the apps and route; SwapReport records what was resolved.

use std::fmt;

use crate::types::{AppId, HealthCheckType, SpaceId};

/// Suffix appended to the live app's name when it is retired.
pub const DEFAULT_RETIRED_SUFFIX: &str = "-old";

/// What to swap.
///
/// `app` is the live application. `candidate` is the new version, already
/// pushed and stopped. After the swap the candidate carries `app`'s name and
/// the live app is renamed to `retired_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapPlan {
    pub app: String,
    pub candidate: String,
    pub host: String,
    pub retired_name: String,
    pub carry_health_check: bool,
}

impl SwapPlan {
    pub fn new(
        app: impl Into<String>,
        candidate: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        let app = app.into();
        Self {
            retired_name: format!("{app}{DEFAULT_RETIRED_SUFFIX}"),
            app,
            candidate: candidate.into(),
            host: host.into(),
            carry_health_check: true,
        }
    }

    pub fn retired_name(mut self, name: impl Into<String>) -> Self {
        self.retired_name = name.into();
        self
    }

    pub fn carry_health_check(mut self, carry: bool) -> Self {
        self.carry_health_check = carry;
        self
    }

    /// Reason the plan cannot run, if any.
    pub fn problem(&self) -> Option<String> {
        if self.app.is_empty() || self.candidate.is_empty() || self.host.is_empty() {
            return Some("app, candidate, and host must all be non-empty".to_string());
        }
        if self.app == self.candidate {
            return Some(format!("candidate must differ from the live app '{}'", self.app));
        }
        if self.retired_name == self.app || self.retired_name == self.candidate {
            return Some(format!(
                "retired name '{}' collides with an app taking part in the swap",
                self.retired_name
            ));
        }
        None
    }
}

/// Stages of a swap, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapStep {
    ResolveApps,
    ResolveSpace,
    ResolveDomain,
    CreateRoute,
    MapRoute,
    CarryHealthCheck,
    DetachRoutes,
    Rename,
    Start,
}

impl fmt::Display for SwapStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SwapStep::ResolveApps => "Resolving applications",
            SwapStep::ResolveSpace => "Resolving target space",
            SwapStep::ResolveDomain => "Resolving shared domain",
            SwapStep::CreateRoute => "Creating route",
            SwapStep::MapRoute => "Mapping route to candidate",
            SwapStep::CarryHealthCheck => "Carrying health check forward",
            SwapStep::DetachRoutes => "Detaching routes from live app",
            SwapStep::Rename => "Renaming applications",
            SwapStep::Start => "Starting application",
        };
        f.write_str(s)
    }
}

/// Everything resolved while a swap ran to completion.
#[derive(Debug, Clone)]
pub struct SwapReport {
    pub live_id: AppId,
    pub candidate_id: AppId,
    pub space: String,
    pub space_id: SpaceId,
    pub domain: String,
    pub route: String,
    /// `None` when carrying the health check was disabled.
    pub health_check: Option<HealthCheckType>,
}
