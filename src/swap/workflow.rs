// ABOUTME: The low-downtime swap sequence built from platform operations.
// ABOUTME: Runs each step in order and stops at the first failure without compensation.

use snafu::ResultExt;

use super::error::{
    CarryHealthCheckSnafu, CreateRouteSnafu, DetachRoutesSnafu, InvalidPlanSnafu, MapRouteSnafu,
    RenameSnafu, ResolveAppSnafu, ResolveDomainSnafu, ResolveSpaceSnafu, StartSnafu, SwapError,
};
use super::plan::{SwapPlan, SwapReport, SwapStep};
use crate::platform::{CommandRunner, HEALTH_CHECK_FIELD, Platform};

/// Replace the live app with the candidate.
///
/// Steps run strictly in order; each must succeed before the next starts:
/// 1. resolve both app GUIDs, the target space and its GUID, and the domain
/// 2. create `host.domain` and map it to the candidate
/// 3. copy the live app's health check type onto the candidate (optional)
/// 4. detach every route from the live app
/// 5. rename live to `retired_name`, then candidate to `app`
/// 6. start the app under its final name
///
/// `progress` is told about each step before it runs. A failure leaves the
/// platform exactly as far as the sequence got.
pub async fn run_swap<R: CommandRunner>(
    platform: &Platform<R>,
    plan: &SwapPlan,
    mut progress: impl FnMut(SwapStep),
) -> Result<SwapReport, SwapError> {
    if let Some(reason) = plan.problem() {
        return InvalidPlanSnafu { reason }.fail();
    }

    progress(SwapStep::ResolveApps);
    let live_id = platform
        .resolve_application_id(&plan.app)
        .await
        .context(ResolveAppSnafu { name: &plan.app })?;
    let candidate_id = platform
        .resolve_application_id(&plan.candidate)
        .await
        .context(ResolveAppSnafu {
            name: &plan.candidate,
        })?;
    tracing::info!(live = %live_id, candidate = %candidate_id, "resolved applications");

    progress(SwapStep::ResolveSpace);
    let space = platform
        .resolve_target_space()
        .await
        .context(ResolveSpaceSnafu)?;
    let space_id = platform
        .resolve_space_id(&space)
        .await
        .context(ResolveSpaceSnafu)?;
    tracing::info!(space = %space, space_id = %space_id, "resolved target space");

    progress(SwapStep::ResolveDomain);
    let domain = platform
        .resolve_shared_domain()
        .await
        .context(ResolveDomainSnafu)?;
    let route = format!("{}.{}", plan.host, domain);

    progress(SwapStep::CreateRoute);
    platform
        .create_route(&space, &domain, &plan.host)
        .await
        .context(CreateRouteSnafu { route: &route })?;

    progress(SwapStep::MapRoute);
    platform
        .map_route(&plan.candidate, &domain, &plan.host)
        .await
        .context(MapRouteSnafu {
            route: &route,
            app: &plan.candidate,
        })?;
    tracing::info!(route = %route, app = %plan.candidate, "route mapped");

    let health_check = if plan.carry_health_check {
        progress(SwapStep::CarryHealthCheck);
        let carry = CarryHealthCheckSnafu {
            from: &plan.app,
            to: &plan.candidate,
        };
        let health_check = platform
            .fetch_health_check_type(&live_id)
            .await
            .context(carry)?;
        platform
            .update_application_field(&candidate_id, HEALTH_CHECK_FIELD, health_check.as_str())
            .await
            .context(carry)?;
        tracing::info!(health_check = %health_check, "health check carried forward");
        Some(health_check)
    } else {
        None
    };

    progress(SwapStep::DetachRoutes);
    platform
        .detach_all_routes(&live_id)
        .await
        .context(DetachRoutesSnafu { app: &plan.app })?;

    progress(SwapStep::Rename);
    platform
        .update_application_field(&live_id, "name", &plan.retired_name)
        .await
        .context(RenameSnafu {
            app: &plan.app,
            new_name: &plan.retired_name,
        })?;
    platform
        .update_application_field(&candidate_id, "name", &plan.app)
        .await
        .context(RenameSnafu {
            app: &plan.candidate,
            new_name: &plan.app,
        })?;

    progress(SwapStep::Start);
    platform
        .start_application(&plan.app)
        .await
        .context(StartSnafu { app: &plan.app })?;

    Ok(SwapReport {
        live_id,
        candidate_id,
        space,
        space_id,
        domain,
        route,
        health_check,
    })
}
