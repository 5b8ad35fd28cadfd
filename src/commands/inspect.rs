// ABOUTME: Inspect command implementation.
// ABOUTME: Runs the read-only lookups a swap depends on and prints what they return.

use cf_swap::config::Config;
use cf_swap::error::Result;
use cf_swap::output::Output;
use cf_swap::platform::Platform;
use cf_swap::swap::SwapError;

/// Resolve the app, space, domain, and health check without side effects.
pub async fn inspect(config: Config, app: &str, output: Output) -> Result<()> {
    let platform = Platform::new(config.cf_cli());

    let app_id = platform
        .resolve_application_id(app)
        .await
        .map_err(|source| SwapError::ResolveApp {
            name: app.to_string(),
            source,
        })?;
    let space = platform
        .resolve_target_space()
        .await
        .map_err(|source| SwapError::ResolveSpace { source })?;
    let space_id = platform
        .resolve_space_id(&space)
        .await
        .map_err(|source| SwapError::ResolveSpace { source })?;
    let domain = platform
        .resolve_shared_domain()
        .await
        .map_err(|source| SwapError::ResolveDomain { source })?;

    output.progress(&format!("App:     {app} ({app_id})"));
    output.progress(&format!("Space:   {space} ({space_id})"));
    output.progress(&format!("Domain:  {domain}"));

    match platform.fetch_health_check_type(&app_id).await {
        Ok(health_check) => output.progress(&format!("Health:  {health_check}")),
        Err(e) => output.warning(&format!("could not read health check type: {e}")),
    }

    output.success(&format!("{app} is ready to be swapped"));
    Ok(())
}
