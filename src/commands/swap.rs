// ABOUTME: Swap command implementation.
// ABOUTME: Builds the plan from arguments and config, then drives the swap workflow.

use cf_swap::config::Config;
use cf_swap::error::Result;
use cf_swap::output::Output;
use cf_swap::platform::Platform;
use cf_swap::swap::{SwapPlan, run_swap};

/// Arguments of the `swap` subcommand after parsing.
pub struct SwapArgs {
    pub app: String,
    pub candidate: String,
    pub host: String,
    pub retired_name: Option<String>,
    pub skip_health_check: bool,
}

/// Swap the live app for the candidate.
pub async fn swap(config: Config, args: SwapArgs, mut output: Output) -> Result<()> {
    let retired_name = args
        .retired_name
        .unwrap_or_else(|| config.retired_name(&args.app));
    let plan = SwapPlan::new(&args.app, &args.candidate, &args.host)
        .retired_name(retired_name)
        .carry_health_check(config.carry_health_check && !args.skip_health_check);

    output.start_timer();
    output.progress(&format!(
        "Swapping {} for {} on host {}",
        plan.app, plan.candidate, plan.host
    ));

    let platform = Platform::new(config.cf_cli());
    let report = run_swap(&platform, &plan, |step| {
        output.progress(&format!("  → {step}..."));
    })
    .await?;

    if let Some(ref health_check) = report.health_check {
        output.progress(&format!("  → Health check type: {health_check}"));
    }
    output.progress(&format!(
        "  → Route {} in space {}",
        report.route, report.space
    ));
    output.success(&format!(
        "{} is now served by the former {} ({})",
        plan.app, plan.candidate, report.candidate_id
    ));
    Ok(())
}
