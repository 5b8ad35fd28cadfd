// ABOUTME: Swap workflow composing platform operations into a low-downtime update.
// ABOUTME: Exports the plan, report, step markers, errors, and the run_swap entry point.

mod error;
mod plan;
mod workflow;

pub use error::SwapError;
pub use plan::{DEFAULT_RETIRED_SUFFIX, SwapPlan, SwapReport, SwapStep};
pub use workflow::run_swap;
