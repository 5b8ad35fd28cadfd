// ABOUTME: Command module aggregator for the cf-swap CLI.
// ABOUTME: Re-exports swap and inspect command handlers.

mod inspect;
mod swap;

pub use inspect::inspect;
pub use swap::{SwapArgs, swap};
