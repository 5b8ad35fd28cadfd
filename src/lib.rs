// ABOUTME: Library root for cf-swap - exposes the platform operations and swap workflow.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod error;
pub mod output;
pub mod platform;
pub mod swap;
pub mod types;
