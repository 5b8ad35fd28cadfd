// ABOUTME: Type-safe platform identifiers and small domain types.
// ABOUTME: Uses phantom types to prevent GUID confusion at compile time.

mod health_check;
mod id;

pub use health_check::HealthCheckType;
pub use id::{AppId, Id, RouteId, SpaceId};
