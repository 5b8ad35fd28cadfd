// ABOUTME: Health check type reported by the platform for an application.
// ABOUTME: Keeps unknown tags intact so they can be carried forward verbatim.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How the platform decides an application instance is alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HealthCheckType {
    Port,
    Http,
    Process,
    None,
    /// A tag this tool does not know about. Passed through unchanged.
    Other(String),
}

impl HealthCheckType {
    /// The exact tag the platform uses for this health check type.
    pub fn as_str(&self) -> &str {
        match self {
            HealthCheckType::Port => "port",
            HealthCheckType::Http => "http",
            HealthCheckType::Process => "process",
            HealthCheckType::None => "none",
            HealthCheckType::Other(tag) => tag,
        }
    }
}

impl FromStr for HealthCheckType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "port" => HealthCheckType::Port,
            "http" => HealthCheckType::Http,
            "process" => HealthCheckType::Process,
            "none" => HealthCheckType::None,
            other => HealthCheckType::Other(other.to_string()),
        })
    }
}

impl From<&str> for HealthCheckType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(t) => t,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for HealthCheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HealthCheckType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HealthCheckType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(HealthCheckType::from(s.as_str()))
    }
}
