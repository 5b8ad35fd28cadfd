// ABOUTME: Application summary payload returned by the management API.
// ABOUTME: Decodes the health check type, bound route GUIDs, and API error documents.

use serde::Deserialize;

use crate::types::{HealthCheckType, RouteId};

/// Field whose presence is checked before a summary is decoded.
pub const HEALTH_CHECK_FIELD: &str = "health_check_type";

/// Platform-reported snapshot of an application.
///
/// Everything except the health check type and routes is ignored. Missing
/// fields decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppSummary {
    #[serde(default)]
    pub health_check_type: Option<HealthCheckType>,

    #[serde(default)]
    pub routes: Vec<RouteReference>,
}

/// A route currently bound to an application.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteReference {
    pub guid: RouteId,
}

impl AppSummary {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Rejoin `cf curl` output lines into the response body.
pub(crate) fn response_body(lines: &[String]) -> String {
    lines.join("\n")
}

/// Error document the management API answers with, still with a zero exit
/// from `cf curl`.
#[derive(Debug, Deserialize)]
struct ApiErrorDocument {
    error_code: String,
}

/// The `error_code` of a management API error document, if `body` is one.
pub(crate) fn api_error_code(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorDocument>(body)
        .ok()
        .map(|doc| doc.error_code)
}

/// Whether a response body mentions the health check field at all.
pub(crate) fn mentions_health_check(body: &str) -> bool {
    body.contains(&format!("\"{HEALTH_CHECK_FIELD}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pretty_printed_summary() {
        let body = r#"{
   "guid": "a1",
   "name": "web",
   "health_check_type": "port",
   "routes": [
      {
         "guid": "r1",
         "host": "web",
         "domain": { "guid": "d1", "name": "example.com" }
      }
   ],
   "instances": 2
}"#;
        let summary = AppSummary::from_json(body).unwrap();
        assert_eq!(summary.health_check_type, Some(HealthCheckType::Port));
        assert_eq!(summary.routes, vec![RouteReference { guid: RouteId::new("r1") }]);
    }

    #[test]
    fn missing_routes_decode_empty() {
        let summary = AppSummary::from_json(r#"{"health_check_type":"none"}"#).unwrap();
        assert!(summary.routes.is_empty());
    }

    #[test]
    fn null_health_check_decodes_to_none() {
        let summary = AppSummary::from_json(r#"{"health_check_type":null,"routes":[]}"#).unwrap();
        assert_eq!(summary.health_check_type, None);
    }

    #[test]
    fn recognizes_api_error_document() {
        let body = r#"{"code":10001,"description":"boom","error_code":"CF-ServerError"}"#;
        assert_eq!(api_error_code(body).as_deref(), Some("CF-ServerError"));
    }

    #[test]
    fn summaries_and_empty_bodies_are_not_errors() {
        assert_eq!(api_error_code(r#"{"health_check_type":"port","routes":[]}"#), None);
        assert_eq!(api_error_code(""), None);
        assert_eq!(api_error_code("{}"), None);
    }

    #[test]
    fn marker_requires_quoted_field_name() {
        assert!(mentions_health_check(r#"{"health_check_type": "http"}"#));
        assert!(!mentions_health_check("health_check_type"));
        assert!(!mentions_health_check(r#"{"error_code":"CF-AppNotFound"}"#));
    }
}
