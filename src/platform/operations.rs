// ABOUTME: Platform operations used by the swap workflow.
// ABOUTME: Translates intents into cf commands and classifies their failures.

use serde_json::{Map, Value};

use super::error::PlatformError;
use super::listing;
use super::runner::{self, CommandRunner, RunError};
use super::summary::{self, AppSummary, HEALTH_CHECK_FIELD};
use crate::types::{AppId, HealthCheckType, SpaceId};

/// The handful of Cloud Foundry operations a swap needs.
///
/// Every call re-fetches what it needs; nothing is cached between calls, so
/// the read operations are idempotent against unchanged platform state.
/// Nothing here retries or rolls back.
pub struct Platform<R> {
    runner: R,
}

impl<R: CommandRunner> Platform<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn run(&self, args: &[&str]) -> Result<Vec<String>, RunError> {
        tracing::debug!(command = %args.join(" "), "running cf command");
        self.runner.run(args).await
    }

    /// Run a `cf curl` call, treating a management API error document as a
    /// failed call even though the CLI exits zero.
    async fn curl(&self, args: &[&str]) -> Result<Vec<String>, PlatformError> {
        let output = self.run(args).await?;
        match summary::api_error_code(&summary::response_body(&output)) {
            Some(code) => {
                let message = format!("cf {} returned {}", args.join(" "), code);
                Err(RunError::new(message, output).into())
            }
            None => Ok(output),
        }
    }

    /// Run a `--guid` lookup. The failure marker means the entity does not
    /// exist, whether or not the CLI also exited non-zero.
    async fn lookup_guid(
        &self,
        args: &[&str],
        not_found: impl FnOnce(Vec<String>) -> PlatformError,
    ) -> Result<String, PlatformError> {
        let output = match self.run(args).await {
            Ok(output) if runner::has_failure_marker(&output) => return Err(not_found(output)),
            Ok(output) => output,
            Err(e) if e.has_failure_marker() => return Err(not_found(e.output)),
            Err(e) => return Err(e.into()),
        };
        first_line(&output, &args.join(" "))
    }

    /// Look up an application's GUID by name.
    pub async fn resolve_application_id(&self, name: &str) -> Result<AppId, PlatformError> {
        self.lookup_guid(&["app", name, "--guid"], |output| PlatformError::AppNotFound {
            name: name.to_string(),
            output,
        })
        .await
        .map(AppId::new)
    }

    /// Name of the space the CLI is currently targeting.
    pub async fn resolve_target_space(&self) -> Result<String, PlatformError> {
        let output = self.run(&["target"]).await?;
        match listing::target_space(&output) {
            Some(space) => Ok(space),
            None => Err(PlatformError::NotTargeted { output }),
        }
    }

    /// Look up a space's GUID by name.
    pub async fn resolve_space_id(&self, space: &str) -> Result<SpaceId, PlatformError> {
        self.lookup_guid(&["space", space, "--guid"], |output| {
            PlatformError::SpaceNotFound {
                name: space.to_string(),
                output,
            }
        })
        .await
        .map(SpaceId::new)
    }

    /// First domain visible to the targeted org.
    pub async fn resolve_shared_domain(&self) -> Result<String, PlatformError> {
        let output = self.run(&["domains"]).await?;
        match listing::first_domain(&output) {
            Some(domain) => Ok(domain),
            None => Err(PlatformError::NoDomainAvailable { output }),
        }
    }

    pub async fn create_route(
        &self,
        space: &str,
        domain: &str,
        host: &str,
    ) -> Result<Vec<String>, PlatformError> {
        Ok(self
            .run(&["create-route", space, domain, "-n", host])
            .await?)
    }

    pub async fn map_route(
        &self,
        app: &str,
        domain: &str,
        host: &str,
    ) -> Result<Vec<String>, PlatformError> {
        Ok(self.run(&["map-route", app, domain, "-n", host]).await?)
    }

    /// Start an application, letting the CLI's progress reach the terminal.
    pub async fn start_application(&self, app: &str) -> Result<Vec<String>, PlatformError> {
        tracing::debug!(command = %format!("start {app}"), "running cf command interactively");
        Ok(self.runner.run_interactive(&["start", app]).await?)
    }

    /// Health check type currently configured for an application.
    pub async fn fetch_health_check_type(
        &self,
        app: &AppId,
    ) -> Result<HealthCheckType, PlatformError> {
        let output = self.curl(&["curl", &summary_path(app)]).await?;
        let body = summary::response_body(&output);

        // Checked before decoding so an unrelated payload such as a login
        // prompt reports a missing field, not a decode error.
        if !summary::mentions_health_check(&body) {
            return Err(PlatformError::MissingField {
                field: HEALTH_CHECK_FIELD,
                output,
            });
        }

        let summary = match AppSummary::from_json(&body) {
            Ok(summary) => summary,
            Err(source) => return Err(PlatformError::Decode { source, output }),
        };

        summary
            .health_check_type
            .ok_or(PlatformError::MissingField {
                field: HEALTH_CHECK_FIELD,
                output,
            })
    }

    /// Unbind every route currently bound to an application.
    ///
    /// Routes are detached one at a time in the order the platform lists
    /// them. The first failure ends the loop: routes detached before it stay
    /// detached and the failing call's output is returned.
    pub async fn detach_all_routes(&self, app: &AppId) -> Result<(), PlatformError> {
        let output = self.curl(&["curl", &summary_path(app)]).await?;
        let summary = match AppSummary::from_json(&summary::response_body(&output)) {
            Ok(summary) => summary,
            Err(source) => return Err(PlatformError::Decode { source, output }),
        };

        let total = summary.routes.len();
        for (detached, route) in summary.routes.iter().enumerate() {
            let path = format!("/v2/routes/{}/apps/{}", route.guid, app);
            if let Err(e) = self.curl(&["curl", &path, "-X", "DELETE"]).await {
                tracing::warn!(
                    app = %app,
                    route = %route.guid,
                    detached,
                    remaining = total - detached,
                    "route detach failed; routes already detached stay detached"
                );
                return Err(e);
            }
        }

        tracing::info!(app = %app, routes = total, "detached all routes");
        Ok(())
    }

    /// Set one attribute of an application through the management API.
    ///
    /// `field` is not checked against the platform's attribute names.
    pub async fn update_application_field(
        &self,
        app: &AppId,
        field: &str,
        value: &str,
    ) -> Result<Vec<String>, PlatformError> {
        let path = format!("/v2/apps/{app}");
        let body = single_field_body(field, value);
        self.curl(&["curl", &path, "-X", "PUT", "-d", &body]).await
    }
}

fn summary_path(app: &AppId) -> String {
    format!("/v2/apps/{app}/summary")
}

fn single_field_body(field: &str, value: &str) -> String {
    let mut body = Map::new();
    body.insert(field.to_string(), Value::String(value.to_string()));
    Value::Object(body).to_string()
}

fn first_line(output: &[String], command: &str) -> Result<String, PlatformError> {
    output
        .first()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| PlatformError::EmptyOutput {
            command: command.to_string(),
        })
}
