// ABOUTME: Test support utilities.
// ABOUTME: Provides a scripted CommandRunner that records every command it is asked to run.

use async_trait::async_trait;
use cf_swap::platform::{CommandRunner, RunError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env()
            .add_directive("cf_swap=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Convert string slices to owned output lines.
#[allow(dead_code)]
pub fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// One command the runner was asked to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub args: Vec<String>,
    pub interactive: bool,
}

impl Call {
    pub fn command(&self) -> String {
        self.args.join(" ")
    }
}

/// CommandRunner that answers from a script keyed by the space-joined
/// command line. Unscripted commands fail with empty output.
#[derive(Default)]
pub struct ScriptedRunner {
    script: HashMap<String, Result<Vec<String>, RunError>>,
    calls: Mutex<Vec<Call>>,
}

#[allow(dead_code)]
impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `command` with a successful run printing `output`.
    pub fn ok(mut self, command: &str, output: &[&str]) -> Self {
        self.script.insert(command.to_string(), Ok(lines(output)));
        self
    }

    /// Answer `command` with a failed run printing `output`.
    pub fn fail(mut self, command: &str, message: &str, output: &[&str]) -> Self {
        self.script.insert(
            command.to_string(),
            Err(RunError::new(message, lines(output))),
        );
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    /// Every recorded command line, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls.lock().iter().map(Call::command).collect()
    }

    fn answer(&self, args: &[&str], interactive: bool) -> Result<Vec<String>, RunError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let key = args.join(" ");
        self.calls.lock().push(Call { args, interactive });

        self.script
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(RunError::new(format!("unscripted command: {key}"), vec![])))
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&self, args: &[&str]) -> Result<Vec<String>, RunError> {
        self.answer(args, false)
    }

    async fn run_interactive(&self, args: &[&str]) -> Result<Vec<String>, RunError> {
        self.answer(args, true)
    }
}
