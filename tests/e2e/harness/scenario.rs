use super::assertions::Assertion;
use super::runner::ScenarioRunner;
use super::steps::ScenarioStep;
use super::workspace::TestWorkspace;

/// Fluent DSL for building test scenarios
pub struct Scenario {
    name: String,
    fixture: Option<String>,
    config_toml: Option<String>,
    tenant: Option<String>,
    steps: Vec<ScenarioStep>,
}

impl Scenario {
    /// Create a new scenario with the given name
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fixture: None,
            config_toml: None,
            tenant: None,
            steps: Vec::new(),
        }
    }

    // ===== Initial setup =====

    /// Load `e2e.toml` from a fixture directory
    pub fn from_fixture(mut self, fixture_name: &str) -> Self {
        self.fixture = Some(fixture_name.to_string());
        self
    }

    /// Use the given `e2e.toml` text
    pub fn with_config(mut self, toml: &str) -> Self {
        self.config_toml = Some(toml.to_string());
        self
    }

    /// Build the world for this tenant instead of a generated one
    pub fn for_tenant(mut self, name: &str) -> Self {
        self.tenant = Some(name.to_string());
        self
    }

    // ===== Setup steps =====

    /// A setup step switches the world to another tenant
    pub fn tenant_becomes(mut self, name: &str) -> Self {
        self.steps.push(ScenarioStep::SetTenant {
            name: name.to_string(),
        });
        self
    }

    /// A setup step generates a fresh tenant from the configured prefix
    pub fn tenant_generated(mut self) -> Self {
        self.steps.push(ScenarioStep::GenerateTenant);
        self
    }

    /// A setup step hands the world a new page
    pub fn page_replaced(mut self) -> Self {
        self.steps.push(ScenarioStep::ReplacePage);
        self
    }

    /// The current page gets an element matching `selector`
    pub fn page_has(mut self, selector: &str, text: &str) -> Self {
        self.steps.push(ScenarioStep::PageHasElement {
            selector: selector.to_string(),
            text: text.to_string(),
        });
        self
    }

    // ===== Step actions =====

    /// Step logs a message through the world
    pub fn step_logs(mut self, message: &str) -> Self {
        self.steps.push(ScenarioStep::Log {
            message: message.to_string(),
        });
        self
    }

    /// Step visits a path on the world's tenant
    pub fn step_visits(mut self, path: &str) -> Self {
        self.steps.push(ScenarioStep::Visit {
            path: path.to_string(),
        });
        self
    }

    /// Step clicks an element
    pub fn step_clicks(mut self, selector: &str) -> Self {
        self.steps.push(ScenarioStep::Click {
            selector: selector.to_string(),
        });
        self
    }

    /// Step fills an input
    pub fn step_fills(mut self, selector: &str, value: &str) -> Self {
        self.steps.push(ScenarioStep::Fill {
            selector: selector.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Step waits for an element using the configured timeout
    pub fn step_waits_for(mut self, selector: &str) -> Self {
        self.steps.push(ScenarioStep::WaitFor {
            selector: selector.to_string(),
        });
        self
    }

    /// Step attaches a link to the report
    pub fn step_links(mut self, url: &str) -> Self {
        self.steps.push(ScenarioStep::Link {
            url: url.to_string(),
        });
        self
    }

    /// Step attaches JSON to the report
    pub fn step_attaches_json(mut self, value: serde_json::Value) -> Self {
        self.steps.push(ScenarioStep::AttachJson { value });
        self
    }

    // ===== Failure simulation =====

    /// The driver closes the current page
    pub fn page_closes(mut self) -> Self {
        self.steps.push(ScenarioStep::ClosePage);
        self
    }

    /// Expect the most recently added step to fail with a message containing `contains`
    pub fn fails_with(mut self, contains: &str) -> Self {
        if let Some(step) = self.steps.pop() {
            self.steps.push(ScenarioStep::ExpectFailure {
                step: Box::new(step),
                contains: contains.to_string(),
            });
        }
        self
    }

    // ===== Assertions =====

    /// Add a custom assertion
    pub fn assert(mut self, assertion: Assertion) -> Self {
        self.steps.push(ScenarioStep::Assert { assertion });
        self
    }

    /// Assert the world's tenant
    pub fn assert_tenant(self, name: &str) -> Self {
        self.assert(Assertion::TenantIs(name.to_string()))
    }

    /// Assert the log function saw exactly these messages
    pub fn assert_logged(self, messages: &[&str]) -> Self {
        self.assert(Assertion::LoggedExactly(
            messages.iter().map(|m| m.to_string()).collect(),
        ))
    }

    /// Assert the report has a log line containing `text`
    pub fn assert_report_log_contains(self, text: &str) -> Self {
        self.assert(Assertion::ReportLogContains(text.to_string()))
    }

    /// Assert the current page URL
    pub fn assert_url(self, url: &str) -> Self {
        self.assert(Assertion::PageUrl(url.to_string()))
    }

    /// Assert the world still hands out the runner's page handle
    pub fn assert_same_page(self) -> Self {
        self.assert(Assertion::SamePageHandle)
    }

    /// Assert the number of report attachments
    pub fn assert_attachment_count(self, count: usize) -> Self {
        self.assert(Assertion::AttachmentCount(count))
    }

    // ===== Execution =====

    /// Execute the scenario and return results
    pub fn run(self) -> ScenarioResult {
        let workspace = match (&self.fixture, &self.config_toml) {
            (Some(fixture), _) => TestWorkspace::from_fixture(fixture),
            (None, Some(toml)) => TestWorkspace::with_config(toml),
            (None, None) => TestWorkspace::empty(),
        };

        let runner = workspace.and_then(|ws| ScenarioRunner::new(ws, self.tenant.clone()));
        let mut runner = match runner {
            Ok(r) => r,
            Err(e) => {
                return ScenarioResult {
                    name: self.name.clone(),
                    success: false,
                    steps_executed: 0,
                    failure_step: Some(0),
                    error: Some(format!("Failed to create runner: {:#}", e)),
                }
            }
        };

        match runner.execute(&self.steps) {
            Ok(()) => ScenarioResult {
                name: self.name,
                success: true,
                steps_executed: self.steps.len(),
                failure_step: None,
                error: None,
            },
            Err(e) => {
                let failure_step = runner.current_step();
                ScenarioResult {
                    name: self.name,
                    success: false,
                    steps_executed: failure_step,
                    failure_step: Some(failure_step),
                    error: Some(format!("{:?}", e)),
                }
            }
        }
    }
}

/// Result of running a scenario
#[derive(Debug)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub steps_executed: usize,
    pub failure_step: Option<usize>,
    pub error: Option<String>,
}

impl ScenarioResult {
    /// Unwrap the result, panicking if it failed
    pub fn unwrap(self) {
        if !self.success {
            panic!(
                "Scenario '{}' failed at step {}: {}",
                self.name,
                self.failure_step.unwrap_or(0),
                self.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }

    /// Expect the result to be successful
    pub fn expect(self, msg: &str) {
        if !self.success {
            panic!(
                "{}: Scenario '{}' failed at step {}: {}",
                msg,
                self.name,
                self.failure_step.unwrap_or(0),
                self.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
    }

    /// Panic unless the scenario failed with an error containing `text`
    pub fn expect_failure(self, text: &str) {
        match (self.success, &self.error) {
            (false, Some(error)) if error.contains(text) => {}
            _ => panic!(
                "Scenario '{}' should have failed with '{}', got {:?}",
                self.name, text, self.error
            ),
        }
    }
}
