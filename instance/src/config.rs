use crate::error::{InstanceError, InstanceResult};
use serde::{Deserialize, Serialize};

/// How a scoped instance behaves around setup and teardown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Attempt teardown when setup itself returned an error. `false` gives
    /// the plain context-manager pairing, where teardown only follows a
    /// successful setup.
    pub teardown_on_setup_failure: bool,
    /// Extra label recorded on the scope's tracing span
    pub label: Option<String>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            teardown_on_setup_failure: true,
            label: None,
        }
    }
}

impl ScopeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teardown_on_setup_failure(mut self, enabled: bool) -> Self {
        self.teardown_on_setup_failure = enabled;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn from_toml_str(input: &str) -> InstanceResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> InstanceResult<()> {
        if let Some(label) = &self.label {
            if label.trim().is_empty() {
                return Err(InstanceError::InvalidConfig {
                    message: "Label cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
