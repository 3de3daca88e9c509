use crate::types::{Capability, TestType};
use thiserror::Error;

/// Errors raised by test instances and the scope that manages them
#[derive(Error, Debug)]
pub enum InstanceError {
    /// A capability was invoked on an instance that does not provide it
    #[error("{capability} is not implemented{}", test_type_suffix(.test_type))]
    NotImplemented {
        capability: Capability,
        test_type: Option<TestType>,
    },

    /// Test-type specific setup failed
    #[error("Set up failed for {test_type}: {reason}")]
    SetUpFailed { test_type: TestType, reason: String },

    /// Test-type specific teardown failed
    #[error("Tear down failed for {test_type}: {reason}")]
    TearDownFailed { test_type: TestType, reason: String },

    #[error("Invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Configuration parse error: {0}")]
    Config(#[from] toml::de::Error),
}

fn test_type_suffix(test_type: &Option<TestType>) -> String {
    match test_type {
        Some(test_type) => format!(" for {test_type}"),
        None => String::new(),
    }
}

impl InstanceError {
    pub fn not_implemented(capability: Capability) -> Self {
        Self::NotImplemented {
            capability,
            test_type: None,
        }
    }

    /// Attach the test type to a `NotImplemented` error. Other variants are
    /// returned unchanged.
    pub fn for_test_type(self, test_type: TestType) -> Self {
        match self {
            Self::NotImplemented { capability, .. } => Self::NotImplemented {
                capability,
                test_type: Some(test_type),
            },
            other => other,
        }
    }

    pub fn set_up_failed(test_type: TestType, reason: impl Into<String>) -> Self {
        Self::SetUpFailed {
            test_type,
            reason: reason.into(),
        }
    }

    pub fn tear_down_failed(test_type: TestType, reason: impl Into<String>) -> Self {
        Self::TearDownFailed {
            test_type,
            reason: reason.into(),
        }
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}

pub type InstanceResult<T> = Result<T, InstanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_display() {
        let error = InstanceError::not_implemented(Capability::SetUp);
        assert_eq!(error.to_string(), "set_up is not implemented");
        assert!(error.is_not_implemented());

        let error = error.for_test_type(TestType::Gtest);
        assert_eq!(error.to_string(), "set_up is not implemented for gtest");
        assert!(matches!(
            error,
            InstanceError::NotImplemented {
                capability: Capability::SetUp,
                test_type: Some(TestType::Gtest),
            }
        ));
    }

    #[test]
    fn test_for_test_type_leaves_other_variants() {
        let error = InstanceError::set_up_failed(TestType::Junit, "no jar")
            .for_test_type(TestType::Gtest);
        assert!(matches!(
            error,
            InstanceError::SetUpFailed {
                test_type: TestType::Junit,
                ..
            }
        ));
        assert!(!error.is_not_implemented());
    }

    #[test]
    fn test_error_display() {
        let error = InstanceError::tear_down_failed(TestType::Instrumentation, "apk still installed");
        assert!(error.to_string().contains("instrumentation"));
        assert!(error.to_string().contains("apk still installed"));

        let error = InstanceError::InvalidIdentifier {
            kind: "abi",
            value: String::new(),
        };
        assert_eq!(error.to_string(), "Invalid abi identifier: \"\"");
    }
}
