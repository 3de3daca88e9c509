use crate::error::InstanceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The category of test an instance describes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TestType {
    /// Native unit-test binaries
    Gtest,
    /// On-device instrumentation tests
    Instrumentation,
    /// Host-side JUnit tests
    Junit,
    /// Native linker tests
    Linker,
    /// Any other test type, named by its identifier.
    ///
    /// Holds a trimmed, non-empty name that is not one of the well-known
    /// identifiers above; build it with [`TestType::other`] so the string
    /// form round-trips.
    Other(String),
}

impl TestType {
    /// Build a test type from `name`, resolving well-known identifiers to
    /// their own variants.
    pub fn other(name: impl AsRef<str>) -> Result<Self, InstanceError> {
        name.as_ref().parse()
    }

    pub fn as_str(&self) -> &str {
        match self {
            TestType::Gtest => "gtest",
            TestType::Instrumentation => "instrumentation",
            TestType::Junit => "junit",
            TestType::Linker => "linker",
            TestType::Other(name) => name,
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestType {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name {
            "" => Err(InstanceError::InvalidIdentifier {
                kind: "test type",
                value: s.to_string(),
            }),
            "gtest" => Ok(TestType::Gtest),
            "instrumentation" => Ok(TestType::Instrumentation),
            "junit" => Ok(TestType::Junit),
            "linker" => Ok(TestType::Linker),
            other => Ok(TestType::Other(other.to_string())),
        }
    }
}

impl TryFrom<String> for TestType {
    type Error = InstanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TestType> for String {
    fn from(value: TestType) -> Self {
        match value {
            TestType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// A binary architecture a test can be built for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Abi {
    ArmeabiV7a,
    Arm64V8a,
    X86,
    X86_64,
    /// Trimmed, non-empty name that is not a well-known ABI; see [`Abi::other`].
    Other(String),
}

impl Abi {
    /// Build an ABI from `name`, resolving well-known identifiers to their
    /// own variants.
    pub fn other(name: impl AsRef<str>) -> Result<Self, InstanceError> {
        name.as_ref().parse()
    }

    pub fn as_str(&self) -> &str {
        match self {
            Abi::ArmeabiV7a => "armeabi-v7a",
            Abi::Arm64V8a => "arm64-v8a",
            Abi::X86 => "x86",
            Abi::X86_64 => "x86_64",
            Abi::Other(name) => name,
        }
    }

    /// Whether this is a 64-bit architecture. Unknown ABIs report `false`.
    pub fn is_64_bit(&self) -> bool {
        matches!(self, Abi::Arm64V8a | Abi::X86_64)
    }
}

impl fmt::Display for Abi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Abi {
    type Err = InstanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name {
            "" => Err(InstanceError::InvalidIdentifier {
                kind: "abi",
                value: s.to_string(),
            }),
            "armeabi-v7a" => Ok(Abi::ArmeabiV7a),
            "arm64-v8a" => Ok(Abi::Arm64V8a),
            "x86" => Ok(Abi::X86),
            "x86_64" => Ok(Abi::X86_64),
            other => Ok(Abi::Other(other.to_string())),
        }
    }
}

impl TryFrom<String> for Abi {
    type Error = InstanceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Abi> for String {
    fn from(value: Abi) -> Self {
        match value {
            Abi::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

/// Operations a test instance exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    TestType,
    PreferredAbis,
    SetUp,
    TearDown,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::TestType => write!(f, "test_type"),
            Capability::PreferredAbis => write!(f, "preferred_abis"),
            Capability::SetUp => write!(f, "set_up"),
            Capability::TearDown => write!(f, "tear_down"),
        }
    }
}

/// Where a scoped instance is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Set up has not run yet
    Uninitialized,
    /// Set up succeeded and teardown has not run
    Active,
    /// Set up returned an error
    Failed,
    /// Teardown has been attempted
    TornDown,
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleState::Uninitialized => write!(f, "uninitialized"),
            LifecycleState::Active => write!(f, "active"),
            LifecycleState::Failed => write!(f, "failed"),
            LifecycleState::TornDown => write!(f, "torn_down"),
        }
    }
}
