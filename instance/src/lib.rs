//! Environment-independent description of a type of test.
//!
//! A [`TestInstance`] handles the logic that is specific to a test type but
//! not to the device, emulator or host the tests run on. [`scoped`] and
//! [`ScopedInstance`] pair its `set_up` with a guaranteed `tear_down`.

pub mod config;
pub mod error;
pub mod instance;
pub mod scope;
pub mod types;

pub use config::ScopeConfig;
pub use error::{InstanceError, InstanceResult};
pub use instance::TestInstance;
pub use scope::{scoped, scoped_with, ScopedInstance};
pub use types::{Abi, Capability, LifecycleState, TestType};

pub mod prelude {
    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::instance::*;
    pub use crate::scope::*;
    pub use crate::types::*;
}
