//! The test instance contract.
//!
//! A test instance handles everything that is specific to a type of test but
//! independent of the device or environment it will run in, e.g. gtests or
//! instrumentation tests.

use crate::error::InstanceResult;
use crate::types::{Abi, TestType};

/// A type of test.
///
/// Implementors receive their configuration at construction time and must
/// provide `test_type`, `set_up` and `tear_down`. Leaving one out is a
/// compile error:
///
/// ```compile_fail
/// use test_instance::{InstanceResult, TestInstance, TestType};
///
/// struct Incomplete;
///
/// impl TestInstance for Incomplete {
///     fn set_up(&mut self) -> InstanceResult<()> {
///         Ok(())
///     }
///
///     fn tear_down(&mut self) -> InstanceResult<()> {
///         Ok(())
///     }
/// }
/// ```
///
/// Calling `tear_down` twice, or `set_up` again without a teardown in
/// between, is not part of the contract; each implementor decides what that
/// means for its own state.
pub trait TestInstance {
    /// The category of test this instance describes.
    fn test_type(&self) -> TestType;

    /// ABIs this test prefers to run with, most preferred first.
    ///
    /// `None` means no preference.
    fn preferred_abis(&self) -> Option<&[Abi]> {
        None
    }

    /// Prepare test-type specific state.
    fn set_up(&mut self) -> InstanceResult<()>;

    /// Release whatever `set_up` acquired.
    fn tear_down(&mut self) -> InstanceResult<()>;

    /// Whether `preferred_abis` expresses an actual preference. An empty list
    /// counts as no preference.
    fn has_abi_preference(&self) -> bool {
        self.preferred_abis().is_some_and(|abis| !abis.is_empty())
    }

    /// Pick the ABI to run with from those `available` in the environment.
    ///
    /// Preferred ABIs are tried in order. Without a preference the first
    /// available ABI is used.
    fn select_abi(&self, available: &[Abi]) -> Option<Abi> {
        match self.preferred_abis() {
            Some(preferred) if !preferred.is_empty() => preferred
                .iter()
                .find(|abi| available.contains(abi))
                .cloned(),
            _ => available.first().cloned(),
        }
    }
}

impl<T: TestInstance + ?Sized> TestInstance for Box<T> {
    fn test_type(&self) -> TestType {
        (**self).test_type()
    }

    fn preferred_abis(&self) -> Option<&[Abi]> {
        (**self).preferred_abis()
    }

    fn set_up(&mut self) -> InstanceResult<()> {
        (**self).set_up()
    }

    fn tear_down(&mut self) -> InstanceResult<()> {
        (**self).tear_down()
    }

    fn has_abi_preference(&self) -> bool {
        (**self).has_abi_preference()
    }

    fn select_abi(&self, available: &[Abi]) -> Option<Abi> {
        (**self).select_abi(available)
    }
}
