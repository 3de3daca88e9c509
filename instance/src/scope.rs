//! Scoped acquisition of test instances.
//!
//! Entering a scope sets the instance up. Leaving it tears the instance down
//! on every exit path: normal return, early return through `?`, or a panic
//! unwinding through the scope. Errors are never swallowed by the scope; when
//! two errors compete, the one raised first is returned and the teardown
//! error is logged.

use crate::config::ScopeConfig;
use crate::error::{InstanceError, InstanceResult};
use crate::instance::TestInstance;
use crate::types::LifecycleState;
use std::fmt;
use std::ops::{Deref, DerefMut};
use tracing::{debug, error, info, info_span, warn, Span};

/// Guard over a set-up test instance. Tears the instance down when dropped.
pub struct ScopedInstance<'a, T: TestInstance + ?Sized> {
    instance: &'a mut T,
    state: LifecycleState,
    span: Span,
}

impl<'a, T: TestInstance + ?Sized> ScopedInstance<'a, T> {
    /// Set up `instance` with the default [`ScopeConfig`].
    pub fn enter(instance: &'a mut T) -> InstanceResult<Self> {
        Self::enter_with(instance, &ScopeConfig::default())
    }

    /// Set up `instance`.
    ///
    /// If setup fails the error is returned and no guard is created. Teardown
    /// is still attempted first unless `teardown_on_setup_failure` is off.
    pub fn enter_with(instance: &'a mut T, config: &ScopeConfig) -> InstanceResult<Self> {
        let test_type = instance.test_type();
        let span = info_span!(
            "test_instance",
            test_type = %test_type,
            label = config.label.as_deref(),
            state = %LifecycleState::Uninitialized
        );

        let setup = span.in_scope(|| {
            debug!("Setting up test instance");
            let result = instance.set_up();
            if let Err(e) = &result {
                error!("Set up failed: {}", e);
                if config.teardown_on_setup_failure {
                    debug!("Tearing down after failed set up");
                    if let Err(teardown_err) = instance.tear_down() {
                        warn!("Tear down after failed set up also failed: {}", teardown_err);
                    }
                }
            }
            result
        });

        if let Err(e) = setup {
            span.record("state", tracing::field::display(LifecycleState::Failed));
            return Err(e);
        }

        span.record("state", tracing::field::display(LifecycleState::Active));
        span.in_scope(|| info!("Test instance set up"));

        Ok(Self {
            instance,
            state: LifecycleState::Active,
            span,
        })
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Tear down now and return the teardown result instead of logging it.
    pub fn finish(mut self) -> InstanceResult<()> {
        self.tear_down_once()
    }

    /// Tear down while another error is already on its way out. A teardown
    /// error is logged inside the scope's span and dropped.
    fn finish_after_error(mut self) {
        if let Err(e) = self.tear_down_once() {
            let _entered = self.span.enter();
            warn!("Tear down failed while propagating an earlier error: {}", e);
        }
    }

    fn tear_down_once(&mut self) -> InstanceResult<()> {
        if self.state != LifecycleState::Active {
            return Ok(());
        }
        self.state = LifecycleState::TornDown;
        self.span
            .record("state", tracing::field::display(LifecycleState::TornDown));

        let _entered = self.span.enter();
        debug!("Tearing down test instance");
        let result = self.instance.tear_down();
        if result.is_ok() {
            info!("Test instance torn down");
        }
        result
    }
}

impl<T: TestInstance + ?Sized> Deref for ScopedInstance<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.instance
    }
}

impl<T: TestInstance + ?Sized> DerefMut for ScopedInstance<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.instance
    }
}

impl<T: TestInstance + ?Sized> Drop for ScopedInstance<'_, T> {
    fn drop(&mut self) {
        if let Err(e) = self.tear_down_once() {
            let _entered = self.span.enter();
            warn!("Tear down failed while leaving scope: {}", e);
        }
    }
}

impl<T: TestInstance + ?Sized> fmt::Debug for ScopedInstance<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedInstance")
            .field("test_type", &self.instance.test_type())
            .field("state", &self.state)
            .finish()
    }
}

/// Run `body` between `set_up` and `tear_down` of `instance`.
///
/// The body's error takes precedence over a teardown error. If the body
/// succeeds, a teardown error is returned.
pub fn scoped<T, F, R, E>(instance: &mut T, body: F) -> Result<R, E>
where
    T: TestInstance + ?Sized,
    F: FnOnce(&mut T) -> Result<R, E>,
    E: From<InstanceError>,
{
    scoped_with(&ScopeConfig::default(), instance, body)
}

/// [`scoped`] with an explicit [`ScopeConfig`].
pub fn scoped_with<T, F, R, E>(config: &ScopeConfig, instance: &mut T, body: F) -> Result<R, E>
where
    T: TestInstance + ?Sized,
    F: FnOnce(&mut T) -> Result<R, E>,
    E: From<InstanceError>,
{
    let mut guard = ScopedInstance::enter_with(instance, config)?;

    match body(&mut *guard) {
        Ok(value) => {
            guard.finish()?;
            Ok(value)
        }
        Err(body_err) => {
            guard.finish_after_error();
            Err(body_err)
        }
    }
}
