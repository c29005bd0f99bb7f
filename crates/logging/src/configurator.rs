//! One-time setup API

use crate::adapter::LogAdapter;
use crate::console::{SimpleConsoleLoggerFactory, SimpleConsoleOptions};
use crate::factory::SimpleLoggerFactory;
use crate::options::LogOptions;
use crate::{LoggerFactory, LoggerProvider, Result};
use std::sync::Arc;

/// Fluent configuration surface for a [`LogContext`](crate::LogContext).
///
/// Calls chain through `?`:
///
/// ```
/// use lumen_logging::{LogContext, capture::CaptureLoggerFactory};
/// use std::sync::Arc;
///
/// let ctx = LogContext::new();
/// ctx.configure()
///     .use_factory(Arc::new(CaptureLoggerFactory::new()))?
///     .use_adapter(None);
/// # Ok::<(), lumen_logging::Error>(())
/// ```
///
/// There is no ordering requirement between the calls beyond finishing
/// configuration before the first `create_logger` for predictable routing.
pub struct Configurator<'a> {
    options: &'a LogOptions,
}

impl<'a> Configurator<'a> {
    pub(crate) fn new(options: &'a LogOptions) -> Self {
        Self { options }
    }

    /// Select the backend factory. May succeed at most once per context;
    /// a second call fails with [`Error::AlreadyConfigured`](crate::Error::AlreadyConfigured)
    /// and the first factory stays in effect.
    pub fn use_factory(&self, factory: Arc<dyn LoggerFactory>) -> Result<&Self> {
        self.options.set_factory(factory)?;
        Ok(self)
    }

    /// Select a backend given as a single provider, wrapped in
    /// [`SimpleLoggerFactory`].
    pub fn use_provider(&self, provider: Arc<dyn LoggerProvider>) -> Result<&Self> {
        self.use_factory(Arc::new(SimpleLoggerFactory::new(provider)))
    }

    /// Select the built-in console backend with default options.
    pub fn use_console(&self) -> Result<&Self> {
        self.use_console_with(SimpleConsoleOptions::default())
    }

    /// Select the built-in console backend.
    pub fn use_console_with(&self, options: SimpleConsoleOptions) -> Result<&Self> {
        self.use_factory(Arc::new(SimpleConsoleLoggerFactory::new(options)))
    }

    /// Replace the adapter; `None` restores the default pass-through.
    ///
    /// Unlike the backend factory this may be swapped freely, and only
    /// handles created afterwards see the change.
    pub fn use_adapter(&self, adapter: Option<Arc<dyn LogAdapter>>) -> &Self {
        self.options.set_adapter(adapter);
        self
    }
}

impl std::fmt::Debug for Configurator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configurator").finish_non_exhaustive()
    }
}
