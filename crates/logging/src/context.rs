//! The injectable logging context and its lifecycle manager

use crate::configurator::Configurator;
use crate::options::LogOptions;
use crate::{Log, LoggerFactory};
use std::sync::Arc;

/// An independent logging configuration.
///
/// Most applications use the process-wide default context through the
/// crate-level free functions; tests and embedded components can construct
/// their own contexts to keep configuration isolated.
pub struct LogContext {
    options: LogOptions,
}

impl LogContext {
    /// An unconfigured context that falls back to the console backend on
    /// first use.
    pub fn new() -> Self {
        Self {
            options: LogOptions::new(),
        }
    }

    /// The configuration surface for this context.
    pub fn configure(&self) -> Configurator<'_> {
        Configurator::new(&self.options)
    }

    /// Create a handle for `category`.
    ///
    /// Each call asks the current factory for a fresh sink and wraps it
    /// through the current adapter; any per-category memoization is the
    /// factory's policy, not the facade's. Factory failures propagate.
    pub fn create_logger(&self, category: &str) -> Log {
        let sink = self.options.factory().create_logger(category);
        self.options.adapter().adapt(category, sink)
    }

    /// Create a handle whose category is `T`'s fully qualified type name.
    pub fn create_logger_for<T: ?Sized>(&self) -> Log {
        self.create_logger(std::any::type_name::<T>())
    }

    /// The lifecycle manager for this context.
    pub fn lifecycle(&self) -> Lifecycle<'_> {
        Lifecycle { options: &self.options }
    }

    /// The backend factory currently in effect (configured or default).
    pub fn factory(&self) -> Arc<dyn LoggerFactory> {
        self.options.factory()
    }

    /// Whether a backend factory was explicitly selected.
    pub fn is_configured(&self) -> bool {
        self.options.is_configured()
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Releases the backend's resources at orderly shutdown.
pub struct Lifecycle<'a> {
    options: &'a LogOptions,
}

impl Lifecycle<'_> {
    /// Flush and release the current backend factory.
    ///
    /// The facade does not guard against logging after shutdown; what a
    /// post-shutdown write does is the backend's policy. The built-in
    /// console backend treats shutdown as a flush and keeps accepting
    /// writes.
    pub fn shutdown(&self) {
        self.options.factory().shutdown();
    }
}
