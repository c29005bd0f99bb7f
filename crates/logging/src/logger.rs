//! Sink and factory capability traits

use crate::{Level, Record, Result, Scope, ScopeState};
use std::sync::Arc;

/// A concrete log destination for one category.
///
/// Implementations must be safe for concurrent calls; the facade does not
/// serialize writes on their behalf.
pub trait Logger: Send + Sync {
    /// Whether records at `level` would be written at all.
    fn is_enabled(&self, level: Level) -> bool;

    /// Write one record. Failures must surface to the caller rather than
    /// being swallowed.
    fn log(&self, record: Record<'_>);

    /// Open an ambient scope around subsequent records on this thread.
    ///
    /// Backends without ambient context return an empty scope.
    fn begin_scope(&self, _state: &ScopeState) -> Scope {
        Scope::none()
    }

    /// Flush any buffered output.
    fn flush(&self) {}
}

/// Produces sinks for a single backend.
pub trait LoggerProvider: Send + Sync {
    /// Create a sink bound to `category`.
    fn create_logger(&self, category: &str) -> Arc<dyn Logger>;

    /// Release the backend's resources.
    fn shutdown(&self) {}
}

/// The backend factory capability the facade is configured with.
///
/// A factory may memoize sinks per category; the facade itself never
/// caches handles.
pub trait LoggerFactory: Send + Sync {
    /// Create a sink bound to `category`.
    fn create_logger(&self, category: &str) -> Arc<dyn Logger>;

    /// Register an additional provider with the factory.
    ///
    /// Factories built around a single fixed provider reject this with
    /// [`crate::Error::Unsupported`].
    fn add_provider(&self, provider: Arc<dyn LoggerProvider>) -> Result<()>;

    /// Flush and release the backend's resources.
    fn shutdown(&self);
}
