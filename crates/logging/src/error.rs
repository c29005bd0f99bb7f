//! Error types for the logging facade

/// Result type for facade configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the configuration surface of the facade.
///
/// Backend failures are never represented here: a failing sink propagates
/// its own error (or panic) to the caller of the logging operation
/// unchanged, so that log records are never silently dropped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A backend factory was already selected for this context
    #[error("logging backend is already configured; a backend may be selected at most once")]
    AlreadyConfigured,

    /// A string could not be parsed as a log level
    #[error("invalid log level {value:?}")]
    InvalidLevel {
        /// The rejected input
        value: String,
    },

    /// The factory does not support the requested operation
    #[error("unsupported operation: {0}")]
    Unsupported(String),
}
