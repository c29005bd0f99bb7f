//! A pluggable logging facade
//!
//! Application code logs through uniform [`Log`] handles; the actual
//! backend is selected once at startup and hidden behind the
//! [`LoggerFactory`] capability. Three steps:
//!
//! 1. Configure a backend (or let the console default kick in):
//!    `lumen_logging::configure().use_console()?`.
//! 2. Create handles: `let log = lumen_logging::create_logger_for::<MyType>();`.
//!    Handles are thread-safe and commonly stored as fields.
//! 3. Log through them: `log.info("{A} + {B} = {Sum}", log_args![3, 4, 7])`.
//!    Templates are interpolated by the backend, never by the facade, and
//!    disabled levels cost a single enablement check.
//!
//! Before exit, `lumen_logging::lifecycle().shutdown()` flushes and
//! releases the backend.

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

mod adapter;
pub mod capture;
mod configurator;
pub mod console;
mod context;
mod error;
mod factory;
mod level;
mod log;
mod logger;
mod options;
mod record;
mod scope;
pub mod template;

pub use adapter::{DefaultLogAdapter, LogAdapter};
pub use configurator::Configurator;
pub use context::{Lifecycle, LogContext};
pub use error::{Error, Result};
pub use factory::SimpleLoggerFactory;
pub use level::Level;
pub use log::Log;
pub use logger::{Logger, LoggerFactory, LoggerProvider};
pub use record::{Args, Record, NO_ARGS};
pub use scope::{Scope, ScopeState};

use once_cell::sync::Lazy;

static GLOBAL: Lazy<LogContext> = Lazy::new(LogContext::new);

/// The process-wide default context.
pub fn global() -> &'static LogContext {
    &GLOBAL
}

/// Configure the process-wide context.
pub fn configure() -> Configurator<'static> {
    GLOBAL.configure()
}

/// Create a handle for `category` on the process-wide context.
pub fn create_logger(category: &str) -> Log {
    GLOBAL.create_logger(category)
}

/// Create a handle for `T`'s fully qualified type name on the
/// process-wide context.
pub fn create_logger_for<T: ?Sized>() -> Log {
    GLOBAL.create_logger_for::<T>()
}

/// The lifecycle manager of the process-wide context.
pub fn lifecycle() -> Lifecycle<'static> {
    GLOBAL.lifecycle()
}
