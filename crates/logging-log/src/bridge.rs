//! Sink forwarding facade records into the `log` crate

use crate::registry::ScopeRegistry;
use crate::scope;
use lumen_logging::{template, Level, Logger, LoggerProvider, Record, Scope, ScopeState};
use std::fmt::Write;
use std::sync::Arc;

/// Options for the `log`-crate backend.
pub struct BridgeOptions {
    /// Registry expanding scope state into stack entries.
    pub registry: ScopeRegistry,
    /// Whether live scope annotations are appended to each message.
    pub render_scopes: bool,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            registry: ScopeRegistry::new(),
            render_scopes: true,
        }
    }
}

/// Map a facade level onto the `log` crate's levels.
///
/// `Critical` collapses into `log::Level::Error` (the crate has no higher
/// severity); `Off` maps to nothing and is never enabled.
fn map_level(level: Level) -> Option<log::Level> {
    match level {
        Level::Trace => Some(log::Level::Trace),
        Level::Debug => Some(log::Level::Debug),
        Level::Info => Some(log::Level::Info),
        Level::Warn => Some(log::Level::Warn),
        Level::Error | Level::Critical => Some(log::Level::Error),
        Level::Off => None,
    }
}

/// Per-category sink emitting through the global `log::logger()`.
pub struct LogCrateLogger {
    category: String,
    options: Arc<BridgeOptions>,
}

impl Logger for LogCrateLogger {
    fn is_enabled(&self, level: Level) -> bool {
        let Some(level) = map_level(level) else {
            return false;
        };
        level <= log::max_level()
            && log::logger().enabled(
                &log::Metadata::builder()
                    .level(level)
                    .target(&self.category)
                    .build(),
            )
    }

    fn log(&self, record: Record<'_>) {
        let Some(level) = map_level(record.level) else {
            return;
        };

        // Interpolation happens here, on the backend side.
        let mut message = template::render(record.template, record.args);
        if self.options.render_scopes {
            for (name, entries) in scope::annotations() {
                let _ = write!(message, " {{{}={}}}", name, entries.join("/"));
            }
        }
        if let Some(error) = record.error {
            if !message.is_empty() {
                message.push_str(": ");
            }
            let _ = write!(message, "{error}");
        }

        log::logger().log(
            &log::Record::builder()
                .level(level)
                .target(record.category)
                .args(format_args!("{message}"))
                .build(),
        );
    }

    fn begin_scope(&self, state: &ScopeState) -> Scope {
        self.options.registry.expand(state)
    }

    fn flush(&self) {
        log::logger().flush();
    }
}

/// Provider plugging the `log` crate in as the facade backend.
pub struct LogCrateProvider {
    options: Arc<BridgeOptions>,
}

impl LogCrateProvider {
    /// A provider with default options.
    pub fn new() -> Self {
        Self::with_options(BridgeOptions::default())
    }

    /// A provider with a custom registry or rendering behavior.
    pub fn with_options(options: BridgeOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }
}

impl Default for LogCrateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerProvider for LogCrateProvider {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(LogCrateLogger {
            category: category.to_owned(),
            options: Arc::clone(&self.options),
        })
    }

    fn shutdown(&self) {
        log::logger().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_collapses_into_error() {
        assert_eq!(map_level(Level::Critical), Some(log::Level::Error));
        assert_eq!(map_level(Level::Off), None);
    }
}
