//! Built-in colored console backend

use crate::{template, Level, Logger, LoggerFactory, LoggerProvider, Record, Result};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Environment variable consulted by [`SimpleConsoleOptions::from_env`].
pub const LEVEL_ENV_VAR: &str = "LUMEN_LOG_LEVEL";

/// Options for the console backend.
#[derive(Debug, Clone)]
pub struct SimpleConsoleOptions {
    /// Records below this threshold are dropped by the sink.
    pub minimum_level: Level,
    /// Whether to print an attached error's source chain after the
    /// message.
    pub print_error_chain: bool,
}

impl Default for SimpleConsoleOptions {
    fn default() -> Self {
        Self {
            minimum_level: Level::Info,
            print_error_chain: false,
        }
    }
}

impl SimpleConsoleOptions {
    /// Set the minimum level.
    pub fn with_minimum_level(mut self, level: Level) -> Self {
        self.minimum_level = level;
        self
    }

    /// Enable or disable error source-chain printing.
    pub fn with_error_chain(mut self, print: bool) -> Self {
        self.print_error_chain = print;
        self
    }

    /// Defaults overridden by `LUMEN_LOG_LEVEL` when it parses as a level;
    /// unset or invalid values leave the default threshold.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(value) = std::env::var(LEVEL_ENV_VAR)
            && let Ok(level) = value.parse()
        {
            options.minimum_level = level;
        }
        options
    }
}

/// Factory producing per-category console sinks over one shared stream.
pub struct SimpleConsoleLoggerFactory {
    options: SimpleConsoleOptions,
    stream: Arc<Mutex<StandardStream>>,
}

impl SimpleConsoleLoggerFactory {
    /// Create a console factory.
    pub fn new(options: SimpleConsoleOptions) -> Self {
        Self {
            options,
            stream: Arc::new(Mutex::new(StandardStream::stdout(ColorChoice::Auto))),
        }
    }
}

impl LoggerFactory for SimpleConsoleLoggerFactory {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(SimpleConsoleLogger {
            category: category.to_owned(),
            options: self.options.clone(),
            stream: Arc::clone(&self.stream),
        })
    }

    // The console sink is built in; extra providers are accepted and
    // ignored.
    fn add_provider(&self, _provider: Arc<dyn LoggerProvider>) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) {
        let _ = self.stream.lock().flush();
    }
}

/// Writes `[TAG] category - message` lines with per-level colors.
struct SimpleConsoleLogger {
    category: String,
    options: SimpleConsoleOptions,
    stream: Arc<Mutex<StandardStream>>,
}

impl SimpleConsoleLogger {
    fn color_spec(level: Level) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match level {
            Level::Critical => {
                spec.set_fg(Some(Color::Red)).set_bg(Some(Color::White)).set_bold(true);
            }
            Level::Error => {
                spec.set_fg(Some(Color::Red));
            }
            Level::Warn => {
                spec.set_fg(Some(Color::Yellow));
            }
            Level::Debug | Level::Trace => {
                spec.set_dimmed(true);
            }
            Level::Info | Level::Off => {}
        }
        spec
    }
}

impl Logger for SimpleConsoleLogger {
    #[inline]
    fn is_enabled(&self, level: Level) -> bool {
        level.passes(self.options.minimum_level)
    }

    fn log(&self, record: Record<'_>) {
        let message = template::render(record.template, record.args);

        let mut stream = self.stream.lock();
        let _ = stream.set_color(&Self::color_spec(record.level));
        let _ = writeln!(stream, "[{}] {} - {}", record.level.tag(), self.category, message);
        if let Some(error) = record.error {
            let _ = writeln!(stream, "{error}");
            if self.options.print_error_chain {
                let mut source = error.source();
                while let Some(cause) = source {
                    let _ = writeln!(stream, "caused by: {cause}");
                    source = cause.source();
                }
            }
        }
        let _ = stream.reset();
        let _ = stream.flush();
    }

    fn flush(&self) {
        let _ = self.stream.lock().flush();
    }
}
