//! The uniform log handle

use crate::{Args, Level, Logger, Record, Scope, ScopeState};
use std::error::Error as StdError;
use std::sync::Arc;

/// A per-category logging handle.
///
/// Handles are cheap to clone and safe to share; each one captures its
/// sink at creation time, so reconfiguring the adapter later affects only
/// handles created afterwards.
#[derive(Clone)]
pub struct Log {
    category: Arc<str>,
    sink: Arc<dyn Logger>,
}

impl Log {
    /// Bind `sink` to `category` as a handle.
    pub fn new(category: &str, sink: Arc<dyn Logger>) -> Self {
        Self {
            category: Arc::from(category),
            sink,
        }
    }

    /// The category this handle emits under.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The wrapped backend sink.
    pub fn sink(&self) -> &Arc<dyn Logger> {
        &self.sink
    }

    /// Whether records at `level` would be written.
    #[inline]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.sink.is_enabled(level)
    }

    /// The one logging operation every convenience method reduces to.
    ///
    /// Disabled levels return immediately without touching `template` or
    /// `args`; enabled records are forwarded verbatim, with interpolation
    /// left entirely to the backend.
    #[inline]
    pub fn log(&self, level: Level, template: &str, args: Args<'_>) {
        self.write(level, None, template, args);
    }

    /// Like [`Log::log`], attaching `error` to the record.
    #[inline]
    pub fn log_with_error(
        &self,
        level: Level,
        error: &(dyn StdError + 'static),
        template: &str,
        args: Args<'_>,
    ) {
        self.write(level, Some(error), template, args);
    }

    fn write(
        &self,
        level: Level,
        error: Option<&(dyn StdError + 'static)>,
        template: &str,
        args: Args<'_>,
    ) {
        if !self.sink.is_enabled(level) {
            return;
        }
        self.sink.log(Record {
            level,
            category: &self.category,
            template,
            args,
            error,
        });
    }

    /// Open an ambient scope on the current thread; records emitted while
    /// the returned guard lives carry the scope's annotations.
    pub fn begin_scope(&self, state: &ScopeState) -> Scope {
        self.sink.begin_scope(state)
    }

    /// Log at [`Level::Trace`].
    #[inline]
    pub fn trace(&self, template: &str, args: Args<'_>) {
        self.log(Level::Trace, template, args);
    }

    /// Log at [`Level::Debug`].
    #[inline]
    pub fn debug(&self, template: &str, args: Args<'_>) {
        self.log(Level::Debug, template, args);
    }

    /// Log at [`Level::Info`].
    #[inline]
    pub fn info(&self, template: &str, args: Args<'_>) {
        self.log(Level::Info, template, args);
    }

    /// Log at [`Level::Warn`].
    #[inline]
    pub fn warn(&self, template: &str, args: Args<'_>) {
        self.log(Level::Warn, template, args);
    }

    /// Log at [`Level::Error`].
    #[inline]
    pub fn error(&self, template: &str, args: Args<'_>) {
        self.log(Level::Error, template, args);
    }

    /// Log at [`Level::Critical`].
    #[inline]
    pub fn critical(&self, template: &str, args: Args<'_>) {
        self.log(Level::Critical, template, args);
    }

    /// Log at [`Level::Error`] with an attached error.
    #[inline]
    pub fn error_with(&self, error: &(dyn StdError + 'static), template: &str, args: Args<'_>) {
        self.log_with_error(Level::Error, error, template, args);
    }

    /// Log at [`Level::Critical`] with an attached error.
    #[inline]
    pub fn critical_with(&self, error: &(dyn StdError + 'static), template: &str, args: Args<'_>) {
        self.log_with_error(Level::Critical, error, template, args);
    }
}

impl std::fmt::Debug for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Log").field("category", &self.category).finish()
    }
}
