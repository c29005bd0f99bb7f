//! Log record type passed from handles to sinks

use crate::Level;
use std::fmt;

/// Positional message arguments.
///
/// Arguments stay unevaluated `Display` references until a backend decides
/// to render them; a record whose level is filtered out never formats
/// anything.
pub type Args<'a> = &'a [&'a dyn fmt::Display];

/// One log event, borrowed from the call site and consumed by the sink.
///
/// The facade never interpolates `template`; placeholder binding is the
/// backend's job (see [`crate::template::render`]).
pub struct Record<'a> {
    /// Severity of the event
    pub level: Level,
    /// Category the emitting handle was created for
    pub category: &'a str,
    /// Message template with `{name}` placeholders, possibly empty
    pub template: &'a str,
    /// Positional arguments, bound to placeholders by declaration order
    pub args: Args<'a>,
    /// Error attached to the event, if any
    pub error: Option<&'a (dyn std::error::Error + 'static)>,
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("category", &self.category)
            .field("template", &self.template)
            .field("args", &self.args.len())
            .field("error", &self.error.map(|e| e.to_string()))
            .finish()
    }
}

/// An empty argument list.
pub const NO_ARGS: Args<'static> = &[];

/// Builds an [`Args`] slice from a list of expressions.
///
/// ```
/// use lumen_logging::log_args;
///
/// let (a, b) = (3, 4);
/// let sum = a + b;
/// let args = log_args![a, b, sum];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        $crate::NO_ARGS
    };
    ($($arg:expr),+ $(,)?) => {
        &[$(&$arg as &dyn ::core::fmt::Display),+]
    };
}
