//! Adapter seam between raw sinks and handles

use crate::{Log, Logger};
use std::sync::Arc;

/// Converts a raw backend sink into the uniform [`Log`] handle.
///
/// The default adapter is a pass-through; custom adapters may wrap the
/// sink in a decorator (rate limiting, redaction, category rewriting)
/// before the handle is produced, as long as the decorated sink still
/// honors the `is_enabled` / `log` contract.
pub trait LogAdapter: Send + Sync {
    /// Produce a handle for `category` over `sink`.
    fn adapt(&self, category: &str, sink: Arc<dyn Logger>) -> Log;
}

/// Pass-through adapter binding the sink directly.
pub struct DefaultLogAdapter;

impl LogAdapter for DefaultLogAdapter {
    fn adapt(&self, category: &str, sink: Arc<dyn Logger>) -> Log {
        Log::new(category, sink)
    }
}
