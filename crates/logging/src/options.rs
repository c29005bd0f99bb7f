//! Process-wide options state behind the facade

use crate::adapter::{DefaultLogAdapter, LogAdapter};
use crate::console::{SimpleConsoleLoggerFactory, SimpleConsoleOptions};
use crate::{Error, Level, LoggerFactory, Result};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

static DEFAULT_ADAPTER: Lazy<Arc<dyn LogAdapter>> = Lazy::new(|| Arc::new(DefaultLogAdapter));

/// Mutable configuration for one [`LogContext`](crate::LogContext).
///
/// The backend factory slot is write-once; the default backend is built
/// lazily, exactly once, on first use. The adapter may be swapped freely
/// and affects only handles created afterwards.
pub(crate) struct LogOptions {
    factory: RwLock<Option<Arc<dyn LoggerFactory>>>,
    default_factory: OnceLock<Arc<dyn LoggerFactory>>,
    adapter: RwLock<Option<Arc<dyn LogAdapter>>>,
}

impl LogOptions {
    pub(crate) fn new() -> Self {
        Self {
            factory: RwLock::new(None),
            default_factory: OnceLock::new(),
            adapter: RwLock::new(None),
        }
    }

    /// The configured factory, or the memoized default console backend.
    pub(crate) fn factory(&self) -> Arc<dyn LoggerFactory> {
        if let Some(factory) = self.factory.read().as_ref() {
            return Arc::clone(factory);
        }
        Arc::clone(self.default_factory.get_or_init(|| {
            let options = SimpleConsoleOptions::default().with_minimum_level(Level::Info);
            Arc::new(SimpleConsoleLoggerFactory::new(options))
        }))
    }

    pub(crate) fn is_configured(&self) -> bool {
        self.factory.read().is_some()
    }

    pub(crate) fn set_factory(&self, factory: Arc<dyn LoggerFactory>) -> Result<()> {
        let mut slot = self.factory.write();
        if slot.is_some() {
            return Err(Error::AlreadyConfigured);
        }
        *slot = Some(factory);
        Ok(())
    }

    pub(crate) fn adapter(&self) -> Arc<dyn LogAdapter> {
        match self.adapter.read().as_ref() {
            Some(adapter) => Arc::clone(adapter),
            None => Arc::clone(&DEFAULT_ADAPTER),
        }
    }

    /// `None` resets to the default pass-through adapter.
    pub(crate) fn set_adapter(&self, adapter: Option<Arc<dyn LogAdapter>>) {
        *self.adapter.write() = adapter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::CaptureLoggerFactory;

    #[test]
    fn second_explicit_factory_is_rejected() {
        let options = LogOptions::new();
        let first: Arc<dyn LoggerFactory> = Arc::new(CaptureLoggerFactory::new());
        options.set_factory(Arc::clone(&first)).unwrap();
        let err = options
            .set_factory(Arc::new(CaptureLoggerFactory::new()))
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyConfigured));
        assert!(Arc::ptr_eq(&options.factory(), &first));
    }

    #[test]
    fn default_factory_is_memoized() {
        let options = LogOptions::new();
        assert!(!options.is_configured());
        let first = options.factory();
        let second = options.factory();
        assert!(Arc::ptr_eq(&first, &second));
        // Lazily defaulting does not count as explicit configuration.
        assert!(!options.is_configured());
    }

    #[test]
    fn adapter_reset_restores_default() {
        let options = LogOptions::new();
        let default = options.adapter();
        options.set_adapter(Some(Arc::new(DefaultLogAdapter)));
        assert!(!Arc::ptr_eq(&options.adapter(), &default));
        options.set_adapter(None);
        assert!(Arc::ptr_eq(&options.adapter(), &default));
    }
}
