//! Factory wrapping a single fixed provider

use crate::{Error, Logger, LoggerFactory, LoggerProvider, Result};
use std::sync::Arc;

/// A [`LoggerFactory`] that routes every category to one provider.
///
/// This is how external backends plug in through
/// [`Configurator::use_provider`](crate::Configurator::use_provider): the
/// provider is fixed at construction and additional providers are rejected.
pub struct SimpleLoggerFactory {
    provider: Arc<dyn LoggerProvider>,
}

impl SimpleLoggerFactory {
    /// Wrap `provider` as a factory.
    pub fn new(provider: Arc<dyn LoggerProvider>) -> Self {
        Self { provider }
    }
}

impl LoggerFactory for SimpleLoggerFactory {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        self.provider.create_logger(category)
    }

    fn add_provider(&self, _provider: Arc<dyn LoggerProvider>) -> Result<()> {
        Err(Error::Unsupported(
            "SimpleLoggerFactory routes to a single fixed provider".to_owned(),
        ))
    }

    fn shutdown(&self) {
        self.provider.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    struct NullLogger;

    impl Logger for NullLogger {
        fn is_enabled(&self, _level: Level) -> bool {
            false
        }

        fn log(&self, _record: crate::Record<'_>) {}
    }

    struct NullProvider;

    impl LoggerProvider for NullProvider {
        fn create_logger(&self, _category: &str) -> Arc<dyn Logger> {
            Arc::new(NullLogger)
        }
    }

    #[test]
    fn rejects_additional_providers() {
        let factory = SimpleLoggerFactory::new(Arc::new(NullProvider));
        let err = factory.add_provider(Arc::new(NullProvider)).unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }
}
