//! Configuration lifecycle tests

use lumen_logging::capture::CaptureLoggerFactory;
use lumen_logging::{
    log_args, Error, Level, Log, LogAdapter, LogContext, Logger, LoggerFactory,
};
use std::sync::Arc;
use std::thread;

#[test]
fn backend_is_write_once() {
    let ctx = LogContext::new();
    let first = CaptureLoggerFactory::new();
    let second = CaptureLoggerFactory::new();

    ctx.configure().use_factory(Arc::new(first.clone())).unwrap();
    let err = ctx
        .configure()
        .use_factory(Arc::new(second.clone()))
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyConfigured));

    // The first backend stays in effect.
    ctx.create_logger("cfg::WriteOnce")
        .info("still routed", log_args![]);
    assert_eq!(first.records().len(), 1);
    assert!(second.records().is_empty());
}

#[test]
fn lazy_default_is_constructed_exactly_once() {
    let ctx = Arc::new(LogContext::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ctx = Arc::clone(&ctx);
            thread::spawn(move || {
                // Force factory resolution from many threads at once.
                let _ = ctx.create_logger("cfg::Concurrent");
                ctx.factory()
            })
        })
        .collect();

    let factories: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for factory in &factories[1..] {
        assert!(Arc::ptr_eq(&factories[0], factory));
    }
    // A lazily built default does not count as explicit configuration.
    assert!(!ctx.is_configured());
}

#[test]
fn configurator_calls_chain() -> lumen_logging::Result<()> {
    let ctx = LogContext::new();
    ctx.configure()
        .use_factory(Arc::new(CaptureLoggerFactory::new()))?
        .use_adapter(None);
    Ok(())
}

/// Adapter that rewrites the category, used to observe which adapter a
/// handle was created through.
struct UppercaseAdapter;

impl LogAdapter for UppercaseAdapter {
    fn adapt(&self, category: &str, sink: Arc<dyn Logger>) -> Log {
        Log::new(&category.to_uppercase(), sink)
    }
}

#[test]
fn adapter_swap_affects_only_future_handles() {
    let ctx = LogContext::new();
    let backend = CaptureLoggerFactory::new();
    ctx.configure().use_factory(Arc::new(backend.clone())).unwrap();

    let before = ctx.create_logger("cfg::adapter");
    ctx.configure().use_adapter(Some(Arc::new(UppercaseAdapter)));
    let after = ctx.create_logger("cfg::adapter");

    before.info("old handle", log_args![]);
    after.info("new handle", log_args![]);

    let records = backend.records();
    assert_eq!(records[0].category, "cfg::adapter");
    assert_eq!(records[1].category, "CFG::ADAPTER");
}

#[test]
fn shutdown_reaches_the_backend() {
    let ctx = LogContext::new();
    let backend = CaptureLoggerFactory::new();
    ctx.configure().use_factory(Arc::new(backend.clone())).unwrap();
    // The capture backend holds no resources; shutdown must simply not
    // disturb configured state.
    ctx.lifecycle().shutdown();
    ctx.create_logger("cfg::Shutdown")
        .warn("after shutdown", log_args![]);
    assert_eq!(backend.records().len(), 1);
}

#[test]
fn single_provider_factory_rejects_additions() {
    struct NullProvider;
    impl lumen_logging::LoggerProvider for NullProvider {
        fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
            CaptureLoggerFactory::new().create_logger(category)
        }
    }

    let ctx = LogContext::new();
    ctx.configure().use_provider(Arc::new(NullProvider)).unwrap();
    let err = ctx
        .factory()
        .add_provider(Arc::new(NullProvider))
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported(_)));
    assert!(ctx.create_logger("cfg::Provider").is_enabled(Level::Trace));
}
