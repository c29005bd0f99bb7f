//! End-to-end tests through an installed `log` crate logger

use log::LevelFilter;
use lumen_logging::{log_args, Level, LogContext, ScopeState};
use lumen_logging_log::{scope, BridgeOptions, LogBridgeConfiguratorExt, ScopeRegistry};
use parking_lot::Mutex;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::OnceLock;

#[derive(Default)]
struct CapturingLog {
    records: Mutex<Vec<(log::Level, String, String)>>,
}

impl log::Log for CapturingLog {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.records.lock().push((
            record.level(),
            record.target().to_owned(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

/// Install the process-wide capturing logger once; tests isolate on
/// target names.
fn sink() -> &'static CapturingLog {
    static SINK: OnceLock<&'static CapturingLog> = OnceLock::new();
    SINK.get_or_init(|| {
        let sink: &'static CapturingLog = Box::leak(Box::new(CapturingLog::default()));
        log::set_logger(sink).unwrap();
        log::set_max_level(LevelFilter::Trace);
        sink
    })
}

fn messages_for(target: &str) -> Vec<(log::Level, String)> {
    sink()
        .records
        .lock()
        .iter()
        .filter(|(_, t, _)| t == target)
        .map(|(level, _, message)| (*level, message.clone()))
        .collect()
}

fn bridged_context() -> LogContext {
    sink();
    let ctx = LogContext::new();
    ctx.configure().use_log_bridge().unwrap();
    ctx
}

#[test]
fn records_are_rendered_and_forwarded() {
    let ctx = bridged_context();
    let log = ctx.create_logger("bridge::Forward");

    log.info("{A} + {B} = {Sum}", log_args![3, 4, 7]);

    let messages = messages_for("bridge::Forward");
    assert_eq!(messages, vec![(log::Level::Info, "3 + 4 = 7".to_owned())]);
}

#[test]
fn critical_is_emitted_at_error_and_off_is_disabled() {
    let ctx = bridged_context();
    let log = ctx.create_logger("bridge::Levels");

    assert!(!log.is_enabled(Level::Off));
    log.critical("meltdown", log_args![]);

    let messages = messages_for("bridge::Levels");
    assert_eq!(messages, vec![(log::Level::Error, "meltdown".to_owned())]);
}

#[test]
fn attached_errors_are_appended() {
    let ctx = bridged_context();
    let log = ctx.create_logger("bridge::Errors");

    let failure = std::io::Error::other("boom");
    log.error_with(&failure, "write failed", log_args![]);

    let messages = messages_for("bridge::Errors");
    assert_eq!(messages[0].1, "write failed: boom");
}

#[test]
fn scopes_annotate_records_while_live() {
    let ctx = bridged_context();
    let log = ctx.create_logger("bridge::Scoped");

    let state = ScopeState::Pairs(vec![
        ("user".to_owned(), "alice".to_owned()),
        ("request".to_owned(), "42".to_owned()),
    ]);
    let guard = log.begin_scope(&state);
    log.info("inside", log_args![]);
    drop(guard);
    log.info("outside", log_args![]);

    let messages = messages_for("bridge::Scoped");
    assert_eq!(messages[0].1, "inside {request=42} {user=alice}");
    assert_eq!(messages[1].1, "outside");
}

#[test]
fn scope_depth_balances_across_panics() {
    let ctx = bridged_context();
    let log = ctx.create_logger("bridge::Panicky");

    let before = scope::depth();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _scope = log.begin_scope(&ScopeState::Pairs(vec![
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "2".to_owned()),
        ]));
        assert_eq!(scope::depth(), before + 2);
        panic!("early exit");
    }));
    assert!(result.is_err());
    assert_eq!(scope::depth(), before);
}

#[test]
fn unregistered_shapes_expand_to_nothing() {
    sink();
    let ctx = LogContext::new();
    ctx.configure()
        .use_log_bridge_with(BridgeOptions {
            registry: ScopeRegistry::empty(),
            render_scopes: true,
        })
        .unwrap();
    let log = ctx.create_logger("bridge::NoScopes");

    let guard = log.begin_scope(&ScopeState::from("ignored"));
    assert!(guard.is_empty());
    assert_eq!(scope::depth(), 0);
}
