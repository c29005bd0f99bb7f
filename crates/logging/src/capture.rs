//! In-memory capture backend for tests
//!
//! Captures every record a sink receives so tests can assert on exactly
//! what reached the backend, instead of scraping stdout.

use crate::{Level, Logger, LoggerFactory, LoggerProvider, Record, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// An owned copy of one record as a sink received it.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    /// Severity of the record
    pub level: Level,
    /// Category the record was emitted under
    pub category: String,
    /// The template exactly as passed through, uninterpolated
    pub template: String,
    /// Arguments rendered individually, in order
    pub args: Vec<String>,
    /// Display rendering of the attached error, if any
    pub error: Option<String>,
}

/// Factory whose sinks record into a shared buffer.
#[derive(Clone)]
pub struct CaptureLoggerFactory {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
    min_level: Level,
}

impl CaptureLoggerFactory {
    /// A capture factory accepting all levels.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            min_level: Level::Trace,
        }
    }

    /// Set the threshold the sinks gate on.
    pub fn with_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Snapshot of everything captured so far.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Discard captured records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }

    /// Whether any captured template or rendered argument contains `text`.
    pub fn contains(&self, text: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|r| r.template.contains(text) || r.args.iter().any(|a| a.contains(text)))
    }
}

impl Default for CaptureLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for CaptureLoggerFactory {
    fn create_logger(&self, category: &str) -> Arc<dyn Logger> {
        Arc::new(CaptureLogger {
            category: category.to_owned(),
            records: Arc::clone(&self.records),
            min_level: self.min_level,
        })
    }

    fn add_provider(&self, _provider: Arc<dyn LoggerProvider>) -> Result<()> {
        Ok(())
    }

    fn shutdown(&self) {}
}

struct CaptureLogger {
    category: String,
    records: Arc<Mutex<Vec<CapturedRecord>>>,
    min_level: Level,
}

impl Logger for CaptureLogger {
    fn is_enabled(&self, level: Level) -> bool {
        level.passes(self.min_level)
    }

    fn log(&self, record: Record<'_>) {
        let captured = CapturedRecord {
            level: record.level,
            category: self.category.clone(),
            template: record.template.to_owned(),
            args: record.args.iter().map(|a| a.to_string()).collect(),
            error: record.error.map(|e| e.to_string()),
        };
        self.records.lock().push(captured);
    }
}
