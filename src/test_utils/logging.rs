//! Test logging infrastructure with structured log capture and assertions.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Storage for captured log entries.
#[derive(Default)]
pub struct LogStorage {
    entries: VecDeque<LogEntry>,
    max_entries: usize,
}

impl LogStorage {
    #[must_use]
    pub const fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    #[must_use]
    pub const fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(message))
    }
}

/// A captured log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    #[must_use]
    pub fn new(level: Level, target: &str, message: &str) -> Self {
        Self {
            level,
            target: target.to_string(),
            message: message.to_string(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Layer that records every event into shared storage.
pub struct TestLogLayer {
    storage: Arc<Mutex<LogStorage>>,
}

impl TestLogLayer {
    pub const fn new(storage: Arc<Mutex<LogStorage>>) -> Self {
        Self { storage }
    }
}

impl<S> tracing_subscriber::Layer<S> for TestLogLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        struct MessageVisitor<'a> {
            message: &'a mut String,
            fields: &'a mut Vec<(String, String)>,
        }

        impl tracing::field::Visit for MessageVisitor<'_> {
            fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
                if field.name() == "message" {
                    *self.message = value.to_string();
                } else {
                    self.fields
                        .push((field.name().to_string(), value.to_string()));
                }
            }

            fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
                let value_str = format!("{value:?}");
                if field.name() == "message" {
                    *self.message = value_str;
                } else {
                    self.fields.push((field.name().to_string(), value_str));
                }
            }
        }

        let metadata = event.metadata();
        let mut message = String::new();
        let mut fields = Vec::new();
        event.record(&mut MessageVisitor {
            message: &mut message,
            fields: &mut fields,
        });

        let mut entry = LogEntry::new(*metadata.level(), metadata.target(), &message);
        entry.fields = fields;
        self.storage.lock().push(entry);
    }
}

/// Run `f` with a capturing subscriber installed on the current thread.
///
/// Events emitted from other threads (e.g. rayon workers) are not captured.
pub fn capture_logs<R>(level: &str, f: impl FnOnce() -> R) -> (R, Vec<LogEntry>) {
    let storage = Arc::new(Mutex::new(LogStorage::new(1000)));
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(TestLogLayer::new(Arc::clone(&storage)));

    let result = tracing::subscriber::with_default(subscriber, f);
    let entries = storage.lock().entries().iter().cloned().collect();
    (result, entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_storage_max_entries() {
        let mut storage = LogStorage::new(3);
        for i in 0..5 {
            storage.push(LogEntry::new(Level::INFO, "test", &format!("Message {i}")));
        }

        assert_eq!(storage.entries().len(), 3);
        assert!(!storage.contains_message("Message 0"));
        assert!(storage.contains_message("Message 4"));
    }

    #[test]
    fn captures_events_and_fields() {
        let ((), logs) = capture_logs("debug", || {
            tracing::warn!(category = "pools", "skipping layer");
            tracing::trace!("too quiet");
        });

        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].level, Level::WARN);
        assert_eq!(logs[0].message, "skipping layer");
        assert_eq!(logs[0].field("category"), Some("pools"));
    }
}
