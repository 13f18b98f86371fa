//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent log entries in a circular
//! buffer so the frontend can show them, and mirrors every entry to the
//! browser console when running on wasm32.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// One captured log event.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// `12:30:01.250 INFO likes_binder::renderer: added item id=#4`
    pub fn format_line(&self) -> String {
        format!(
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

type ChangeListener = Arc<dyn Fn() + Send + Sync>;

struct Inner {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    listener: Option<ChangeListener>,
}

/// Bounded, shared buffer of log entries. Oldest entries are dropped first.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Inner>>,
}

impl fmt::Debug for LogBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("LogBuffer")
            .field("len", &inner.entries.len())
            .field("capacity", &inner.capacity)
            .finish()
    }
}

impl LogBuffer {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: VecDeque::with_capacity(capacity),
                capacity,
                listener: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, entry: LogEntry) {
        let listener = {
            let mut inner = self.lock();
            if inner.entries.len() == inner.capacity {
                inner.entries.pop_front();
            }
            inner.entries.push_back(entry);
            inner.listener.clone()
        };
        // Called outside the lock so the listener may read the buffer.
        if let Some(listener) = listener {
            listener();
        }
    }

    /// Entries from oldest to newest.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock().entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }

    /// Register a callback run after every push. Replaces any previous one.
    pub fn on_change(&self, listener: impl Fn() + Send + Sync + 'static) {
        self.lock().listener = Some(Arc::new(listener));
    }
}

/// Collects an event's message and fields into one line.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

/// Layer feeding a [`LogBuffer`].
pub struct RollingLayer {
    buffer: LogBuffer,
    min_level: Level,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self {
            buffer,
            min_level: Level::DEBUG,
        }
    }

    /// Drop events less severe than `level`.
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // More verbose levels compare greater.
        if *metadata.level() > self.min_level {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            timestamp: Utc::now(),
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: format!("{}{}", visitor.message, visitor.fields),
        };
        write_console(&entry);
        self.buffer.push(entry);
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(entry: &LogEntry) {
    use web_sys::console;

    let line = entry.format_line().into();
    match entry.level {
        Level::ERROR => console::error_1(&line),
        Level::WARN => console::warn_1(&line),
        Level::INFO => console::info_1(&line),
        _ => console::log_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_entry: &LogEntry) {}

/// Install a [`RollingLayer`] as the global subscriber and return its buffer.
///
/// If a global subscriber is already set, the returned buffer stays empty.
pub fn init(capacity: usize) -> LogBuffer {
    let buffer = LogBuffer::new(capacity);
    let subscriber = tracing_subscriber::registry().with(RollingLayer::new(buffer.clone()));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        write_console(&LogEntry {
            timestamp: Utc::now(),
            level: Level::WARN,
            target: module_path!().to_string(),
            message: "global subscriber already set".to_string(),
        });
    }
    buffer
}
