//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Session ID for correlation.
    pub session_id: String,
    /// Component that produced the entry (e.g. "cart", "checkout").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = match &self.component {
            Some(component) => format!("[{}] {}: {}", self.level, component, self.message),
            None => format!("[{}] {}", self.level, self.message),
        };

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines, for log aggregation.
    #[default]
    Json,
    /// Human-readable, for development.
    Human,
}

/// Destination for rendered log lines.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    #[default]
    Stderr,
    /// Keep rendered lines in memory.
    Capture(Arc<Mutex<Vec<String>>>),
    /// Drop everything.
    Discard,
}

impl LogSink {
    /// Create a capturing sink and hand back the shared buffer.
    pub fn capture() -> (Self, Arc<Mutex<Vec<String>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        (Self::Capture(Arc::clone(&buffer)), buffer)
    }

    fn write(&self, line: String) {
        match self {
            Self::Stderr => eprintln!("{}", line),
            Self::Capture(buffer) => {
                if let Ok(mut lines) = buffer.lock() {
                    lines.push(line);
                }
            }
            Self::Discard => {}
        }
    }
}

/// Structured logger bound to one storefront session.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    start_time: Instant,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger with session context.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            start_time: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    /// A logger that drops every entry.
    pub fn disabled() -> Self {
        Self::new(SessionId::from_string("disabled")).with_sink(LogSink::Discard)
    }

    /// Derive a logger for a named component sharing this session.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        let mut logger = self.clone();
        logger.component = Some(component.into());
        logger
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            fields,
            elapsed_us: Some(self.elapsed_us()),
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        self.sink.write(output);
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an optional string field; `None` is skipped.
    pub fn field_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.field(key, v),
            None => self,
        }
    }

    pub fn field_i64(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a duration field (in milliseconds).
    pub fn duration_ms(mut self, key: &str, duration: std::time::Duration) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(duration.as_millis() as u64));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured_logger() -> (StructuredLogger, Arc<Mutex<Vec<String>>>) {
        let (sink, buffer) = LogSink::capture();
        let logger = StructuredLogger::new(SessionId::from_string("sess-test")).with_sink(sink);
        (logger, buffer)
    }

    #[test]
    fn test_json_entry_carries_session_and_fields() {
        let (logger, buffer) = captured_logger();
        logger
            .for_component("cart")
            .info_builder("item added")
            .field("product_id", "1")
            .field_i64("quantity", 2)
            .emit();

        let lines = buffer.lock().unwrap();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["session_id"], "sess-test");
        assert_eq!(value["component"], "cart");
        assert_eq!(value["product_id"], "1");
        assert_eq!(value["quantity"], 2);
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, buffer) = captured_logger();
        let logger = logger.with_min_level(LogLevel::Warn);
        logger.info("dropped");
        logger.debug("dropped too");
        logger.warn("kept");

        let lines = buffer.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("kept"));
    }

    #[test]
    fn test_human_format() {
        let (logger, buffer) = captured_logger();
        logger
            .with_format(LogFormat::Human)
            .for_component("checkout")
            .info_builder("order placed")
            .field("order", "LUX-000042")
            .emit();

        let lines = buffer.lock().unwrap();
        assert_eq!(
            lines[0],
            "[INFO] checkout: order placed | order=\"LUX-000042\""
        );
    }

    #[test]
    fn test_disabled_logger_is_silent() {
        let logger = StructuredLogger::disabled();
        logger.error("nothing happens");
    }

    #[test]
    fn test_level_parsing() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
