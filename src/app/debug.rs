use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugLevel::Debug => write!(f, "DEBUG"),
            DebugLevel::Info => write!(f, "INFO"),
            DebugLevel::Warn => write!(f, "WARN"),
            DebugLevel::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCategory {
    Network,
    Auth,
    Data,
    Route,
    Ui,
    Other,
}

impl DebugCategory {
    pub const ALL: [DebugCategory; 6] = [
        DebugCategory::Network,
        DebugCategory::Auth,
        DebugCategory::Data,
        DebugCategory::Route,
        DebugCategory::Ui,
        DebugCategory::Other,
    ];
}

impl fmt::Display for DebugCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DebugCategory::Network => write!(f, "NET"),
            DebugCategory::Auth => write!(f, "AUTH"),
            DebugCategory::Data => write!(f, "DATA"),
            DebugCategory::Route => write!(f, "ROUTE"),
            DebugCategory::Ui => write!(f, "UI"),
            DebugCategory::Other => write!(f, "OTHER"),
        }
    }
}

#[derive(Clone)]
pub struct DebugEntry {
    pub timestamp: String,
    pub level: DebugLevel,
    pub category: DebugCategory,
    pub message: String,
}

impl fmt::Display for DebugEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} {}",
            self.timestamp, self.level, self.category, self.message
        )
    }
}

/// In-app ring-buffer logger feeding the Logs view.
pub struct DebugLogger {
    entries: Arc<Mutex<Vec<DebugEntry>>>,
    max_entries: usize,
}

impl DebugLogger {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            max_entries,
        }
    }

    fn timestamp() -> String {
        use std::time::UNIX_EPOCH;
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let secs = duration.as_secs();
        let millis = duration.subsec_millis();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            (secs / 3600) % 24,
            (secs / 60) % 60,
            secs % 60,
            millis
        )
    }

    pub fn log(&self, level: DebugLevel, category: DebugCategory, message: impl Into<String>) {
        let entry = DebugEntry {
            timestamp: Self::timestamp(),
            level,
            category,
            message: message.into(),
        };

        match entry.level {
            DebugLevel::Debug => tracing::debug!(category = %entry.category, "{}", entry.message),
            DebugLevel::Info => tracing::info!(category = %entry.category, "{}", entry.message),
            DebugLevel::Warn => tracing::warn!(category = %entry.category, "{}", entry.message),
            DebugLevel::Error => tracing::error!(category = %entry.category, "{}", entry.message),
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
            if entries.len() > self.max_entries {
                entries.remove(0);
            }
        }
    }

    pub fn debug(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Debug, category, msg);
    }

    pub fn info(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Info, category, msg);
    }

    pub fn warn(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Warn, category, msg);
    }

    pub fn error(&self, category: DebugCategory, msg: impl Into<String>) {
        self.log(DebugLevel::Error, category, msg);
    }

    pub fn get_entries(&self) -> Vec<DebugEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Clone for DebugLogger {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            max_entries: self.max_entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_records_entries() {
        let logger = DebugLogger::new(10);
        logger.info(DebugCategory::Auth, "signed in");
        logger.error(DebugCategory::Network, "connection refused");

        let entries = logger.get_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, DebugLevel::Info);
        assert_eq!(entries[1].category, DebugCategory::Network);
    }

    #[test]
    fn test_ring_buffer_trims_oldest() {
        let logger = DebugLogger::new(3);
        for i in 0..5 {
            logger.info(DebugCategory::Other, format!("entry {}", i));
        }
        let entries = logger.get_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "entry 2");
        assert_eq!(entries[2].message, "entry 4");
    }

    #[test]
    fn test_clear_and_count() {
        let logger = DebugLogger::new(10);
        logger.warn(DebugCategory::Data, "stale");
        assert_eq!(logger.count(), 1);
        logger.clear();
        assert_eq!(logger.count(), 0);
    }

    #[test]
    fn test_clone_shares_buffer() {
        let logger = DebugLogger::new(10);
        let handle = logger.clone();
        handle.info(DebugCategory::Ui, "frame");
        assert_eq!(logger.count(), 1);
    }
}
