#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// Stamp a new entry with the local wall-clock time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: current_time(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    /// Entries kept; older ones are dropped first.
    pub const MAX_ENTRIES: usize = 200;

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            let excess = self.entries.len() + 1 - Self::MAX_ENTRIES;
            self.entries.drain(..excess);
        }
        self.entries.push(entry);
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }
}

/// Mirror an activity entry into the tracing stream.
pub fn trace_entry(entry: &LogEntry) {
    match entry.level {
        LogLevel::Info | LogLevel::Success => tracing::info!("{}", entry.message),
        LogLevel::Warning => tracing::warn!("{}", entry.message),
        LogLevel::Error => tracing::error!("{}", entry.message),
    }
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
