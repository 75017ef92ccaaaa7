use crate::domain::logging::{LogEntry, LogLevel, Logger};

/// Console logger implementation for the browser environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    fn format_entry(entry: &LogEntry) -> String {
        let now = js_sys::Date::new_0();
        format!(
            "[{:02}:{:02}:{:02}.{:03}] {} {} | {}",
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds(),
            now.get_milliseconds(),
            entry.level,
            entry.component,
            entry.message
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let formatted = Self::format_entry(&entry);

        // Route to the console method matching the level
        #[allow(unused_unsafe)]
        unsafe {
            match entry.level {
                LogLevel::Trace | LogLevel::Debug => {
                    web_sys::console::debug_1(&formatted.into());
                }
                LogLevel::Info => {
                    web_sys::console::info_1(&formatted.into());
                }
                LogLevel::Warn => {
                    web_sys::console::warn_1(&formatted.into());
                }
                LogLevel::Error => {
                    web_sys::console::error_1(&formatted.into());
                }
            }
        }
    }
}
