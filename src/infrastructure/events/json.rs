//! JSON Event Sink
//!
//! Outputs configuration events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ConfigurationEvent, ConfigurationEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(io::stdout(), command)
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W, command: &'static str) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ConfigurationEventSink for JsonEventSink {
    fn on_event(&self, event: ConfigurationEvent) {
        let command = self.command;
        let json = match event {
            ConfigurationEvent::Started {
                module_count,
                version,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": command,
                    "module_count": module_count,
                    "version": version,
                })
            }

            ConfigurationEvent::StageCompleted { module, stage } => {
                serde_json::json!({
                    "event": "stage",
                    "command": command,
                    "module": module,
                    "stage": stage.as_str(),
                })
            }

            ConfigurationEvent::ModuleFailed { module, error } => {
                serde_json::json!({
                    "event": "module_failed",
                    "command": command,
                    "module": module,
                    "code": error.code(),
                    "error": error.to_string(),
                })
            }

            ConfigurationEvent::Executed { module } => {
                serde_json::json!({
                    "event": "executed",
                    "command": command,
                    "module": module,
                })
            }

            ConfigurationEvent::ExecutionFailed { module, message } => {
                serde_json::json!({
                    "event": "execution_failed",
                    "command": command,
                    "module": module,
                    "error": message,
                })
            }

            ConfigurationEvent::Skipped { module, dependency } => {
                serde_json::json!({
                    "event": "skipped",
                    "command": command,
                    "module": module,
                    "dependency": dependency,
                })
            }

            ConfigurationEvent::Completed { ready, failed } => {
                let status = if failed == 0 { "success" } else { "failure" };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "ready": ready,
                    "failed": failed,
                })
            }
        };

        self.write_event(json);
    }
}
