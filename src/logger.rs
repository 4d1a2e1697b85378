use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Collects formatted log lines into a shared vector for the log pane.
///
/// Installed as the `tracing_subscriber` writer so log output lands in
/// the interface instead of corrupting the terminal. The vector is
/// bounded; once full, the oldest line is dropped for each new one.
pub struct Writer {
    logs: Arc<Mutex<Vec<String>>>,
    capacity: usize,
}

impl Writer {
    pub fn new(logs: Arc<Mutex<Vec<String>>>, capacity: usize) -> Self {
        Self { logs, capacity }
    }

    /// Adds fields that weren't previously handled to the log message.
    fn add_to_log_message(key: &str, value: &serde_json::Value, log_message: &mut String) {
        if let serde_json::Value::Object(map) = value {
            for (key, value) in map {
                Self::add_to_log_message(key, value, log_message);
            }
        } else if !key.is_empty()
            && key != "level"
            && key != "timestamp"
            && key != "target"
            && key != "message"
        {
            log_message.push_str(&format!("{}={} ", key, value));
        }
    }

    /// Formats one JSON event from the subscriber into a display line.
    ///
    /// Returns `None` when the buffer is not a JSON event, in which case
    /// the raw text is stored as-is.
    fn format(json_str: &str) -> Option<String> {
        let json: serde_json::Value = serde_json::from_str(json_str).ok()?;
        let level = json["level"].as_str()?;
        let timestamp = json["timestamp"].as_str()?;
        let target = json["target"].as_str()?;
        let msg = json["fields"]["message"].as_str().unwrap_or_default();
        let time = chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.6fZ")
            .map(|parsed| parsed.format("%m/%d %H:%M:%S").to_string())
            .unwrap_or_else(|_| timestamp.to_string());
        let mut log_message = format!("[{}|{}] {} => {} (", time, level, target, msg);

        // Add remaining fields
        Self::add_to_log_message("", &json, &mut log_message);
        let log_message = format!("{})", log_message.trim_end());

        // Cleanup empty logs
        Some(log_message.replace("()", "").trim_end().to_string())
    }
}

impl std::io::Write for Writer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let json_str = String::from_utf8_lossy(buf);
        let log_message = match Self::format(&json_str) {
            Some(log_message) => log_message,
            None => json_str.trim_end().to_string(),
        };
        if log_message.is_empty() {
            return Ok(buf.len());
        }

        // Append log message, dropping the oldest line once full
        let mut logs = self.logs.lock().unwrap();
        if logs.len() == self.capacity {
            logs.remove(0);
        }
        logs.push(log_message);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Writer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        Writer {
            logs: Arc::clone(&self.logs),
            capacity: self.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_formats_event_fields() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let mut writer = Writer::new(logs.clone(), 8);
        let event = r#"{"timestamp":"2026-08-24T10:20:30.000000Z","level":"INFO","fields":{"message":"vote submitted","choice":2},"target":"zkvote::ballot"}"#;
        writer.write_all(event.as_bytes()).unwrap();

        let logs = logs.lock().unwrap();
        assert_eq!(
            logs[0],
            "[08/24 10:20:30|INFO] zkvote::ballot => vote submitted (choice=2)"
        );
    }

    #[test]
    fn test_message_only_event_has_no_field_list() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let mut writer = Writer::new(logs.clone(), 8);
        let event = r#"{"timestamp":"2026-08-24T10:20:30.000000Z","level":"WARN","fields":{"message":"wallet disconnected"},"target":"zkvote::wallet"}"#;
        writer.write_all(event.as_bytes()).unwrap();

        let logs = logs.lock().unwrap();
        assert_eq!(
            logs[0],
            "[08/24 10:20:30|WARN] zkvote::wallet => wallet disconnected"
        );
    }

    #[test]
    fn test_non_json_lines_kept_raw() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let mut writer = Writer::new(logs.clone(), 8);
        writer.write_all(b"plain text\n").unwrap();

        let logs = logs.lock().unwrap();
        assert_eq!(logs[0], "plain text");
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let mut writer = Writer::new(logs.clone(), 2);
        for line in ["first", "second", "third"] {
            writer.write_all(line.as_bytes()).unwrap();
        }

        let logs = logs.lock().unwrap();
        assert_eq!(*logs, vec!["second".to_string(), "third".to_string()]);
    }
}
