//! JSONL file writer for generation events.
//!
//! Each [`GenerationEvent`] becomes one JSON line with `type` and `timestamp`
//! fields merged into its payload. The file is opened in append mode, so one
//! log accumulates every run.

use querywright_application::ports::generation_logger::{GenerationEvent, GenerationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL generation logger that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every event.
pub struct JsonlGenerationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlGenerationLogger {
    /// Open (or create) the log at the given path.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened; generation then runs without a structured log.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create generation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open generation log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: GenerationEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert(
            "type".to_string(),
            Value::String(event.event_type.to_string()),
        );
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl GenerationLogger for JsonlGenerationLogger {
    fn log(&self, event: GenerationEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlGenerationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generations.jsonl");
        let logger = JsonlGenerationLogger::open(&path).unwrap();

        logger.log(GenerationEvent::new(
            "generation_response",
            json!({"model": "gpt-4.1", "raw": "Sure!\nMATCH (n) RETURN n"}),
        ));
        logger.log(GenerationEvent::new(
            "generation_success",
            json!({"query": "MATCH (n) RETURN n;", "path": "scanned"}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.get("timestamp").is_some());
        }
        assert_eq!(records[0]["type"], "generation_response");
        assert_eq!(records[0]["raw"], "Sure!\nMATCH (n) RETURN n");
        assert_eq!(records[1]["type"], "generation_success");
        assert_eq!(records[1]["path"], "scanned");
    }

    #[test]
    fn test_appends_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generations.jsonl");

        for _ in 0..2 {
            let logger = JsonlGenerationLogger::open(&path).unwrap();
            logger.log(GenerationEvent::new("generation_request", json!({"prompt": "q"})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.jsonl");
        let logger = JsonlGenerationLogger::open(&path).unwrap();
        assert_eq!(logger.path(), path.as_path());

        logger.log(GenerationEvent::new("generation_failure", json!("timeout")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "generation_failure");
        assert_eq!(records[0]["data"], "timeout");
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        assert!(JsonlGenerationLogger::open(blocker.join("log.jsonl")).is_none());
    }
}
