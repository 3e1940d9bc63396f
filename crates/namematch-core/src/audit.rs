//! Possible-match audit log
//!
//! Borderline results are handed to an [`AuditSink`]. The bundled
//! [`JsonlAuditLog`] appends one JSON document per line from a background
//! thread, so the comparison never waits on disk. Write failures are
//! logged and dropped.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread::JoinHandle;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::matcher::{Attributes, MatchResult, MatchType};

/// Metric block of an audit record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditMetrics {
    pub levenshtein: f64,
    pub jaro_winkler: f64,
    pub phonetic: f64,
    pub double_metaphone: f64,
    pub cosine: f64,
    pub additional_attributes: f64,
}

/// One audited comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    /// RFC 3339, UTC
    pub timestamp: String,
    pub name1: String,
    pub name2: String,
    pub score: u8,
    pub match_type: MatchType,
    pub metrics: AuditMetrics,
    pub processing_time_ms: u64,
    pub attributes: Attributes,
}

impl AuditRecord {
    pub fn new(
        name1: &str,
        name2: &str,
        result: &MatchResult,
        attributes: Option<&Attributes>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            name1: name1.to_string(),
            name2: name2.to_string(),
            score: result.score,
            match_type: result.match_type,
            metrics: AuditMetrics {
                levenshtein: result.levenshtein_score,
                jaro_winkler: result.jaro_winkler_score,
                phonetic: result.phonetic_score,
                double_metaphone: result.double_metaphone_score,
                cosine: result.cosine_score,
                additional_attributes: result.additional_attributes_score,
            },
            processing_time_ms: result.processing_time_ms,
            attributes: attributes.cloned().unwrap_or_default(),
        }
    }
}

/// Destination for audit records. Implementations must not block the
/// caller for long and must swallow their own failures.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: AuditRecord);
}

/// Append-only JSON-lines audit file written by a background thread.
pub struct JsonlAuditLog {
    path: PathBuf,
    sender: Mutex<Option<mpsc::Sender<AuditRecord>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl JsonlAuditLog {
    /// Open (or create) `path` for appending and start the writer thread.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let (sender, receiver) = mpsc::channel::<AuditRecord>();

        let log_path = path.clone();
        let worker = std::thread::Builder::new()
            .name("namematch-audit".to_string())
            .spawn(move || {
                let mut writer = BufWriter::new(file);
                for record in receiver {
                    let line = match serde_json::to_string(&record) {
                        Ok(line) => line,
                        Err(e) => {
                            warn!(error = %e, "failed to serialize audit record");
                            continue;
                        }
                    };
                    if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
                        warn!(path = %log_path.display(), error = %e, "failed to write audit record");
                    }
                }
                debug!(path = %log_path.display(), "audit writer stopped");
            })?;

        Ok(Self {
            path,
            sender: Mutex::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stop accepting records and wait for pending writes.
    pub fn close(&self) {
        self.sender.lock().take();
        if let Some(worker) = self.worker.lock().take() {
            if worker.join().is_err() {
                warn!(path = %self.path.display(), "audit writer panicked");
            }
        }
    }
}

impl AuditSink for JsonlAuditLog {
    fn record(&self, record: AuditRecord) {
        let sender = self.sender.lock();
        match sender.as_ref() {
            Some(sender) => {
                if sender.send(record).is_err() {
                    warn!(path = %self.path.display(), "audit writer is gone, record dropped");
                }
            }
            None => debug!("audit log closed, record dropped"),
        }
    }
}

impl Drop for JsonlAuditLog {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn temp_log(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "namematch-audit-{}-{}.jsonl",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        path
    }

    fn possible(score: u8) -> MatchResult {
        MatchResult {
            score,
            match_type: MatchType::PossibleMatch,
            ..MatchResult::no_match()
        }
    }

    #[test]
    fn test_record_shape() {
        let mut attrs = Attributes::new();
        attrs.insert("country".to_string(), true);
        let record = AuditRecord::new("a", "b", &possible(75), Some(&attrs));
        assert_eq!(record.score, 75);
        assert_eq!(record.match_type, MatchType::PossibleMatch);
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["match_type"], "possible_match");
        assert_eq!(json["attributes"]["country"], true);
    }

    #[test]
    fn test_jsonl_log_appends_lines() {
        let path = temp_log("append");
        let log = JsonlAuditLog::open(&path).unwrap();
        log.record(AuditRecord::new("Иванов И.", "Иванов Иван", &possible(75), None));
        log.record(AuditRecord::new("a", "b", &possible(80), None));
        log.close();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: AuditRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.name1, "Иванов И.");
        assert_eq!(first.score, 75);

        // closed log swallows records
        log.record(AuditRecord::new("c", "d", &possible(70), None));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_open_failure_is_an_error() {
        let dir = std::env::temp_dir();
        assert!(JsonlAuditLog::open(&dir).is_err());
    }
}
