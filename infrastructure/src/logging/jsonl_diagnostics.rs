//! JSONL file writer for rejected candidates.
//!
//! Each [`Rejection`] becomes a single JSON line with a `type` field and
//! `timestamp`, appended to the file via a buffered writer.

use quizcheck_application::ports::diagnostics::DiagnosticSink;
use quizcheck_domain::{Rejection, Subject};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

const RECORD_TYPE: &str = "candidate_rejected";

/// Diagnostic sink that writes one JSON object per dropped candidate.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlDiagnosticSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlDiagnosticSink {
    /// Open the sink in append mode.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create diagnostics directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open diagnostics file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the diagnostics file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DiagnosticSink for JsonlDiagnosticSink {
    fn record(&self, subject: &Subject, rejection: &Rejection) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = serde_json::json!({
            "type": RECORD_TYPE,
            "timestamp": timestamp,
            "subject": subject.name(),
            "position": rejection.position,
            "reason": rejection.reason.code(),
            "stage": rejection.stage(),
            "message": rejection.reason.to_string(),
            "candidate": rejection.candidate,
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlDiagnosticSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizcheck_domain::{MatchError, QuestionCandidate, ShapeError};

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    fn candidate() -> QuestionCandidate {
        QuestionCandidate::new(
            "What is 3/8 as a decimal?",
            vec!["0.25".into(), "0.375".into(), "0.5".into(), "0.625".into()],
        )
    }

    #[test]
    fn test_writes_one_record_per_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rejections.jsonl");
        let sink = JsonlDiagnosticSink::new(&path).unwrap();
        let subject = Subject::math();

        sink.record(
            &subject,
            &Rejection::new(
                2,
                MatchError {
                    final_answer: 0.4,
                    unparseable: 0,
                },
                candidate(),
            ),
        );
        sink.record(
            &subject,
            &Rejection::new(
                4,
                ShapeError::WrongChoiceCount {
                    expected: 4,
                    actual: 3,
                },
                candidate(),
            ),
        );
        drop(sink);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record["type"], "candidate_rejected");
            assert_eq!(record["subject"], "math");
            assert!(record.get("timestamp").is_some());
        }

        assert_eq!(records[0]["position"], 2);
        assert_eq!(records[0]["reason"], "no_match");
        assert_eq!(records[0]["stage"], "normalized");
        assert_eq!(records[0]["candidate"]["choices"][1], "0.375");

        assert_eq!(records[1]["reason"], "shape");
        assert_eq!(records[1]["stage"], "pending");
    }

    #[test]
    fn test_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rejections.jsonl");

        for position in 0..2 {
            let sink = JsonlDiagnosticSink::new(&path).unwrap();
            sink.record(
                &Subject::from("physics"),
                &Rejection::new(
                    position,
                    quizcheck_domain::RejectionReason::Upstream("timeout".into()),
                    candidate(),
                ),
            );
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["position"], 1);
        assert_eq!(records[1]["reason"], "upstream");
    }
}
