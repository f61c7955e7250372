//! Submission sinks
//!
//! Submitting the form hands the record to a sink and forgets about it. No
//! response is read back and nothing is retried.
//!
//! - `codec`: NDJSON encoding for submissions
//! - `LogSink`: logs the payload through `tracing`
//! - `NdjsonSink`: writes one JSON line per submission to any writer
//! - `MemorySink`: keeps submissions in memory

use crate::protocol::Submission;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

mod codec;

pub use codec::encode_submission;
#[cfg(test)]
pub use codec::decode_submission;

/// Sink error types
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Sink I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Receives finished records from the form
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission) -> Result<(), SinkError>;
}

/// Logs each submission at info level
#[derive(Debug, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &Submission) -> Result<(), SinkError> {
        let payload = serde_json::to_string(&submission.record)?;
        tracing::info!(
            id = %submission.id,
            submitted_at = %submission.submitted_at,
            payload = %payload,
            "Logged"
        );
        Ok(())
    }
}

/// Writes submissions as NDJSON lines
pub struct NdjsonSink<W: Write> {
    writer: W,
}

impl<W: Write> NdjsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl NdjsonSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl NdjsonSink<std::fs::File> {
    /// Open `path` for appending, creating it and its parent directory if needed
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> SubmissionSink for NdjsonSink<W> {
    fn submit(&mut self, submission: &Submission) -> Result<(), SinkError> {
        let line = encode_submission(submission)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        tracing::debug!(id = %submission.id, "Wrote submission line");
        Ok(())
    }
}

/// Collects submissions in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub submissions: Vec<Submission>,
}

impl SubmissionSink for MemorySink {
    fn submit(&mut self, submission: &Submission) -> Result<(), SinkError> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn submit(&mut self, submission: &Submission) -> Result<(), SinkError> {
        (**self).submit(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::{Intensity, ReflectionRecord};
    use crate::taxonomy::Emotion;

    fn submission() -> Submission {
        Submission::new(&ReflectionRecord {
            emotion: Some(Emotion::Fear),
            intensity: Intensity::new(40).unwrap(),
            stimulus: "a loud noise".to_string(),
            ..ReflectionRecord::default()
        })
    }

    #[test]
    fn test_ndjson_sink_writes_one_line_per_submission() {
        let mut sink = NdjsonSink::new(Vec::new());
        sink.submit(&submission()).unwrap();
        sink.submit(&submission()).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let decoded = decode_submission(line).unwrap();
            assert_eq!(decoded.record.emotion, "Fear");
            assert_eq!(decoded.record.description, "Anxious");
        }
    }

    #[test]
    fn test_ndjson_sink_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("log.ndjson");

        NdjsonSink::append(&path).unwrap().submit(&submission()).unwrap();
        NdjsonSink::append(&path).unwrap().submit(&submission()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn test_memory_sink_collects() {
        let mut sink = MemorySink::default();
        let first = submission();
        sink.submit(&first).unwrap();
        assert_eq!(sink.submissions, vec![first]);
    }

    #[test]
    fn test_log_sink_accepts_submission() {
        let mut sink = LogSink;
        assert!(sink.submit(&submission()).is_ok());
    }

    #[test]
    fn test_boxed_sink_delegates() {
        let mut sink: Box<dyn SubmissionSink> = Box::new(NdjsonSink::new(Vec::new()));
        assert!(sink.submit(&submission()).is_ok());
    }
}
