//! NDJSON codec for submissions

use crate::protocol::Submission;
use crate::sink::SinkError;

/// Encode a submission into NDJSON format (JSON + newline)
pub fn encode_submission(submission: &Submission) -> Result<String, SinkError> {
    let mut json = serde_json::to_string(submission)?;
    json.push('\n');
    Ok(json)
}

/// Decode a line of JSON into a Submission
#[cfg(test)]
pub fn decode_submission(line: &str) -> Result<Submission, SinkError> {
    let submission: Submission = serde_json::from_str(line.trim())?;
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::ReflectionRecord;

    #[test]
    fn test_encode_submission() {
        let submission = Submission::new(&ReflectionRecord::default());
        let encoded = encode_submission(&submission).unwrap();
        assert!(encoded.ends_with('\n'));
        assert_eq!(encoded.matches('\n').count(), 1);
        assert!(encoded.contains("\"isActionValid\":true"));
        assert!(encoded.contains("\"reflection\":\"I am ...\""));
    }

    #[test]
    fn test_decode_rejects_out_of_range_intensity() {
        // Fits in a u8 but is past the slider maximum
        let line = r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","submitted_at":"2024-01-01T00:00:00Z","record":{"emotion":"","intensity":150,"description":"","stimulus":"","questionResponse":"","action":"","isActionValid":true},"reflection":"I am ..."}"#;
        assert!(matches!(
            decode_submission(line),
            Err(SinkError::Serialization(_))
        ));
    }

    #[test]
    fn test_decode_submission_line() {
        let line = r#"{"id":"67e55044-10b1-426f-9247-bb680e5fe0c8","submitted_at":"2024-01-01T00:00:00Z","record":{"emotion":"Anger","intensity":50,"description":"Exasperated","stimulus":"a delay","questionResponse":"","action":"","isActionValid":true},"reflection":"I am feeling anger and exasperated because a delay. "}"#;
        let decoded = decode_submission(line).unwrap();
        assert_eq!(decoded.record.emotion, "Anger");
        assert_eq!(decoded.record.intensity.value(), 50);
        assert_eq!(decoded.id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }
}
