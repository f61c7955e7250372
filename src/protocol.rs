use crate::reflection::{Intensity, ReflectionRecord, compose_sentence};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat record handed to a submission sink
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Selected category name, empty when none is selected
    pub emotion: String,
    pub intensity: Intensity,
    /// Derived state label, empty when no emotion is selected
    pub description: String,
    pub stimulus: String,
    pub question_response: String,
    pub action: String,
    pub is_action_valid: bool,
}

impl SubmissionPayload {
    pub fn from_record(record: &ReflectionRecord) -> Self {
        let description = record
            .derived()
            .map(|derived| derived.label.to_string())
            .unwrap_or_default();

        Self {
            emotion: record
                .emotion
                .map(|emotion| emotion.as_str().to_string())
                .unwrap_or_default(),
            intensity: record.intensity,
            description,
            stimulus: record.stimulus.clone(),
            question_response: record.question_response.clone(),
            action: record.action.clone(),
            is_action_valid: record.is_action_valid,
        }
    }
}

/// One emitted submission as written by line-oriented sinks
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: Timestamp,
    pub record: SubmissionPayload,
    pub reflection: String,
}

impl Submission {
    /// Create a new submission from the current form values
    pub fn new(record: &ReflectionRecord) -> Self {
        Submission {
            id: Uuid::new_v4(),
            submitted_at: Timestamp::now(),
            record: SubmissionPayload::from_record(record),
            reflection: compose_sentence(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflection::Intensity;
    use crate::taxonomy::Emotion;

    fn filled_record() -> ReflectionRecord {
        ReflectionRecord {
            emotion: Some(Emotion::Anger),
            intensity: Intensity::new(50).unwrap(),
            stimulus: "a delay".to_string(),
            question_response: "I value control".to_string(),
            action: "taking a walk".to_string(),
            is_action_valid: true,
        }
    }

    #[test]
    fn test_payload_has_flat_shape() {
        let payload = SubmissionPayload::from_record(&filled_record());
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "emotion": "Anger",
                "intensity": 50,
                "description": "Exasperated",
                "stimulus": "a delay",
                "questionResponse": "I value control",
                "action": "taking a walk",
                "isActionValid": true,
            })
        );
    }

    #[test]
    fn test_payload_rejects_intensity_past_slider_max() {
        let mut value = serde_json::to_value(SubmissionPayload::from_record(&filled_record())).unwrap();
        value["intensity"] = serde_json::json!(150);
        assert!(serde_json::from_value::<SubmissionPayload>(value.clone()).is_err());

        value["intensity"] = serde_json::json!(100);
        let payload: SubmissionPayload = serde_json::from_value(value).unwrap();
        assert_eq!(payload.intensity.value(), 100);
    }

    #[test]
    fn test_payload_without_emotion() {
        let payload = SubmissionPayload::from_record(&ReflectionRecord::default());
        assert_eq!(payload.emotion, "");
        assert_eq!(payload.description, "");
        assert_eq!(payload.intensity.value(), 50);
        assert!(payload.is_action_valid);
    }

    #[test]
    fn test_submission_carries_reflection() {
        let submission = Submission::new(&filled_record());
        assert!(submission.reflection.starts_with("I am feeling anger and exasperated"));
        assert_eq!(submission.record.description, "Exasperated");
    }

    #[test]
    fn test_submissions_get_fresh_ids() {
        let record = filled_record();
        assert_ne!(Submission::new(&record).id, Submission::new(&record).id);
    }
}
