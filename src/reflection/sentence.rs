//! Reflection sentence composition

use super::ReflectionRecord;

pub const UNSET_SENTENCE: &str = "I am ...";
pub const WITHHELD_ACTION_SENTENCE: &str =
    "I've decided not to act because the stimulus is invalid.";

/// Build the reflection sentence. Clause order is fixed and empty fields add nothing.
pub fn compose_sentence(record: &ReflectionRecord) -> String {
    let (Some(emotion), Some(derived)) = (record.emotion, record.derived()) else {
        return UNSET_SENTENCE.to_string();
    };

    let mut sentence = format!(
        "I am feeling {} and {}",
        emotion.as_str().to_lowercase(),
        derived.label.to_lowercase()
    );

    if !record.stimulus.is_empty() {
        sentence.push_str(&format!(" because {}. ", record.stimulus));
    }

    if !record.question_response.is_empty() {
        sentence.push_str(&format!(
            "Upon reflection, I realize that {}. ",
            record.question_response
        ));
    }

    if !record.action.is_empty() {
        if record.is_action_valid {
            sentence.push_str(&format!("I plan to take action by {}.", record.action));
        } else {
            sentence.push_str(WITHHELD_ACTION_SENTENCE);
        }
    }

    sentence
}
