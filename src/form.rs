//! Reflection form controller
//!
//! Owns the single record of a session. Every event mutates the record and
//! then recomputes the derived state and the reflection sentence before the
//! next event is accepted.

use crate::protocol::Submission;
use crate::reflection::{DerivedState, Intensity, ReflectionRecord, compose_sentence};
use crate::sink::{SinkError, SubmissionSink};
use crate::taxonomy::Emotion;

/// One user edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SelectEmotion(Option<Emotion>),
    SetIntensity(Intensity),
    SetStimulus(String),
    SetQuestionResponse(String),
    SetAction(String),
    SetActionValid(bool),
}

/// Initial values for a fresh form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub intensity: Intensity,
    pub is_action_valid: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            intensity: Intensity::default(),
            is_action_valid: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReflectionForm {
    defaults: FormDefaults,
    record: ReflectionRecord,
    derived: Option<DerivedState>,
    sentence: String,
}

impl ReflectionForm {
    pub fn new(defaults: FormDefaults) -> Self {
        let record = ReflectionRecord {
            intensity: defaults.intensity,
            is_action_valid: defaults.is_action_valid,
            ..ReflectionRecord::default()
        };
        Self::from_record(defaults, record)
    }

    pub fn from_record(defaults: FormDefaults, record: ReflectionRecord) -> Self {
        let mut form = Self {
            defaults,
            record,
            derived: None,
            sentence: String::new(),
        };
        form.recompute();
        form
    }

    /// Apply an edit and recompute everything derived from the record
    pub fn apply(&mut self, event: FormEvent) {
        tracing::debug!(?event, "Applying form event");

        match event {
            FormEvent::SelectEmotion(emotion) => self.record.emotion = emotion,
            FormEvent::SetIntensity(intensity) => self.record.intensity = intensity,
            FormEvent::SetStimulus(text) => self.record.stimulus = text,
            FormEvent::SetQuestionResponse(text) => self.record.question_response = text,
            FormEvent::SetAction(text) => self.record.action = text,
            FormEvent::SetActionValid(valid) => self.record.is_action_valid = valid,
        }

        self.recompute();
    }

    fn recompute(&mut self) {
        self.derived = self.record.derived();
        self.sentence = compose_sentence(&self.record);
    }

    /// Clear the form back to its initial values
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults);
    }

    /// Emit the current record to `sink`. The form keeps its values.
    pub fn submit<S: SubmissionSink + ?Sized>(
        &self,
        sink: &mut S,
    ) -> Result<Submission, SinkError> {
        let submission = Submission::new(&self.record);
        sink.submit(&submission)?;
        tracing::debug!(
            id = %submission.id,
            emotion = %submission.record.emotion,
            description = %submission.record.description,
            "Submitted reflection"
        );
        Ok(submission)
    }

    pub fn record(&self) -> &ReflectionRecord {
        &self.record
    }

    pub fn derived(&self) -> Option<&DerivedState> {
        self.derived.as_ref()
    }

    pub fn sentence(&self) -> &str {
        &self.sentence
    }

    /// The reflective question, present once an emotion is selected
    pub fn question(&self) -> Option<&'static str> {
        self.derived.map(|derived| derived.question)
    }
}

impl Default for ReflectionForm {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}
