//! Reflection record and its derived state
//!
//! The record holds exactly what the user entered. Everything else (band,
//! label, definition, question, sentence) is recomputed from it by the pure
//! functions in `derive` and `sentence`.

mod derive;
mod sentence;

use crate::taxonomy::Emotion;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use derive::{DerivedState, derive_state, label_index};
pub use sentence::{UNSET_SENTENCE, WITHHELD_ACTION_SENTENCE, compose_sentence};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntensityError {
    #[error("Intensity {0} is out of range (0-100)")]
    OutOfRange(i64),
    #[error("Intensity '{0}' is not a whole number")]
    NotANumber(String),
}

/// Slider value, always within 0..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: Intensity = Intensity(0);
    pub const MAX: Intensity = Intensity(100);

    pub fn new(value: u8) -> Result<Self, IntensityError> {
        Self::try_from(i64::from(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity(50)
    }
}

impl TryFrom<i64> for Intensity {
    type Error = IntensityError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (0..=100).contains(&value) {
            Ok(Intensity(value as u8))
        } else {
            Err(IntensityError::OutOfRange(value))
        }
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

impl FromStr for Intensity {
    type Err = IntensityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| IntensityError::NotANumber(trimmed.to_string()))?;
        Self::try_from(value)
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-entered form values for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionRecord {
    pub emotion: Option<Emotion>,
    pub intensity: Intensity,
    pub stimulus: String,
    pub question_response: String,
    pub action: String,
    pub is_action_valid: bool,
}

impl Default for ReflectionRecord {
    fn default() -> Self {
        Self {
            emotion: None,
            intensity: Intensity::default(),
            stimulus: String::new(),
            question_response: String::new(),
            action: String::new(),
            is_action_valid: true,
        }
    }
}

impl ReflectionRecord {
    pub fn derived(&self) -> Option<DerivedState> {
        derive_state(self.emotion, self.intensity)
    }
}
