//! Band and label derivation

use super::Intensity;
use crate::taxonomy::{self, Band, Emotion};
use serde::Serialize;

/// Width of one label step inside a band
const LABEL_STEP: u8 = 11;
/// Period of the label cycle
const LABEL_CYCLE: u8 = 33;

/// Everything the form shows about the selected emotion at the current intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DerivedState {
    pub band: Band,
    pub label: &'static str,
    pub definition: &'static str,
    pub question: &'static str,
}

/// Map an offset within the label cycle to a state index, clamped to the last label
pub fn label_index(offset: u8) -> usize {
    usize::from(offset / LABEL_STEP).min(2)
}

/// Derive band, label, definition and question. `None` when no emotion is selected.
pub fn derive_state(emotion: Option<Emotion>, intensity: Intensity) -> Option<DerivedState> {
    let emotion = emotion?;
    let value = intensity.value();
    let band = Band::for_intensity(value);
    let entry = taxonomy::lookup(emotion, band);
    let index = label_index(value % LABEL_CYCLE);

    Some(DerivedState {
        band,
        label: entry.states[index],
        definition: entry.definition,
        question: entry.question,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intensity(value: u8) -> Intensity {
        Intensity::new(value).unwrap()
    }

    #[test]
    fn test_unset_emotion_yields_nothing() {
        assert_eq!(derive_state(None, intensity(80)), None);
    }

    #[test]
    fn test_label_always_from_computed_band() {
        for emotion in Emotion::ALL {
            for value in 0..=100u8 {
                let derived = derive_state(Some(emotion), intensity(value)).unwrap();
                let entry = taxonomy::lookup(emotion, Band::for_intensity(value));
                assert_eq!(derived.band, Band::for_intensity(value));
                assert!(
                    entry.states.contains(&derived.label),
                    "{emotion} at {value} produced {}",
                    derived.label
                );
            }
        }
    }

    #[test]
    fn test_band_boundaries() {
        let band = |value| derive_state(Some(Emotion::Anger), intensity(value)).unwrap().band;
        assert_eq!(band(33), Band::Soft);
        assert_eq!(band(34), Band::MoodState);
        assert_eq!(band(66), Band::MoodState);
        assert_eq!(band(67), Band::Intense);
    }

    #[test]
    fn test_band_top_wraps_to_first_label() {
        // 33 and 66 sit at offset 0 of the cycle
        let label = |value| derive_state(Some(Emotion::Anger), intensity(value)).unwrap().label;
        assert_eq!(label(32), "Impatient");
        assert_eq!(label(33), "Annoyed");
        assert_eq!(label(66), "Angry");
        assert_eq!(label(99), "Furious");
        assert_eq!(label(100), "Furious");
    }

    #[test]
    fn test_label_index_no_clamp_needed_at_32() {
        assert_eq!(label_index(32), 2);
    }

    #[test]
    fn test_label_index_clamps_past_last_label() {
        assert_eq!(label_index(33), 2);
        assert_eq!(label_index(44), 2);
        assert_eq!(label_index(u8::MAX), 2);
    }

    #[test]
    fn test_mid_mood_state() {
        let derived = derive_state(Some(Emotion::Sadness), intensity(50)).unwrap();
        assert_eq!(derived.band, Band::MoodState);
        assert_eq!(derived.label, "Gloomy");
        assert_eq!(derived.question, "What must be released?");
    }
}
