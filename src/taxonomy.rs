//! Static emotion taxonomy
//!
//! Every emotion category owns three intensity bands. Each band carries three
//! state labels ordered from mildest to strongest, a definition, and the
//! reflective question shown once the emotion is selected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("Unknown emotion '{0}'. Expected one of: anger, sadness, happiness, fear")]
    UnknownEmotion(String),
    #[error("Unknown intensity band '{0}'. Expected one of: soft, mood-state, intense")]
    UnknownBand(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Emotion {
    Anger,
    Sadness,
    Happiness,
    Fear,
}

impl Emotion {
    /// Categories in selector order
    pub const ALL: [Emotion; 4] = [
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Happiness,
        Emotion::Fear,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anger => "Anger",
            Emotion::Sadness => "Sadness",
            Emotion::Happiness => "Happiness",
            Emotion::Fear => "Fear",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TaxonomyError::UnknownEmotion(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Band {
    Soft,
    #[serde(rename = "Mood-State")]
    MoodState,
    Intense,
}

impl Band {
    pub const ALL: [Band; 3] = [Band::Soft, Band::MoodState, Band::Intense];

    /// Select the band for an intensity. The top value of each band (33, 66)
    /// stays in the lower band.
    pub fn for_intensity(intensity: u8) -> Self {
        if intensity <= 33 {
            Band::Soft
        } else if intensity <= 66 {
            Band::MoodState
        } else {
            Band::Intense
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Soft => "Soft",
            Band::MoodState => "Mood-State",
            Band::Intense => "Intense",
        }
    }

    fn index(&self) -> usize {
        match self {
            Band::Soft => 0,
            Band::MoodState => 1,
            Band::Intense => 2,
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Band {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Band::ALL
            .into_iter()
            .find(|band| {
                band.as_str().eq_ignore_ascii_case(trimmed)
                    || (*band == Band::MoodState && trimmed.eq_ignore_ascii_case("moodstate"))
            })
            .ok_or_else(|| TaxonomyError::UnknownBand(trimmed.to_string()))
    }
}

/// One (emotion, band) cell of the taxonomy
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BandEntry {
    pub states: [&'static str; 3],
    pub definition: &'static str,
    pub question: &'static str,
}

const ANGER_QUESTION: &str = "What must be protected? What must be restored?";
const SADNESS_QUESTION: &str = "What must be released?";

// Indexed by Emotion::ALL order, then Band::ALL order
static TAXONOMY: [[BandEntry; 3]; 4] = [
    [
        BandEntry {
            states: ["Annoyed", "Frustrated", "Impatient"],
            definition: "Mild irritation or dissatisfaction that doesn't significantly impact your overall mood.",
            question: ANGER_QUESTION,
        },
        BandEntry {
            states: ["Angry", "Exasperated", "Irritated"],
            definition: "A noticeable feeling of displeasure or hostility, affecting your mood and interactions.",
            question: ANGER_QUESTION,
        },
        BandEntry {
            states: ["Furious", "Outraged", "Livid"],
            definition: "An overwhelming feeling of rage that significantly impacts your thoughts and actions.",
            question: ANGER_QUESTION,
        },
    ],
    [
        BandEntry {
            states: ["Disappointed", "Low", "Wistful"],
            definition: "A gentle feeling of letdown or melancholy, not severely impacting your daily activities.",
            question: SADNESS_QUESTION,
        },
        BandEntry {
            states: ["Sad", "Gloomy", "Dejected"],
            definition: "A persistent feeling of unhappiness that noticeably affects your mood and outlook.",
            question: SADNESS_QUESTION,
        },
        BandEntry {
            states: ["Grief-stricken", "Heartbroken", "Despairing"],
            definition: "An overwhelming sense of loss or sorrow that significantly impacts your ability to function normally.",
            question: SADNESS_QUESTION,
        },
    ],
    [
        BandEntry {
            states: ["Content", "Pleased", "Satisfied"],
            definition: "A gentle sense of well-being and satisfaction with your current situation.",
            question: "Have I showed gratitude for this moment?",
        },
        BandEntry {
            states: ["Happy", "Cheerful", "Joyful"],
            definition: "A noticeable feeling of pleasure and positivity that brightens your overall mood.",
            question: "Have I thanked myself or those that put me in this position?",
        },
        BandEntry {
            states: ["Elated", "Ecstatic", "Overjoyed"],
            definition: "An overwhelming sense of joy and excitement that significantly boosts your energy and outlook.",
            question: "Have you taken time to absorb this moment to the fullest?",
        },
    ],
    [
        BandEntry {
            states: ["Cautious", "Nervous", "Uneasy"],
            definition: "A mild sense of apprehension or concern about potential risks or uncertainties.",
            question: "What action should be taken to get out of this danger?",
        },
        BandEntry {
            states: ["Anxious", "Scared", "Frightened"],
            definition: "A noticeable feeling of worry or alarm that affects your thoughts and behavior.",
            question: "What triggered this feeling? What really needs to get done?",
        },
        BandEntry {
            states: ["Terrified", "Panicked", "Petrified"],
            definition: "An overwhelming sense of fear that significantly impacts your ability to think or act rationally.",
            question: "What has been betrayed? What must be healed and restored?",
        },
    ],
];

fn emotion_index(emotion: Emotion) -> usize {
    match emotion {
        Emotion::Anger => 0,
        Emotion::Sadness => 1,
        Emotion::Happiness => 2,
        Emotion::Fear => 3,
    }
}

/// Look up the table entry for a category and band
pub fn lookup(emotion: Emotion, band: Band) -> &'static BandEntry {
    &TAXONOMY[emotion_index(emotion)][band.index()]
}

/// Look up by category name, failing for anything outside the four categories
pub fn lookup_by_name(emotion: &str, band: Band) -> Result<&'static BandEntry, TaxonomyError> {
    let emotion = emotion.parse::<Emotion>()?;
    Ok(lookup(emotion, band))
}

/// All bands of a category in ascending intensity order
pub fn bands(emotion: Emotion) -> impl Iterator<Item = (Band, &'static BandEntry)> {
    Band::ALL
        .into_iter()
        .map(move |band| (band, lookup(emotion, band)))
}
