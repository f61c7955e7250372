//! Text rendering of the form and the taxonomy

use crate::form::ReflectionForm;
use crate::taxonomy::{self, Emotion};
use std::fmt;

const SELECT_PLACEHOLDER: &str = "Select an emotion";
const SLIDER_WIDTH: usize = 20;

fn slider(value: u8) -> String {
    let filled = usize::from(value) * SLIDER_WIDTH / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(SLIDER_WIDTH - filled))
}

fn field(text: &str) -> &str {
    if text.is_empty() { "(empty)" } else { text }
}

/// The whole form: sentence, inputs, current state panel and submit hint
pub struct FormView<'a>(pub &'a ReflectionForm);

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let form = self.0;
        let record = form.record();

        writeln!(f, "Emotion Reflection Process")?;
        writeln!(f)?;
        writeln!(f, "  {}", form.sentence())?;
        writeln!(f)?;

        let options = Emotion::ALL
            .iter()
            .map(|emotion| {
                if record.emotion == Some(*emotion) {
                    format!("[{}]", emotion)
                } else {
                    emotion.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");
        let selected = record.emotion.map(|e| e.as_str()).unwrap_or(SELECT_PLACEHOLDER);
        writeln!(f, "Emotion: {} ({})", selected, options)?;

        let value = record.intensity.value();
        writeln!(f, "Intensity: {} {}", slider(value), value)?;
        writeln!(f, "Stimulus (What happened?): {}", field(&record.stimulus))?;

        if let Some(question) = form.question() {
            writeln!(f, "{}: {}", question, field(&record.question_response))?;
        }

        writeln!(f, "Planned Action: {}", field(&record.action))?;
        let checkbox = if record.is_action_valid { "[x]" } else { "[ ]" };
        writeln!(f, "{} This action is valid based on the stimulus", checkbox)?;

        if let Some(derived) = form.derived() {
            writeln!(f)?;
            writeln!(f, "Current Emotional State: {} ({})", derived.label, derived.band)?;
            writeln!(f, "Definition: {}", derived.definition)?;
        }

        writeln!(f)?;
        write!(f, "Type 'submit' to log this emotion.")
    }
}

/// The taxonomy table, optionally restricted to one category
pub struct TaxonomyView(pub Option<Emotion>);

impl fmt::Display for TaxonomyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emotions: Vec<Emotion> = match self.0 {
            Some(emotion) => vec![emotion],
            None => Emotion::ALL.to_vec(),
        };

        for (i, emotion) in emotions.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", emotion)?;
            writeln!(f, "{}", "-".repeat(60))?;
            for (band, entry) in taxonomy::bands(emotion) {
                writeln!(f, "  {:<12} {}", band.as_str(), entry.states.join(", "))?;
                writeln!(f, "  {:<12} {}", "", entry.definition)?;
                writeln!(f, "  {:<12} {}", "", entry.question)?;
            }
        }

        Ok(())
    }
}

pub fn render_form(form: &ReflectionForm) -> String {
    FormView(form).to_string()
}

pub fn render_taxonomy(only: Option<Emotion>) -> String {
    TaxonomyView(only).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormEvent;
    use crate::reflection::Intensity;

    #[test]
    fn test_slider() {
        assert_eq!(slider(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(slider(100), format!("[{}]", "#".repeat(20)));
        assert_eq!(slider(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
    }

    #[test]
    fn test_unselected_form_hides_question_and_state() {
        let form = ReflectionForm::default();
        let view = render_form(&form);

        assert!(view.contains("I am ..."));
        assert!(view.contains("Emotion: Select an emotion (Anger | Sadness | Happiness | Fear)"));
        assert!(!view.contains("What must be"));
        assert!(!view.contains("Current Emotional State"));
        assert!(view.contains("[x] This action is valid"));
    }

    #[test]
    fn test_selected_form_shows_question_and_state() {
        let mut form = ReflectionForm::default();
        form.apply(FormEvent::SelectEmotion(Some(Emotion::Sadness)));
        form.apply(FormEvent::SetIntensity(Intensity::new(10).unwrap()));
        form.apply(FormEvent::SetActionValid(false));
        let view = render_form(&form);

        assert!(view.contains("Emotion: Sadness (Anger | [Sadness] | Happiness | Fear)"));
        assert!(view.contains("What must be released?: (empty)"));
        assert!(view.contains("Current Emotional State: Disappointed (Soft)"));
        assert!(view.contains("Definition: A gentle feeling of letdown"));
        assert!(view.contains("[ ] This action is valid"));
    }

    #[test]
    fn test_form_view_writes_through_formatter() {
        let form = ReflectionForm::default();
        let view = format!("{}", FormView(&form));
        assert_eq!(view, render_form(&form));
        assert!(view.ends_with("Type 'submit' to log this emotion."));
    }

    #[test]
    fn test_taxonomy_single_emotion() {
        let view = render_taxonomy(Some(Emotion::Fear));
        assert!(view.starts_with("Fear\n"));
        assert!(view.contains("Terrified, Panicked, Petrified"));
        assert!(!view.contains("Anger"));
    }

    #[test]
    fn test_taxonomy_all_emotions() {
        let view = render_taxonomy(None);
        for emotion in Emotion::ALL {
            assert!(view.contains(emotion.as_str()));
        }
        assert_eq!(view.matches("Mood-State").count(), 4);
    }
}
