//! Interactive line-driven form session
//!
//! Each input line is one event. The form is updated and the reflection
//! sentence printed before the next line is read.

use crate::form::{FormEvent, ReflectionForm};
use crate::reflection::{Intensity, IntensityError};
use crate::render::render_form;
use crate::sink::SubmissionSink;
use crate::taxonomy::{Emotion, TaxonomyError};
use std::str::FromStr;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const HELP: &str = "\
Commands:
  emotion <anger|sadness|happiness|fear|none>  select an emotion
  intensity <0-100>                            set the intensity slider
  stimulus [text]                              what happened (empty clears)
  response [text]                              answer the reflective question
  action [text]                                planned action
  valid <yes|no>                               whether the action is valid
  show                                         print the whole form
  submit                                       log the current record
  reset                                        clear the form
  help                                         show this help
  quit                                         end the session";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for a list of commands")]
    Unknown(String),
    #[error("'{command}' needs a value")]
    MissingArgument { command: &'static str },
    #[error("Expected yes or no, got '{0}'")]
    NotABool(String),
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
    #[error(transparent)]
    Intensity(#[from] IntensityError),
}

/// A parsed session line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Edit(FormEvent),
    Show,
    Submit,
    Reset,
    Help,
    Quit,
}

fn parse_bool(value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "on" => Ok(true),
        "no" | "n" | "false" | "off" => Ok(false),
        _ => Err(CommandError::NotABool(value.to_string())),
    }
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // Free text keeps everything after the single separator after the keyword
        let line = line.trim_start();
        let (keyword, text) = match line.split_once(char::is_whitespace) {
            Some((keyword, text)) => (keyword, text),
            None => (line, ""),
        };
        let rest = text.trim();

        let required = |command: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument { command })
            } else {
                Ok(rest)
            }
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "emotion" => {
                let value = required("emotion")?;
                let emotion = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse::<Emotion>()?)
                };
                SessionCommand::Edit(FormEvent::SelectEmotion(emotion))
            }
            "intensity" => {
                let intensity = required("intensity")?.parse::<Intensity>()?;
                SessionCommand::Edit(FormEvent::SetIntensity(intensity))
            }
            "stimulus" => SessionCommand::Edit(FormEvent::SetStimulus(text.to_string())),
            "response" => SessionCommand::Edit(FormEvent::SetQuestionResponse(text.to_string())),
            "action" => SessionCommand::Edit(FormEvent::SetAction(text.to_string())),
            "valid" => SessionCommand::Edit(FormEvent::SetActionValid(parse_bool(required(
                "valid",
            )?)?)),
            "show" => SessionCommand::Show,
            "submit" => SessionCommand::Submit,
            "reset" => SessionCommand::Reset,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        Ok(command)
    }
}

/// Run a session until `quit` or end of input. Returns the number of submissions.
pub async fn run_session<R, W, S>(
    form: &mut ReflectionForm,
    sink: &mut S,
    reader: R,
    mut out: W,
) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    S: SubmissionSink + ?Sized,
{
    let mut lines = reader.lines();
    let mut submitted = 0;

    out.write_all(format!("{}\n\n", render_form(form)).as_bytes())
        .await?;
    out.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<SessionCommand>() {
            Ok(SessionCommand::Edit(event)) => {
                form.apply(event);
                form.sentence().to_string()
            }
            Ok(SessionCommand::Show) => render_form(form),
            Ok(SessionCommand::Submit) => match form.submit(sink) {
                Ok(submission) => {
                    submitted += 1;
                    format!("Logged {}", submission.id)
                }
                Err(e) => {
                    tracing::error!("Failed to submit reflection: {}", e);
                    format!("Error: {}", e)
                }
            },
            Ok(SessionCommand::Reset) => {
                form.reset();
                form.sentence().to_string()
            }
            Ok(SessionCommand::Help) => HELP.to_string(),
            Ok(SessionCommand::Quit) => break,
            Err(e) => {
                tracing::warn!(line = %line, "Rejected input: {}", e);
                format!("Error: {}", e)
            }
        };

        out.write_all(format!("{}\n", reply).as_bytes()).await?;
        out.flush().await?;
    }

    tracing::debug!(submitted, "Session ended");
    Ok(submitted)
}
