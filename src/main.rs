use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emotion_logger::config::{Config, SinkKind};
use emotion_logger::form::{FormEvent, ReflectionForm};
use emotion_logger::logging;
use emotion_logger::protocol::SubmissionPayload;
use emotion_logger::reflection::{Intensity, ReflectionRecord};
use emotion_logger::render::{render_form, render_taxonomy};
use emotion_logger::session::{HELP, run_session};
use emotion_logger::taxonomy::{self, Band, Emotion};
use std::path::PathBuf;
use tokio::io::BufReader;

#[derive(Parser)]
#[command(name = "emotion-logger")]
#[command(about = "Record an emotion and reflect on it")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, env = "EMOTION_LOGGER_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the reflection form interactively
    Session {
        /// Preselect an emotion
        #[arg(long)]
        emotion: Option<Emotion>,

        /// Starting intensity (0-100)
        #[arg(long)]
        intensity: Option<Intensity>,

        /// Where submissions go
        #[arg(long, value_enum)]
        sink: Option<SinkKind>,

        /// Output file for the ndjson sink
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Render a reflection from flags
    Reflect {
        #[arg(long)]
        emotion: Option<Emotion>,

        /// Intensity (0-100)
        #[arg(long)]
        intensity: Option<Intensity>,

        /// What happened
        #[arg(long, default_value = "")]
        stimulus: String,

        /// Answer to the reflective question
        #[arg(long, default_value = "")]
        response: String,

        /// Planned action
        #[arg(long, default_value = "")]
        action: String,

        /// Mark the planned action as not justified by the stimulus
        #[arg(long)]
        invalid_action: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Also send the record to the configured sink
        #[arg(long)]
        submit: bool,
    },

    /// Show the emotion taxonomy
    Taxonomy {
        /// Only show this emotion
        #[arg(long)]
        emotion: Option<String>,

        /// Only show this band (requires --emotion)
        #[arg(long, requires = "emotion")]
        band: Option<Band>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the resolved configuration
    Config,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn load_config(path: Option<PathBuf>) -> Result<(PathBuf, Config)> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&path)?;
    Ok((path, config))
}

async fn session(
    mut config: Config,
    emotion: Option<Emotion>,
    intensity: Option<Intensity>,
    sink: Option<SinkKind>,
    output: Option<PathBuf>,
) -> Result<()> {
    if let Some(sink) = sink {
        config.sink = sink;
    }
    if output.is_some() {
        config.output = output;
    }

    let mut sink = config.open_sink().context("Failed to open submission sink")?;
    let mut form = ReflectionForm::new(config.form_defaults());
    if emotion.is_some() {
        form.apply(FormEvent::SelectEmotion(emotion));
    }
    if let Some(intensity) = intensity {
        form.apply(FormEvent::SetIntensity(intensity));
    }

    eprintln!("{}\n", HELP);

    let submitted = run_session(
        &mut form,
        &mut sink,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;

    tracing::info!(submitted, "Session finished");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn reflect(
    config: &Config,
    emotion: Option<Emotion>,
    intensity: Option<Intensity>,
    stimulus: String,
    response: String,
    action: String,
    invalid_action: bool,
    format: OutputFormat,
    submit: bool,
) -> Result<()> {
    let record = ReflectionRecord {
        emotion,
        intensity: intensity.unwrap_or(config.initial_intensity),
        stimulus,
        question_response: response,
        action,
        is_action_valid: !invalid_action,
    };
    let form = ReflectionForm::from_record(config.form_defaults(), record);

    match format {
        OutputFormat::Text => println!("{}", render_form(&form)),
        OutputFormat::Json => {
            let derived = form.derived();
            let json = serde_json::json!({
                "record": SubmissionPayload::from_record(form.record()),
                "band": derived.map(|d| d.band),
                "definition": derived.map(|d| d.definition),
                "question": form.question(),
                "reflection": form.sentence(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    if submit {
        let mut sink = config.open_sink().context("Failed to open submission sink")?;
        form.submit(&mut sink)?;
    }

    Ok(())
}

fn show_taxonomy(emotion: Option<String>, band: Option<Band>, format: OutputFormat) -> Result<()> {
    if let (Some(name), Some(band)) = (emotion.as_deref(), band) {
        let entry = taxonomy::lookup_by_name(name, band)?;
        match format {
            OutputFormat::Text => {
                println!("{} / {}", name.trim(), band);
                println!("States: {}", entry.states.join(", "));
                println!("Definition: {}", entry.definition);
                println!("Question: {}", entry.question);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
        }
        return Ok(());
    }

    let emotion = emotion.map(|name| name.parse::<Emotion>()).transpose()?;

    match format {
        OutputFormat::Text => print!("{}", render_taxonomy(emotion)),
        OutputFormat::Json => {
            let emotions = match emotion {
                Some(emotion) => vec![emotion],
                None => Emotion::ALL.to_vec(),
            };
            let table: serde_json::Map<String, serde_json::Value> = emotions
                .into_iter()
                .map(|emotion| {
                    let bands: serde_json::Map<String, serde_json::Value> = taxonomy::bands(emotion)
                        .map(|(band, entry)| Ok((band.to_string(), serde_json::to_value(entry)?)))
                        .collect::<Result<_, serde_json::Error>>()?;
                    Ok((emotion.to_string(), serde_json::Value::Object(bands)))
                })
                .collect::<Result<_, serde_json::Error>>()?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let (config_path, config) = load_config(cli.config)?;
    tracing::debug!(path = %config_path.display(), "Loaded configuration");

    match cli.command {
        Commands::Session {
            emotion,
            intensity,
            sink,
            output,
        } => session(config, emotion, intensity, sink, output).await?,

        Commands::Reflect {
            emotion,
            intensity,
            stimulus,
            response,
            action,
            invalid_action,
            format,
            submit,
        } => reflect(
            &config,
            emotion,
            intensity,
            stimulus,
            response,
            action,
            invalid_action,
            format,
            submit,
        )?,

        Commands::Taxonomy {
            emotion,
            band,
            format,
        } => show_taxonomy(emotion, band, format)?,

        Commands::Config => {
            println!("# {}", config_path.display());
            print!("{}", toml::to_string(&config)?);
        }
    }

    Ok(())
}
