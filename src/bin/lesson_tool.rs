use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use shadowing_rs::lesson::read_lesson_file;
use shadowing_rs::practice::{vocabulary, PracticeMode};
use shadowing_rs::{segment_sentences, EditorConfig, SaveOutcome, SessionBuilder};

#[path = "lesson_tool/logging.rs"]
mod logging;
#[path = "lesson_tool/table_formatter.rs"]
mod table_formatter;

#[derive(Debug, Parser)]
#[command(name = "lesson_tool")]
#[command(about = "Prepare and inspect shadowing lessons")]
struct Args {
    /// Editor settings as JSON; missing keys keep their defaults.
    #[arg(long, global = true, env = "SHADOWING_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the practice sentences of a transcript, one per line.
    Segment {
        #[arg(long)]
        text: PathBuf,
        #[arg(long, env = "SHADOWING_MAX_WORDS")]
        max_words: Option<usize>,
    },
    /// Create a lesson file from audio and transcript.
    Init {
        #[arg(long)]
        audio: PathBuf,
        #[arg(long)]
        text: PathBuf,
        /// Audio length in seconds; spreads initial times by word count.
        #[arg(long)]
        duration: Option<f64>,
        /// Defaults to `<audio stem>.json` next to the audio.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Practice speed as a button label, e.g. `0.75x`.
        #[arg(long, env = "SHADOWING_SPEED")]
        speed: Option<String>,
    },
    /// Print the sentence table of a lesson.
    Show { lesson: PathBuf },
    /// Print the vocabulary of a lesson.
    Vocab { lesson: PathBuf },
    /// Print the practice sheet: speed buttons and sentences, hidden ones masked.
    Practice {
        lesson: PathBuf,
        /// Show every sentence regardless of its stored mode.
        #[arg(long)]
        reveal: bool,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = Args::parse();
    let config = match args.config.as_deref() {
        Some(path) => EditorConfig::load(path).map_err(|e| e.to_string())?,
        None => EditorConfig::default(),
    };

    match args.command {
        Command::Segment { text, max_words } => {
            let max_words = max_words.unwrap_or(config.max_words);
            if max_words == 0 {
                return Err("--max-words must be >= 1.".to_string());
            }
            let raw = read_text(&text)?;
            for segment in segment_sentences(&raw, max_words) {
                println!("{segment}");
            }
        }
        Command::Init {
            audio,
            text,
            duration,
            out,
            speed,
        } => {
            let path = init_lesson(
                config,
                &audio,
                &text,
                duration,
                out.as_deref(),
                speed.as_deref(),
            )?;
            println!("{}", path.display());
        }
        Command::Show { lesson } => {
            let lesson = read_lesson_file(&lesson)
                .map_err(|e| format!("Failed to load '{}': {e}", lesson.display()))?
                .into_lesson();
            print!("{}", table_formatter::format_lesson_table(&lesson));
        }
        Command::Vocab { lesson } => {
            let lesson = read_lesson_file(&lesson)
                .map_err(|e| format!("Failed to load '{}': {e}", lesson.display()))?
                .into_lesson();
            print!(
                "{}",
                table_formatter::format_vocabulary(&vocabulary(&lesson.sentences))
            );
        }
        Command::Practice { lesson, reveal } => {
            let mut lesson = read_lesson_file(&lesson)
                .map_err(|e| format!("Failed to load '{}': {e}", lesson.display()))?
                .into_lesson();
            if reveal {
                for sentence in &mut lesson.sentences {
                    sentence.practice_mode = PracticeMode::Show;
                }
            }
            print!("{}", table_formatter::format_practice_sheet(&lesson));
        }
    }
    Ok(())
}

fn init_lesson(
    config: EditorConfig,
    audio: &Path,
    text: &Path,
    duration: Option<f64>,
    out: Option<&Path>,
    speed: Option<&str>,
) -> Result<PathBuf, String> {
    let raw = read_text(text)?;
    let mut session = SessionBuilder::new(config)
        .build()
        .map_err(|e| e.to_string())?;
    let count = session
        .open_audio_text(audio, text, &raw)
        .map_err(|e| e.to_string())?;
    if count == 0 {
        return Err(format!("No sentences found in '{}'.", text.display()));
    }
    if let Some(duration) = duration {
        if !(duration > 0.0) {
            return Err("--duration must be positive.".to_string());
        }
        session.on_duration_known(duration);
    }
    if let Some(label) = speed {
        session
            .set_play_speed_label(label)
            .map_err(|e| e.to_string())?;
    }

    let outcome = match out {
        Some(path) => session.save_as(path),
        None => session.save(),
    }
    .map_err(|e| e.to_string())?;
    match (outcome, session.json_path()) {
        (SaveOutcome::Saved, Some(path)) => Ok(path.to_path_buf()),
        _ => Err("Nothing to save.".to_string()),
    }
}

fn read_text(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {e}", path.display()))
}
