use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LessonError;
use crate::practice::PracticeMode;
use crate::types::{Lesson, Sentence};

/// Stored in place of an undefined begin/end.
pub const UNDEFINED_TIME: f64 = -1.0;

/// On-disk shape of a lesson. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRecord {
    #[serde(default)]
    pub audio_path: String,
    #[serde(default)]
    pub text_path: String,
    #[serde(default = "default_play_speed")]
    pub play_speed: f64,
    #[serde(default)]
    pub last_selected_sentence: i64,
    #[serde(default)]
    pub sentences: Vec<SentenceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default = "undefined_time")]
    pub begin: f64,
    #[serde(default = "undefined_time")]
    pub end: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub practice_mode: PracticeMode,
}

fn default_play_speed() -> f64 {
    Lesson::DEFAULT_PLAY_SPEED
}

fn undefined_time() -> f64 {
    UNDEFINED_TIME
}

fn time_from_record(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

fn time_to_record(value: Option<f64>) -> f64 {
    value.unwrap_or(UNDEFINED_TIME)
}

impl LessonRecord {
    pub fn from_json(data: &str) -> Result<Self, LessonError> {
        let value: serde_json::Value =
            serde_json::from_str(data).map_err(|e| LessonError::json("parse lesson", e))?;
        if !value.is_object() {
            return Err(LessonError::invalid_input(
                "lesson file must contain a JSON object",
            ));
        }
        serde_json::from_value(value).map_err(|e| LessonError::json("decode lesson", e))
    }

    pub fn to_json(&self) -> Result<String, LessonError> {
        serde_json::to_string_pretty(self).map_err(|e| LessonError::json("encode lesson", e))
    }

    /// Convert to the in-memory lesson, renumbering ids densely.
    pub fn into_lesson(self) -> Lesson {
        let play_speed = if self.play_speed.is_finite() && self.play_speed > 0.0 {
            self.play_speed
        } else {
            tracing::warn!(
                play_speed = self.play_speed,
                "invalid play_speed in lesson; using default"
            );
            Lesson::DEFAULT_PLAY_SPEED
        };
        let sentences: Vec<Sentence> = self
            .sentences
            .into_iter()
            .enumerate()
            .map(|(i, s)| Sentence {
                id: i + 1,
                begin: time_from_record(s.begin),
                end: time_from_record(s.end),
                text: s.text,
                confirmed: s.confirmed,
                practice_mode: s.practice_mode,
            })
            .collect();
        let last_selected_index = usize::try_from(self.last_selected_sentence)
            .ok()
            .filter(|&i| i < sentences.len())
            .unwrap_or(0);

        Lesson {
            audio_path: PathBuf::from(self.audio_path),
            text_path: PathBuf::from(self.text_path),
            sentences,
            play_speed,
            last_selected_index,
        }
    }

    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            audio_path: lesson.audio_path.to_string_lossy().into_owned(),
            text_path: lesson.text_path.to_string_lossy().into_owned(),
            play_speed: lesson.play_speed,
            last_selected_sentence: lesson.last_selected_index as i64,
            sentences: lesson
                .sentences
                .iter()
                .map(|s| SentenceRecord {
                    id: s.id as i64,
                    begin: time_to_record(s.begin),
                    end: time_to_record(s.end),
                    text: s.text.clone(),
                    confirmed: s.confirmed,
                    practice_mode: s.practice_mode,
                })
                .collect(),
        }
    }
}

pub fn read_lesson_file(path: &Path) -> Result<LessonRecord, LessonError> {
    let data = std::fs::read_to_string(path).map_err(|e| LessonError::io("read lesson", e))?;
    LessonRecord::from_json(&data)
}

pub fn write_lesson_file(path: &Path, record: &LessonRecord) -> Result<(), LessonError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| LessonError::io("create lesson directory", e))?;
    }
    let mut json = record.to_json()?;
    json.push('\n');
    std::fs::write(path, json).map_err(|e| LessonError::io("write lesson", e))
}

/// `<dir>/<audio stem>.json`, the suggested save location for a new lesson.
pub fn default_lesson_path(audio_path: &Path) -> PathBuf {
    audio_path.with_extension("json")
}

/// Append `.json` unless the path already ends with it (any case).
pub fn ensure_json_extension(path: &Path) -> PathBuf {
    let has_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if has_json {
        path.to_path_buf()
    } else {
        let mut os = path.as_os_str().to_os_string();
        os.push(".json");
        PathBuf::from(os)
    }
}

/// First `<audio stem>*.json` next to the audio file, in name order.
pub fn find_companion_lesson(audio_path: &Path) -> Option<PathBuf> {
    let stem = audio_path.file_stem()?.to_str()?;
    let dir = match audio_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let entries = std::fs::read_dir(dir).ok()?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| {
                    name.starts_with(stem)
                        && name
                            .len()
                            .checked_sub(5)
                            .and_then(|at| name.get(at..))
                            .is_some_and(|ext| ext.eq_ignore_ascii_case(".json"))
                })
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
