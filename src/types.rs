use std::path::PathBuf;

use crate::practice::PracticeMode;

#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// 1-based, dense, renumbered after every insert/delete.
    pub id: usize,
    /// Seconds; `None` means not set yet.
    pub begin: Option<f64>,
    /// Seconds; `None` means not set yet.
    pub end: Option<f64>,
    pub text: String,
    pub confirmed: bool,
    /// Whether the practice screen masks this sentence.
    pub practice_mode: PracticeMode,
}

impl Sentence {
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        Self {
            id,
            begin: None,
            end: None,
            text: text.into(),
            confirmed: false,
            practice_mode: PracticeMode::Hide,
        }
    }

    pub fn blank(id: usize) -> Self {
        Self::new(id, String::new())
    }

    /// `(begin, end)` when both are set and form a non-empty range.
    ///
    /// A partially timed sentence returns `None` and must not drive
    /// selection, playback, looping or auto-zoom.
    pub fn time_range(&self) -> Option<(f64, f64)> {
        match (self.begin, self.end) {
            (Some(begin), Some(end)) if begin >= 0.0 && end > begin => Some((begin, end)),
            _ => None,
        }
    }

    pub fn is_timed(&self) -> bool {
        self.time_range().is_some()
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn field(&self, field: TimeField) -> Option<f64> {
        match field {
            TimeField::Begin => self.begin,
            TimeField::End => self.end,
        }
    }

    pub(crate) fn field_mut(&mut self, field: TimeField) -> &mut Option<f64> {
        match field {
            TimeField::Begin => &mut self.begin,
            TimeField::End => &mut self.end,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    Begin,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
}

impl NudgeDirection {
    pub fn signed(self, step: f64) -> f64 {
        match self {
            Self::Up => step,
            Self::Down => -step,
        }
    }
}

/// Everything persisted for one lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub audio_path: PathBuf,
    pub text_path: PathBuf,
    pub sentences: Vec<Sentence>,
    pub play_speed: f64,
    pub last_selected_index: usize,
}

impl Lesson {
    pub const DEFAULT_PLAY_SPEED: f64 = 1.0;
}

impl Default for Lesson {
    fn default() -> Self {
        Self {
            audio_path: PathBuf::new(),
            text_path: PathBuf::new(),
            sentences: Vec::new(),
            play_speed: Self::DEFAULT_PLAY_SPEED,
            last_selected_index: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// No audio or no sentences loaded; reported, not an error.
    NothingToSave,
}
