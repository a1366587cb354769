use std::path::{Path, PathBuf};

use crate::alignment::segmentation::segment_sentences;
use crate::error::LessonError;
use crate::lesson::{read_lesson_file, write_lesson_file, LessonRecord};
use crate::pipeline::traits::{AudioLocator, LessonStore, PlaybackEngine, SentenceSplitter};

/// Reads and writes lesson records as pretty-printed JSON files.
pub struct JsonFileStore;

impl LessonStore for JsonFileStore {
    fn read_lesson(&self, path: &Path) -> Result<LessonRecord, LessonError> {
        read_lesson_file(path)
    }

    fn write_lesson(&self, path: &Path, record: &LessonRecord) -> Result<(), LessonError> {
        write_lesson_file(path, record)
    }
}

pub struct FsAudioLocator;

impl AudioLocator for FsAudioLocator {
    fn exists(&self, path: &Path) -> bool {
        !path.as_os_str().is_empty() && path.is_file()
    }
}

/// Terminator split followed by the connector/comma re-split.
pub struct BudgetedSentenceSplitter;

impl SentenceSplitter for BudgetedSentenceSplitter {
    fn split(&self, text: &str, max_words: usize) -> Vec<String> {
        segment_sentences(text, max_words)
    }
}

/// Transport with no audio output: keeps position, rate and play state so
/// the session can run headless.
#[derive(Debug, Clone, PartialEq)]
pub struct SilentPlayback {
    source: Option<PathBuf>,
    playing: bool,
    position: f64,
    rate: f64,
}

impl Default for SilentPlayback {
    fn default() -> Self {
        Self {
            source: None,
            playing: false,
            position: 0.0,
            rate: 1.0,
        }
    }
}

impl SilentPlayback {
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl PlaybackEngine for SilentPlayback {
    fn load_source(&mut self, path: &Path) -> Result<(), LessonError> {
        self.source = Some(path.to_path_buf());
        self.playing = false;
        self.position = 0.0;
        Ok(())
    }

    fn play(&mut self) {
        self.playing = self.source.is_some();
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn stop(&mut self) {
        self.playing = false;
        self.position = 0.0;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn seek(&mut self, seconds: f64) {
        if seconds.is_finite() {
            self.position = seconds.max(0.0);
        }
    }

    fn position_seconds(&self) -> f64 {
        self.position
    }

    fn set_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.rate = rate;
        }
    }
}
