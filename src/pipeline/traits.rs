use std::path::Path;

use crate::error::LessonError;
use crate::lesson::LessonRecord;

/// Audio transport driven by the session. Positions are in seconds.
pub trait PlaybackEngine: Send {
    fn load_source(&mut self, path: &Path) -> Result<(), LessonError>;
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
    fn seek(&mut self, seconds: f64);
    fn position_seconds(&self) -> f64;
    fn set_rate(&mut self, rate: f64);
}

pub trait LessonStore: Send + Sync {
    fn read_lesson(&self, path: &Path) -> Result<LessonRecord, LessonError>;
    fn write_lesson(&self, path: &Path, record: &LessonRecord) -> Result<(), LessonError>;
}

pub trait AudioLocator: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

pub trait SentenceSplitter: Send + Sync {
    fn split(&self, text: &str, max_words: usize) -> Vec<String>;
}
