use std::path::Path;

use serde::Deserialize;

use crate::error::LessonError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Sentences longer than this many words are re-split at connectors.
    pub max_words: usize,
    pub nudge_step_sec: f64,
    /// Edits closer than this to the current value are ignored.
    pub edit_tolerance_sec: f64,
    /// Slack past a sentence end before loop mode seeks back.
    pub loop_tolerance_sec: f64,
    pub seek_step_sec: f64,
    pub zoom_factor: f64,
    /// Minimum visible span is `duration / min_span_divisor`.
    pub min_span_divisor: f64,
    /// Share of the view an auto-zoomed segment occupies.
    pub segment_fill_ratio: f64,
    pub min_segment_sec: f64,
}

impl EditorConfig {
    pub const DEFAULT_MAX_WORDS: usize = 25;
    pub const DEFAULT_NUDGE_STEP_SEC: f64 = 0.010;
    pub const DEFAULT_EDIT_TOLERANCE_SEC: f64 = 1e-4;
    pub const DEFAULT_LOOP_TOLERANCE_SEC: f64 = 0.05;
    pub const DEFAULT_SEEK_STEP_SEC: f64 = 0.3;
    pub const DEFAULT_ZOOM_FACTOR: f64 = 1.5;
    pub const DEFAULT_MIN_SPAN_DIVISOR: f64 = 100.0;
    pub const DEFAULT_SEGMENT_FILL_RATIO: f64 = 0.6;
    pub const DEFAULT_MIN_SEGMENT_SEC: f64 = 0.05;

    pub fn load(path: &Path) -> Result<Self, LessonError> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| LessonError::io("read editor config", e))?;
        let config: Self = serde_json::from_str(&data)
            .map_err(|e| LessonError::json("parse editor config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LessonError> {
        if self.max_words == 0 {
            return Err(LessonError::invalid_input("max_words must be at least 1"));
        }
        if !(self.zoom_factor > 1.0) {
            return Err(LessonError::invalid_input("zoom_factor must be greater than 1"));
        }
        if !(self.min_span_divisor >= 1.0) {
            return Err(LessonError::invalid_input(
                "min_span_divisor must be at least 1",
            ));
        }
        if !(self.segment_fill_ratio > 0.0 && self.segment_fill_ratio <= 1.0) {
            return Err(LessonError::invalid_input(
                "segment_fill_ratio must be in (0, 1]",
            ));
        }
        for (name, value) in [
            ("nudge_step_sec", self.nudge_step_sec),
            ("edit_tolerance_sec", self.edit_tolerance_sec),
            ("loop_tolerance_sec", self.loop_tolerance_sec),
            ("seek_step_sec", self.seek_step_sec),
            ("min_segment_sec", self.min_segment_sec),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LessonError::invalid_input(format!(
                    "{name} must be a non-negative number"
                )));
            }
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_words: Self::DEFAULT_MAX_WORDS,
            nudge_step_sec: Self::DEFAULT_NUDGE_STEP_SEC,
            edit_tolerance_sec: Self::DEFAULT_EDIT_TOLERANCE_SEC,
            loop_tolerance_sec: Self::DEFAULT_LOOP_TOLERANCE_SEC,
            seek_step_sec: Self::DEFAULT_SEEK_STEP_SEC,
            zoom_factor: Self::DEFAULT_ZOOM_FACTOR,
            min_span_divisor: Self::DEFAULT_MIN_SPAN_DIVISOR,
            segment_fill_ratio: Self::DEFAULT_SEGMENT_FILL_RATIO,
            min_segment_sec: Self::DEFAULT_MIN_SEGMENT_SEC,
        }
    }
}
