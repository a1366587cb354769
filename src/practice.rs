use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::Sentence;

/// Playback speeds offered on the practice screen.
pub const SPEED_PRESETS: [f64; 5] = [0.5, 0.75, 1.0, 1.2, 1.5];

const MASK_LEN: usize = 25;

/// Per-sentence visibility on the practice screen, stored as `"hide"` / `"show"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    /// Listen first; the sentence text is masked.
    #[default]
    Hide,
    Show,
}

impl PracticeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Hide => Self::Show,
            Self::Show => Self::Hide,
        }
    }
}

/// Parse a speed button label such as `"0.75x"` or `"1.0"`.
pub fn parse_speed_label(label: &str) -> Option<f64> {
    let trimmed = label.trim();
    let number = trimmed
        .strip_suffix('x')
        .or_else(|| trimmed.strip_suffix('X'))
        .unwrap_or(trimmed);
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// The preset closest to `speed`, for highlighting the active button.
pub fn nearest_preset(speed: f64) -> f64 {
    SPEED_PRESETS
        .iter()
        .copied()
        .min_by(|a, b| (a - speed).abs().total_cmp(&(b - speed).abs()))
        .unwrap_or(1.0)
}

/// Text shown for a sentence. The mask has a fixed length so it gives away
/// nothing about the sentence.
pub fn masked_text(text: &str, mode: PracticeMode) -> String {
    match mode {
        PracticeMode::Show => text.to_string(),
        PracticeMode::Hide => "_".repeat(MASK_LEN),
    }
}

/// Unique lowercase words across all sentences, sorted.
///
/// A word is a run of ASCII letters and apostrophes; everything else
/// separates words.
pub fn vocabulary(sentences: &[Sentence]) -> Vec<String> {
    let words: BTreeSet<String> = sentences
        .iter()
        .flat_map(|s| {
            s.text
                .split(|c: char| !(c.is_ascii_alphabetic() || c == '\''))
                .filter(|w| !w.is_empty())
                .map(str::to_ascii_lowercase)
        })
        .collect();
    words.into_iter().collect()
}
