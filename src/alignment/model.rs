use crate::alignment::assignment::distribute_by_word_count;
use crate::config::EditorConfig;
use crate::error::LessonError;
use crate::practice::PracticeMode;
use crate::types::{Sentence, TimeField};

/// Ordered sentences of a lesson plus the current row.
///
/// All mutations go through this type so ids stay dense and any timing change
/// drops the sentence's confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentModel {
    sentences: Vec<Sentence>,
    current: Option<usize>,
    edit_tolerance_sec: f64,
}

impl Default for AlignmentModel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AlignmentModel {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self::with_tolerance(sentences, EditorConfig::DEFAULT_EDIT_TOLERANCE_SEC)
    }

    pub fn with_tolerance(sentences: Vec<Sentence>, edit_tolerance_sec: f64) -> Self {
        let mut model = Self {
            current: if sentences.is_empty() { None } else { Some(0) },
            sentences,
            edit_tolerance_sec,
        };
        model.renumber();
        model
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            texts
                .into_iter()
                .map(|text| Sentence::new(0, text))
                .collect(),
        )
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn into_sentences(self) -> Vec<Sentence> {
        self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&Sentence> {
        self.current.and_then(|i| self.sentences.get(i))
    }

    pub fn select(&mut self, index: usize) -> Result<&Sentence, LessonError> {
        self.check_index(index)?;
        self.current = Some(index);
        Ok(&self.sentences[index])
    }

    /// Insert a blank sentence after `index`, or append when `index` is not a
    /// valid row. The new row becomes current; its index is returned.
    pub fn insert_after(&mut self, index: Option<usize>) -> usize {
        let at = match index {
            Some(i) if i < self.sentences.len() => i + 1,
            _ => self.sentences.len(),
        };
        self.sentences.insert(at, Sentence::blank(at + 1));
        self.renumber();
        self.current = Some(at);
        at
    }

    /// Remove the sentence at `index` and return the new current row.
    ///
    /// When the current row is removed, the selection keeps its index and
    /// now points at the following sentence, or at the new last row when
    /// the removed row was last. Any other selection stays on its sentence.
    pub fn delete_at(&mut self, index: usize) -> Result<Option<usize>, LessonError> {
        self.check_index(index)?;
        self.sentences.remove(index);
        self.renumber();
        self.current = match self.current {
            _ if self.sentences.is_empty() => None,
            Some(current) if current > index => Some(current - 1),
            Some(current) if current < index => Some(current),
            _ => Some(index.min(self.sentences.len() - 1)),
        };
        Ok(self.current)
    }

    pub fn set_begin(&mut self, index: usize, seconds: f64) -> Result<bool, LessonError> {
        self.set_field(index, TimeField::Begin, seconds)
    }

    pub fn set_end(&mut self, index: usize, seconds: f64) -> Result<bool, LessonError> {
        self.set_field(index, TimeField::End, seconds)
    }

    /// Set a time field, ignoring changes within the edit tolerance.
    ///
    /// Returns whether the value changed. An accepted change unconfirms the
    /// sentence.
    pub fn set_field(
        &mut self,
        index: usize,
        field: TimeField,
        seconds: f64,
    ) -> Result<bool, LessonError> {
        self.check_index(index)?;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(LessonError::invalid_input(format!(
                "time must be a non-negative number of seconds, got {seconds}"
            )));
        }
        let tolerance = self.edit_tolerance_sec;
        let sentence = &mut self.sentences[index];
        let slot = sentence.field_mut(field);
        if let Some(old) = *slot {
            if (old - seconds).abs() <= tolerance {
                return Ok(false);
            }
        }
        *slot = Some(seconds);
        sentence.confirmed = false;
        Ok(true)
    }

    /// Add `delta` to a field (undefined counts as 0) and clamp at 0.
    ///
    /// Always unconfirms, even when the clamp leaves the value unchanged.
    pub fn nudge(&mut self, index: usize, field: TimeField, delta: f64) -> Result<f64, LessonError> {
        self.check_index(index)?;
        let sentence = &mut self.sentences[index];
        let slot = sentence.field_mut(field);
        let value = (slot.unwrap_or(0.0).max(0.0) + delta).max(0.0);
        *slot = Some(value);
        sentence.confirmed = false;
        Ok(value)
    }

    pub fn confirm(&mut self, index: usize, value: bool) -> Result<(), LessonError> {
        self.check_index(index)?;
        self.sentences[index].confirmed = value;
        Ok(())
    }

    /// Replace a sentence's text. Timing and confirmation are untouched.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), LessonError> {
        self.check_index(index)?;
        self.sentences[index].text = text.into();
        Ok(())
    }

    pub fn set_practice_mode(&mut self, index: usize, mode: PracticeMode) -> Result<(), LessonError> {
        self.check_index(index)?;
        self.sentences[index].practice_mode = mode;
        Ok(())
    }

    pub fn toggle_practice_mode(&mut self, index: usize) -> Result<PracticeMode, LessonError> {
        self.check_index(index)?;
        let sentence = &mut self.sentences[index];
        sentence.practice_mode = sentence.practice_mode.toggled();
        Ok(sentence.practice_mode)
    }

    pub fn has_timed_sentence(&self) -> bool {
        self.sentences.iter().any(Sentence::is_timed)
    }

    /// Distribute `duration` across all sentences by word count, but only
    /// while none of them is timed. Returns whether anything was assigned.
    pub fn auto_assign_if_all_unset(&mut self, duration: f64) -> bool {
        if !(duration > 0.0) || self.sentences.is_empty() {
            return false;
        }
        if self.has_timed_sentence() {
            tracing::debug!(
                sentences = self.sentences.len(),
                "timed sentences present; skipping auto-assignment"
            );
            return false;
        }
        distribute_by_word_count(&mut self.sentences, duration);
        tracing::debug!(
            sentences = self.sentences.len(),
            duration_sec = duration,
            "auto-assigned sentence times by word count"
        );
        true
    }

    fn renumber(&mut self) {
        for (i, sentence) in self.sentences.iter_mut().enumerate() {
            sentence.id = i + 1;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), LessonError> {
        if index < self.sentences.len() {
            Ok(())
        } else {
            Err(LessonError::sentence_index(index, self.sentences.len()))
        }
    }
}
