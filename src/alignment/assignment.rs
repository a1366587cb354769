use crate::types::Sentence;

/// Word-count weights used for proportional timing.
///
/// A sentence with no countable words weighs 1 so it still receives a span.
pub fn word_weights(sentences: &[Sentence]) -> Vec<usize> {
    sentences
        .iter()
        .map(|s| s.word_count().max(1))
        .collect()
}

/// Tile `[0, duration]` across `sentences` in order, proportional to words.
///
/// Every sentence gets `begin = cursor`, `end = cursor + duration * w / total`
/// and the cursor advances to that end, so adjacent spans share a boundary
/// exactly. The last end is pinned to `duration` to absorb rounding drift.
/// Assigned sentences lose their confirmation.
pub fn distribute_by_word_count(sentences: &mut [Sentence], duration: f64) {
    if sentences.is_empty() || !(duration > 0.0) {
        return;
    }
    let weights = word_weights(sentences);
    let mut total: usize = weights.iter().sum();
    if total == 0 {
        total = sentences.len();
    }

    let last = sentences.len() - 1;
    let mut cursor = 0.0f64;
    for (i, (sentence, weight)) in sentences.iter_mut().zip(weights).enumerate() {
        let len = duration * (weight as f64 / total as f64);
        let end = if i == last { duration } else { cursor + len };
        sentence.begin = Some(cursor);
        sentence.end = Some(end);
        sentence.confirmed = false;
        cursor = end;
    }
}
