/// Words after which a long sentence may be cut (compared case-insensitively).
pub const CONNECTOR_WORDS: [&str; 5] = ["and", "but", "because", "so", "however"];

/// Split raw transcript text into practice sentences.
///
/// Stage one cuts on sentence terminators; stage two re-splits any sentence
/// longer than `max_words` at connector words or trailing commas. This is a
/// heuristic: abbreviations such as "Mr." end a sentence like any other
/// terminator.
pub fn segment_sentences(text: &str, max_words: usize) -> Vec<String> {
    let base = base_split(text);
    let mut out = Vec::with_capacity(base.len());
    for sentence in &base {
        let pieces = split_long_sentence(sentence, max_words);
        if pieces.is_empty() {
            tracing::debug!(
                sentence = sentence.as_str(),
                "re-split produced no segments; keeping base sentence"
            );
            out.push(sentence.clone());
        } else {
            out.extend(pieces);
        }
    }

    debug_assert!(
        out.iter()
            .flat_map(|s| s.split_whitespace())
            .eq(text.split_whitespace()),
        "segmentation token preservation contract violated"
    );

    out
}

/// Terminator-based split.
///
/// Line breaks are folded into spaces. A sentence ends at a run of `.`, `!`
/// or `?` followed by whitespace or the end of the text, so tokens such as
/// "3.14" or "Wait..." are never torn apart. Trailing text without a
/// terminator forms the last sentence; text with no terminator at all is a
/// single sentence.
pub fn base_split(text: &str) -> Vec<String> {
    let flattened = fold_line_breaks(text);
    let mut sentences = Vec::new();
    let mut start = 0usize;
    let mut chars = flattened.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let mut end = idx + c.len_utf8();
        while let Some(&(next_idx, next)) = chars.peek() {
            if !is_terminator(next) {
                break;
            }
            end = next_idx + next.len_utf8();
            chars.next();
        }
        let at_boundary = chars
            .peek()
            .map_or(true, |&(_, next)| next.is_whitespace());
        if at_boundary {
            push_trimmed(&mut sentences, &flattened[start..end]);
            start = end;
        }
    }
    push_trimmed(&mut sentences, &flattened[start..]);
    sentences
}

/// Length-bounded re-split of one sentence.
///
/// Sentences within the budget come back verbatim. Longer ones are cut right
/// after a connector word or a comma-terminated token, but only once at least
/// `max_words / 2` (floor) tokens have accumulated since the previous cut.
/// Whatever remains becomes a trailing segment, however short.
pub fn split_long_sentence(sentence: &str, max_words: usize) -> Vec<String> {
    let trimmed = sentence.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() <= max_words {
        return vec![trimmed.to_string()];
    }

    let half = max_words / 2;
    let mut segments = Vec::new();
    let mut start = 0usize;
    for (i, word) in words.iter().enumerate() {
        if i - start >= half && is_cut_token(word) {
            segments.push(words[start..=i].join(" "));
            start = i + 1;
        }
    }
    if start < words.len() {
        segments.push(words[start..].join(" "));
    }
    segments
}

fn is_cut_token(word: &str) -> bool {
    word.ends_with(',')
        || CONNECTOR_WORDS
            .iter()
            .any(|connector| word.eq_ignore_ascii_case(connector))
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn fold_line_breaks(text: &str) -> String {
    text.split(|c| c == '\r' || c == '\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn push_trimmed(out: &mut Vec<String>, piece: &str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece.to_string());
    }
}
