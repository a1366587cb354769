use shadowing_rs::practice::{masked_text, nearest_preset, PracticeMode, SPEED_PRESETS};
use shadowing_rs::{format_time, Lesson};

const TIME_WIDTH: usize = 9;

/// Plain-text sentence table: `No | Begin | End | ✓ | Text`.
pub fn format_lesson_table(lesson: &Lesson) -> String {
    let no_width = lesson.sentences.len().to_string().len().max(2);
    let tw = TIME_WIDTH;
    let mut out = String::new();
    out.push_str(&format!(
        "{:>no_width$}  {:<tw$}  {:<tw$}  {}  {}\n",
        "No", "Begin", "End", "✓", "Text"
    ));
    for (index, sentence) in lesson.sentences.iter().enumerate() {
        let marker = if index == lesson.last_selected_index { '>' } else { ' ' };
        out.push_str(&format!(
            "{:>no_width$}  {:<tw$}  {:<tw$}  {}  {}{}\n",
            sentence.id,
            format_time(sentence.begin),
            format_time(sentence.end),
            if sentence.confirmed { '✓' } else { ' ' },
            marker,
            sentence.text
        ));
    }
    out
}

/// Speed buttons with the active one bracketed, then one line per sentence.
pub fn format_practice_sheet(lesson: &Lesson) -> String {
    let active = nearest_preset(lesson.play_speed);
    let buttons: Vec<String> = SPEED_PRESETS
        .iter()
        .map(|&preset| {
            if preset == active {
                format!("[{preset}x]")
            } else {
                format!("{preset}x")
            }
        })
        .collect();
    let mut out = format!("Speed: {}\n", buttons.join(" "));
    for sentence in &lesson.sentences {
        let mark = match sentence.practice_mode {
            PracticeMode::Hide => '●',
            PracticeMode::Show => '○',
        };
        out.push_str(&format!(
            "Sentence {} {mark} {}\n",
            sentence.id,
            masked_text(&sentence.text, sentence.practice_mode)
        ));
    }
    out
}

pub fn format_vocabulary(words: &[String]) -> String {
    let width = words.len().to_string().len();
    words
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{:>width$}. {word}\n", i + 1))
        .collect()
}
