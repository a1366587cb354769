use std::path::PathBuf;

use shadowing_rs::lesson::{find_companion_lesson, read_lesson_file};
use shadowing_rs::practice::{vocabulary, PracticeMode};
use shadowing_rs::{EditorConfig, NudgeDirection, SaveOutcome, SessionBuilder, TimeField};

const TRANSCRIPT: &str = "Good morning everyone. Today we talk about rivers, \
and how they shape the land because water moves slowly. Any questions?";

fn workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("shadowing_rs_it_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create workspace");
    dir
}

#[test]
fn prepare_edit_save_and_reopen_lesson() {
    let dir = workspace("flow");
    let audio = dir.join("rivers.mp3");
    let text = dir.join("rivers.txt");
    std::fs::write(&audio, b"ID3").expect("write audio");
    std::fs::write(&text, TRANSCRIPT).expect("write text");

    let config = EditorConfig {
        max_words: 8,
        ..EditorConfig::default()
    };
    let mut session = SessionBuilder::new(config.clone())
        .build()
        .expect("build session");
    let count = session
        .open_audio_text(&audio, &text, TRANSCRIPT)
        .expect("open audio and text");
    assert_eq!(count, 5);
    assert_eq!(session.sentences()[1].text, "Today we talk about rivers,");
    assert_eq!(
        session.sentences()[2].text,
        "and how they shape the land because"
    );

    session.on_duration_known(12.0);
    assert!(session.sentences().iter().all(|s| s.is_timed()));
    assert_eq!(session.sentences()[4].end, Some(12.0));

    session.next();
    session
        .nudge_current(TimeField::Begin, NudgeDirection::Up)
        .expect("nudge");
    session.confirm_current(true).expect("confirm");
    session.set_play_speed(0.75).expect("speed");

    assert_eq!(session.save().expect("save"), SaveOutcome::Saved);
    let saved = dir.join("rivers.json");
    assert_eq!(session.json_path(), Some(saved.as_path()));
    assert_eq!(find_companion_lesson(&audio), Some(saved.clone()));

    let record = read_lesson_file(&saved).expect("read saved lesson");
    assert_eq!(record.last_selected_sentence, 1);
    assert_eq!(record.play_speed, 0.75);
    assert!(record.sentences[1].confirmed);

    let mut reopened = SessionBuilder::new(config).build().expect("build session");
    reopened
        .load_lesson(&saved, |_| None)
        .expect("load saved lesson");
    assert_eq!(reopened.sentences().len(), session.sentences().len());
    for (loaded, original) in reopened.sentences().iter().zip(session.sentences()) {
        assert_eq!(loaded.text, original.text);
        assert_eq!(loaded.confirmed, original.confirmed);
        let (lb, le) = loaded.time_range().expect("loaded sentence is timed");
        let (ob, oe) = original.time_range().expect("original sentence is timed");
        assert!((lb - ob).abs() < 1e-9 && (le - oe).abs() < 1e-9);
    }
    assert_eq!(reopened.current_index(), Some(1));
    assert_eq!(reopened.play_speed(), 0.75);

    let words = vocabulary(reopened.sentences());
    assert!(words.contains(&"rivers".to_string()));
    assert!(words.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(reopened.practice_text(0).expect("row 0"), "_".repeat(25));
    assert_eq!(reopened.toggle_practice_mode(0).expect("row 0"), PracticeMode::Show);
    assert_eq!(reopened.practice_text(0).expect("row 0"), "Good morning everyone.");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn reopen_after_audio_moved_uses_replacement() {
    let dir = workspace("moved");
    let audio = dir.join("talk.mp3");
    std::fs::write(&audio, b"ID3").expect("write audio");

    let mut session = SessionBuilder::new(EditorConfig::default())
        .build()
        .expect("build session");
    session
        .open_audio_text(&audio, &dir.join("talk.txt"), "One. Two.")
        .expect("open");
    let lesson_path = dir.join("saved");
    session.save_as(&lesson_path).expect("save as");
    let lesson_path = dir.join("saved.json");
    assert!(lesson_path.is_file());

    let moved = dir.join("talk_moved.mp3");
    std::fs::rename(&audio, &moved).expect("move audio");

    let mut reopened = SessionBuilder::new(EditorConfig::default())
        .build()
        .expect("build session");
    assert!(reopened.load_lesson(&lesson_path, |_| None).is_err());
    reopened
        .load_lesson(&lesson_path, |_| Some(moved.clone()))
        .expect("load with replacement");
    assert_eq!(reopened.audio_path(), moved.as_path());
    assert_eq!(reopened.sentences().len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}
