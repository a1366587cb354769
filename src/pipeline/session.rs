use std::path::{Path, PathBuf};

use crate::alignment::model::AlignmentModel;
use crate::alignment::timecode::parse_time;
use crate::config::EditorConfig;
use crate::error::LessonError;
use crate::lesson::{default_lesson_path, ensure_json_extension, LessonRecord};
use crate::pipeline::traits::{AudioLocator, LessonStore, PlaybackEngine, SentenceSplitter};
use crate::practice::{masked_text, nearest_preset, parse_speed_label, PracticeMode};
use crate::types::{Lesson, NudgeDirection, SaveOutcome, Sentence, TimeField};
use crate::viewport::waveform::{MockWaveform, MIN_RENDER_STEPS};
use crate::viewport::ViewportController;

/// One open lesson: sentences, transport, viewport and persistence.
///
/// Every operator action is a method here; the event adapter forwards
/// duration and position notifications through [`on_duration_known`] and
/// [`on_position_tick`].
///
/// [`on_duration_known`]: EditorSession::on_duration_known
/// [`on_position_tick`]: EditorSession::on_position_tick
pub struct EditorSession {
    config: EditorConfig,
    model: AlignmentModel,
    viewport: ViewportController,
    waveform: MockWaveform,
    audio_path: PathBuf,
    text_path: PathBuf,
    json_path: Option<PathBuf>,
    play_speed: f64,
    loop_enabled: bool,
    store: Box<dyn LessonStore>,
    playback: Box<dyn PlaybackEngine>,
    locator: Box<dyn AudioLocator>,
    splitter: Box<dyn SentenceSplitter>,
}

pub(crate) struct EditorSessionParts {
    pub config: EditorConfig,
    pub store: Box<dyn LessonStore>,
    pub playback: Box<dyn PlaybackEngine>,
    pub locator: Box<dyn AudioLocator>,
    pub splitter: Box<dyn SentenceSplitter>,
}

impl EditorSession {
    pub(crate) fn from_parts(parts: EditorSessionParts) -> Self {
        Self {
            model: AlignmentModel::with_tolerance(Vec::new(), parts.config.edit_tolerance_sec),
            viewport: ViewportController::new(&parts.config),
            waveform: MockWaveform::default(),
            audio_path: PathBuf::new(),
            text_path: PathBuf::new(),
            json_path: None,
            play_speed: Lesson::DEFAULT_PLAY_SPEED,
            loop_enabled: false,
            config: parts.config,
            store: parts.store,
            playback: parts.playback,
            locator: parts.locator,
            splitter: parts.splitter,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn model(&self) -> &AlignmentModel {
        &self.model
    }

    pub fn sentences(&self) -> &[Sentence] {
        self.model.sentences()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.model.current_index()
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn playback(&self) -> &dyn PlaybackEngine {
        self.playback.as_ref()
    }

    pub fn audio_path(&self) -> &Path {
        &self.audio_path
    }

    pub fn text_path(&self) -> &Path {
        &self.text_path
    }

    pub fn json_path(&self) -> Option<&Path> {
        self.json_path.as_deref()
    }

    pub fn play_speed(&self) -> f64 {
        self.play_speed
    }

    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    /// Snapshot of everything that would be persisted.
    pub fn lesson(&self) -> Lesson {
        Lesson {
            audio_path: self.audio_path.clone(),
            text_path: self.text_path.clone(),
            sentences: self.model.sentences().to_vec(),
            play_speed: self.play_speed,
            last_selected_index: self.model.current_index().unwrap_or(0),
        }
    }

    /// Waveform column heights for a canvas `width` pixels wide.
    pub fn waveform_columns(&self, width: usize) -> Vec<f64> {
        self.waveform
            .column_amplitudes(&self.viewport, width.max(MIN_RENDER_STEPS))
    }

    /// Start a fresh lesson from an audio file and its transcript text.
    ///
    /// Returns the number of sentences produced.
    pub fn open_audio_text(
        &mut self,
        audio_path: &Path,
        text_path: &Path,
        text: &str,
    ) -> Result<usize, LessonError> {
        if !self.locator.exists(audio_path) {
            return Err(LessonError::MissingAudio {
                path: audio_path.to_path_buf(),
            });
        }
        let segments = self.splitter.split(text, self.config.max_words);
        self.playback.load_source(audio_path)?;
        self.playback.stop();

        self.model = AlignmentModel::with_tolerance(
            segments
                .into_iter()
                .map(|text| Sentence::new(0, text))
                .collect(),
            self.config.edit_tolerance_sec,
        );
        self.viewport = ViewportController::new(&self.config);
        self.audio_path = audio_path.to_path_buf();
        self.text_path = text_path.to_path_buf();
        self.json_path = None;
        self.refresh_selection();

        tracing::info!(
            audio = %audio_path.display(),
            sentences = self.model.len(),
            "opened audio and transcript"
        );
        Ok(self.model.len())
    }

    /// Load a saved lesson.
    ///
    /// When the recorded audio file is gone, `resolve_missing_audio` is asked
    /// for a replacement; `None` (or a replacement that does not exist either)
    /// aborts the load and leaves the session untouched.
    pub fn load_lesson<F>(
        &mut self,
        json_path: &Path,
        resolve_missing_audio: F,
    ) -> Result<(), LessonError>
    where
        F: FnOnce(&Path) -> Option<PathBuf>,
    {
        let mut lesson = self.store.read_lesson(json_path)?.into_lesson();

        if !self.locator.exists(&lesson.audio_path) {
            tracing::warn!(
                audio = %lesson.audio_path.display(),
                "recorded audio file is missing"
            );
            match resolve_missing_audio(&lesson.audio_path) {
                Some(replacement) if self.locator.exists(&replacement) => {
                    lesson.audio_path = replacement;
                }
                Some(replacement) => {
                    return Err(LessonError::MissingAudio { path: replacement });
                }
                None => {
                    return Err(LessonError::MissingAudio {
                        path: lesson.audio_path,
                    });
                }
            }
        }

        self.playback.load_source(&lesson.audio_path)?;
        self.playback.set_rate(lesson.play_speed);
        self.playback.stop();

        self.model =
            AlignmentModel::with_tolerance(lesson.sentences, self.config.edit_tolerance_sec);
        if !self.model.is_empty() {
            self.model.select(lesson.last_selected_index)?;
        }
        self.viewport = ViewportController::new(&self.config);
        self.audio_path = lesson.audio_path;
        self.text_path = lesson.text_path;
        self.play_speed = lesson.play_speed;
        self.json_path = Some(json_path.to_path_buf());
        self.refresh_selection();

        tracing::info!(
            lesson = %json_path.display(),
            sentences = self.model.len(),
            play_speed = self.play_speed,
            "loaded lesson"
        );
        Ok(())
    }

    /// Save to the remembered lesson path, or next to the audio file when the
    /// lesson has never been saved.
    pub fn save(&mut self) -> Result<SaveOutcome, LessonError> {
        let path = match &self.json_path {
            Some(path) => path.clone(),
            None => default_lesson_path(&self.audio_path),
        };
        self.write_to(path)
    }

    pub fn save_as(&mut self, path: &Path) -> Result<SaveOutcome, LessonError> {
        self.write_to(ensure_json_extension(path))
    }

    fn write_to(&mut self, path: PathBuf) -> Result<SaveOutcome, LessonError> {
        if self.audio_path.as_os_str().is_empty() || self.model.is_empty() {
            tracing::info!("nothing to save");
            return Ok(SaveOutcome::NothingToSave);
        }
        let record = LessonRecord::from_lesson(&self.lesson());
        self.store.write_lesson(&path, &record)?;
        tracing::info!(
            lesson = %path.display(),
            sentences = record.sentences.len(),
            "saved lesson"
        );
        self.json_path = Some(path);
        Ok(SaveOutcome::Saved)
    }

    /// The transport reported the audio length.
    ///
    /// Fills in proportional times when no sentence is timed yet.
    pub fn on_duration_known(&mut self, duration: f64) {
        self.viewport.set_duration(duration);
        if self.model.auto_assign_if_all_unset(self.viewport.duration()) {
            tracing::info!(
                duration_sec = self.viewport.duration(),
                sentences = self.model.len(),
                "assigned initial sentence times"
            );
        }
        self.refresh_selection();
    }

    /// Playback position update. Returns whether a loop seek was issued.
    pub fn on_position_tick(&mut self, position: f64) -> bool {
        if !self.loop_enabled {
            return false;
        }
        let Some((begin, end)) = self.model.current().and_then(Sentence::time_range) else {
            return false;
        };
        if position > end + self.config.loop_tolerance_sec {
            self.playback.seek(begin);
            return true;
        }
        false
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), LessonError> {
        self.model.select(index)?;
        self.refresh_selection();
        Ok(())
    }

    /// Move to the following row; stays put on the last one.
    pub fn next(&mut self) -> Option<usize> {
        let target = match self.model.current_index() {
            Some(i) if i + 1 < self.model.len() => i + 1,
            Some(i) => i,
            None if !self.model.is_empty() => 0,
            None => return None,
        };
        self.go_to(target).ok()?;
        Some(target)
    }

    /// Move to the preceding row; stays put on the first one.
    pub fn previous(&mut self) -> Option<usize> {
        let target = match self.model.current_index() {
            Some(i) => i.saturating_sub(1),
            None if !self.model.is_empty() => 0,
            None => return None,
        };
        self.go_to(target).ok()?;
        Some(target)
    }

    pub fn play_sentence(&mut self) {
        if let Some(begin) = self.model.current().and_then(|s| s.begin) {
            self.playback.seek(begin);
        }
        self.playback.set_rate(self.play_speed);
        self.playback.play();
    }

    pub fn toggle_pause(&mut self) {
        if self.playback.is_playing() {
            self.playback.pause();
        } else {
            self.playback.play();
        }
    }

    /// Seek by `delta` seconds, clamped to the known audio length.
    pub fn seek_relative(&mut self, delta: f64) -> f64 {
        let mut target = (self.playback.position_seconds() + delta).max(0.0);
        let duration = self.viewport.duration();
        if duration > 0.0 {
            target = target.min(duration);
        }
        self.playback.seek(target);
        target
    }

    pub fn seek_forward(&mut self) -> f64 {
        self.seek_relative(self.config.seek_step_sec)
    }

    pub fn seek_backward(&mut self) -> f64 {
        self.seek_relative(-self.config.seek_step_sec)
    }

    /// Copy the playhead position into the current sentence's begin or end.
    pub fn capture_playhead(&mut self, field: TimeField) -> Result<bool, LessonError> {
        let index = self.require_current()?;
        let position = self.playback.position_seconds();
        let changed = self.model.set_field(index, field, position)?;
        self.refresh_selection();
        Ok(changed)
    }

    /// Apply a typed `mm:ss.mmm` value. Blank input leaves the field alone.
    pub fn set_time_from_text(&mut self, field: TimeField, text: &str) -> Result<bool, LessonError> {
        let index = self.require_current()?;
        if text.trim().is_empty() {
            return Ok(false);
        }
        let seconds = parse_time(text).ok_or_else(|| LessonError::invalid_time(text))?;
        let changed = self.model.set_field(index, field, seconds)?;
        self.refresh_selection();
        Ok(changed)
    }

    pub fn nudge_current(
        &mut self,
        field: TimeField,
        direction: NudgeDirection,
    ) -> Result<f64, LessonError> {
        let index = self.require_current()?;
        let value = self
            .model
            .nudge(index, field, direction.signed(self.config.nudge_step_sec))?;
        self.refresh_selection();
        Ok(value)
    }

    pub fn insert_after_current(&mut self) -> usize {
        let index = self.model.insert_after(self.model.current_index());
        self.refresh_selection();
        index
    }

    pub fn delete_current(&mut self) -> Result<Option<usize>, LessonError> {
        let index = self.require_current()?;
        let current = self.model.delete_at(index)?;
        self.refresh_selection();
        Ok(current)
    }

    pub fn confirm_current(&mut self, value: bool) -> Result<(), LessonError> {
        let index = self.require_current()?;
        self.model.confirm(index, value)
    }

    pub fn edit_text(&mut self, index: usize, text: &str) -> Result<(), LessonError> {
        self.model.set_text(index, text)
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn fit_all(&mut self) {
        self.viewport.fit_all();
    }

    pub fn toggle_loop(&mut self) -> bool {
        self.loop_enabled = !self.loop_enabled;
        self.loop_enabled
    }

    pub fn set_play_speed(&mut self, speed: f64) -> Result<(), LessonError> {
        if !speed.is_finite() || speed <= 0.0 {
            return Err(LessonError::invalid_input(format!(
                "play speed must be positive, got {speed}"
            )));
        }
        self.play_speed = speed;
        self.playback.set_rate(speed);
        Ok(())
    }

    /// Apply a speed button label such as `"0.75x"`.
    pub fn set_play_speed_label(&mut self, label: &str) -> Result<f64, LessonError> {
        let speed = parse_speed_label(label).ok_or_else(|| {
            LessonError::invalid_input(format!("unrecognised speed label '{label}'"))
        })?;
        self.set_play_speed(speed)?;
        Ok(speed)
    }

    /// Preset button matching the current speed.
    pub fn active_speed_preset(&self) -> f64 {
        nearest_preset(self.play_speed)
    }

    pub fn toggle_practice_mode(&mut self, index: usize) -> Result<PracticeMode, LessonError> {
        self.model.toggle_practice_mode(index)
    }

    pub fn set_practice_mode(&mut self, index: usize, mode: PracticeMode) -> Result<(), LessonError> {
        self.model.set_practice_mode(index, mode)
    }

    /// Sentence text as the practice screen shows it: masked while hidden.
    pub fn practice_text(&self, index: usize) -> Result<String, LessonError> {
        let sentence = self
            .model
            .get(index)
            .ok_or_else(|| LessonError::sentence_index(index, self.model.len()))?;
        Ok(masked_text(&sentence.text, sentence.practice_mode))
    }

    fn require_current(&self) -> Result<usize, LessonError> {
        self.model
            .current_index()
            .ok_or_else(|| LessonError::invalid_input("no sentence selected"))
    }

    /// Push the current sentence into the viewport and zoom to it when timed.
    fn refresh_selection(&mut self) {
        match self.model.current() {
            Some(sentence) => {
                self.viewport.set_selection(sentence.begin, sentence.end);
                if let Some((begin, end)) = sentence.time_range() {
                    self.viewport.auto_zoom_to_segment(begin, end);
                }
            }
            None => self.viewport.set_selection(None, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::pipeline::builder::SessionBuilder;
    use crate::pipeline::defaults::SilentPlayback;

    #[derive(Default)]
    struct MemoryStore {
        records: Arc<Mutex<Vec<(PathBuf, LessonRecord)>>>,
    }

    impl LessonStore for MemoryStore {
        fn read_lesson(&self, path: &Path) -> Result<LessonRecord, LessonError> {
            self.records
                .lock()
                .unwrap()
                .iter()
                .rev()
                .find(|(p, _)| p == path)
                .map(|(_, r)| r.clone())
                .ok_or_else(|| {
                    LessonError::io(
                        "read lesson",
                        std::io::Error::new(std::io::ErrorKind::NotFound, "no record"),
                    )
                })
        }

        fn write_lesson(&self, path: &Path, record: &LessonRecord) -> Result<(), LessonError> {
            self.records
                .lock()
                .unwrap()
                .push((path.to_path_buf(), record.clone()));
            Ok(())
        }
    }

    struct KnownFiles(Vec<PathBuf>);

    impl AudioLocator for KnownFiles {
        fn exists(&self, path: &Path) -> bool {
            self.0.iter().any(|p| p == path)
        }
    }

    fn session_with(records: Arc<Mutex<Vec<(PathBuf, LessonRecord)>>>) -> EditorSession {
        SessionBuilder::new(EditorConfig::default())
            .with_store(Box::new(MemoryStore { records }))
            .with_playback(Box::new(SilentPlayback::default()))
            .with_locator(Box::new(KnownFiles(vec![
                PathBuf::from("/audio/talk.mp3"),
                PathBuf::from("/moved/talk.mp3"),
            ])))
            .build()
            .expect("build session")
    }

    fn opened() -> EditorSession {
        let mut session = session_with(Arc::default());
        session
            .open_audio_text(
                Path::new("/audio/talk.mp3"),
                Path::new("/audio/talk.txt"),
                "Hello world. This is great! One two three four.",
            )
            .unwrap();
        session
    }

    #[test]
    fn open_segments_text_and_selects_first_row() {
        let session = opened();
        assert_eq!(session.sentences().len(), 3);
        assert_eq!(session.current_index(), Some(0));
        assert_eq!(session.json_path(), None);
        assert!(!session.playback().is_playing());
    }

    #[test]
    fn open_with_missing_audio_changes_nothing() {
        let mut session = opened();
        let err = session
            .open_audio_text(Path::new("/nope.mp3"), Path::new("/nope.txt"), "Hi.")
            .unwrap_err();
        assert!(matches!(err, LessonError::MissingAudio { .. }));
        assert_eq!(session.sentences().len(), 3);
    }

    #[test]
    fn duration_triggers_assignment_and_zoom() {
        let mut session = opened();
        session.on_duration_known(16.0);
        assert!(session.sentences().iter().all(Sentence::is_timed));
        assert_eq!(session.sentences()[2].end, Some(16.0));
        let selection = session.viewport().selection().unwrap();
        assert_eq!(Some(selection), session.sentences()[0].time_range());
        assert!(session.viewport().has_explicit_view());
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut session = opened();
        assert_eq!(session.previous(), Some(0));
        assert_eq!(session.next(), Some(1));
        assert_eq!(session.next(), Some(2));
        assert_eq!(session.next(), Some(2));
        assert!(matches!(
            session.go_to(9),
            Err(LessonError::SentenceIndex { index: 9, len: 3 })
        ));
    }

    #[test]
    fn loop_tick_seeks_back_past_tolerance() {
        let mut session = opened();
        session.on_duration_known(16.0);
        let (begin, end) = session.sentences()[0].time_range().unwrap();
        assert!(!session.on_position_tick(end + 1.0), "loop is off");
        assert!(session.toggle_loop());
        assert!(!session.on_position_tick(end + 0.04));
        assert!(session.on_position_tick(end + 0.06));
        assert_eq!(session.playback().position_seconds(), begin);
    }

    #[test]
    fn loop_ignores_untimed_sentence() {
        let mut session = opened();
        session.toggle_loop();
        assert!(!session.on_position_tick(100.0));
    }

    #[test]
    fn play_sentence_seeks_to_begin() {
        let mut session = opened();
        session.on_duration_known(16.0);
        session.go_to(1).unwrap();
        session.set_play_speed(0.75).unwrap();
        session.play_sentence();
        assert!(session.playback().is_playing());
        assert_eq!(
            Some(session.playback().position_seconds()),
            session.sentences()[1].begin
        );
        session.toggle_pause();
        assert!(!session.playback().is_playing());
        assert!(session.set_play_speed(0.0).is_err());
        assert_eq!(session.play_speed(), 0.75);
    }

    #[test]
    fn keyboard_seek_clamps_to_duration() {
        let mut session = opened();
        session.on_duration_known(1.0);
        assert_eq!(session.seek_backward(), 0.0);
        let pos = session.seek_forward();
        assert!((pos - 0.3).abs() < 1e-12);
        session.seek_relative(5.0);
        assert_eq!(session.playback().position_seconds(), 1.0);
    }

    #[test]
    fn capture_and_typed_times_unconfirm() {
        let mut session = opened();
        session.confirm_current(true).unwrap();
        session.seek_relative(2.5);
        assert!(session.capture_playhead(TimeField::Begin).unwrap());
        assert_eq!(session.sentences()[0].begin, Some(2.5));
        assert!(!session.sentences()[0].confirmed);

        assert!(!session.set_time_from_text(TimeField::End, "   ").unwrap());
        assert!(matches!(
            session.set_time_from_text(TimeField::End, "abc"),
            Err(LessonError::InvalidTime { .. })
        ));
        assert!(session.set_time_from_text(TimeField::End, "00:04.000").unwrap());
        assert!(!session.set_time_from_text(TimeField::End, "00:04.000").unwrap());
        assert_eq!(session.viewport().selection(), Some((2.5, 4.0)));
    }

    #[test]
    fn nudge_uses_configured_step() {
        let mut session = opened();
        let v = session
            .nudge_current(TimeField::End, NudgeDirection::Up)
            .unwrap();
        assert!((v - 0.01).abs() < 1e-12);
        let v = session
            .nudge_current(TimeField::End, NudgeDirection::Down)
            .unwrap();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn insert_and_delete_follow_selection() {
        let mut session = opened();
        session.go_to(1).unwrap();
        assert_eq!(session.insert_after_current(), 2);
        assert_eq!(session.sentences()[2].text, "");
        assert_eq!(session.sentences()[3].id, 4);
        session.go_to(3).unwrap();
        assert_eq!(session.delete_current().unwrap(), Some(2));
        session.edit_text(2, "Fixed text.").unwrap();
        assert_eq!(session.sentences()[2].text, "Fixed text.");
    }

    #[test]
    fn save_guard_and_default_path() {
        let records: Arc<Mutex<Vec<(PathBuf, LessonRecord)>>> = Arc::default();
        let mut empty = session_with(records.clone());
        assert_eq!(empty.save().unwrap(), SaveOutcome::NothingToSave);
        assert!(records.lock().unwrap().is_empty());

        let mut session = session_with(records.clone());
        session
            .open_audio_text(Path::new("/audio/talk.mp3"), Path::new("/audio/talk.txt"), "A. B.")
            .unwrap();
        session.go_to(1).unwrap();
        assert_eq!(session.save().unwrap(), SaveOutcome::Saved);
        assert_eq!(session.json_path(), Some(Path::new("/audio/talk.json")));

        let stored = records.lock().unwrap();
        let (path, record) = stored.last().unwrap();
        assert_eq!(path, Path::new("/audio/talk.json"));
        assert_eq!(record.last_selected_sentence, 1);
        assert_eq!(record.sentences[0].begin, -1.0);
    }

    #[test]
    fn save_as_appends_extension() {
        let mut session = opened();
        session.save_as(Path::new("/lessons/week1")).unwrap();
        assert_eq!(session.json_path(), Some(Path::new("/lessons/week1.json")));
    }

    #[test]
    fn load_restores_state_and_resolves_missing_audio() {
        let records: Arc<Mutex<Vec<(PathBuf, LessonRecord)>>> = Arc::default();
        let mut session = session_with(records.clone());
        session
            .open_audio_text(
                Path::new("/audio/talk.mp3"),
                Path::new("/audio/talk.txt"),
                "One. Two. Three.",
            )
            .unwrap();
        session.on_duration_known(9.0);
        session.set_play_speed(1.2).unwrap();
        session.go_to(2).unwrap();
        session.save_as(Path::new("/lessons/talk.json")).unwrap();

        {
            let mut stored = records.lock().unwrap();
            let (_, record) = stored.last_mut().unwrap();
            record.audio_path = "/gone/talk.mp3".to_string();
        }

        let mut fresh = session_with(records.clone());
        let err = fresh
            .load_lesson(Path::new("/lessons/talk.json"), |_| None)
            .unwrap_err();
        assert!(matches!(err, LessonError::MissingAudio { .. }));
        assert!(fresh.sentences().is_empty());

        fresh
            .load_lesson(Path::new("/lessons/talk.json"), |missing| {
                assert_eq!(missing, Path::new("/gone/talk.mp3"));
                Some(PathBuf::from("/moved/talk.mp3"))
            })
            .unwrap();
        assert_eq!(fresh.audio_path(), Path::new("/moved/talk.mp3"));
        assert_eq!(fresh.current_index(), Some(2));
        assert_eq!(fresh.play_speed(), 1.2);
        assert_eq!(fresh.sentences(), session.sentences());
        assert_eq!(fresh.json_path(), Some(Path::new("/lessons/talk.json")));
    }

    #[test]
    fn practice_view_masks_until_shown_and_persists_mode() {
        let records: Arc<Mutex<Vec<(PathBuf, LessonRecord)>>> = Arc::default();
        let mut session = session_with(records.clone());
        session
            .open_audio_text(
                Path::new("/audio/talk.mp3"),
                Path::new("/audio/talk.txt"),
                "First line. Second line.",
            )
            .unwrap();
        assert_eq!(session.practice_text(0).unwrap(), "_".repeat(25));
        assert_eq!(session.toggle_practice_mode(1).unwrap(), PracticeMode::Show);
        assert_eq!(session.practice_text(1).unwrap(), "Second line.");
        assert_eq!(session.practice_text(0).unwrap(), "_".repeat(25));
        assert!(matches!(
            session.practice_text(2),
            Err(LessonError::SentenceIndex { index: 2, len: 2 })
        ));

        assert_eq!(session.set_play_speed_label("0.75x").unwrap(), 0.75);
        assert_eq!(session.active_speed_preset(), 0.75);
        assert!(session.set_play_speed_label("turbo").is_err());
        assert_eq!(session.play_speed(), 0.75);

        session.save_as(Path::new("/lessons/practice.json")).unwrap();
        let mut fresh = session_with(records);
        fresh
            .load_lesson(Path::new("/lessons/practice.json"), |_| None)
            .unwrap();
        assert_eq!(fresh.practice_text(1).unwrap(), "Second line.");
        fresh.set_practice_mode(1, PracticeMode::Hide).unwrap();
        assert_eq!(fresh.practice_text(1).unwrap(), "_".repeat(25));
    }

    #[test]
    fn waveform_columns_respect_minimum_width() {
        let mut session = opened();
        session.on_duration_known(16.0);
        assert_eq!(session.waveform_columns(10).len(), MIN_RENDER_STEPS + 1);
        assert_eq!(session.waveform_columns(800).len(), 801);
        session.zoom_in();
        session.zoom_out();
        session.fit_all();
        assert!(!session.viewport().has_explicit_view());
    }
}
