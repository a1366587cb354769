use crate::config::EditorConfig;
use crate::error::LessonError;
use crate::pipeline::defaults::{
    BudgetedSentenceSplitter, FsAudioLocator, JsonFileStore, SilentPlayback,
};
use crate::pipeline::session::{EditorSession, EditorSessionParts};
use crate::pipeline::traits::{AudioLocator, LessonStore, PlaybackEngine, SentenceSplitter};

pub struct SessionBuilder {
    config: EditorConfig,
    store: Option<Box<dyn LessonStore>>,
    playback: Option<Box<dyn PlaybackEngine>>,
    locator: Option<Box<dyn AudioLocator>>,
    splitter: Option<Box<dyn SentenceSplitter>>,
}

impl SessionBuilder {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            store: None,
            playback: None,
            locator: None,
            splitter: None,
        }
    }

    pub fn with_store(mut self, store: Box<dyn LessonStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_playback(mut self, playback: Box<dyn PlaybackEngine>) -> Self {
        self.playback = Some(playback);
        self
    }

    pub fn with_locator(mut self, locator: Box<dyn AudioLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn with_splitter(mut self, splitter: Box<dyn SentenceSplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    pub fn build(self) -> Result<EditorSession, LessonError> {
        self.config.validate()?;
        if self.playback.is_none() {
            tracing::debug!("no playback engine supplied; session runs silent");
        }

        Ok(EditorSession::from_parts(EditorSessionParts {
            config: self.config,
            store: self.store.unwrap_or_else(|| Box::new(JsonFileStore)),
            playback: self
                .playback
                .unwrap_or_else(|| Box::new(SilentPlayback::default())),
            locator: self.locator.unwrap_or_else(|| Box::new(FsAudioLocator)),
            splitter: self
                .splitter
                .unwrap_or_else(|| Box::new(BudgetedSentenceSplitter)),
        }))
    }
}
