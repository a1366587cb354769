use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LessonError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("invalid time '{input}': expected mm:ss.mmm")]
    InvalidTime { input: String },
    #[error("sentence index {index} out of range (0..{len})")]
    SentenceIndex { index: usize, len: usize },
    #[error("audio file not found: {}", path.display())]
    MissingAudio { path: PathBuf },
    #[error("{context}: {message}")]
    Playback {
        context: &'static str,
        message: String,
    },
}

impl LessonError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_time(input: impl Into<String>) -> Self {
        Self::InvalidTime {
            input: input.into(),
        }
    }

    pub(crate) fn sentence_index(index: usize, len: usize) -> Self {
        Self::SentenceIndex { index, len }
    }

    pub fn playback(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Playback {
            context,
            message: err.to_string(),
        }
    }
}
