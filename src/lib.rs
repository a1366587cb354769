pub mod alignment;
pub mod config;
pub mod error;
pub mod lesson;
pub mod pipeline;
pub mod practice;
pub mod types;
pub mod viewport;

pub use alignment::model::AlignmentModel;
pub use alignment::segmentation::segment_sentences;
pub use alignment::timecode::{format_time, parse_time};
pub use config::EditorConfig;
pub use error::LessonError;
pub use lesson::LessonRecord;
pub use pipeline::builder::SessionBuilder;
pub use pipeline::session::EditorSession;
pub use pipeline::traits::{AudioLocator, LessonStore, PlaybackEngine, SentenceSplitter};
pub use types::{Lesson, NudgeDirection, SaveOutcome, Sentence, TimeField};
pub use viewport::ViewportController;
