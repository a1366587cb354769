pub mod assignment;
pub mod model;
pub mod segmentation;
pub mod timecode;
