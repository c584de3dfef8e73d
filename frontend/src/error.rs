use thiserror::Error;

/// Failures at the audio platform boundary. The tone engine absorbs these;
/// nothing above it ever sees one.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    #[error("Audio output unavailable: {0}")]
    Unsupported(String),
    #[error("Tone playback failed: {0}")]
    Playback(String),
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse page content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Testimonial panel id {0} is used more than once")]
    DuplicatePanel(u32),
}
