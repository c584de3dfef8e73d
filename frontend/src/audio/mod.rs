//! Synthesized interface sounds.

pub mod engine;
pub mod tones;
pub mod web;

pub use engine::{SoundCue, ToneEngine};
pub use tones::Preset;
pub use web::WebAudioPlatform;

/// The engine the page runs with.
pub type PageTones = ToneEngine<WebAudioPlatform>;
