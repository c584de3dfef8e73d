use std::cell::{Cell, RefCell};

use log::{debug, info, warn};

use super::tones::{Preset, ToneSpec, Waveform};
use crate::error::AudioError;

/// Creates the output context. Browsers only allow this after a user gesture.
pub trait AudioPlatform {
    type Sink: ToneSink;

    fn open(&self) -> Result<Self::Sink, AudioError>;
}

/// A live audio context able to voice one tone.
#[cfg_attr(test, mockall::automock)]
pub trait ToneSink {
    /// Starts `tone` `start_offset_secs` after the context's current time.
    fn play(&self, tone: &ToneSpec, start_offset_secs: f64) -> Result<(), AudioError>;
}

/// What the rest of the page asks of the sound layer.
#[cfg_attr(test, mockall::automock)]
pub trait SoundCue {
    fn play(&self, preset: Preset);
}

enum EngineState<S> {
    Uninitialized,
    Ready(S),
    /// Context creation failed. Stays this way for the session.
    Unavailable,
}

/// Owns the lazily created audio context and turns tone requests into
/// fire-and-forget oscillator voices.
pub struct ToneEngine<P: AudioPlatform> {
    platform: P,
    state: RefCell<EngineState<P::Sink>>,
    muted: Cell<bool>,
}

impl<P: AudioPlatform> ToneEngine<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            state: RefCell::new(EngineState::Uninitialized),
            muted: Cell::new(false),
        }
    }

    /// Creates the audio context on first call. Later calls do nothing, even
    /// after a failed attempt.
    pub fn initialize(&self) {
        let mut state = self.state.borrow_mut();
        if !matches!(*state, EngineState::Uninitialized) {
            return;
        }
        *state = match self.platform.open() {
            Ok(sink) => {
                info!("Audio context created");
                EngineState::Ready(sink)
            }
            Err(e) => {
                warn!("{}, sound effects disabled for this session", e);
                EngineState::Unavailable
            }
        };
    }

    #[cfg(test)]
    fn is_ready(&self) -> bool {
        matches!(*self.state.borrow(), EngineState::Ready(_))
    }

    pub fn is_muted(&self) -> bool {
        self.muted.get()
    }

    pub fn set_muted(&self, muted: bool) {
        self.muted.set(muted);
    }

    /// Flips the mute flag and returns the new value.
    pub fn toggle_muted(&self) -> bool {
        self.set_muted(!self.is_muted());
        self.is_muted()
    }

    pub fn emit(&self, frequency_hz: f32, waveform: Waveform, duration_secs: f64, peak_volume: f32) {
        self.voice(
            &ToneSpec::new(frequency_hz, waveform, duration_secs, peak_volume),
            0.0,
        );
    }

    pub fn confirm_tone(&self) {
        self.play_preset(Preset::Confirm);
    }

    pub fn reward_tone(&self) {
        self.play_preset(Preset::Reward);
    }

    pub fn expand_tone(&self) {
        self.play_preset(Preset::Expand);
    }

    pub fn tick_tone(&self) {
        self.play_preset(Preset::Tick);
    }

    pub fn play_preset(&self, preset: Preset) {
        for scheduled in preset.recipe() {
            self.voice(&scheduled.tone, scheduled.delay_secs());
        }
    }

    fn voice(&self, tone: &ToneSpec, start_offset_secs: f64) {
        if self.muted.get() {
            return;
        }
        if let EngineState::Ready(sink) = &*self.state.borrow() {
            if let Err(e) = sink.play(tone, start_offset_secs) {
                debug!("Dropped {} Hz tone: {}", tone.frequency_hz, e);
            }
        }
    }
}

impl<P: AudioPlatform> SoundCue for ToneEngine<P> {
    fn play(&self, preset: Preset) {
        self.play_preset(preset);
    }
}
