use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

use super::engine::{AudioPlatform, ToneSink};
use super::tones::{ToneSpec, Waveform, GAIN_FLOOR};
use crate::error::AudioError;

/// Browser Web Audio backend.
#[derive(Default)]
pub struct WebAudioPlatform;

impl AudioPlatform for WebAudioPlatform {
    type Sink = WebAudioSink;

    fn open(&self) -> Result<WebAudioSink, AudioError> {
        if web_sys::window().is_none() {
            return Err(AudioError::Unsupported("no browser window".to_string()));
        }
        let ctx = AudioContext::new().map_err(|e| AudioError::Unsupported(js_message(&e)))?;
        // Some browsers hand out a suspended context even inside a gesture.
        if ctx.state() == AudioContextState::Suspended {
            if let Err(e) = ctx.resume() {
                debug!("Audio context resume rejected: {}", js_message(&e));
            }
        }
        Ok(WebAudioSink { ctx })
    }
}

pub struct WebAudioSink {
    ctx: AudioContext,
}

impl ToneSink for WebAudioSink {
    fn play(&self, tone: &ToneSpec, start_offset_secs: f64) -> Result<(), AudioError> {
        let start = self.ctx.current_time() + start_offset_secs;
        let end = start + tone.duration_secs;

        let osc = self.ctx.create_oscillator().map_err(playback)?;
        let gain = self.ctx.create_gain().map_err(playback)?;

        osc.set_type(oscillator_type(tone.waveform));
        osc.frequency()
            .set_value_at_time(tone.frequency_hz, start)
            .map_err(playback)?;
        gain.gain()
            .set_value_at_time(tone.peak_volume, start)
            .map_err(playback)?;
        gain.gain()
            .exponential_ramp_to_value_at_time(GAIN_FLOOR, end)
            .map_err(playback)?;

        osc.connect_with_audio_node(&gain).map_err(playback)?;
        gain.connect_with_audio_node(&self.ctx.destination())
            .map_err(playback)?;

        osc.start_with_when(start).map_err(playback)?;
        osc.stop_with_when(end).map_err(playback)?;
        Ok(())
    }
}

fn oscillator_type(waveform: Waveform) -> OscillatorType {
    match waveform {
        Waveform::Sine => OscillatorType::Sine,
        Waveform::Square => OscillatorType::Square,
        Waveform::Sawtooth => OscillatorType::Sawtooth,
        Waveform::Triangle => OscillatorType::Triangle,
    }
}

fn playback(e: JsValue) -> AudioError {
    AudioError::Playback(js_message(&e))
}

fn js_message(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
