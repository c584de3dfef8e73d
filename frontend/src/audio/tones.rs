//! Tone recipes for the interface sound effects.

/// Gain every tone decays to before its oscillator stops. Exponential ramps
/// cannot reach zero, so this is the practical silence floor.
pub const GAIN_FLOOR: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// A single oscillator voice with an exponential decay envelope.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub waveform: Waveform,
    pub duration_secs: f64,
    pub peak_volume: f32,
}

impl ToneSpec {
    pub const fn new(
        frequency_hz: f32,
        waveform: Waveform,
        duration_secs: f64,
        peak_volume: f32,
    ) -> Self {
        Self {
            frequency_hz,
            waveform,
            duration_secs,
            peak_volume,
        }
    }
}

/// A tone placed at an offset from the moment its preset was requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledTone {
    pub delay_ms: u32,
    pub tone: ToneSpec,
}

impl ScheduledTone {
    const fn at(delay_ms: u32, tone: ToneSpec) -> Self {
        Self { delay_ms, tone }
    }

    pub fn delay_secs(&self) -> f64 {
        f64::from(self.delay_ms) / 1000.0
    }
}

pub const CONFIRM_TONE: [ScheduledTone; 2] = [
    ScheduledTone::at(0, ToneSpec::new(300.0, Waveform::Sine, 0.15, 0.1)),
    ScheduledTone::at(50, ToneSpec::new(600.0, Waveform::Triangle, 0.1, 0.05)),
];

pub const REWARD_TONE: [ScheduledTone; 3] = [
    ScheduledTone::at(0, ToneSpec::new(1200.0, Waveform::Sine, 0.1, 0.1)),
    ScheduledTone::at(80, ToneSpec::new(2000.0, Waveform::Sine, 0.3, 0.1)),
    ScheduledTone::at(150, ToneSpec::new(1500.0, Waveform::Square, 0.1, 0.05)),
];

pub const EXPAND_TONE: [ScheduledTone; 1] = [ScheduledTone::at(
    0,
    ToneSpec::new(400.0, Waveform::Sine, 0.2, 0.05),
)];

pub const TICK_TONE: [ScheduledTone; 1] = [ScheduledTone::at(
    0,
    ToneSpec::new(800.0, Waveform::Sine, 0.03, 0.02),
)];

/// Named feedback effects the page can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Primary action.
    Confirm,
    /// Claim button.
    Reward,
    /// Panel disclosure.
    Expand,
    /// Slider step.
    Tick,
}

impl Preset {
    pub fn recipe(self) -> &'static [ScheduledTone] {
        match self {
            Preset::Confirm => &CONFIRM_TONE,
            Preset::Reward => &REWARD_TONE,
            Preset::Expand => &EXPAND_TONE,
            Preset::Tick => &TICK_TONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_is_a_low_thock_followed_by_a_triangle_overtone() {
        let recipe = Preset::Confirm.recipe();
        assert_eq!(recipe.len(), 2);
        assert_eq!(recipe[0].delay_ms, 0);
        assert_eq!(recipe[0].tone, ToneSpec::new(300.0, Waveform::Sine, 0.15, 0.1));
        assert_eq!(recipe[1].delay_ms, 50);
        assert_eq!(recipe[1].tone.waveform, Waveform::Triangle);
        assert_eq!(recipe[1].tone.frequency_hz, 600.0);
    }

    #[test]
    fn reward_tones_are_staggered_in_order() {
        let delays: Vec<u32> = Preset::Reward.recipe().iter().map(|t| t.delay_ms).collect();
        assert_eq!(delays, vec![0, 80, 150]);
        let last = Preset::Reward.recipe()[2].tone;
        assert_eq!(last.waveform, Waveform::Square);
        assert_eq!(last.peak_volume, 0.05);
    }

    #[test]
    fn single_voice_presets() {
        assert_eq!(Preset::Expand.recipe(), &EXPAND_TONE);
        assert_eq!(Preset::Tick.recipe()[0].tone.duration_secs, 0.03);
        assert_eq!(Preset::Tick.recipe()[0].tone.peak_volume, 0.02);
    }

    #[test]
    fn every_peak_sits_above_the_decay_floor() {
        for preset in [Preset::Confirm, Preset::Reward, Preset::Expand, Preset::Tick] {
            for scheduled in preset.recipe() {
                assert!(scheduled.tone.peak_volume > GAIN_FLOOR, "{:?}", preset);
                assert!(scheduled.tone.duration_secs > 0.0);
            }
        }
    }

    #[test]
    fn delay_converts_to_seconds() {
        assert_eq!(REWARD_TONE[1].delay_secs(), 0.08);
    }
}
