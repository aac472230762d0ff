//! Hard-clipping distortion.
//!
//! Applies percent input gain, then clips symmetrically at a threshold the
//! clip parameter slides between two fixed levels:
//!
//! ```text
//!        {  threshold, if x(n)·G >=  threshold
//! y(n) = { -threshold, if x(n)·G <= -threshold
//!        {  x(n)·G,    otherwise
//! ```
//!
//! At 0 % clip the threshold sits at 10 000 (mild, most of a 16-bit signal
//! passes clean); at 100 % it drops to 5 000 (heavy squaring).

use pedalera_core::{Effect, ParamDescriptor, ParamUnit, ParameterInfo, hard_clip};

/// Hard-clipping distortion with clip and gain controls.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Tick | Default |
/// |-------|------|-------|------|---------|
/// | 0 | Clipping | 0-100 % | 10 | 50 |
/// | 1 | Gain | 100-350 % | 10 | 150 |
#[derive(Debug, Clone)]
pub struct Distortion {
    enabled: bool,
    current_param: usize,
    clip_pct: f32,
    gain_pct: f32,
}

impl Distortion {
    /// Clip threshold at 0 % clipping (16-bit PCM scale).
    const THRESHOLD_HIGH: f32 = 10_000.0;
    /// Clip threshold at 100 % clipping.
    const THRESHOLD_LOW: f32 = 5_000.0;

    /// Create the effect with factory defaults, disabled.
    pub fn new() -> Self {
        Self {
            enabled: false,
            current_param: 0,
            clip_pct: 50.0,
            gain_pct: 150.0,
        }
    }

    /// Set clipping amount in percent (0-100).
    pub fn set_clip(&mut self, pct: f32) {
        self.clip_pct = pct.clamp(0.0, 100.0);
    }

    /// Set input gain in percent (100-350).
    pub fn set_gain(&mut self, pct: f32) {
        self.gain_pct = pct.clamp(100.0, 350.0);
    }

    /// The clip threshold the current settings resolve to.
    fn threshold(&self) -> f32 {
        Self::THRESHOLD_HIGH - (self.clip_pct / 100.0) * (Self::THRESHOLD_HIGH - Self::THRESHOLD_LOW)
    }
}

impl Default for Distortion {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Distortion {
    fn name(&self) -> &'static str {
        "Distortion"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn current_param(&self) -> usize {
        self.current_param
    }

    fn set_current_param(&mut self, index: usize) {
        self.current_param = index;
    }

    fn process_block(&mut self, _source: &[f32], rendered: &mut [f32], offset: usize, len: usize) {
        if !self.enabled {
            return;
        }

        let gain = self.gain_pct / 100.0;
        let threshold = self.threshold();

        for sample in &mut rendered[offset..offset + len] {
            *sample = hard_clip(*sample * gain, threshold);
        }
    }
}

impl ParameterInfo for Distortion {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Clipping",
                short_name: "Clip",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 50.0,
                step: 10.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Gain",
                short_name: "Gain",
                unit: ParamUnit::Percent,
                min: 100.0,
                max: 350.0,
                default: 150.0,
                step: 10.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.clip_pct,
            1 => self.gain_pct,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_clip(value),
            1 => self.set_gain(value),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: [f32; 128] = [0.0; 128];

    #[test]
    fn disabled_is_identity() {
        let mut dist = Distortion::new();
        let mut rendered = [12_000.0f32; 128];
        dist.process_block(&SOURCE, &mut rendered, 0, 128);
        assert_eq!(rendered, [12_000.0f32; 128]);
    }

    #[test]
    fn unity_settings_pass_small_signals() {
        let mut dist = Distortion::new();
        dist.set_enabled(true);
        dist.set_clip(0.0);
        dist.set_gain(100.0);

        // Below the 10 000 threshold nothing changes
        let mut rendered = [0.0f32; 128];
        for (i, sample) in rendered.iter_mut().enumerate() {
            *sample = (i as f32) * 78.0 - 4992.0; // spans ~±5000
        }
        let expected = rendered;
        dist.process_block(&SOURCE, &mut rendered, 0, 128);
        assert_eq!(rendered, expected);
    }

    #[test]
    fn clips_at_threshold() {
        let mut dist = Distortion::new();
        dist.set_enabled(true);
        dist.set_clip(0.0); // threshold 10 000
        dist.set_gain(100.0);

        let mut rendered = [20_000.0f32; 128];
        rendered[1] = -20_000.0;
        dist.process_block(&SOURCE, &mut rendered, 0, 128);
        assert_eq!(rendered[0], 10_000.0);
        assert_eq!(rendered[1], -10_000.0);
    }

    #[test]
    fn clip_lowers_threshold() {
        let mut dist = Distortion::new();
        dist.set_enabled(true);
        dist.set_gain(100.0);

        dist.set_clip(100.0); // threshold 5 000
        let mut rendered = [8_000.0f32; 128];
        dist.process_block(&SOURCE, &mut rendered, 0, 128);
        assert_eq!(rendered[0], 5_000.0);

        dist.set_clip(50.0); // threshold 7 500
        let mut rendered = [8_000.0f32; 128];
        dist.process_block(&SOURCE, &mut rendered, 0, 128);
        assert_eq!(rendered[0], 7_500.0);
    }

    #[test]
    fn gain_drives_into_clipping() {
        let mut dist = Distortion::new();
        dist.set_enabled(true);
        dist.set_clip(0.0);
        dist.set_gain(350.0);

        let mut rendered = [4_000.0f32; 128];
        dist.process_block(&SOURCE, &mut rendered, 0, 128);
        // 4000 * 3.5 = 14 000 -> clipped at 10 000
        assert_eq!(rendered[0], 10_000.0);
    }

    #[test]
    fn params_clamp_on_write() {
        let mut dist = Distortion::new();
        dist.set_param(0, 500.0);
        assert_eq!(dist.get_param(0), 100.0);
        dist.set_param(1, 0.0);
        assert_eq!(dist.get_param(1), 100.0);
    }
}
