//! WahWah - bandpass filter swept by a triangle LFO.
//!
//! A Direct Form I biquad bandpass runs over the rendered signal while its
//! centre frequency rides a triangle LFO around the configured centre:
//!
//! ```text
//! cutoff(n) = centre + t(phase)·(depth/100)·centre
//! ```
//!
//! where `t` is the triangle readout in [-1, 1]. The coefficients are
//! recomputed from the RBJ cookbook formula on every sample at a fixed
//! Q of 2.3 — the retune itself is what produces the vowel-like sweep.

use pedalera_core::{
    Biquad, Effect, Lfo, ParamDescriptor, ParamUnit, ParameterInfo, SAMPLE_RATE,
    bandpass_coefficients,
};

/// Wah effect with LFO-swept bandpass centre.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Tick | Default |
/// |-------|------|-------|------|---------|
/// | 0 | Cutoff | 100-4000 Hz | 100 | 550 |
/// | 1 | Rate | 1-10 Hz | 1 | 4 |
/// | 2 | Depth | 0-100 % | 10 | 70 |
#[derive(Debug, Clone)]
pub struct WahWah {
    enabled: bool,
    current_param: usize,
    centre_hz: f32,
    rate_hz: f32,
    depth_pct: f32,
    lfo: Lfo,
    filter: Biquad,
}

impl WahWah {
    /// Filter quality factor; sets the attenuation skirt around the cutoff.
    const Q_FACTOR: f32 = 2.3;

    /// Create the effect with factory defaults, disabled.
    pub fn new() -> Self {
        Self {
            enabled: false,
            current_param: 0,
            centre_hz: 550.0,
            rate_hz: 4.0,
            depth_pct: 70.0,
            lfo: Lfo::new(SAMPLE_RATE),
            filter: Biquad::new(),
        }
    }

    /// Set the sweep centre frequency in Hz (100-4000).
    pub fn set_centre(&mut self, hz: f32) {
        self.centre_hz = hz.clamp(100.0, 4000.0);
    }

    /// Set LFO rate in Hz (1-10).
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.rate_hz = rate_hz.clamp(1.0, 10.0);
    }

    /// Set sweep depth in percent (0-100).
    pub fn set_depth(&mut self, pct: f32) {
        self.depth_pct = pct.clamp(0.0, 100.0);
    }
}

impl Default for WahWah {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for WahWah {
    fn name(&self) -> &'static str {
        "WahWah"
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

        let depth = self.depth_pct / 100.0;

        for sample in &mut rendered[offset..offset + len] {
            self.lfo.advance(self.rate_hz);

            let cutoff = self.centre_hz + self.lfo.triangle() * depth * self.centre_hz;
            let (b0, b1, b2, a0, a1, a2) =
                bandpass_coefficients(cutoff, Self::Q_FACTOR, SAMPLE_RATE);
            self.filter.set_coefficients(b0, b1, b2, a0, a1, a2);

            *sample = self.filter.process(*sample);
        }
    }
}

impl ParameterInfo for WahWah {
    fn param_count(&self) -> usize {
        3
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Cutoff",
                short_name: "Cutoff",
                unit: ParamUnit::Hertz,
                min: 100.0,
                max: 4000.0,
                default: 550.0,
                step: 100.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Rate",
                short_name: "Rate",
                unit: ParamUnit::Hertz,
                min: 1.0,
                max: 10.0,
                default: 4.0,
                step: 1.0,
            }),
            2 => Some(ParamDescriptor {
                name: "Depth",
                short_name: "Depth",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 70.0,
                step: 10.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.centre_hz,
            1 => self.rate_hz,
            2 => self.depth_pct,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_centre(value),
            1 => self.set_rate(value),
            2 => self.set_depth(value),
            _ => {}
        }
    }
}
