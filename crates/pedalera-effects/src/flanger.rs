//! Flanger - whoosh from a cosine-modulated short delay.
//!
//! The dry sample is averaged with a copy of the raw input read a few
//! hundred samples back, where the lookback rides a cosine LFO:
//!
//! ```text
//! L(n) = 1 + (max/2)·(1 - d·cos(2π·phase)),  max = delay·fs/1000
//! y(n) = (x(n) + source[n - L(n)]) / 2
//! ```
//!
//! The delayed tap reads the `source` plane, not the rendered buffer, so
//! the comb sweeps over the unprocessed waveform regardless of what the
//! effects before it did. The 50/50 mix is fixed.

use pedalera_core::{
    Effect, Lfo, ParamDescriptor, ParamUnit, ParameterInfo, SAMPLE_RATE, lookback, ms_to_samples,
};

/// Flanger effect with rate, depth, and max-delay controls.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Tick | Default |
/// |-------|------|-------|------|---------|
/// | 0 | Rate | 0.1-1 Hz | 0.1 | 0.5 |
/// | 1 | Depth | 0-100 % | 10 | 50 |
/// | 2 | Delay | 0-15 ms | 1 | 2 |
#[derive(Debug, Clone)]
pub struct Flanger {
    enabled: bool,
    current_param: usize,
    rate_hz: f32,
    depth_pct: f32,
    delay_ms: f32,
    lfo: Lfo,
}

impl Flanger {
    /// Create the effect with factory defaults, disabled.
    pub fn new() -> Self {
        Self {
            enabled: false,
            current_param: 0,
            rate_hz: 0.5,
            depth_pct: 50.0,
            delay_ms: 2.0,
            lfo: Lfo::new(SAMPLE_RATE),
        }
    }

    /// Set LFO rate in Hz (0.1-1).
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.rate_hz = rate_hz.clamp(0.1, 1.0);
    }

    /// Set sweep depth in percent (0-100).
    pub fn set_depth(&mut self, pct: f32) {
        self.depth_pct = pct.clamp(0.0, 100.0);
    }

    /// Set maximum sweep delay in milliseconds (0-15).
    pub fn set_delay(&mut self, ms: f32) {
        self.delay_ms = ms.clamp(0.0, 15.0);
    }
}

impl Default for Flanger {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Flanger {
    fn name(&self) -> &'static str {
        "Flanger"
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

    fn process_block(&mut self, source: &[f32], rendered: &mut [f32], offset: usize, len: usize) {
        if !self.enabled {
            return;
        }

        // Integer half of the sweep range, as the delay lengths were tuned
        let half = (ms_to_samples(self.delay_ms) / 2) as f32;
        let depth = self.depth_pct / 100.0;

        for i in offset..offset + len {
            let x = rendered[i];

            let behind = (1.0 + half * (1.0 - depth * self.lfo.cosine())) as usize;
            let delayed = lookback(source, i, behind);

            rendered[i] = (x + delayed) / 2.0;

            self.lfo.advance(self.rate_hz);
        }
    }
}

impl ParameterInfo for Flanger {
    fn param_count(&self) -> usize {
        3
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Rate",
                short_name: "Rate",
                unit: ParamUnit::Hertz,
                min: 0.1,
                max: 1.0,
                default: 0.5,
                step: 0.1,
            }),
            1 => Some(ParamDescriptor {
                name: "Depth",
                short_name: "Depth",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 50.0,
                step: 10.0,
            }),
            2 => Some(ParamDescriptor {
                name: "Delay",
                short_name: "Delay",
                unit: ParamUnit::Milliseconds,
                min: 0.0,
                max: 15.0,
                default: 2.0,
                step: 1.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.rate_hz,
            1 => self.depth_pct,
            2 => self.delay_ms,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_rate(value),
            1 => self.set_depth(value),
            2 => self.set_delay(value),
            _ => {}
        }
    }
}
