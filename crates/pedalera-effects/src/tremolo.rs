//! Tremolo - rhythmic volume modulation.
//!
//! Classic amplitude modulation: the sample is scaled by a cosine LFO
//! blended against unity gain by the depth parameter:
//!
//! ```text
//! y(n) = x(n) · ((1 - d) + d·cos(2π·phase)),  d = depth/100
//! ```
//!
//! At zero depth the factor is exactly 1 for any rate. At full depth the
//! gain swings between -1 and +1 through the cycle, and a frozen phase
//! (rate 0) holds the factor at 1.

use pedalera_core::{Effect, Lfo, ParamDescriptor, ParamUnit, ParameterInfo, SAMPLE_RATE};

/// Tremolo effect with depth and rate controls.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Tick | Default |
/// |-------|------|-------|------|---------|
/// | 0 | Depth | 0-100 % | 10 | 50 |
/// | 1 | Rate | 1-7 Hz | 0.5 | 5 |
#[derive(Debug, Clone)]
pub struct Tremolo {
    enabled: bool,
    current_param: usize,
    depth_pct: f32,
    rate_hz: f32,
    lfo: Lfo,
}

impl Tremolo {
    /// Create the effect with factory defaults, disabled.
    pub fn new() -> Self {
        Self {
            enabled: false,
            current_param: 0,
            depth_pct: 50.0,
            rate_hz: 5.0,
            lfo: Lfo::new(SAMPLE_RATE),
        }
    }

    /// Set modulation depth in percent (0-100).
    pub fn set_depth(&mut self, pct: f32) {
        self.depth_pct = pct.clamp(0.0, 100.0);
    }

    /// Set LFO rate in Hz (1-7).
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.rate_hz = rate_hz.clamp(1.0, 7.0);
    }
}

impl Default for Tremolo {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Tremolo {
    fn name(&self) -> &'static str {
        "Tremolo"
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
            *sample *= (1.0 - depth) + depth * self.lfo.cosine();
            self.lfo.advance(self.rate_hz);
        }
    }
}

impl ParameterInfo for Tremolo {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Depth",
                short_name: "Depth",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 50.0,
                step: 10.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Rate",
                short_name: "Rate",
                unit: ParamUnit::Hertz,
                min: 1.0,
                max: 7.0,
                default: 5.0,
                step: 0.5,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.depth_pct,
            1 => self.rate_hz,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_depth(value),
            1 => self.set_rate(value),
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
        let mut trem = Tremolo::new();
        let mut rendered = [1000.0f32; 128];
        trem.process_block(&SOURCE, &mut rendered, 0, 128);
        assert_eq!(rendered, [1000.0f32; 128]);
    }

    #[test]
    fn zero_depth_is_identity() {
        let mut trem = Tremolo::new();
        trem.set_enabled(true);
        trem.set_depth(0.0);
        trem.set_rate(7.0);

        let mut rendered = [1000.0f32; 128];
        trem.process_block(&SOURCE, &mut rendered, 0, 128);
        for &sample in &rendered {
            assert!((sample - 1000.0).abs() < 1e-3, "got {sample}");
        }
    }

    #[test]
    fn frozen_phase_at_full_depth_is_identity() {
        let mut trem = Tremolo::new();
        trem.set_enabled(true);
        trem.set_depth(100.0);
        // Rate 0 sits below the UI minimum; force it to freeze the phase
        // at 0, where the amplitude factor is exactly 1.
        trem.rate_hz = 0.0;

        let mut rendered = [1000.0f32; 128];
        trem.process_block(&SOURCE, &mut rendered, 0, 128);
        for &sample in &rendered {
            assert!((sample - 1000.0).abs() < 1e-3, "got {sample}");
        }
    }

    #[test]
    fn full_depth_sweeps_gain() {
        let mut trem = Tremolo::new();
        trem.set_enabled(true);
        trem.set_depth(100.0);
        trem.set_rate(7.0);

        // Run enough blocks to cover a full LFO cycle (44100/7 ≈ 6300
        // samples) and record the gain extremes.
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for _ in 0..64 {
            let mut rendered = [1000.0f32; 128];
            trem.process_block(&SOURCE, &mut rendered, 0, 128);
            for &sample in &rendered {
                min = min.min(sample);
                max = max.max(sample);
            }
        }
        assert!(max > 990.0, "gain should reach ~1, got max {max}");
        assert!(min < -990.0, "gain should reach ~-1, got min {min}");
    }

    #[test]
    fn phase_persists_across_disable() {
        let mut trem = Tremolo::new();
        trem.set_enabled(true);
        trem.set_rate(5.0);

        let mut rendered = [1000.0f32; 128];
        trem.process_block(&SOURCE, &mut rendered, 0, 128);
        let phase_after = trem.lfo.phase();

        trem.set_enabled(false);
        trem.process_block(&SOURCE, &mut rendered, 0, 128);
        assert_eq!(trem.lfo.phase(), phase_after);
    }

    #[test]
    fn rate_clamps_to_range() {
        let mut trem = Tremolo::new();
        trem.set_param(1, 0.25);
        assert_eq!(trem.get_param(1), 1.0);
        trem.set_param(1, 100.0);
        assert_eq!(trem.get_param(1), 7.0);
    }
}
