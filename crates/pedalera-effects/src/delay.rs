//! Delay - feedback echo.
//!
//! Mixes a gained copy of what the chain produced `D` samples ago back
//! into the current sample:
//!
//! ```text
//! y(n) = x(n) + (feedback/100)·rendered[n - D],  D = delay·fs/1000
//! ```
//!
//! The tap reads the `rendered` plane — the very buffer being written — so
//! repeats of repeats decay geometrically, a genuine feedback echo rather
//! than a single slapback.
//!
//! At `delay = 0` the tap lands on the sample being computed *before* it is
//! overwritten, collapsing the effect into a `1 + feedback` gain stage
//! instead of an echo. That quirk is long-standing observed behavior and is
//! pinned by a test; don't "fix" it without a product decision.

use pedalera_core::{Effect, ParamDescriptor, ParamUnit, ParameterInfo, lookback, ms_to_samples};

/// Feedback delay with feedback amount and delay time controls.
///
/// ## Parameter Indices (`ParameterInfo`)
///
/// | Index | Name | Range | Tick | Default |
/// |-------|------|-------|------|---------|
/// | 0 | Feedback | 0-100 % | 5 | 50 |
/// | 1 | Delay | 0-1000 ms | 50 | 500 |
#[derive(Debug, Clone)]
pub struct Delay {
    enabled: bool,
    current_param: usize,
    feedback_pct: f32,
    delay_ms: f32,
}

impl Delay {
    /// Create the effect with factory defaults, disabled.
    pub fn new() -> Self {
        Self {
            enabled: false,
            current_param: 0,
            feedback_pct: 50.0,
            delay_ms: 500.0,
        }
    }

    /// Set feedback amount in percent (0-100).
    pub fn set_feedback(&mut self, pct: f32) {
        self.feedback_pct = pct.clamp(0.0, 100.0);
    }

    /// Set delay time in milliseconds (0-1000).
    pub fn set_delay(&mut self, ms: f32) {
        self.delay_ms = ms.clamp(0.0, 1000.0);
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for Delay {
    fn name(&self) -> &'static str {
        "Delay"
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

        // Recomputed once per block; a delay edit lands on the next block
        let delay_samples = ms_to_samples(self.delay_ms);
        let feedback = self.feedback_pct / 100.0;

        for i in offset..offset + len {
            let x = rendered[i];
            let delayed = lookback(rendered, i, delay_samples);
            rendered[i] = x + feedback * delayed;
        }
    }
}

impl ParameterInfo for Delay {
    fn param_count(&self) -> usize {
        2
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Feedback",
                short_name: "Fdbk",
                unit: ParamUnit::Percent,
                min: 0.0,
                max: 100.0,
                default: 50.0,
                step: 5.0,
            }),
            1 => Some(ParamDescriptor {
                name: "Delay",
                short_name: "Delay",
                unit: ParamUnit::Milliseconds,
                min: 0.0,
                max: 1000.0,
                default: 500.0,
                step: 50.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.feedback_pct,
            1 => self.delay_ms,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_feedback(value),
            1 => self.set_delay(value),
            _ => {}
        }
    }
}
