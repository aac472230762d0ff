//! Low-frequency oscillator for modulation effects.
//!
//! A bare phase accumulator in `[0, 1)` with cosine and triangle readouts.
//! Each modulation effect (tremolo, wah, flanger, vibrato) owns its own
//! instance; phase is never shared and survives enable/disable.
//!
//! The rate is passed to [`advance`](Lfo::advance) on every sample rather
//! than stored, so a parameter edit takes effect at the next processed
//! sample without any coefficient recalculation.

use core::f32::consts::TAU;
use libm::{cosf, fmodf};

/// Phase accumulator driving periodic modulation.
///
/// # Example
///
/// ```rust
/// use pedalera_core::Lfo;
///
/// let mut lfo = Lfo::new(44_100.0);
/// let gain = lfo.cosine(); // 1.0 at phase 0
/// lfo.advance(5.0);        // 5 Hz
/// ```
#[derive(Debug, Clone)]
pub struct Lfo {
    /// Current phase position [0.0, 1.0)
    phase: f32,
    /// Sample rate in Hz
    sample_rate: f32,
}

impl Lfo {
    /// Create a new LFO at phase 0.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            phase: 0.0,
            sample_rate,
        }
    }

    /// Get current phase (0.0 - 1.0).
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Cosine readout of the current phase: `cos(2π·phase)`, in [-1, 1].
    #[inline]
    pub fn cosine(&self) -> f32 {
        cosf(TAU * self.phase)
    }

    /// Triangle readout of the current phase, in [-1, 1].
    ///
    /// Rises from -1 at phase 0 to +1 at phase 0.5, then falls back.
    #[inline]
    pub fn triangle(&self) -> f32 {
        if self.phase < 0.5 {
            4.0 * self.phase - 1.0
        } else {
            3.0 - 4.0 * self.phase
        }
    }

    /// Advance the phase by one sample at the given rate, wrapping mod 1.
    ///
    /// A rate of 0 freezes the phase where it stands.
    #[inline]
    pub fn advance(&mut self, rate_hz: f32) {
        self.phase = fmodf(self.phase + rate_hz / self.sample_rate, 1.0);
    }

    /// Reset phase to 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_after_one_cycle() {
        let mut lfo = Lfo::new(44_100.0);

        // 1 Hz for one second of samples = exactly one cycle
        for _ in 0..44_100 {
            lfo.advance(1.0);
        }

        let error = lfo.phase().min((lfo.phase() - 1.0).abs());
        assert!(error < 0.01, "phase should wrap to ~0, got {}", lfo.phase());
    }

    #[test]
    fn cosine_starts_at_one() {
        let lfo = Lfo::new(44_100.0);
        assert!((lfo.cosine() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn triangle_shape() {
        let mut lfo = Lfo::new(44_100.0);
        assert!((lfo.triangle() - -1.0).abs() < 1e-6);

        // Quarter cycle at 1 Hz
        for _ in 0..11_025 {
            lfo.advance(1.0);
        }
        assert!(lfo.triangle().abs() < 0.01, "expected ~0 at phase 0.25");

        for _ in 0..11_025 {
            lfo.advance(1.0);
        }
        assert!(
            (lfo.triangle() - 1.0).abs() < 0.01,
            "expected ~1 at phase 0.5"
        );
    }

    #[test]
    fn outputs_stay_in_range() {
        let mut lfo = Lfo::new(44_100.0);
        for _ in 0..10_000 {
            lfo.advance(9.7);
            let c = lfo.cosine();
            let t = lfo.triangle();
            assert!((-1.0..=1.0).contains(&c));
            assert!((-1.0..=1.0).contains(&t));
        }
    }

    #[test]
    fn zero_rate_freezes_phase() {
        let mut lfo = Lfo::new(44_100.0);
        for _ in 0..1000 {
            lfo.advance(0.0);
        }
        assert_eq!(lfo.phase(), 0.0);
        assert!((lfo.cosine() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut lfo = Lfo::new(44_100.0);
        for _ in 0..123 {
            lfo.advance(3.0);
        }
        assert!(lfo.phase() > 0.0);
        lfo.reset();
        assert_eq!(lfo.phase(), 0.0);
    }
}
