//! Core Effect trait and the combined UI control surface.
//!
//! Every effect in the chain implements [`Effect`]: an enable flag, a cursor
//! over its parameters, and a block-processing routine over a window of the
//! shared history ring. The trait is object-safe so the chain can hold
//! `Box<dyn ...>` slots in a fixed arena.
//!
//! ## The block contract
//!
//! [`Effect::process_block`] is called once per block per effect, in chain
//! order, whether or not the effect is enabled. A disabled effect must leave
//! `rendered[offset..offset + len)` untouched — the identity no-op stands in
//! for skipping, so the chain never branches.
//!
//! Effects that model feedback or gain staging read and write `rendered`;
//! effects that model pitch/time modulation of the dry signal read `source`
//! and write `rendered`. Both slices span the whole ring; the window is
//! `offset..offset + len`.

use crate::param_info::ParameterInfo;

/// Core trait for all block effects.
pub trait Effect {
    /// Display name of the effect.
    fn name(&self) -> &'static str;

    /// Whether the effect currently processes audio.
    fn enabled(&self) -> bool;

    /// Enable or disable the effect.
    ///
    /// A pure flag flip: LFO phase and filter history persist across
    /// enable/disable so re-enabling picks up where modulation left off.
    fn set_enabled(&mut self, enabled: bool);

    /// Index of the parameter the UI is currently editing.
    fn current_param(&self) -> usize;

    /// Move the UI cursor. Callers keep `index < param_count()`.
    fn set_current_param(&mut self, index: usize);

    /// Process one block window in place.
    ///
    /// * `source` - the unmodified capture history (read-only)
    /// * `rendered` - the shared working buffer, mutated in place
    /// * `offset` - start of this block's window in the ring
    /// * `len` - window length in samples
    ///
    /// Must be an identity no-op on the window when disabled.
    fn process_block(&mut self, source: &[f32], rendered: &mut [f32], offset: usize, len: usize);
}

/// Combined effect + parameter surface the UI operates through.
///
/// Adds cyclic parameter selection and saturating adjustment on top of
/// [`Effect`] and [`ParameterInfo`]. Blanket-implemented for every type that
/// implements both, so concrete effects get the whole surface for free.
pub trait EffectWithParams: Effect + ParameterInfo {
    /// Advance the parameter cursor, wrapping from the last back to 0.
    fn select_next(&mut self) {
        let count = self.param_count();
        if count == 0 {
            return;
        }
        let next = self.current_param() + 1;
        self.set_current_param(if next >= count { 0 } else { next });
    }

    /// Retreat the parameter cursor, wrapping from 0 back to the last.
    fn select_previous(&mut self) {
        let count = self.param_count();
        if count == 0 {
            return;
        }
        let current = self.current_param();
        self.set_current_param(if current == 0 { count - 1 } else { current - 1 });
    }

    /// Nudge the selected parameter by `direction` steps (+1 or -1).
    ///
    /// Saturating: at a bound the adjustment is a no-op, never an error.
    fn adjust(&mut self, direction: i32) {
        let index = self.current_param();
        if let Some(desc) = self.param_info(index) {
            let value = self.get_param(index) + direction as f32 * desc.step;
            self.set_param(index, desc.clamp(value));
        }
    }
}

impl<T: Effect + ParameterInfo> EffectWithParams for T {}
