//! The fixed effect chain and its id-indexed arena.
//!
//! The six effects live in a fixed-size arena in declared processing order:
//! Distortion, Tremolo, WahWah, Flanger, Delay, Vibrato. The order is part
//! of the design contract — it never changes at runtime, and [`EffectId`]
//! doubles as both the UI's selection handle and the arena index.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use pedalera_core::{Effect, EffectWithParams};
use pedalera_effects::{Delay, Distortion, Flanger, Tremolo, Vibrato, WahWah};

/// Identifies one of the six effects. Doubles as the arena index.
///
/// The UI selects effects by this fixed integer id; the numeric values are
/// stable across firmware revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectId {
    /// Hard-clipping distortion.
    Distortion = 0,
    /// Amplitude modulation.
    Tremolo = 1,
    /// Swept bandpass filter.
    WahWah = 2,
    /// Modulated short delay, 50/50 mix.
    Flanger = 3,
    /// Feedback echo.
    Delay = 4,
    /// Modulated delay, pure wet.
    Vibrato = 5,
}

/// Error for an integer id with no effect behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown effect id {0}")]
pub struct UnknownEffectId(pub u8);

impl EffectId {
    /// Number of effects in the chain.
    pub const COUNT: usize = 6;

    /// All ids in processing order.
    pub const ALL: [EffectId; Self::COUNT] = [
        EffectId::Distortion,
        EffectId::Tremolo,
        EffectId::WahWah,
        EffectId::Flanger,
        EffectId::Delay,
        EffectId::Vibrato,
    ];

    /// Arena index of this effect.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for EffectId {
    type Error = UnknownEffectId;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(EffectId::Distortion),
            1 => Ok(EffectId::Tremolo),
            2 => Ok(EffectId::WahWah),
            3 => Ok(EffectId::Flanger),
            4 => Ok(EffectId::Delay),
            5 => Ok(EffectId::Vibrato),
            other => Err(UnknownEffectId(other)),
        }
    }
}

/// One chain slot: any effect plus its parameter surface.
type Slot = Box<dyn EffectWithParams + Send>;

/// The six effects in fixed processing order.
///
/// Constructed once at power-on with every effect disabled at its factory
/// defaults; slots are never added, removed, or reordered afterwards.
pub struct EffectChain {
    slots: [Slot; EffectId::COUNT],
}

impl EffectChain {
    /// Build the chain in its power-on state.
    pub fn new() -> Self {
        Self {
            slots: [
                Box::new(Distortion::new()),
                Box::new(Tremolo::new()),
                Box::new(WahWah::new()),
                Box::new(Flanger::new()),
                Box::new(Delay::new()),
                Box::new(Vibrato::new()),
            ],
        }
    }

    /// Borrow an effect's control surface.
    pub fn effect(&self, id: EffectId) -> &(dyn EffectWithParams + Send) {
        &*self.slots[id.index()]
    }

    /// Mutably borrow an effect's control surface.
    pub fn effect_mut(&mut self, id: EffectId) -> &mut (dyn EffectWithParams + Send) {
        &mut *self.slots[id.index()]
    }

    /// Run every effect over the block window, in chain order.
    ///
    /// Each effect is invoked unconditionally; disabled effects honor the
    /// identity contract instead of being skipped here.
    pub fn process_block(
        &mut self,
        source: &[f32],
        rendered: &mut [f32],
        offset: usize,
        len: usize,
    ) {
        for slot in &mut self.slots {
            slot.process_block(source, rendered, offset, len);
        }
    }
}

impl Default for EffectChain {
    fn default() -> Self {
        Self::new()
    }
}
