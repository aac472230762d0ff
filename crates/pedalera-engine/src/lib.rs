//! Pedalera Engine - the pedal's real-time block loop
//!
//! Ties the DSP pieces together into the firmware main loop:
//!
//! - [`AudioIoDriver`] - the trait boundary to the codec/DMA hardware
//!   (capture and playback halves, volume, mute)
//! - [`BufferNotifier`] - the single interrupt-to-main-loop flag the
//!   ping-pong protocol runs on
//! - [`EffectChain`] / [`EffectId`] - the six effects in fixed order,
//!   stored in an arena indexed by id
//! - [`BufferCoordinator`] - the per-block cycle: consume a notification,
//!   capture into the history ring, run the chain, hand back a stereo block
//! - [`ControlCommand`] - the UI's only way in, serialized against audio by
//!   muting the output for the duration of each edit
//!
//! ## Thread model
//!
//! Everything runs on the main loop except [`BufferNotifier::raise`], which
//! is the one interrupt-callable entry point (it only stores an atomic).
//! There is no queue and no backpressure: if a block isn't consumed before
//! the hardware refills its half, that block is silently dropped — the ring
//! is simply overwritten on the next cycle. A UI running on a genuinely
//! separate thread would need real synchronization around the chain; the
//! mute-around-edit trick only serializes against the audio hardware.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod chain;
pub mod control;
pub mod coordinator;
pub mod driver;
pub mod notifier;

// Re-export main types at crate root, plus the core traits consumers need
// in scope to drive chain slots
pub use chain::{EffectChain, EffectId, UnknownEffectId};
pub use control::ControlCommand;
pub use coordinator::BufferCoordinator;
pub use driver::{AudioIoDriver, BufferHalf};
pub use notifier::BufferNotifier;
pub use pedalera_core::{Effect, EffectWithParams, ParameterInfo};
