//! Pedalera Effects - the pedal's six block effects
//!
//! Each effect implements [`pedalera_core::Effect`] and
//! [`pedalera_core::ParameterInfo`] over a window of the shared history
//! ring:
//!
//! - [`Distortion`] - hard clipping with percent gain and a clip-controlled
//!   threshold
//! - [`Tremolo`] - cosine-LFO amplitude modulation
//! - [`WahWah`] - bandpass filter with triangle-LFO-modulated centre
//!   frequency, retuned every sample
//! - [`Flanger`] - cosine-modulated short lookback mixed 50/50 with the dry
//!   signal
//! - [`Delay`] - feedback echo reading from the buffer being written
//! - [`Vibrato`] - pure delayed signal with modulated lookback
//!
//! All six power on disabled with the factory default parameter values, and
//! all honor the identity contract: a disabled effect leaves its block
//! window untouched.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay;
pub mod distortion;
pub mod flanger;
pub mod tremolo;
pub mod vibrato;
pub mod wahwah;

// Re-export main types at crate root
pub use delay::Delay;
pub use distortion::Distortion;
pub use flanger::Flanger;
pub use tremolo::Tremolo;
pub use vibrato::Vibrato;
pub use wahwah::WahWah;
