//! Pedalera Core - DSP primitives for the guitar-effects engine
//!
//! This crate provides the foundational building blocks the effect chain and
//! the real-time block loop are built from, designed for zero allocation on
//! the per-block hot path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for all block effects
//! - [`EffectWithParams`] - Combined effect + parameter control surface
//!   (cyclic parameter selection, saturating adjustment)
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Parameter introspection for
//!   the pedal's touch UI
//!
//! ## DSP Building Blocks
//!
//! - [`Lfo`] - Phase accumulator with cosine and triangle readouts
//! - [`Biquad`] - Second-order IIR filter (Direct Form I) with RBJ bandpass
//!   coefficients
//! - [`HistoryBuffer`] / [`lookback`] - Shared circular sample history with
//!   bounded lookback addressing
//!
//! ## Configuration
//!
//! Everything is fixed at compile time in [`config`]: 44.1 kHz sample rate,
//! 128-sample blocks, a 45 056-sample ring (352 blocks, about a second of
//! history).
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded targets. Disable the
//! default `std` feature:
//!
//! ```toml
//! [dependencies]
//! pedalera-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: no allocations in block-processing paths
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Object-safe traits**: the chain dispatches through `dyn` effects

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod biquad;
pub mod config;
pub mod effect;
pub mod history;
pub mod lfo;
pub mod math;
pub mod param_info;

// Re-export main types at crate root
pub use biquad::{Biquad, bandpass_coefficients};
pub use config::{BLOCK_SAMPLES, BLOCKS_PER_RING, DEFAULT_VOLUME, RING_CAPACITY, SAMPLE_RATE};
pub use effect::{Effect, EffectWithParams};
pub use history::{HistoryBuffer, lookback};
pub use lfo::Lfo;
pub use math::{hard_clip, ms_to_samples};
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
