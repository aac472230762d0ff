//! Compile-time configuration shared by the whole engine.
//!
//! Nothing here is runtime-tunable: the codec runs at a fixed rate, the DMA
//! half-buffers have a fixed size, and the history ring is sized so that the
//! largest legal lookback of any effect still fits with headroom.

/// Codec sample rate in Hz.
pub const SAMPLE_RATE: f32 = 44_100.0;

/// Mono samples delivered per buffer-ready notification.
pub const BLOCK_SAMPLES: usize = 128;

/// Capacity of the circular sample history, in samples (~1.02 s).
///
/// Every effect's maximum lookback must stay below this by construction of
/// its parameter bounds; the worst case is the delay at 1000 ms, i.e.
/// 44 100 samples.
pub const RING_CAPACITY: usize = 45_056;

/// Number of whole blocks in the history ring.
pub const BLOCKS_PER_RING: usize = RING_CAPACITY / BLOCK_SAMPLES;

/// Output volume applied at power-on (codec scale, 0-100).
pub const DEFAULT_VOLUME: u8 = 70;
