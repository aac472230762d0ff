//! The real-time block loop.
//!
//! One [`BufferCoordinator`] cycle, driven by a buffer-ready notification:
//!
//! 1. Consume the notification; resynchronize if it names the half we were
//!    not expecting (a missed or duplicated event must never corrupt ring
//!    addressing).
//! 2. Compute this block's ring offset from the wrapping block counter.
//! 3. Copy the captured half into the history ring — both the `source`
//!    plane and the `rendered` plane (dry pass-through baseline).
//! 4. Run the chain over the window.
//! 5. Duplicate the rendered mono window into both channels of the matching
//!    playback half.
//! 6. Advance the block counter.
//!
//! There is no error path anywhere in the cycle. If the loop falls behind,
//! the hardware overwrites the unconsumed half and one block of audio drops
//! silently; the next cycle resynchronizes and carries on.

use pedalera_core::{BLOCK_SAMPLES, BLOCKS_PER_RING, DEFAULT_VOLUME, HistoryBuffer};

use crate::chain::EffectChain;
use crate::driver::{AudioIoDriver, BufferHalf};
use crate::notifier::BufferNotifier;

/// Owns the driver, the history ring, and the chain, and runs the
/// fixed-cadence block cycle between them.
pub struct BufferCoordinator<D: AudioIoDriver> {
    driver: D,
    notifier: BufferNotifier,
    history: HistoryBuffer,
    chain: EffectChain,
    /// The half the ping-pong protocol expects next.
    awaiting: BufferHalf,
    /// Monotonic block counter, wrapped at [`BLOCKS_PER_RING`].
    block: usize,
    capture: [i16; BLOCK_SAMPLES],
    playback: [[i16; 2]; BLOCK_SAMPLES],
}

impl<D: AudioIoDriver> BufferCoordinator<D> {
    /// Bring the engine to its power-on state: chain disabled at factory
    /// defaults, output at the default volume, unmuted, awaiting the front
    /// half.
    pub fn new(mut driver: D) -> Self {
        driver.set_volume(DEFAULT_VOLUME);
        driver.set_muted(false);

        Self {
            driver,
            notifier: BufferNotifier::new(),
            history: HistoryBuffer::new(),
            chain: EffectChain::new(),
            awaiting: BufferHalf::Front,
            block: 0,
            capture: [0; BLOCK_SAMPLES],
            playback: [[0, 0]; BLOCK_SAMPLES],
        }
    }

    /// The notification flag. Hand a reference to the DMA interrupt; only
    /// [`BufferNotifier::raise`] is interrupt-safe.
    pub fn notifier(&self) -> &BufferNotifier {
        &self.notifier
    }

    /// Borrow the effect chain.
    pub fn chain(&self) -> &EffectChain {
        &self.chain
    }

    /// Mutably borrow the effect chain.
    ///
    /// Callers on the main loop only; see the crate-level thread model.
    pub fn chain_mut(&mut self) -> &mut EffectChain {
        &mut self.chain
    }

    /// Borrow the driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutably borrow the driver (volume/mute control).
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Current block index in `[0, BLOCKS_PER_RING)`, for diagnostics.
    pub fn block_index(&self) -> usize {
        self.block
    }

    /// Poll the notifier once; process one block if a notification is
    /// pending. Returns whether a block was processed.
    pub fn try_process_block(&mut self) -> bool {
        let Some(half) = self.notifier.take() else {
            return false;
        };

        if half != self.awaiting {
            // A block got dropped or duplicated; trust the hardware's view
            // of which half is ready rather than our own.
            #[cfg(feature = "tracing")]
            tracing::warn!(
                got = ?half,
                expected = ?self.awaiting,
                "buffer notification out of step, resynchronizing"
            );
            self.awaiting = half;
        }

        let offset = self.block * BLOCK_SAMPLES;

        self.driver.read_capture(half, &mut self.capture);
        let mut block = [0.0f32; BLOCK_SAMPLES];
        for (sample, &raw) in block.iter_mut().zip(self.capture.iter()) {
            *sample = f32::from(raw);
        }
        self.history.capture_block(offset, &block);

        let (source, rendered) = self.history.split_mut();
        self.chain.process_block(source, rendered, offset, BLOCK_SAMPLES);

        // Mono rendered window to both playback channels, saturating back
        // to the codec's 16-bit range.
        let window = &self.history.rendered()[offset..offset + BLOCK_SAMPLES];
        for (frame, &sample) in self.playback.iter_mut().zip(window.iter()) {
            let narrowed = sample as i16;
            *frame = [narrowed, narrowed];
        }
        self.driver.write_playback(half, &self.playback);

        self.awaiting = half.other();
        self.block = if self.block == BLOCKS_PER_RING - 1 {
            0
        } else {
            self.block + 1
        };

        true
    }

    /// The firmware main loop: spin on the notifier forever.
    ///
    /// Never returns; the loop is the program's entire lifetime. Hosts that
    /// need to interleave other work call
    /// [`try_process_block`](Self::try_process_block) themselves.
    pub fn run(&mut self) -> ! {
        loop {
            while !self.try_process_block() {
                core::hint::spin_loop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedalera_core::{Effect, ParameterInfo};

    use crate::chain::EffectId;

    /// Minimal deterministic driver: constant capture, last playback kept.
    struct FlatDriver {
        capture_value: i16,
        last_playback: Option<(BufferHalf, [[i16; 2]; BLOCK_SAMPLES])>,
        volume: Option<u8>,
        muted: Option<bool>,
    }

    impl FlatDriver {
        fn new(capture_value: i16) -> Self {
            Self {
                capture_value,
                last_playback: None,
                volume: None,
                muted: None,
            }
        }
    }

    impl AudioIoDriver for FlatDriver {
        fn read_capture(&mut self, _half: BufferHalf, block: &mut [i16; BLOCK_SAMPLES]) {
            block.fill(self.capture_value);
        }

        fn write_playback(&mut self, half: BufferHalf, frames: &[[i16; 2]; BLOCK_SAMPLES]) {
            self.last_playback = Some((half, *frames));
        }

        fn set_volume(&mut self, volume: u8) {
            self.volume = Some(volume);
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = Some(muted);
        }
    }

    #[test]
    fn startup_configures_the_codec() {
        let coordinator = BufferCoordinator::new(FlatDriver::new(0));
        assert_eq!(coordinator.driver().volume, Some(DEFAULT_VOLUME));
        assert_eq!(coordinator.driver().muted, Some(false));
    }

    #[test]
    fn idle_notifier_means_no_work() {
        let mut coordinator = BufferCoordinator::new(FlatDriver::new(1000));
        assert!(!coordinator.try_process_block());
        assert!(coordinator.driver().last_playback.is_none());
        assert_eq!(coordinator.block_index(), 0);
    }

    #[test]
    fn disabled_chain_passes_capture_through() {
        let mut coordinator = BufferCoordinator::new(FlatDriver::new(1000));
        coordinator.notifier().raise(BufferHalf::Front);
        assert!(coordinator.try_process_block());

        let (half, frames) = coordinator.driver().last_playback.unwrap();
        assert_eq!(half, BufferHalf::Front);
        assert!(frames.iter().all(|&frame| frame == [1000, 1000]));
    }

    #[test]
    fn ping_pong_expectation_alternates() {
        let mut coordinator = BufferCoordinator::new(FlatDriver::new(0));

        coordinator.notifier().raise(BufferHalf::Front);
        assert!(coordinator.try_process_block());
        coordinator.notifier().raise(BufferHalf::Back);
        assert!(coordinator.try_process_block());
        coordinator.notifier().raise(BufferHalf::Front);
        assert!(coordinator.try_process_block());

        assert_eq!(coordinator.block_index(), 3);
    }

    #[test]
    fn mismatched_notification_resynchronizes() {
        let mut coordinator = BufferCoordinator::new(FlatDriver::new(500));

        // Expecting Front, but the hardware says Back filled (we missed
        // one). The coordinator must process Back and then expect Front.
        coordinator.notifier().raise(BufferHalf::Back);
        assert!(coordinator.try_process_block());
        let (half, _) = coordinator.driver().last_playback.unwrap();
        assert_eq!(half, BufferHalf::Back);

        coordinator.notifier().raise(BufferHalf::Front);
        assert!(coordinator.try_process_block());
        let (half, _) = coordinator.driver().last_playback.unwrap();
        assert_eq!(half, BufferHalf::Front);
    }

    #[test]
    fn block_counter_wraps_at_ring_period() {
        let mut coordinator = BufferCoordinator::new(FlatDriver::new(0));
        let mut half = BufferHalf::Front;

        for _ in 0..BLOCKS_PER_RING - 1 {
            coordinator.notifier().raise(half);
            assert!(coordinator.try_process_block());
            half = half.other();
        }
        assert_eq!(coordinator.block_index(), BLOCKS_PER_RING - 1);

        coordinator.notifier().raise(half);
        assert!(coordinator.try_process_block());
        assert_eq!(coordinator.block_index(), 0);
    }

    #[test]
    fn playback_narrowing_saturates() {
        let mut coordinator = BufferCoordinator::new(FlatDriver::new(20_000));

        // Delay at 0 ms with full feedback doubles the signal: 40 000
        // exceeds i16 and must saturate, not wrap.
        let delay = coordinator.chain_mut().effect_mut(EffectId::Delay);
        delay.set_enabled(true);
        delay.set_param(0, 100.0);
        delay.set_param(1, 0.0);

        coordinator.notifier().raise(BufferHalf::Front);
        assert!(coordinator.try_process_block());

        let (_, frames) = coordinator.driver().last_playback.unwrap();
        assert!(frames.iter().all(|&frame| frame == [i16::MAX, i16::MAX]));
    }
}
