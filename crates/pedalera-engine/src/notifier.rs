//! The interrupt-to-main-loop buffer-ready flag.
//!
//! The whole system synchronizes on a single two-valued flag: the DMA
//! interrupt stores which half just filled, the main loop consumes it.
//! There is deliberately no queue — a notification that arrives before the
//! previous one was consumed overwrites it, which is exactly the
//! drop-on-overrun semantics the real-time loop wants. Correctness comes
//! from the strict ping-pong protocol in the coordinator, not from a lock.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::driver::BufferHalf;

const IDLE: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;

/// Single-slot buffer-ready notification.
///
/// [`raise`](Self::raise) is the one entry point safe to call from
/// interrupt context; it takes `&self` and performs a single atomic store.
/// [`take`](Self::take) belongs to the main loop alone.
#[derive(Debug)]
pub struct BufferNotifier {
    state: AtomicU8,
}

impl BufferNotifier {
    /// Create an idle notifier.
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(IDLE),
        }
    }

    /// Signal that `half` just finished filling. Interrupt-callable.
    ///
    /// Overwrites any notification still pending: the unconsumed block is
    /// dropped, never queued.
    #[inline]
    pub fn raise(&self, half: BufferHalf) {
        let value = match half {
            BufferHalf::Front => FRONT,
            BufferHalf::Back => BACK,
        };
        self.state.store(value, Ordering::Release);
    }

    /// Consume the pending notification, if any. Main-loop only.
    #[inline]
    pub fn take(&self) -> Option<BufferHalf> {
        match self.state.swap(IDLE, Ordering::Acquire) {
            FRONT => Some(BufferHalf::Front),
            BACK => Some(BufferHalf::Back),
            _ => None,
        }
    }
}

impl Default for BufferNotifier {
    fn default() -> Self {
        Self::new()
    }
}
