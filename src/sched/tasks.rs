//! Pending-task bitmask
//!
//! A tagged bitmask of subsystem work due to run: the tick interrupt ORs
//! bits in, the main loop tests and clears them. No ordering exists
//! between distinct bits — the consumer decides processing order across
//! simultaneously-pending work.

use core::sync::atomic::{AtomicU16, Ordering};

use bitflags::bitflags;

bitflags! {
    /// Named task bits produced by the tick engine's harmonic schedule
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Tasks: u16 {
        /// Sample and debounce the side buttons (every tick)
        const CHECK_SIDE_KEYS = 1 << 0;
        /// Sample and debounce the keypad matrix (every tick)
        const CHECK_KEY_PAD = 1 << 1;
        /// Sample the PTT switch (every tick)
        const CHECK_PTT = 1 << 2;
        /// Read signal strength from the RF chip (every 2nd tick)
        const CHECK_RSSI = 1 << 3;
        /// Check for an incoming carrier/call (every 2nd tick)
        const CHECK_INCOMING = 1 << 4;
        /// Evaluate the VOX audio level (every 16th tick)
        const VOX = 1 << 5;
        /// Step the FM broadcast scanner (every 256th tick)
        const FM_SCANNER = 1 << 6;
        /// Step the channel scanner (every 256th tick)
        const SCANNER = 1 << 7;
        /// Slow maintenance chores (every 1024th tick)
        const MAINTENANCE = 1 << 8;
        /// Slow housekeeping chores (every 1024th tick)
        const HOUSEKEEPING = 1 << 9;
        /// Poll the battery voltage (every 1024th tick)
        const CHECK_BATTERY = 1 << 10;
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Tasks {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Tasks({=u16:#06x})", self.bits());
    }
}

/// Shared pending-task queue
///
/// `set` runs in interrupt context while `is_pending`/`clear` run in main
/// context, so every operation is a single atomic read-modify-write on one
/// word: a tick firing between the consumer's read and its clear can never
/// lose an update.
#[derive(Debug)]
pub struct TaskMask(AtomicU16);

impl TaskMask {
    /// Create an empty mask
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicU16::new(0))
    }

    /// OR the given bits into the mask (producer side)
    pub fn set(&self, tasks: Tasks) {
        self.0.fetch_or(tasks.bits(), Ordering::Relaxed);
    }

    /// Check whether *all* of the given bits are currently pending
    #[must_use]
    pub fn is_pending(&self, tasks: Tasks) -> bool {
        self.0.load(Ordering::Relaxed) & tasks.bits() == tasks.bits()
    }

    /// Clear the given bits (consumer side); clearing an already-clear bit
    /// is a no-op
    pub fn clear(&self, tasks: Tasks) {
        self.0.fetch_and(!tasks.bits(), Ordering::Relaxed);
    }

    /// Test-and-clear in one atomic operation
    ///
    /// Returns `true` iff *all* of the given bits were pending; the bits
    /// are cleared either way.
    pub fn take(&self, tasks: Tasks) -> bool {
        let prior = self.0.fetch_and(!tasks.bits(), Ordering::Relaxed);
        prior & tasks.bits() == tasks.bits()
    }

    /// Snapshot the currently pending set
    #[must_use]
    pub fn snapshot(&self) -> Tasks {
        Tasks::from_bits_truncate(self.0.load(Ordering::Relaxed))
    }
}

impl Default for TaskMask {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_pending() {
        let mask = TaskMask::new();
        assert!(!mask.is_pending(Tasks::CHECK_PTT));

        mask.set(Tasks::CHECK_PTT | Tasks::VOX);
        assert!(mask.is_pending(Tasks::CHECK_PTT));
        assert!(mask.is_pending(Tasks::VOX));
        assert!(mask.is_pending(Tasks::CHECK_PTT | Tasks::VOX));
        assert!(!mask.is_pending(Tasks::SCANNER));
    }

    #[test]
    fn pending_requires_all_bits() {
        let mask = TaskMask::new();
        mask.set(Tasks::CHECK_RSSI);
        assert!(!mask.is_pending(Tasks::CHECK_RSSI | Tasks::CHECK_INCOMING));
    }

    #[test]
    fn clear_is_idempotent() {
        let mask = TaskMask::new();
        mask.set(Tasks::SCANNER | Tasks::FM_SCANNER);

        mask.clear(Tasks::SCANNER);
        let after_first = mask.snapshot();
        mask.clear(Tasks::SCANNER);
        assert_eq!(mask.snapshot(), after_first);
        assert!(mask.is_pending(Tasks::FM_SCANNER));
    }

    #[test]
    fn bits_stay_set_until_cleared() {
        let mask = TaskMask::new();
        mask.set(Tasks::CHECK_BATTERY);
        mask.set(Tasks::CHECK_BATTERY);
        assert!(mask.is_pending(Tasks::CHECK_BATTERY));

        mask.clear(Tasks::CHECK_BATTERY);
        assert!(!mask.is_pending(Tasks::CHECK_BATTERY));
    }

    #[test]
    fn take_reports_and_clears() {
        let mask = TaskMask::new();
        mask.set(Tasks::VOX);

        assert!(mask.take(Tasks::VOX));
        assert!(!mask.take(Tasks::VOX));
        assert!(!mask.is_pending(Tasks::VOX));
    }

    #[test]
    fn take_partial_set_clears_but_reports_false() {
        let mask = TaskMask::new();
        mask.set(Tasks::CHECK_RSSI);

        assert!(!mask.take(Tasks::CHECK_RSSI | Tasks::CHECK_INCOMING));
        assert!(!mask.is_pending(Tasks::CHECK_RSSI));
    }
}
