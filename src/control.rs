//! Control Logic
//!
//! Operating-mode state, the mode-gated key dispatcher, and the command
//! handlers behind it. Everything here runs in main context only; the
//! scheduler's tick interrupt touches this state solely through the
//! sampled [`sched::TickGates`](crate::sched::TickGates).

use core::cell::RefCell;

use critical_section::Mutex;

pub mod actions;
pub mod dispatch;
pub mod modes;
pub mod settings;

pub use actions::KeyAction;
pub use dispatch::dispatch;
pub use modes::{DominantMode, ModeState};
pub use settings::Settings;

use crate::sched::SchedulerState;

/// The owned aggregate of all firmware state
///
/// Replaces the reference design's process-wide variables with a single
/// value passed by reference. Single-writer discipline still holds per
/// field: the tick engine writes `sched`, main context writes the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Core {
    /// Scheduler-owned timers and harmonic phase
    pub sched: SchedulerState,
    /// Operating-mode flags consulted by the dispatcher
    pub modes: ModeState,
    /// Persisted settings mirrored in RAM
    pub settings: Settings,
}

impl Core {
    /// Create a powered-on core with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sched: SchedulerState::new(),
            modes: ModeState::new(),
            settings: Settings::new(),
        }
    }
}

/// [`Core`] shared between the tick interrupt and main context
///
/// A critical-section mutex around the aggregate: the tick task borrows it
/// for one tick's worth of arithmetic, the main loop borrows it per
/// drained task. The pending-task mask stays *outside* this wrapper — it
/// is atomic on its own so the consumer's check/clear never blocks the
/// tick.
pub struct SharedCore {
    inner: Mutex<RefCell<Core>>,
}

impl SharedCore {
    /// Wrap a core for cross-context sharing
    #[must_use]
    pub const fn new(core: Core) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(core)),
        }
    }

    /// Run `f` with exclusive access to the core
    pub fn with<R>(&self, f: impl FnOnce(&mut Core) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_core_round_trip() {
        let shared = SharedCore::new(Core::new());

        shared.with(|core| {
            core.modes.scanner = true;
            core.sched.countdowns.scanner.start(15);
        });

        let (scanning, remaining) = shared.with(|core| {
            (core.modes.scanner, core.sched.countdowns.scanner.remaining())
        });
        assert!(scanning);
        assert_eq!(remaining, 15);
    }
}
