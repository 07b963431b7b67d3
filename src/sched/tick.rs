//! The per-millisecond tick engine
//!
//! Runs once per hardware timer interrupt. Polls the immediate-read
//! peripherals, advances every timer cell, and derives the harmonic
//! schedule of pending-task bits. Nothing in here may fail or block; the
//! engine is pure arithmetic plus bounded peripheral polls and must
//! complete well inside one tick period.

use crate::board::TickIo;
use crate::config::HARMONIC_PERIOD;
use crate::sched::tasks::{TaskMask, Tasks};
use crate::sched::timers::{CountdownBank, CounterBank};

/// Mode flags sampled by the tick interrupt
///
/// The tick engine reads a handful of main-context mode flags to gate the
/// conditional counters. Sampling them into this value makes those reads
/// explicit and keeps the engine itself a pure function over its state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickGates {
    /// The transmitter is keyed
    pub transmitting: bool,
    /// VOX is currently holding the transmitter open
    pub vox_keyed: bool,
    /// The local alarm siren is sounding (and not in tone-send mode)
    pub alarm_sounding: bool,
    /// LED blinking is enabled
    pub led_blink: bool,
}

/// All scheduler-owned timer state
///
/// Owned by whoever runs the tick engine; on hardware it lives inside the
/// critical-section wrapper so the main context can read timer cells
/// without racing the interrupt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerState {
    /// Countdown cells, decremented while nonzero
    pub countdowns: CountdownBank,
    /// Free-running counters, advanced under their gates
    pub counters: CounterBank,
    /// Serial console link considered alive; dropped when the serial
    /// activity countdown runs out
    pub link_active: bool,
    /// Harmonic phase within the 1024-tick period
    phase: u16,
}

impl SchedulerState {
    /// Create a scheduler with all timers expired and phase zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            countdowns: CountdownBank::new(),
            counters: CounterBank::new(),
            link_active: false,
            phase: 0,
        }
    }

    /// Current harmonic phase, always in `[0, HARMONIC_PERIOD - 1]`
    /// between ticks
    #[must_use]
    pub const fn phase(&self) -> u16 {
        self.phase
    }

    /// Run one tick
    ///
    /// The order is fixed: peripherals, countdowns, gated counters, free
    /// counters, harmonic schedule. The 1024-aligned bits are set *before*
    /// the phase resets so boundary tasks still fire on the boundary tick.
    pub fn tick(&mut self, gates: TickGates, pending: &TaskMask, io: &mut impl TickIo) {
        io.poll_keypad();
        io.poll_side_keys();
        io.beep_tick();

        // Countdowns are mutually independent; order is arbitrary.
        self.countdowns.special.tick();
        self.countdowns.audio.tick();
        self.countdowns.vox.tick();
        self.countdowns.cursor_blink.tick();
        self.countdowns.incoming.tick();
        self.countdowns.meter_refresh.tick();
        self.countdowns.battery_poll.tick();
        self.countdowns.weather_hop.tick();
        self.countdowns.power_save.tick();
        self.countdowns.maintenance.tick();
        self.countdowns.scanner.tick();
        self.countdowns.detector.tick();

        // Serial link: running out is the edge that drops the link, never a
        // per-tick action. A flag raised while the countdown already sits
        // at zero is dropped on the following tick.
        if self.countdowns.serial_link.is_running() {
            if self.countdowns.serial_link.tick() {
                self.link_active = false;
            }
        } else if self.link_active {
            self.link_active = false;
        }

        if gates.transmitting && !gates.vox_keyed {
            self.counters.ptt_active.tick();
        }
        if gates.alarm_sounding {
            self.counters.alarm.tick();
        }
        if gates.led_blink {
            self.counters.led_blink.tick();
        }

        self.counters.lock_hold.tick();
        self.counters.encrypt.tick();
        self.counters.standby.tick();
        self.counters.uptime.tick();
        self.phase = self.phase.wrapping_add(1);

        pending.set(Tasks::CHECK_SIDE_KEYS | Tasks::CHECK_KEY_PAD | Tasks::CHECK_PTT);
        if self.phase & 0x0001 == 0 {
            pending.set(Tasks::CHECK_RSSI | Tasks::CHECK_INCOMING);
        }
        if self.phase & 0x000F == 0 {
            pending.set(Tasks::VOX);
        }
        if self.phase & 0x00FF == 0 {
            pending.set(Tasks::FM_SCANNER | Tasks::SCANNER);
        }
        if self.phase & (HARMONIC_PERIOD - 1) == 0 {
            pending.set(Tasks::MAINTENANCE | Tasks::HOUSEKEEPING | Tasks::CHECK_BATTERY);
            self.phase = 0;
        }
    }
}
