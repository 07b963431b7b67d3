//! Countdown and free-running counter cells
//!
//! Two timer flavors cover every subsystem's notion of time: a saturating
//! countdown used as a debounce/timeout window, and a wrapping up-counter
//! compared by delta for elapsed-time measurements. Both are advanced
//! exactly once per tick by the tick engine; the owning subsystem sets the
//! start value and reads the result.

/// Saturating-at-zero countdown, decremented once per tick
///
/// The cell never underflows: once it reaches zero it stays there until
/// the owning subsystem starts it again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown(u16);

impl Countdown {
    /// Create an expired countdown
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Arm the countdown with the given number of ticks
    pub fn start(&mut self, ticks: u16) {
        self.0 = ticks;
    }

    /// Force the countdown to expire immediately
    pub fn cancel(&mut self) {
        self.0 = 0;
    }

    /// Ticks remaining until expiry
    #[must_use]
    pub const fn remaining(&self) -> u16 {
        self.0
    }

    /// Check whether the countdown has reached zero
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.0 == 0
    }

    /// Check whether the countdown is still running
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.0 != 0
    }

    /// Advance one tick
    ///
    /// Returns `true` exactly on the nonzero-to-zero transition, so the
    /// owner can act once on expiry without tracking the previous value.
    pub fn tick(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        self.0 == 0
    }
}

/// Free-running wrapping tick counter
///
/// Never reset by the tick engine; wraps on overflow. Consumers must
/// compare deltas via [`UpCounter::since`], never absolute values, to stay
/// correct across the wrap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpCounter(u32);

impl UpCounter {
    /// Create a counter at zero
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Advance one tick
    pub fn tick(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Take a reference mark for a later [`UpCounter::since`]
    #[must_use]
    pub const fn mark(&self) -> u32 {
        self.0
    }

    /// Ticks elapsed since `mark`, wrap-safe
    #[must_use]
    pub const fn since(&self, mark: u32) -> u32 {
        self.0.wrapping_sub(mark)
    }

    /// Restart the measurement window
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// The fixed set of countdown cells advanced every tick
///
/// Each field is owned by the subsystem named in its doc line; the tick
/// engine only decrements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownBank {
    /// Transient hold-off shared by one-shot UI flows
    pub special: Countdown,
    /// Audio path mute/unmute window
    pub audio: Countdown,
    /// VOX hold window after the audio level drops
    pub vox: Countdown,
    /// Cursor blink phase in digit-entry screens
    pub cursor_blink: Countdown,
    /// Incoming-call indication window
    pub incoming: Countdown,
    /// VOX/RSSI meter refresh throttle
    pub meter_refresh: Countdown,
    /// Battery measurement settle window
    pub battery_poll: Countdown,
    /// Delay before hopping to the next weather channel
    pub weather_hop: Countdown,
    /// Power-save entry delay
    pub power_save: Countdown,
    /// Generic deferred-maintenance delay
    pub maintenance: Countdown,
    /// Scanner settle window after (re)starting a scan
    pub scanner: Countdown,
    /// Carrier frequency-detect sampling window
    pub detector: Countdown,
    /// Serial console activity timeout; expiry drops the link
    pub serial_link: Countdown,
}

impl CountdownBank {
    /// Create a bank with every cell expired
    #[must_use]
    pub const fn new() -> Self {
        Self {
            special: Countdown::new(),
            audio: Countdown::new(),
            vox: Countdown::new(),
            cursor_blink: Countdown::new(),
            incoming: Countdown::new(),
            meter_refresh: Countdown::new(),
            battery_poll: Countdown::new(),
            weather_hop: Countdown::new(),
            power_save: Countdown::new(),
            maintenance: Countdown::new(),
            scanner: Countdown::new(),
            detector: Countdown::new(),
            serial_link: Countdown::new(),
        }
    }
}

/// The fixed set of free-running counters
///
/// The first three advance only under their gating condition (see the tick
/// engine); the rest advance unconditionally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterBank {
    /// Ticks spent transmitting, for the PTT timeout (gated: transmitting
    /// and not VOX-keyed)
    pub ptt_active: UpCounter,
    /// Alarm siren phase (gated: alarm sounding, tone-send not keyed)
    pub alarm: UpCounter,
    /// LED blink phase (gated: blinking enabled)
    pub led_blink: UpCounter,
    /// Ticks the lock key combination has been held
    pub lock_hold: UpCounter,
    /// Scrambler code rotation phase
    pub encrypt: UpCounter,
    /// Ticks since the radio last left standby
    pub standby: UpCounter,
    /// General elapsed-time reference
    pub uptime: UpCounter,
}

impl CounterBank {
    /// Create a bank with every counter at zero
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ptt_active: UpCounter::new(),
            alarm: UpCounter::new(),
            led_blink: UpCounter::new(),
            lock_hold: UpCounter::new(),
            encrypt: UpCounter::new(),
            standby: UpCounter::new(),
            uptime: UpCounter::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_saturates_at_zero() {
        let mut cd = Countdown::new();
        cd.start(2);

        assert!(!cd.tick());
        assert_eq!(cd.remaining(), 1);
        assert!(cd.tick());
        assert_eq!(cd.remaining(), 0);

        // Already expired: no underflow, no repeated edge
        assert!(!cd.tick());
        assert_eq!(cd.remaining(), 0);
        assert!(cd.is_expired());
    }

    #[test]
    fn countdown_edge_fires_once() {
        let mut cd = Countdown::new();
        cd.start(3);

        let mut edges = 0;
        for _ in 0..10 {
            if cd.tick() {
                edges += 1;
            }
        }
        assert_eq!(edges, 1);
    }

    #[test]
    fn countdown_cancel() {
        let mut cd = Countdown::new();
        cd.start(100);
        cd.cancel();
        assert!(cd.is_expired());
        // Cancel is not an expiry edge
        assert!(!cd.tick());
    }

    #[test]
    fn up_counter_wraps_safely() {
        let mut counter = UpCounter(u32::MAX - 1);
        let mark = counter.mark();

        counter.tick();
        counter.tick();
        counter.tick();

        // Crossed the wrap; delta still correct
        assert_eq!(counter.since(mark), 3);
    }

    #[test]
    fn up_counter_reset() {
        let mut counter = UpCounter::new();
        counter.tick();
        counter.tick();
        assert_eq!(counter.mark(), 2);

        counter.reset();
        assert_eq!(counter.mark(), 0);
    }
}
