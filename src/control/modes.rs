//! Operating-mode state
//!
//! A small set of flags, each independently settable by action handlers or
//! other subsystems. The flags are deliberately *not* mutually exclusive
//! in storage; the dispatcher's precedence order decides which one governs
//! the interpretation of any single keypress.

use crate::sched::TickGates;
use crate::types::{RadioMode, ScanDirection};

/// Every mode flag the dispatcher and tick engine consult
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeState {
    /// Keypad lock engaged (mirrors the persisted lock setting)
    pub lock: bool,
    /// DTMF digit-entry overlay open
    pub dtmf_input: bool,
    /// Flashlight LED on
    pub flashlight: bool,
    /// Carrier frequency-detect sweep running
    pub frequency_detect: bool,
    /// Channel scanner running
    pub scanner: bool,
    /// Local alarm siren sounding
    pub local_alarm: bool,
    /// Monitor (squelch forced open) active
    pub monitor: bool,
    /// Weather-channel reception active
    pub reception: bool,
    /// Gross radio activity
    pub radio: RadioMode,
    /// VOX is currently holding the transmitter open
    pub vox_keyed: bool,
    /// Continuous tone-send keyed (alarm tone over the air)
    pub tone_keyed: bool,
    /// Status LED blinking enabled
    pub led_blink: bool,
    /// FM broadcast receiver active
    pub fm_active: bool,
    /// TX/RX frequency swap preview shown on the VFO row
    pub frequency_reverse: bool,
    /// High-tone confirm beep latched for the key task to play on release
    pub confirm_beep: bool,
    /// Direction of the currently running manual scan
    pub manual_scan_direction: ScanDirection,
}

impl ModeState {
    /// Create the power-on mode state: everything off, radio quiet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lock: false,
            dtmf_input: false,
            flashlight: false,
            frequency_detect: false,
            scanner: false,
            local_alarm: false,
            monitor: false,
            reception: false,
            radio: RadioMode::Quiet,
            vox_keyed: false,
            tone_keyed: false,
            led_blink: false,
            fm_active: false,
            frequency_reverse: false,
            confirm_beep: false,
            manual_scan_direction: ScanDirection::Up,
        }
    }

    /// Sample the flags the tick interrupt needs for its gated counters
    #[must_use]
    pub const fn tick_gates(&self) -> TickGates {
        TickGates {
            transmitting: self.radio.is_transmitting(),
            vox_keyed: self.vox_keyed,
            alarm_sounding: self.local_alarm && !self.tone_keyed,
            led_blink: self.led_blink,
        }
    }

    /// Resolve the highest-precedence active mode
    ///
    /// This is the first guard the dispatcher evaluates; later guards in
    /// the chain may still apply when the reported mode lets an action
    /// through (the chain falls through, it does not switch).
    #[must_use]
    pub const fn dominant(&self) -> DominantMode {
        if self.lock {
            DominantMode::Locked
        } else if self.dtmf_input {
            DominantMode::DtmfEntry
        } else if self.flashlight {
            DominantMode::Flashlight
        } else if self.frequency_detect {
            DominantMode::FrequencyDetect
        } else if self.radio.is_transmitting() {
            DominantMode::Transmitting
        } else if self.scanner {
            DominantMode::Scanning
        } else if self.local_alarm {
            DominantMode::AlarmSounding
        } else if self.monitor {
            DominantMode::Monitoring
        } else if self.reception {
            DominantMode::WeatherListening
        } else {
            DominantMode::None
        }
    }
}

/// The mode currently governing keypress interpretation
///
/// Ordered from highest to lowest precedence; `None` means the key falls
/// through to its registered handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DominantMode {
    /// Keypad locked; only the lock toggle passes
    Locked,
    /// DTMF entry open; only the DTMF toggle passes
    DtmfEntry,
    /// Flashlight on; any key turns it off
    Flashlight,
    /// Frequency-detect sweep; keys are ignored
    FrequencyDetect,
    /// Transmitting; keys are ignored
    Transmitting,
    /// Scanning; keys interrupt scan feedback
    Scanning,
    /// Alarm sounding; any key silences it
    AlarmSounding,
    /// Monitor open; any key closes it
    Monitoring,
    /// Weather listening; only the weather toggle passes
    WeatherListening,
    /// No mode governs; the action handler runs
    None,
}

#[cfg(feature = "embedded")]
impl defmt::Format for DominantMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Locked => defmt::write!(f, "LOCKED"),
            Self::DtmfEntry => defmt::write!(f, "DTMF"),
            Self::Flashlight => defmt::write!(f, "LIGHT"),
            Self::FrequencyDetect => defmt::write!(f, "DETECT"),
            Self::Transmitting => defmt::write!(f, "TX"),
            Self::Scanning => defmt::write!(f, "SCAN"),
            Self::AlarmSounding => defmt::write!(f, "ALARM"),
            Self::Monitoring => defmt::write!(f, "MONITOR"),
            Self::WeatherListening => defmt::write!(f, "WX"),
            Self::None => defmt::write!(f, "-"),
        }
    }
}
