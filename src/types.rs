//! Shared types used across the transceiver firmware
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

/// Gross radio activity state
///
/// `Quiet` is the resting state: squelch closed, no carrier in either
/// direction. The dispatcher treats `Quiet` as the only state in which the
/// idle-mode selector may run before a key action executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RadioMode {
    /// Squelch closed, neither receiving nor transmitting
    #[default]
    Quiet,
    /// Receiving (squelch open or monitor forced)
    Rx,
    /// Transmitting
    Tx,
}

impl RadioMode {
    /// Check if the transmitter is keyed
    #[must_use]
    pub const fn is_transmitting(self) -> bool {
        matches!(self, Self::Tx)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RadioMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Quiet => defmt::write!(f, "QUIET"),
            Self::Rx => defmt::write!(f, "RX"),
            Self::Tx => defmt::write!(f, "TX"),
        }
    }
}

/// One beep request for the tone synthesizer
///
/// The synthesizer itself is an external collaborator advanced one step per
/// tick; this type only names the requests the control core issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Beep {
    /// Tone frequency in Hz
    pub freq_hz: u16,
    /// Number of tone pulses
    pub pulses: u8,
    /// Length of each pulse in milliseconds
    pub length_ms: u16,
}

impl Beep {
    /// Short high tone acknowledging a state change
    pub const ACK: Self = Self::new(740, 2, 100);

    /// Short low tone refusing or leaving a state
    pub const DENY: Self = Self::new(440, 4, 80);

    /// High tone confirming the display was switched back on
    pub const DISPLAY_ON: Self = Self::new(740, 3, 80);

    /// Create a beep request
    #[must_use]
    pub const fn new(freq_hz: u16, pulses: u8, length_ms: u16) -> Self {
        Self {
            freq_hz,
            pulses,
            length_ms,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Beep {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Beep({}Hz x{})", self.freq_hz, self.pulses);
    }
}

/// Channel scan direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ScanDirection {
    /// Scan toward higher channels/frequencies
    #[default]
    Up,
    /// Scan toward lower channels/frequencies
    Down,
}

impl ScanDirection {
    /// Reverse the direction
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ScanDirection {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Up => defmt::write!(f, "UP"),
            Self::Down => defmt::write!(f, "DOWN"),
        }
    }
}
