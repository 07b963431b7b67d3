//! System configuration and hardware constants
//!
//! This module defines compile-time constants for the transceiver control
//! core. Scheduling rates, harmonic divisors, and subsystem startup values
//! are centralized here.

/// Scheduler tick rate: the hardware timer interrupt fires at 1 kHz
pub const TICK_HZ: u32 = 1_000;

/// Timer peripheral input clock after prescaling (1 MHz)
pub const SCHEDULER_CLOCK_HZ: u32 = 1_000_000;

/// Core clock divider feeding the scheduler timer (72 MHz / 72 = 1 MHz)
pub const SCHEDULER_CLOCK_DIV: u16 = 72;

/// Timer reload count producing one tick (1 MHz / 1000 = 1 kHz)
pub const SCHEDULER_RELOAD: u16 = 1_000;

/// Harmonic counter period in ticks; the counter resets on this boundary
pub const HARMONIC_PERIOD: u16 = 1_024;

/// RSSI and incoming-signal polls run every 2nd tick
pub const RSSI_POLL_DIVISOR: u16 = 2;

/// VOX level evaluation runs every 16th tick
pub const VOX_POLL_DIVISOR: u16 = 16;

/// Scanner channel stepping runs every 256th tick
pub const SCAN_STEP_DIVISOR: u16 = 256;

/// Scanner settle window armed when scanning starts, in ticks
pub const SCANNER_STARTUP_TICKS: u16 = 15;

/// Default repeater access tone burst frequency
pub const DEFAULT_TONE_FREQUENCY_HZ: u16 = 1_750;

/// Number of programmable side-key slots (two keys, short and long press)
pub const SIDE_KEY_SLOTS: usize = 4;

/// Number of programmable long-press shortcuts on the main keypad
pub const KEY_SHORTCUT_SLOTS: usize = 14;
