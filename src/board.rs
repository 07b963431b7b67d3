//! Collaborator interface boundary
//!
//! The control core owns time and key precedence; everything else —
//! RF chip control, display rendering, the tone synthesizer, DTMF,
//! settings persistence — lives behind the traits in this module.
//! All service calls are fire-and-forget: the core never consults a
//! return value, and a collaborator must never block the caller.

use crate::types::Beep;

/// Peripherals polled once per tick from interrupt context.
///
/// Every method must be non-blocking and bounded: the tick engine has to
/// return well inside one tick period. Implementations typically latch raw
/// line states for the main-context key task to debounce and decode.
pub trait TickIo {
    /// Sample the keypad matrix
    fn poll_keypad(&mut self);

    /// Sample the side-button lines
    fn poll_side_keys(&mut self);

    /// Advance the beep/tone synthesizer by one step
    fn beep_tick(&mut self);
}

/// Which alarm audio path to open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlarmKind {
    /// Siren through the local speaker only
    Local,
    /// Siren keyed over the air
    Remote,
}

/// Status-bar icons the handlers toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusIcon {
    /// VOX enabled indicator
    Vox,
    /// Dual-standby (dual watch) indicator
    DualWatch,
    /// Keypad lock indicator
    Lock,
}

/// Confirmation dialogs drawn after a toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogKind {
    /// AM receive-path gain correction on/off
    AmFix,
    /// VOX on/off
    Vox,
    /// TX power high/low
    TxPower,
    /// Dual standby on/off
    DualStandby,
    /// Key beep on/off
    KeyBeep,
    /// Current channel added to / removed from the scan list
    ScanListMembership,
}

/// Menu pages a shortcut can jump straight into
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuPage {
    /// Squelch level setting
    SquelchLevel,
    /// Frequency step setting
    FrequencyStep,
}

/// Screen regions the handlers invalidate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redraw {
    /// The main operating screen
    Main {
        /// Repaint everything, not just the dynamic fields
        full: bool,
    },
    /// One VFO row
    Vfo(u8),
    /// Both VFO rows
    BothVfos,
    /// The scanner banner
    Scan,
    /// The roger-beep mode field
    RogerMode,
    /// The repeater-mode field
    RepeaterMode,
    /// The TX power field of one VFO
    TxPower {
        /// Low-power selected
        low: bool,
        /// VFO the setting applies to
        vfo: u8,
    },
    /// A status-bar icon
    Status(StatusIcon, bool),
    /// A toggle confirmation dialog
    Dialog(DialogKind, bool),
    /// The DTMF entry overlay
    DtmfEntry,
}

/// Main-context services consumed by the dispatcher and action handlers.
///
/// Handlers that change persisted settings call the matching `save_*`
/// themselves; nothing here batches or defers writes.
pub trait Services {
    /// Request a beep from the tone synthesizer
    fn beep(&mut self, beep: Beep);

    /// Persist the global settings block
    fn save_settings(&mut self);

    /// Persist the volatile operating state (scanner interrupt path)
    fn save_state(&mut self);

    /// Persist the current VFO's channel data
    fn save_channel(&mut self);

    /// Retune the RF chip to the current VFO
    fn tune_current(&mut self);

    /// Abort whatever RF activity is in progress and return to standby
    fn cancel_mode(&mut self);

    /// Key the transmitter
    fn start_tx(&mut self);

    /// Unkey the transmitter
    fn end_tx(&mut self);

    /// Close an open receive path
    fn end_receive(&mut self);

    /// Enter carrier frequency-detect mode
    fn frequency_detect(&mut self);

    /// Tune to the active weather channel
    #[cfg(feature = "noaa")]
    fn weather_tune(&mut self);

    /// Leave the weather channel and retune the current VFO
    #[cfg(feature = "noaa")]
    fn weather_retune(&mut self);

    /// Start the alarm siren on the given audio path
    fn alarm_start(&mut self, kind: AlarmKind);

    /// Stop the alarm siren and restore the previous audio path
    fn alarm_stop(&mut self);

    /// Drive the flashlight LED
    fn set_flashlight(&mut self, on: bool);

    /// Enable or disable VOX detection in the RF chip
    fn enable_vox(&mut self, on: bool);

    /// Key a continuous tone at the given frequency (transmitter must be on)
    fn tone_start(&mut self, freq_hz: u16);

    /// Restore receiver gain registers to their configured values
    fn restore_gain(&mut self);

    /// Advance the scanner to the next scan list
    fn next_scan_list(&mut self);

    /// Run the idle-mode selector (power save / dual watch arbitration)
    fn select_idle_mode(&mut self);

    /// Force the idle subsystem out of any power-save state
    fn idle_reset(&mut self);

    /// Discard any partial frequency/channel digit entry
    fn clear_frequency_input(&mut self);

    /// Reset the DTMF input string
    fn dtmf_reset(&mut self);

    /// Recall the preset channel for the active slot
    fn recall_preset(&mut self);

    /// Flip the current channel's membership in the active scan list,
    /// persist it, and show the confirmation dialog
    fn scan_list_toggle(&mut self);

    /// Power the display back up
    fn screen_on(&mut self);

    /// Power the display down
    fn screen_off(&mut self);

    /// Refresh the dynamic fields of the current screen
    fn update_screen(&mut self);

    /// Invalidate a screen region
    fn redraw(&mut self, what: Redraw);

    /// Jump into a settings menu page
    fn open_menu(&mut self, page: MenuPage);

    /// Switch the display palette between light and dark
    fn set_palette(&mut self, dark: bool);

    /// Toggle the FM broadcast receiver
    #[cfg(feature = "fm-radio")]
    fn fm_radio_toggle(&mut self);

    /// Open the spectrum analyzer screen
    #[cfg(feature = "spectrum")]
    fn spectrum_open(&mut self);
}
