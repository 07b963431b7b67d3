//! Persisted settings mirrored in RAM
//!
//! The subset of the settings block that the dispatcher and action
//! handlers read or mutate. Loading and storing the block is the
//! persistence collaborator's job; handlers that change a field call
//! `Services::save_settings` (or the channel variants) themselves.

use crate::config::{DEFAULT_TONE_FREQUENCY_HZ, KEY_SHORTCUT_SLOTS, SIDE_KEY_SLOTS};
use crate::control::actions::KeyAction;
use crate::types::ScanDirection;

/// Default side-key bindings: side 1 long/short, side 2 long/short
pub const DEFAULT_SIDE_KEY_ACTIONS: [KeyAction; SIDE_KEY_SLOTS] = [
    KeyAction::FrequencyDetect,
    KeyAction::Monitor,
    KeyAction::Flashlight,
    KeyAction::RogerBeep,
];

#[cfg(feature = "fm-radio")]
const SHORTCUT_KEY_0: KeyAction = KeyAction::FmRadio;
#[cfg(not(feature = "fm-radio"))]
const SHORTCUT_KEY_0: KeyAction = KeyAction::DarkMode;

#[cfg(feature = "am-fix")]
const SHORTCUT_KEY_2: KeyAction = KeyAction::AmFix;
#[cfg(not(feature = "am-fix"))]
const SHORTCUT_KEY_2: KeyAction = KeyAction::KeyBeep;

/// Default long-press bindings for keys 0-9, *, #, Menu, Exit
pub const DEFAULT_KEY_SHORTCUTS: [KeyAction; KEY_SHORTCUT_SLOTS] = [
    SHORTCUT_KEY_0,
    KeyAction::Scan,
    SHORTCUT_KEY_2,
    KeyAction::Vox,
    KeyAction::TxPower,
    KeyAction::SquelchLevel,
    KeyAction::DualStandby,
    KeyAction::Backlight,
    KeyAction::FrequencyStep,
    KeyAction::PresetChannel,
    KeyAction::ReverseTxFreq,
    KeyAction::Lock,
    KeyAction::DtmfDecode,
    KeyAction::DualDisplay,
];

/// RAM mirror of the persisted settings block
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Active VFO index (0 or 1)
    pub current_vfo: u8,
    /// Channel (memory) work mode rather than frequency mode
    pub channel_mode: bool,
    /// Keypress beep enabled
    pub key_beep: bool,
    /// VOX enabled
    pub vox: bool,
    /// Dual standby (watch both VFOs) enabled
    pub dual_standby: bool,
    /// Show both VFO rows instead of only the active one
    pub dual_display: bool,
    /// Display powered
    pub display_on: bool,
    /// Dark palette selected
    pub dark_mode: bool,
    /// Low TX power selected
    pub tx_low_power: bool,
    /// AM receive-path gain correction enabled
    pub am_fix: bool,
    /// Roger beep style (0 = off, 1-3 = styles)
    pub roger_beep: u8,
    /// Repeater mode (0 = off, 1 = talkaround, 2 = reverse)
    pub repeater_mode: u8,
    /// Configured scan direction
    pub scan_direction: ScanDirection,
    /// Scan every channel instead of the active scan list
    pub scan_all: bool,
    /// Active scan list index
    pub current_scan_list: u8,
    /// Frequency programming locked out
    pub frequency_lock: bool,
    /// Repeater access tone burst frequency
    pub tone_frequency: u16,
    /// Side-key bindings: side 1 long/short, side 2 long/short
    pub side_key_actions: [KeyAction; SIDE_KEY_SLOTS],
    /// Long-press bindings for keys 0-9, *, #, Menu, Exit
    pub key_shortcuts: [KeyAction; KEY_SHORTCUT_SLOTS],
}

impl Settings {
    /// Factory defaults
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current_vfo: 0,
            channel_mode: false,
            key_beep: true,
            vox: false,
            dual_standby: false,
            dual_display: true,
            display_on: true,
            dark_mode: false,
            tx_low_power: false,
            am_fix: false,
            roger_beep: 0,
            repeater_mode: 0,
            scan_direction: ScanDirection::Up,
            scan_all: false,
            current_scan_list: 0,
            frequency_lock: false,
            tone_frequency: DEFAULT_TONE_FREQUENCY_HZ,
            side_key_actions: DEFAULT_SIDE_KEY_ACTIONS,
            key_shortcuts: DEFAULT_KEY_SHORTCUTS,
        }
    }

    /// Reassign the factory key bindings
    ///
    /// Used by the menu's reset entry; the caller persists afterwards.
    /// Side keys are only overwritten when `include_side_keys` is set so a
    /// shortcut-only reset keeps customized side buttons.
    pub fn restore_default_shortcuts(&mut self, include_side_keys: bool) {
        if include_side_keys {
            self.side_key_actions = DEFAULT_SIDE_KEY_ACTIONS;
        }
        self.key_shortcuts = DEFAULT_KEY_SHORTCUTS;
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
