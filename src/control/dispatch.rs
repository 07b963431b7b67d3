//! Mode-gated key dispatch
//!
//! Given one resolved key action, decide whether it executes and against
//! which semantics. The precedence chain is evaluated top to bottom and
//! *falls through*: a guard either swallows the action, or lets it descend
//! to the next guard. A pass at one level is therefore no guarantee of
//! execution — the lock toggle, for example, survives the lock guard but
//! is still eaten by an active scanner below it.
//!
//! Every discard is silent except the scanner's feedback beep. Invalid
//! actions do not exist at this level: the [`KeyAction`] set is closed per
//! build configuration.

use crate::board::Services;
use crate::control::actions::{self, KeyAction};
use crate::control::Core;
use crate::types::{Beep, RadioMode};

/// Dispatch one key action through the mode precedence chain
///
/// Runs in main context only; handlers are invoked synchronously and at
/// most once per call.
pub fn dispatch(core: &mut Core, action: KeyAction, services: &mut impl Services) {
    // Locked: everything but the lock toggle dies here, silently.
    if core.modes.lock && action != KeyAction::Lock {
        return;
    }

    // DTMF entry: the overlay owns the keypad except for its own toggle.
    if core.modes.dtmf_input && action != KeyAction::DtmfDecode {
        return;
    }

    // Flashlight: any key turns it off; the original action is swallowed.
    if core.modes.flashlight {
        core.modes.flashlight = false;
        services.set_flashlight(false);
        return;
    }

    // Frequency detect and transmit ignore the keypad entirely.
    if core.modes.frequency_detect || core.modes.radio == RadioMode::Tx {
        return;
    }

    // Scanner: the scan key advances the scan list in channel mode; any
    // other key interrupts scan feedback (state saved, low beep) without
    // stopping the scan itself.
    if core.modes.scanner {
        if action == KeyAction::Scan && core.settings.channel_mode {
            services.next_scan_list();
        } else {
            services.save_state();
            services.beep(Beep::DENY);
        }
        return;
    }

    // Alarm: any key silences it.
    if core.modes.local_alarm {
        core.modes.local_alarm = false;
        core.modes.tone_keyed = false;
        services.alarm_stop();
        return;
    }

    // Monitor: any key closes the forced-open squelch.
    if core.modes.monitor {
        core.modes.monitor = false;
        services.end_receive();
        return;
    }

    // Weather reception yields only to its own toggle.
    #[cfg(feature = "noaa")]
    let passes = !core.modes.reception || action == KeyAction::WeatherChannel;
    #[cfg(not(feature = "noaa"))]
    let passes = !core.modes.reception;

    if passes {
        // Let the idle subsystem settle before a handler mutates state.
        if core.modes.radio == RadioMode::Quiet {
            services.select_idle_mode();
        }
        actions::execute(core, action, services);
    }
}
