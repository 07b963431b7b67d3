//! Key actions and their command handlers
//!
//! One identifier, one zero-argument handler. The set is closed per build
//! configuration: a feature that removes an action removes its enum
//! variant, so an identifier without a live handler cannot be constructed
//! and the registry lookup cannot go out of bounds. Handlers are invoked
//! single-shot and synchronously by the dispatcher; they mutate mode and
//! settings state directly and reach everything else through the
//! fire-and-forget [`Services`] collaborators.

use crate::board::{AlarmKind, DialogKind, MenuPage, Redraw, Services, StatusIcon};
use crate::config::SCANNER_STARTUP_TICKS;
use crate::control::Core;
use crate::types::{Beep, RadioMode};

/// Every key action a short press, long press, or side key can be bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Force the squelch open
    Monitor,
    /// Sweep for a nearby carrier and tune to it
    FrequencyDetect,
    /// Cycle repeater mode (off / talkaround / reverse)
    RepeaterMode,
    /// Recall the preset channel of the active slot
    PresetChannel,
    /// Sound the alarm locally
    LocalAlarm,
    /// Sound the alarm over the air
    RemoteAlarm,
    /// Toggle weather-channel reception
    #[cfg(feature = "noaa")]
    WeatherChannel,
    /// Key a continuous tone burst over the air
    SendTone,
    /// Cycle the roger beep style
    RogerBeep,
    /// Start or stop the channel scanner
    Scan,
    /// Turn the flashlight on
    Flashlight,
    /// Toggle the FM broadcast receiver
    #[cfg(feature = "fm-radio")]
    FmRadio,
    /// Toggle AM receive-path gain correction
    #[cfg(feature = "am-fix")]
    AmFix,
    /// Toggle VOX
    Vox,
    /// Toggle TX power high/low
    TxPower,
    /// Open the squelch level menu
    SquelchLevel,
    /// Toggle dual standby
    DualStandby,
    /// Toggle the display backlight
    Backlight,
    /// Open the frequency step menu
    FrequencyStep,
    /// Toggle the current channel's scan list membership
    ToggleScanList,
    /// Toggle the DTMF entry overlay
    DtmfDecode,
    /// Toggle dual display
    DualDisplay,
    /// Preview the TX frequency on the VFO row
    ReverseTxFreq,
    /// Toggle the keypad lock
    Lock,
    /// Toggle the keypress beep
    KeyBeep,
    /// Toggle the dark display palette
    DarkMode,
    /// Open the spectrum analyzer
    #[cfg(feature = "spectrum")]
    Spectrum,
}

#[cfg(feature = "embedded")]
impl defmt::Format for KeyAction {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}", defmt::Debug2Format(self));
    }
}

/// Run the handler registered for `action`
///
/// The match is exhaustive over the closed variant set, so "handler
/// missing" is a compile error rather than a runtime condition. The
/// dispatcher guarantees single-shot, non-overlapping invocation.
pub fn execute(core: &mut Core, action: KeyAction, services: &mut impl Services) {
    match action {
        KeyAction::Monitor => monitor(core, services),
        KeyAction::FrequencyDetect => frequency_detect(core, services),
        KeyAction::RepeaterMode => repeater_mode(core, services),
        KeyAction::PresetChannel => preset_channel(core, services),
        KeyAction::LocalAlarm => local_alarm(core, services),
        KeyAction::RemoteAlarm => remote_alarm(core, services),
        #[cfg(feature = "noaa")]
        KeyAction::WeatherChannel => weather_channel(core, services),
        KeyAction::SendTone => send_tone(core, services),
        KeyAction::RogerBeep => roger_beep(core, services),
        KeyAction::Scan => scan(core, services),
        KeyAction::Flashlight => flashlight(core, services),
        #[cfg(feature = "fm-radio")]
        KeyAction::FmRadio => services.fm_radio_toggle(),
        #[cfg(feature = "am-fix")]
        KeyAction::AmFix => am_fix(core, services),
        KeyAction::Vox => vox(core, services),
        KeyAction::TxPower => tx_power(core, services),
        KeyAction::SquelchLevel => services.open_menu(MenuPage::SquelchLevel),
        KeyAction::DualStandby => dual_standby(core, services),
        KeyAction::Backlight => backlight(core, services),
        KeyAction::FrequencyStep => services.open_menu(MenuPage::FrequencyStep),
        KeyAction::ToggleScanList => toggle_scan_list(core, services),
        KeyAction::DtmfDecode => dtmf_decode(core, services),
        KeyAction::DualDisplay => dual_display(core, services),
        KeyAction::ReverseTxFreq => reverse_tx_freq(core, services),
        KeyAction::Lock => lock(core, services),
        KeyAction::KeyBeep => key_beep(core, services),
        KeyAction::DarkMode => dark_mode(core, services),
        #[cfg(feature = "spectrum")]
        KeyAction::Spectrum => {
            services.clear_frequency_input();
            services.spectrum_open();
        }
    }
}

fn monitor(core: &mut Core, services: &mut impl Services) {
    core.modes.monitor = true;
    services.tune_current();
}

fn frequency_detect(core: &mut Core, services: &mut impl Services) {
    if !core.settings.frequency_lock {
        services.clear_frequency_input();
        core.modes.frequency_detect = true;
        services.frequency_detect();
    }
}

fn repeater_mode(core: &mut Core, services: &mut impl Services) {
    core.settings.repeater_mode = (core.settings.repeater_mode + 1) % 3;
    services.save_settings();
    services.tune_current();
    services.redraw(Redraw::RepeaterMode);
    if core.settings.dual_display {
        services.redraw(Redraw::BothVfos);
    } else {
        services.redraw(Redraw::Vfo(core.settings.current_vfo));
    }
    services.beep(Beep::ACK);
}

fn preset_channel(core: &mut Core, services: &mut impl Services) {
    if core.settings.channel_mode {
        services.clear_frequency_input();
        services.recall_preset();
        services.beep(Beep::ACK);
    }
}

fn local_alarm(core: &mut Core, services: &mut impl Services) {
    core.modes.local_alarm = true;
    services.alarm_start(AlarmKind::Local);
}

fn remote_alarm(core: &mut Core, services: &mut impl Services) {
    core.modes.local_alarm = true;
    services.alarm_start(AlarmKind::Remote);
    services.start_tx();
}

#[cfg(feature = "noaa")]
fn weather_channel(core: &mut Core, services: &mut impl Services) {
    if core.modes.radio == RadioMode::Tx {
        return;
    }
    services.clear_frequency_input();
    core.modes.reception = !core.modes.reception;
    if core.modes.reception {
        if core.modes.radio == RadioMode::Rx {
            services.end_receive();
        }
        services.weather_tune();
        services.beep(Beep::ACK);
    } else {
        services.weather_retune();
        services.beep(Beep::DENY);
    }
}

fn send_tone(core: &mut Core, services: &mut impl Services) {
    core.modes.local_alarm = true;
    core.modes.tone_keyed = true;
    services.start_tx();
    services.tone_start(core.settings.tone_frequency);
}

fn roger_beep(core: &mut Core, services: &mut impl Services) {
    core.settings.roger_beep = (core.settings.roger_beep + 1) % 4;
    services.save_settings();
    services.beep(Beep::ACK);
    services.redraw(Redraw::RogerMode);
}

fn scan(core: &mut Core, services: &mut impl Services) {
    services.cancel_mode();
    core.modes.manual_scan_direction = core.settings.scan_direction;
    core.modes.scanner = !core.modes.scanner;
    core.modes.confirm_beep = core.modes.scanner;
    core.sched.countdowns.scanner.start(SCANNER_STARTUP_TICKS);
    services.redraw(Redraw::Scan);
}

fn flashlight(core: &mut Core, services: &mut impl Services) {
    // Turning it off is the dispatcher's job: any key while lit does that.
    if !core.modes.flashlight {
        core.modes.flashlight = true;
        services.set_flashlight(true);
    }
}

#[cfg(feature = "am-fix")]
fn am_fix(core: &mut Core, services: &mut impl Services) {
    services.restore_gain();
    core.settings.am_fix = !core.settings.am_fix;
    services.save_settings();
    services.redraw(Redraw::Dialog(DialogKind::AmFix, core.settings.am_fix));
}

fn vox(core: &mut Core, services: &mut impl Services) {
    services.cancel_mode();
    core.settings.vox = !core.settings.vox;
    services.enable_vox(core.settings.vox);
    services.save_settings();
    if core.modes.vox_keyed {
        services.end_tx();
        core.modes.vox_keyed = false;
    }
    services.redraw(Redraw::Status(StatusIcon::Vox, core.settings.vox));
    services.redraw(Redraw::Dialog(DialogKind::Vox, core.settings.vox));
}

fn tx_power(core: &mut Core, services: &mut impl Services) {
    services.cancel_mode();
    core.settings.tx_low_power = !core.settings.tx_low_power;
    services.redraw(Redraw::TxPower {
        low: core.settings.tx_low_power,
        vfo: core.settings.current_vfo,
    });
    services.save_channel();
    services.redraw(Redraw::Dialog(DialogKind::TxPower, core.settings.tx_low_power));
}

fn dual_standby(core: &mut Core, services: &mut impl Services) {
    services.cancel_mode();
    core.settings.dual_standby = !core.settings.dual_standby;
    services.tune_current();
    services.save_settings();
    services.idle_reset();
    services.redraw(Redraw::Status(StatusIcon::DualWatch, core.settings.dual_standby));
    services.redraw(Redraw::Dialog(
        DialogKind::DualStandby,
        core.settings.dual_standby,
    ));
}

fn backlight(core: &mut Core, services: &mut impl Services) {
    core.settings.display_on = !core.settings.display_on;
    if core.settings.display_on {
        services.screen_on();
        services.beep(Beep::DISPLAY_ON);
    } else {
        services.screen_off();
        services.beep(Beep::DENY);
    }
    services.save_settings();
}

fn toggle_scan_list(core: &mut Core, services: &mut impl Services) {
    if core.settings.channel_mode && !core.settings.scan_all {
        services.scan_list_toggle();
    }
}

fn dtmf_decode(core: &mut Core, services: &mut impl Services) {
    if core.modes.fm_active {
        return;
    }
    if core.modes.dtmf_input {
        services.dtmf_reset();
        core.modes.dtmf_input = false;
        services.redraw(Redraw::Main { full: true });
        core.modes.confirm_beep = false;
    } else {
        // Entry can't open over an active receive path
        if core.modes.radio == RadioMode::Rx {
            return;
        }
        if core.sched.countdowns.vox.is_running() {
            core.sched.countdowns.vox.cancel();
            services.update_screen();
        }
        services.dtmf_reset();
        core.modes.dtmf_input = true;
        services.redraw(Redraw::DtmfEntry);
    }
}

fn dual_display(core: &mut Core, services: &mut impl Services) {
    if core.modes.fm_active {
        return;
    }
    core.settings.dual_display = !core.settings.dual_display;
    services.save_settings();
    core.sched.countdowns.vox.cancel();
    services.redraw(Redraw::Main { full: true });
}

fn reverse_tx_freq(core: &mut Core, services: &mut impl Services) {
    core.modes.frequency_reverse = !core.modes.frequency_reverse;
    core.modes.confirm_beep = core.modes.frequency_reverse;
    services.redraw(Redraw::Vfo(core.settings.current_vfo));
    services.clear_frequency_input();
}

fn lock(core: &mut Core, services: &mut impl Services) {
    core.modes.lock = !core.modes.lock;
    services.save_settings();
    services.redraw(Redraw::Status(StatusIcon::Lock, core.modes.lock));
    core.modes.confirm_beep = core.modes.lock;
}

fn key_beep(core: &mut Core, services: &mut impl Services) {
    core.settings.key_beep = !core.settings.key_beep;
    services.save_settings();
    services.redraw(Redraw::Dialog(DialogKind::KeyBeep, core.settings.key_beep));
}

fn dark_mode(core: &mut Core, services: &mut impl Services) {
    core.settings.dark_mode = !core.settings.dark_mode;
    services.save_settings();
    services.set_palette(core.settings.dark_mode);
    services.redraw(Redraw::Main { full: false });
}
