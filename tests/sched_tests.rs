//! Tests for the tick scheduler
//!
//! Covers the harmonic task schedule, countdown/counter semantics, and the
//! task mask's producer/consumer contract.

use ht_firmware::board::TickIo;
use ht_firmware::sched::{SchedulerState, TaskMask, Tasks, TickGates};

/// Tick peripheral stub that counts how often each line was polled
#[derive(Default)]
struct CountingIo {
    keypad_polls: u32,
    side_key_polls: u32,
    beep_steps: u32,
}

impl TickIo for CountingIo {
    fn poll_keypad(&mut self) {
        self.keypad_polls += 1;
    }

    fn poll_side_keys(&mut self) {
        self.side_key_polls += 1;
    }

    fn beep_tick(&mut self) {
        self.beep_steps += 1;
    }
}

fn run(state: &mut SchedulerState, pending: &TaskMask, gates: TickGates, ticks: u32) {
    let mut io = CountingIo::default();
    for _ in 0..ticks {
        state.tick(gates, pending, &mut io);
    }
}

const EVERY_TICK: Tasks = Tasks::CHECK_SIDE_KEYS
    .union(Tasks::CHECK_KEY_PAD)
    .union(Tasks::CHECK_PTT);

const PERIOD_TASKS: Tasks = Tasks::MAINTENANCE
    .union(Tasks::HOUSEKEEPING)
    .union(Tasks::CHECK_BATTERY);

// ============================================================================
// Peripheral polling
// ============================================================================

#[test]
fn peripherals_polled_once_per_tick() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    let mut io = CountingIo::default();

    for _ in 0..50 {
        state.tick(TickGates::default(), &pending, &mut io);
    }

    assert_eq!(io.keypad_polls, 50);
    assert_eq!(io.side_key_polls, 50);
    assert_eq!(io.beep_steps, 50);
}

// ============================================================================
// Harmonic schedule
// ============================================================================

#[test]
fn key_bits_set_after_first_tick() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    assert!(!pending.is_pending(EVERY_TICK));
    run(&mut state, &pending, TickGates::default(), 1);
    assert!(pending.is_pending(EVERY_TICK));
}

#[test]
fn key_bits_reassert_every_tick() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    for _ in 0..20 {
        run(&mut state, &pending, TickGates::default(), 1);
        assert!(pending.is_pending(EVERY_TICK));
        pending.clear(EVERY_TICK);
    }
}

#[test]
fn rssi_bits_fire_on_even_ticks_only() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    let rssi = Tasks::CHECK_RSSI | Tasks::CHECK_INCOMING;

    for n in 1..=64u32 {
        run(&mut state, &pending, TickGates::default(), 1);
        assert_eq!(pending.is_pending(rssi), n % 2 == 0, "tick {n}");
        pending.clear(rssi);
    }
}

#[test]
fn vox_bit_fires_every_16_ticks() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    for n in 1..=128u32 {
        run(&mut state, &pending, TickGates::default(), 1);
        assert_eq!(pending.is_pending(Tasks::VOX), n % 16 == 0, "tick {n}");
        pending.clear(Tasks::VOX);
    }
}

#[test]
fn scanner_bits_fire_together_every_256_ticks() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    let scan = Tasks::FM_SCANNER | Tasks::SCANNER;

    for n in 1..=1024u32 {
        run(&mut state, &pending, TickGates::default(), 1);
        let due = n % 256 == 0;
        assert_eq!(pending.is_pending(scan), due, "tick {n}");
        // The two bits never appear separately
        assert_eq!(pending.is_pending(Tasks::FM_SCANNER), due, "tick {n}");
        pending.clear(scan);
    }
}

#[test]
fn period_tasks_fire_on_1024_boundary_and_phase_resets() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    for n in 1..=3072u32 {
        run(&mut state, &pending, TickGates::default(), 1);
        let due = n % 1024 == 0;
        assert_eq!(pending.is_pending(PERIOD_TASKS), due, "tick {n}");
        if due {
            assert_eq!(state.phase(), 0, "tick {n}");
        }
        pending.clear(PERIOD_TASKS);
    }
}

#[test]
fn phase_stays_inside_the_period() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    for _ in 0..5000 {
        run(&mut state, &pending, TickGates::default(), 1);
        assert!(state.phase() < 1024);
    }
}

// ============================================================================
// Countdown semantics
// ============================================================================

#[test]
fn countdowns_never_go_negative() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    state.countdowns.audio.start(3);
    state.countdowns.battery_poll.start(1);

    let mut prev_audio = state.countdowns.audio.remaining();
    for _ in 0..10 {
        run(&mut state, &pending, TickGates::default(), 1);
        let audio = state.countdowns.audio.remaining();
        assert_eq!(audio, prev_audio.saturating_sub(1));
        prev_audio = audio;
    }
    assert_eq!(state.countdowns.audio.remaining(), 0);
    assert_eq!(state.countdowns.battery_poll.remaining(), 0);
}

#[test]
fn countdowns_decrement_independently() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    state.countdowns.scanner.start(15);
    state.countdowns.detector.start(7);
    state.countdowns.power_save.start(100);

    run(&mut state, &pending, TickGates::default(), 7);
    assert_eq!(state.countdowns.scanner.remaining(), 8);
    assert_eq!(state.countdowns.detector.remaining(), 0);
    assert_eq!(state.countdowns.power_save.remaining(), 93);
}

#[test]
fn serial_link_drops_exactly_once_when_countdown_runs_out() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    state.link_active = true;
    state.countdowns.serial_link.start(5);

    let mut transitions = 0;
    let mut prev = state.link_active;
    for n in 1..=5u32 {
        run(&mut state, &pending, TickGates::default(), 1);
        if prev && !state.link_active {
            transitions += 1;
        }
        prev = state.link_active;
        // The link survives while the countdown is running
        if n < 5 {
            assert!(state.link_active, "tick {n}");
        }
    }

    assert_eq!(state.countdowns.serial_link.remaining(), 0);
    assert!(!state.link_active);
    assert_eq!(transitions, 1);

    // Further ticks at zero change nothing
    run(&mut state, &pending, TickGates::default(), 10);
    assert!(!state.link_active);
}

#[test]
fn serial_link_flag_without_countdown_drops_on_next_tick() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    state.link_active = true;

    run(&mut state, &pending, TickGates::default(), 1);
    assert!(!state.link_active);
}

#[test]
fn serial_link_restart_keeps_link_alive() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();
    state.link_active = true;
    state.countdowns.serial_link.start(3);

    run(&mut state, &pending, TickGates::default(), 2);
    // Fresh traffic re-arms the timeout before expiry
    state.countdowns.serial_link.start(3);
    run(&mut state, &pending, TickGates::default(), 2);
    assert!(state.link_active);
}

// ============================================================================
// Free-running counter gating
// ============================================================================

#[test]
fn ptt_counter_advances_only_while_transmitting_without_vox() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    let tx = TickGates {
        transmitting: true,
        ..TickGates::default()
    };
    let tx_vox = TickGates {
        transmitting: true,
        vox_keyed: true,
        ..TickGates::default()
    };

    run(&mut state, &pending, TickGates::default(), 10);
    assert_eq!(state.counters.ptt_active.mark(), 0);

    run(&mut state, &pending, tx, 25);
    assert_eq!(state.counters.ptt_active.mark(), 25);

    run(&mut state, &pending, tx_vox, 10);
    assert_eq!(state.counters.ptt_active.mark(), 25);

    run(&mut state, &pending, tx, 5);
    assert_eq!(state.counters.ptt_active.mark(), 30);
}

#[test]
fn alarm_counter_gated_by_alarm_sounding() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    let sounding = TickGates {
        alarm_sounding: true,
        ..TickGates::default()
    };

    run(&mut state, &pending, TickGates::default(), 10);
    assert_eq!(state.counters.alarm.mark(), 0);
    run(&mut state, &pending, sounding, 10);
    assert_eq!(state.counters.alarm.mark(), 10);
}

#[test]
fn led_blink_counter_gated_by_blink_enable() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    let blinking = TickGates {
        led_blink: true,
        ..TickGates::default()
    };

    run(&mut state, &pending, blinking, 7);
    run(&mut state, &pending, TickGates::default(), 7);
    assert_eq!(state.counters.led_blink.mark(), 7);
}

#[test]
fn ungated_counters_track_tick_count() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    run(&mut state, &pending, TickGates::default(), 123);
    assert_eq!(state.counters.lock_hold.mark(), 123);
    assert_eq!(state.counters.encrypt.mark(), 123);
    assert_eq!(state.counters.standby.mark(), 123);
    assert_eq!(state.counters.uptime.mark(), 123);
}

#[test]
fn elapsed_deltas_via_marks() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    run(&mut state, &pending, TickGates::default(), 100);
    let mark = state.counters.uptime.mark();
    run(&mut state, &pending, TickGates::default(), 42);
    assert_eq!(state.counters.uptime.since(mark), 42);
}

// ============================================================================
// Task mask contract
// ============================================================================

#[test]
fn clear_twice_equals_clear_once() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    run(&mut state, &pending, TickGates::default(), 16);
    pending.clear(Tasks::VOX);
    let snapshot = pending.snapshot();
    pending.clear(Tasks::VOX);
    assert_eq!(pending.snapshot(), snapshot);
}

#[test]
fn bits_persist_until_consumer_clears() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    run(&mut state, &pending, TickGates::default(), 16);
    assert!(pending.is_pending(Tasks::VOX));

    // Many more ticks without a clear: still pending
    run(&mut state, &pending, TickGates::default(), 7);
    assert!(pending.is_pending(Tasks::VOX));

    pending.clear(Tasks::VOX);
    assert!(!pending.is_pending(Tasks::VOX));
}

#[test]
fn consumer_take_drains_one_bit_group() {
    let mut state = SchedulerState::new();
    let pending = TaskMask::new();

    run(&mut state, &pending, TickGates::default(), 2);
    assert!(pending.take(Tasks::CHECK_RSSI | Tasks::CHECK_INCOMING));
    assert!(!pending.take(Tasks::CHECK_RSSI | Tasks::CHECK_INCOMING));
    // Unrelated bits untouched
    assert!(pending.is_pending(Tasks::CHECK_PTT));
}
