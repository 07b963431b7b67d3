//! Handheld Transceiver Main Application
//!
//! Entry point for the transceiver control firmware. Brings up the two
//! execution contexts the core is built around: the tick engine on a
//! high-priority interrupt executor, and the cooperative main loop on the
//! thread-mode executor draining the task mask.

#![no_std]
#![no_main]

use core::sync::atomic::{AtomicBool, Ordering};

use defmt::info;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::interrupt;
use embassy_stm32::interrupt::{InterruptExt, Priority};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use ht_firmware::board::TickIo;
use ht_firmware::prelude::*;

/// All firmware state, shared between the two contexts
static CORE: SharedCore = SharedCore::new(Core::new());

/// Pending-task bits; atomic, so drained without a critical section
static PENDING: TaskMask = TaskMask::new();

/// Raw line levels latched by the tick poll for the key task
static PTT_DOWN: AtomicBool = AtomicBool::new(false);
static SIDE_DOWN: AtomicBool = AtomicBool::new(false);

static EXECUTOR_TICK: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn UART4() {
    EXECUTOR_TICK.on_interrupt();
}

/// Button lines sampled from the tick context
struct ButtonSampler {
    ptt: Input<'static>,
    side1: Input<'static>,
    side2: Input<'static>,
}

impl TickIo for ButtonSampler {
    fn poll_keypad(&mut self) {
        // Matrix scanning lives in the key task; the tick only latches PTT
        PTT_DOWN.store(self.ptt.is_low(), Ordering::Relaxed);
    }

    fn poll_side_keys(&mut self) {
        SIDE_DOWN.store(self.side1.is_low() || self.side2.is_low(), Ordering::Relaxed);
    }

    fn beep_tick(&mut self) {
        // Tone synthesizer is stepped by the audio collaborator
    }
}

/// The tick engine: runs on the interrupt executor, once per millisecond
#[embassy_executor::task]
async fn tick_task(mut io: ButtonSampler) {
    let mut clock = ht_firmware::hal::tick::TickClock::at_rate(TICK_HZ);
    loop {
        clock.next().await;
        CORE.with(|core| {
            let gates = core.modes.tick_gates();
            core.sched.tick(gates, &PENDING, &mut io);
        });
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("HT control firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    let sampler = ButtonSampler {
        ptt: Input::new(p.PA3, Pull::Up),
        side1: Input::new(p.PB0, Pull::Up),
        side2: Input::new(p.PB1, Pull::Up),
    };

    // Tick engine preempts everything on the thread executor
    interrupt::UART4.set_priority(Priority::P6);
    let tick_spawner = EXECUTOR_TICK.start(interrupt::UART4);
    tick_spawner.spawn(tick_task(sampler)).unwrap();

    spawner.spawn(heartbeat_task(led)).unwrap();

    info!("Tasks spawned, entering main loop");

    // Main loop: drain the task mask. Key decoding, RF work, and the rest
    // of the subsystem tasks hang off these bits.
    loop {
        if PENDING.take(Tasks::CHECK_PTT) && PTT_DOWN.load(Ordering::Relaxed) {
            info!("PTT down, mode {}", CORE.with(|core| core.modes.dominant()));
        }
        if PENDING.take(Tasks::CHECK_SIDE_KEYS) && SIDE_DOWN.load(Ordering::Relaxed) {
            info!("side key down");
        }
        if PENDING.take(Tasks::CHECK_BATTERY) {
            let uptime = CORE.with(|core| core.sched.counters.uptime.mark());
            info!("battery poll due, uptime {=u32} ticks", uptime);
        }
        PENDING.clear(Tasks::MAINTENANCE | Tasks::HOUSEKEEPING);
        Timer::after(Duration::from_millis(1)).await;
    }
}
