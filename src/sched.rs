//! Tick Scheduler
//!
//! The real-time heart of the firmware: a fixed 1 kHz tick advances every
//! timer cell and derives a harmonic schedule of pending-work bits that
//! the main loop drains at its own pace.
//!
//! Ownership is strict: the tick engine is the only writer of the counter
//! banks and the only producer of task bits; the main loop is the only
//! consumer. The [`TaskMask`] is the single word touched from both
//! contexts and is therefore atomic.

pub mod tasks;
pub mod tick;
pub mod timers;

pub use tasks::{TaskMask, Tasks};
pub use tick::{SchedulerState, TickGates};
pub use timers::{Countdown, CountdownBank, CounterBank, UpCounter};
