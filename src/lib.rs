//! Handheld Transceiver Control Firmware Library
//!
//! This library provides the real-time control core for a handheld
//! VHF/UHF FM transceiver: the 1 kHz tick scheduler that drives every
//! subsystem's notion of time, and the mode-gated dispatcher that decides
//! which command a keypress may run.
//!
//! # Architecture
//!
//! The firmware is organized in layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION LAYER                         │
//! │  Key Dispatch  │  Action Handlers  │  Mode State             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    SCHEDULER CORE                            │
//! │  Tick Engine  │  Task Mask  │  Countdown / Elapsed Counters  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                 COLLABORATOR BOUNDARY                        │
//! │  RF Control │ Display │ Beep │ DTMF │ Settings Persistence   │
//! ├─────────────────────────────────────────────────────────────┤
//! │                    RTOS / EXECUTORS                          │
//! │      embassy-rs (interrupt + thread mode executors)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only two execution contexts exist: the tick interrupt (sole writer of
//! every counter, sole producer of task bits) and the cooperative main
//! context (everything else). The task mask is the one word both contexts
//! mutate, so it is an atomic; all other shared state crosses the boundary
//! inside a critical section.
//!
//! # Design Principles
//!
//! - **No ambient globals**: all counters and mode flags live in one owned
//!   [`control::Core`] aggregate passed by reference
//! - **Type-driven design**: the action set is a closed enum per build
//!   configuration, so a key action without a live handler cannot exist
//! - **Nothing blocks**: the tick engine is pure arithmetic plus bounded
//!   peripheral polls; slow work is deferred to main context via task bits
//! - **Explicit collaborator seams**: RF, display, audio, and persistence
//!   are fire-and-forget traits, never called from interrupt context

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export dependencies needed by applications (only in embedded mode)
#[cfg(feature = "embedded")]
pub use embassy_executor;
#[cfg(feature = "embedded")]
pub use embassy_stm32;
#[cfg(feature = "embedded")]
pub use embassy_time;

/// Hardware Abstraction Layer
///
/// The tick clock pacing the scheduler interrupt context.
#[cfg(feature = "embedded")]
pub mod hal;

/// Tick Scheduler
///
/// Per-millisecond tick engine, task mask, and the counter banks.
pub mod sched;

/// Control Logic
///
/// Operating-mode state, the mode-gated key dispatcher, and the
/// command-handler registry.
pub mod control;

/// Collaborator Boundary
///
/// Traits for everything the core consumes but does not implement:
/// peripherals polled from the tick interrupt and the fire-and-forget
/// services used by action handlers.
pub mod board;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    pub use crate::control::{Core, SharedCore};
    pub use crate::sched::{TaskMask, Tasks};

    // Embassy
    pub use embassy_time::{Duration, Instant, Timer};

    // Error handling
    pub use core::result::Result;

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
