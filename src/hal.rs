//! Hardware Abstraction Layer
//!
//! Only the scheduler's tick clock lives here. Every other peripheral the
//! control core touches is reached through the [`crate::board`] traits and
//! implemented by the board support in the binary.

pub mod tick;
