//! Logging setup for the `failmap` binary.
//!
//! The library only emits `tracing` events and `log` records; installing a
//! subscriber is left to the binary (or to tests that want to see output).

pub mod tracing;

pub use self::tracing::{filter_directive, init_tracing};
