//! TUI Blaster: a minimal real-time terminal shooter loop.
//!
//! `core` holds the pure simulation (no I/O); `term` maps world state into a
//! character frame and flushes it through crossterm. The loop driver lives in
//! the binary (`src/main.rs`).

pub mod core;
pub mod term;
pub mod types;
