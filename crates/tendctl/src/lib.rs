//! Tend CLI - terminal client for the tend_core progression engine.
//!
//! Exposes modules as a library so integration tests can exercise the
//! command surface without spawning the binary.

pub mod cli;
pub mod commands;
pub mod render;
