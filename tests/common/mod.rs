//! Shared test utilities for Roster
//!
//! - Temporary data directories and stores
//! - TUI terminal testing helpers

pub mod fixtures;
pub mod terminal;
