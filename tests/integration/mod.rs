//! Integration tests for Roster
//!
//! These tests verify that the form, the store and the front ends work
//! together over real files.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod form_flow;
