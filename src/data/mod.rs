//! Data persistence layer for Roster
//!
//! This module provides the record model, the storage slot abstraction and
//! the record store that mirrors the saved list into a slot.

mod models;
mod slot;
mod store;

pub use models::{City, Draft, Gender, GenderFlag, Record, RecordId};
pub use slot::{FileSlot, MemorySlot, Slot};
pub use store::{RecordStore, StoreError};
