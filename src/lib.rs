pub mod cli;
pub mod config;
pub mod data;
pub mod form;
pub mod ui;
pub mod util;

pub use config::Config;
pub use data::{
    City, Draft, FileSlot, Gender, GenderFlag, MemorySlot, Record, RecordId, RecordStore, Slot,
    StoreError,
};
pub use form::{EditMode, ErrorSet, Field, FormSession, SaveOutcome, TextField};
pub use ui::App;
