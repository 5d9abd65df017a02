//! Data directory fixtures

#![allow(dead_code)]

use roster::{Config, FileSlot, RecordStore};
use tempfile::TempDir;

/// Temporary data directory with a config pointing at it
pub struct TestDataDir {
    pub dir: TempDir,
    pub config: Config,
}

impl TestDataDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = Config::default().with_data_dir(dir.path().to_path_buf());
        Self { dir, config }
    }

    /// Slot file for the default slot name
    pub fn slot(&self) -> FileSlot {
        self.config.slot()
    }

    /// Fresh store over the slot, as if the program had just started
    pub fn open_store(&self) -> RecordStore {
        self.config.open_store()
    }

    /// Write raw contents into the slot file
    pub fn seed(&self, contents: &str) {
        std::fs::write(self.slot().path(), contents).expect("Failed to seed slot");
    }

    pub fn read_slot(&self) -> String {
        std::fs::read_to_string(self.slot().path()).expect("Failed to read slot")
    }
}
