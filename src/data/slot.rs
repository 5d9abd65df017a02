//! Durable storage slots
//!
//! A slot is a single named location holding one serialized document. The
//! record store reads it once at startup and overwrites it wholesale after
//! every save.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A single named slot of durable key-value storage
pub trait Slot {
    /// Slot name, for logging
    fn name(&self) -> &str;

    /// Read the stored document, `None` when nothing has been written yet
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored document
    fn write(&self, contents: &str) -> io::Result<()>;
}

/// Slot backed by a JSON file (`<dir>/<name>.json`)
#[derive(Debug, Clone)]
pub struct FileSlot {
    name: String,
    path: PathBuf,
}

impl FileSlot {
    pub fn new(dir: &Path, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = dir.join(format!("{name}.json"));
        Self { name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Slot for FileSlot {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file first so a crash mid-write never
        // leaves a truncated document behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)
    }
}

/// In-memory slot. Clones share the same contents, which lets a test
/// "restart" by building a second store over a clone.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Rc<RefCell<Option<String>>>,
    fail_reads: Rc<RefCell<bool>>,
    fail_writes: Rc<RefCell<bool>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-filled with a document
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let slot = Self::default();
        *slot.contents.borrow_mut() = Some(contents.into());
        slot
    }

    /// Current raw contents
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Make subsequent reads fail (simulates an unavailable store)
    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.borrow_mut() = fail;
    }

    /// Make subsequent writes fail (simulates a full or read-only store)
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.borrow_mut() = fail;
    }
}

impl Slot for MemorySlot {
    fn name(&self) -> &str {
        "memory"
    }

    fn read(&self) -> io::Result<Option<String>> {
        if *self.fail_reads.borrow() {
            return Err(io::Error::other("memory slot is unavailable"));
        }
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if *self.fail_writes.borrow() {
            return Err(io::Error::other("memory slot is read-only"));
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(())
    }
}
