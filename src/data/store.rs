//! Record store: the saved list and the slot it is mirrored to

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use super::models::{City, Gender, Record, RecordId};
use super::slot::Slot;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to serialize records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write slot '{slot}': {source}")]
    Write {
        slot: String,
        #[source]
        source: std::io::Error,
    },
}

/// Ordered list of saved records backed by a durable slot
pub struct RecordStore {
    slot: Box<dyn Slot>,
    records: Vec<Record>,
    pretty: bool,
}

impl RecordStore {
    /// Create an empty store over a slot. Call [`RecordStore::load`] to read
    /// what the slot already holds.
    pub fn new(slot: impl Slot + 'static) -> Self {
        Self {
            slot: Box::new(slot),
            records: Vec::new(),
            pretty: false,
        }
    }

    /// Create a store and load it in one go
    pub fn open(slot: impl Slot + 'static) -> Self {
        Self::new(slot).loaded()
    }

    /// Pretty-print the persisted JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Builder form of [`RecordStore::load`]
    pub fn loaded(mut self) -> Self {
        self.load();
        self
    }

    /// Replace the in-memory list with what the slot holds.
    ///
    /// Never fails: a missing, empty or unreadable slot gives an empty list,
    /// and individual malformed entries are dropped or filled with defaults.
    pub fn load(&mut self) {
        let contents = match self.slot.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::debug!(slot = self.slot.name(), "Slot is empty, starting fresh");
                self.records.clear();
                return;
            }
            Err(e) => {
                tracing::warn!(slot = self.slot.name(), error = %e, "Failed to read slot");
                self.records.clear();
                return;
            }
        };

        self.records = parse_records(self.slot.name(), &contents);
        tracing::info!(
            slot = self.slot.name(),
            count = self.records.len(),
            "Loaded records"
        );
    }

    /// Append or replace a record.
    ///
    /// With `edit_mode` false the record is appended, even if another record
    /// already has the same name. With `edit_mode` true the record whose id
    /// matches `record.id` is replaced in place; when no record matches the
    /// list is left untouched. Returns whether the list changed.
    pub fn upsert(&mut self, record: Record, edit_mode: bool) -> bool {
        if !edit_mode {
            self.records.push(record);
            return true;
        }

        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record;
                true
            }
            None => {
                tracing::warn!(id = %record.id, "No saved record matches edit, nothing replaced");
                false
            }
        }
    }

    /// Write the full list to the slot, overwriting whatever was there
    pub fn persist(&self) -> Result<(), StoreError> {
        let contents = if self.pretty {
            serde_json::to_string_pretty(&self.records)?
        } else {
            serde_json::to_string(&self.records)?
        };

        self.slot
            .write(&contents)
            .map_err(|source| StoreError::Write {
                slot: self.slot.name().to_string(),
                source,
            })?;

        tracing::debug!(
            slot = self.slot.name(),
            count = self.records.len(),
            "Persisted records"
        );
        Ok(())
    }

    /// All records in insertion order
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    /// First record with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Record with the given id
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl std::fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("slot", &self.slot.name())
            .field("records", &self.records.len())
            .finish()
    }
}

/// Best-effort decode of a persisted list
fn parse_records(slot: &str, contents: &str) -> Vec<Record> {
    if contents.trim().is_empty() {
        return Vec::new();
    }

    let entries = match serde_json::from_str::<Value>(contents) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            tracing::warn!(slot, kind = value_kind(&other), "Slot does not hold a list, ignoring");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(slot, error = %e, "Slot holds malformed JSON, ignoring");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let Some(mut record) = record_from_value(entry, || derived_id(slot, index, entry)) else {
            tracing::warn!(slot, index, "Dropping stored entry that is not an object");
            continue;
        };
        if !seen.insert(record.id) {
            tracing::warn!(slot, index, id = %record.id, "Stored id is not unique, reassigning");
            record.id = derived_id(slot, index, entry);
            seen.insert(record.id);
        }
        records.push(record);
    }
    records
}

/// Stable id for a stored entry that lacks a usable one of its own.
///
/// Derived from the slot, the entry's position and its contents, so loading
/// the same document again yields the same ids until they are persisted.
fn derived_id(slot: &str, index: usize, entry: &Value) -> RecordId {
    let namespace = Uuid::new_v5(&Uuid::NAMESPACE_URL, format!("roster:{slot}").as_bytes());
    RecordId::from(Uuid::new_v5(&namespace, format!("{index}:{entry}").as_bytes()))
}

/// Rebuild a record from a stored object, filling anything missing or
/// mistyped with the empty-form default.
fn record_from_value(value: &Value, fallback_id: impl FnOnce() -> RecordId) -> Option<Record> {
    let obj = value.as_object()?;

    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RecordId::from)
        .unwrap_or_else(fallback_id);

    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let employee_id = match obj.get("employeeId") {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    let city = obj
        .get("city")
        .and_then(Value::as_str)
        .map(City::from_label)
        .unwrap_or_default();

    let gender = obj
        .get("gender")
        .and_then(Value::as_object)
        .map(|g| Gender {
            male: g.get("male").and_then(Value::as_bool).unwrap_or(false),
            female: g.get("female").and_then(Value::as_bool).unwrap_or(false),
        })
        .unwrap_or_default();

    Some(Record {
        id,
        name,
        employee_id,
        city,
        gender,
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
