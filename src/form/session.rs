//! Form session: the draft being edited, its validation errors and whether a
//! save creates a new record or overwrites an existing one.

use crate::data::{GenderFlag, Record, RecordId, RecordStore, StoreError};
use crate::data::{City, Draft};

use super::errors::{ErrorSet, Field, TextField};

/// Whether the next save appends or replaces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Creating,
    /// Editing a saved record. The id and name are captured when editing
    /// begins and are not affected by changes to the draft.
    Editing { id: RecordId, original_name: String },
}

/// Result of a save attempt that did not fail on storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Validation failed, see [`FormSession::errors`]
    Invalid,
    /// A new record was appended
    Created(RecordId),
    /// An existing record was replaced
    Updated(RecordId),
    /// The record being edited is no longer in the store; nothing replaced
    Unmatched(RecordId),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        !matches!(self, SaveOutcome::Invalid)
    }
}

/// Check a draft against the required-field rules. Every violated rule is
/// reported.
pub fn validate_draft(draft: &Draft) -> ErrorSet {
    let mut errors = ErrorSet::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, Field::Name.required_message());
    }
    if draft.employee_id.trim().is_empty() {
        errors.insert(Field::EmployeeId, Field::EmployeeId.required_message());
    }
    if !draft.city.is_selected() {
        errors.insert(Field::City, Field::City.required_message());
    }
    if !draft.gender.is_selected() {
        errors.insert(Field::Gender, Field::Gender.required_message());
    }

    errors
}

/// In-progress form state driving a [`RecordStore`]
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    draft: Draft,
    errors: ErrorSet,
    mode: EditMode,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    /// Overwrite a text field and drop its error, without revalidating
    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Name => self.draft.name = value,
            TextField::EmployeeId => self.draft.employee_id = value,
            TextField::City => self.draft.city = City::from_label(&value),
        }
        self.errors.clear(field.field());
    }

    /// Set the city directly
    pub fn set_city(&mut self, city: City) {
        self.draft.city = city;
        self.errors.clear(Field::City);
    }

    /// Flip one gender flag, leaving the other alone
    pub fn toggle_gender(&mut self, flag: GenderFlag) {
        self.draft.gender.flip(flag);
        self.errors.clear(Field::Gender);
    }

    /// Recompute the error set from scratch. Returns true when the draft is
    /// valid.
    pub fn validate(&mut self) -> bool {
        self.errors.replace(validate_draft(&self.draft));
        self.errors.is_empty()
    }

    /// Validate and, if valid, write the draft into the store and persist.
    ///
    /// On success the draft is reset and the session returns to creating.
    /// The in-memory transition happens before persisting, so a storage
    /// error leaves the store holding the record and the form cleared.
    pub fn save(&mut self, store: &mut RecordStore) -> Result<SaveOutcome, StoreError> {
        if !self.validate() {
            tracing::debug!(fields = self.errors.len(), "Save rejected by validation");
            return Ok(SaveOutcome::Invalid);
        }

        let draft = std::mem::take(&mut self.draft);
        let outcome = match std::mem::take(&mut self.mode) {
            EditMode::Creating => {
                let record = Record::from_draft(draft);
                let id = record.id;
                store.upsert(record, false);
                tracing::info!(%id, "Created record");
                SaveOutcome::Created(id)
            }
            EditMode::Editing { id, original_name } => {
                if store.upsert(Record::with_id(id, draft), true) {
                    tracing::info!(%id, original_name = %original_name, "Updated record");
                    SaveOutcome::Updated(id)
                } else {
                    SaveOutcome::Unmatched(id)
                }
            }
        };

        store.persist()?;
        Ok(outcome)
    }

    /// Load the first record with the given name into the draft and switch
    /// to editing it. Returns false, changing nothing, if no record matches.
    pub fn begin_edit(&mut self, store: &RecordStore, name: &str) -> bool {
        match store.find_by_name(name) {
            Some(record) => {
                self.edit_record(record);
                true
            }
            None => {
                tracing::debug!(name, "No record to edit");
                false
            }
        }
    }

    /// Like [`FormSession::begin_edit`] but by surrogate id, which stays
    /// unambiguous when names repeat
    pub fn begin_edit_id(&mut self, store: &RecordStore, id: RecordId) -> bool {
        match store.get(id) {
            Some(record) => {
                self.edit_record(record);
                true
            }
            None => {
                tracing::debug!(%id, "No record to edit");
                false
            }
        }
    }

    /// Abandon the current draft and go back to creating
    pub fn cancel_edit(&mut self) {
        self.draft = Draft::default();
        self.errors = ErrorSet::new();
        self.mode = EditMode::Creating;
    }

    fn edit_record(&mut self, record: &Record) {
        self.draft = record.to_draft();
        self.errors = ErrorSet::new();
        self.mode = EditMode::Editing {
            id: record.id,
            original_name: record.name.clone(),
        };
    }
}
