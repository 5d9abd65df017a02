//! Form state machine: field edits, validation and create-or-edit saves

mod errors;
mod session;

pub use errors::{ErrorSet, Field, TextField};
pub use session::{validate_draft, EditMode, FormSession, SaveOutcome};
