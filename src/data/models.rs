//! Data models for employee records

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// City choices offered by the form.
///
/// `Unselected` is the placeholder shown before the user picks a city. It is
/// persisted under its display label so stored data stays readable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum City {
    #[default]
    #[serde(rename = "Select City")]
    Unselected,
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "London")]
    London,
    #[serde(rename = "Tokyo")]
    Tokyo,
}

impl City {
    /// Every choice in display order, placeholder first
    pub const ALL: [City; 4] = [City::Unselected, City::NewYork, City::London, City::Tokyo];

    pub fn label(&self) -> &'static str {
        match self {
            City::Unselected => "Select City",
            City::NewYork => "New York",
            City::London => "London",
            City::Tokyo => "Tokyo",
        }
    }

    /// Parse a display label, treating anything unknown as the placeholder
    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|city| city.label().eq_ignore_ascii_case(label.trim()))
            .unwrap_or_default()
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, City::Unselected)
    }

    /// Next choice, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous choice, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Gender checkboxes. The two flags are independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Gender {
    pub male: bool,
    pub female: bool,
}

impl Gender {
    pub fn is_selected(&self) -> bool {
        self.male || self.female
    }

    pub fn flip(&mut self, flag: GenderFlag) {
        match flag {
            GenderFlag::Male => self.male = !self.male,
            GenderFlag::Female => self.female = !self.female,
        }
    }

    pub fn is_set(&self, flag: GenderFlag) -> bool {
        match flag {
            GenderFlag::Male => self.male,
            GenderFlag::Female => self.female,
        }
    }

    /// Human-readable summary for list rendering
    pub fn summary(&self) -> String {
        match (self.male, self.female) {
            (true, true) => "Male Female".to_string(),
            (true, false) => "Male".to_string(),
            (false, true) => "Female".to_string(),
            (false, false) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderFlag {
    Male,
    Female,
}

/// Stable surrogate identifier for a saved record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RecordId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// The field values a user fills in. Used for both the working draft and
/// the saved payload of a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub employee_id: String,
    pub city: City,
    pub gender: Gender,
}

/// A saved employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, assigned on first save
    pub id: RecordId,
    pub name: String,
    pub employee_id: String,
    pub city: City,
    pub gender: Gender,
}

impl Record {
    /// Create a new record with a fresh id from draft values
    pub fn from_draft(draft: Draft) -> Self {
        Self::with_id(RecordId::new(), draft)
    }

    pub fn with_id(id: RecordId, draft: Draft) -> Self {
        Self {
            id,
            name: draft.name,
            employee_id: draft.employee_id,
            city: draft.city,
            gender: draft.gender,
        }
    }

    /// Copy the editable fields back out as a draft
    pub fn to_draft(&self) -> Draft {
        Draft {
            name: self.name.clone(),
            employee_id: self.employee_id.clone(),
            city: self.city,
            gender: self.gender,
        }
    }
}
