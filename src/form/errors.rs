//! Per-field validation messages

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A form field that can carry a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    EmployeeId,
    City,
    Gender,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::EmployeeId, Field::City, Field::Gender];

    /// Name used by the presentation layer and in stored data
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::EmployeeId => "employeeId",
            Field::City => "city",
            Field::Gender => "gender",
        }
    }

    /// Message shown when the field is left unfilled
    pub fn required_message(&self) -> &'static str {
        match self {
            Field::Name => "Please enter your name.",
            Field::EmployeeId => "Please enter your Employee ID.",
            Field::City => "Please select your city.",
            Field::Gender => "Please select your gender.",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields that take a text value. Gender is edited through toggles instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    EmployeeId,
    City,
}

impl TextField {
    pub fn field(&self) -> Field {
        match self {
            TextField::Name => Field::Name,
            TextField::EmployeeId => Field::EmployeeId,
            TextField::City => Field::City,
        }
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(TextField::Name),
            "employeeId" => Ok(TextField::EmployeeId),
            "city" => Ok(TextField::City),
            other => Err(format!("unknown field: {other}")),
        }
    }
}

/// Field → message map shown next to the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    entries: BTreeMap<Field, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Drop the message for one field
    pub fn clear(&mut self, field: Field) {
        self.entries.remove(&field);
    }

    /// Replace every entry with another set
    pub fn replace(&mut self, other: ErrorSet) {
        self.entries = other.entries;
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Fields with errors, in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_and_replace() {
        let mut errors = ErrorSet::new();
        errors.insert(Field::Name, "a");
        errors.insert(Field::City, "b");
        errors.clear(Field::Name);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::City]);

        let mut fresh = ErrorSet::new();
        fresh.insert(Field::Gender, "c");
        errors.replace(fresh);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Gender), Some("c"));
        assert!(!errors.contains(Field::City));
    }

    #[test]
    fn test_text_field_names() {
        for field in [TextField::Name, TextField::EmployeeId, TextField::City] {
            assert_eq!(field.field().as_str().parse::<TextField>(), Ok(field));
        }
        assert!("gender".parse::<TextField>().is_err());
    }
}
