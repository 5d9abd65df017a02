use crate::data::GenderFlag;
use crate::form::Field;

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    EmployeeId,
    City,
    Male,
    Female,
    Save,
    /// Saved-records list
    Records,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Name,
        Focus::EmployeeId,
        Focus::City,
        Focus::Male,
        Focus::Female,
        Focus::Save,
        Focus::Records,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Control that fixes an error on the given field
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::Name => Focus::Name,
            Field::EmployeeId => Focus::EmployeeId,
            Field::City => Focus::City,
            Field::Gender => Focus::Male,
        }
    }

    pub fn gender_flag(self) -> Option<GenderFlag> {
        match self {
            Focus::Male => Some(GenderFlag::Male),
            Focus::Female => Some(GenderFlag::Female),
            _ => None,
        }
    }
}
