#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::str::FromStr;

use crate::types::BirthDetails;

/// One of the four fixed birth-detail inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BirthField {
    Name,
    DateOfBirth,
    TimeOfBirth,
    PlaceOfBirth,
}

impl BirthField {
    pub const ALL: [Self; 4] = [Self::Name, Self::DateOfBirth, Self::TimeOfBirth, Self::PlaceOfBirth];

    /// JSON key and input name, e.g. `dateOfBirth`.
    #[must_use]
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::DateOfBirth => "dateOfBirth",
            Self::TimeOfBirth => "timeOfBirth",
            Self::PlaceOfBirth => "placeOfBirth",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::DateOfBirth => "Date of Birth",
            Self::TimeOfBirth => "Time of Birth",
            Self::PlaceOfBirth => "Place of Birth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("unknown field `{0}` (expected name, dateOfBirth, timeOfBirth or placeOfBirth)")]
    UnknownField(String),
}

impl FromStr for BirthField {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_owned()))
    }
}

/// Current input values, updated on every change. Values are stored as
/// typed; nothing is trimmed or reformatted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BirthForm {
    details: BirthDetails,
}

impl BirthForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: BirthField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BirthField::Name => self.details.name = value,
            BirthField::DateOfBirth => self.details.date_of_birth = value,
            BirthField::TimeOfBirth => self.details.time_of_birth = value,
            BirthField::PlaceOfBirth => self.details.place_of_birth = value,
        }
    }

    /// Set a field by its input name, as an `onChange` handler would.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] for names outside the fixed set.
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let field = name.parse::<BirthField>()?;
        self.set(field, value);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, field: BirthField) -> &str {
        match field {
            BirthField::Name => &self.details.name,
            BirthField::DateOfBirth => &self.details.date_of_birth,
            BirthField::TimeOfBirth => &self.details.time_of_birth,
            BirthField::PlaceOfBirth => &self.details.place_of_birth,
        }
    }

    #[must_use]
    pub fn details(&self) -> &BirthDetails {
        &self.details
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.details.is_complete()
    }
}

impl From<BirthDetails> for BirthForm {
    fn from(details: BirthDetails) -> Self {
        Self { details }
    }
}
