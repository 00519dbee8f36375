use std::collections::{BTreeMap, BTreeSet};

use contact_form_models::contact_form::{
    ContactFormField, ContactFormFields, ContactFormFirstName, ContactFormSubmission,
};
use serde::{ser::SerializeStruct, Serialize, Serializer};
use thiserror::Error;

/// Checks the values of a contact form against the field rules.
///
/// Implementations must be pure: no I/O, no hidden state, and the same input
/// always yields the same output.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormValidationService: Send + Sync + 'static {
    /// Return the errors of all invalid fields.
    fn validate(&self, fields: &ContactFormFields) -> ContactFormValidation;

    /// Return a snapshot of the form if every field is valid, or the errors
    /// of all invalid fields otherwise.
    fn parse(
        &self,
        fields: &ContactFormFields,
    ) -> Result<ContactFormSubmission, ContactFormValidation>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormFieldError {
    #[error("firstName must have at least {min} characters.", min = ContactFormFirstName::MIN_LEN)]
    FirstNameTooShort,
    #[error("lastName is a required field.")]
    LastNameRequired,
    #[error("email must be a valid email address.")]
    EmailInvalid,
}

impl ContactFormFieldError {
    pub fn field(self) -> ContactFormField {
        match self {
            Self::FirstNameTooShort => ContactFormField::FirstName,
            Self::LastNameRequired => ContactFormField::LastName,
            Self::EmailInvalid => ContactFormField::Email,
        }
    }
}

/// Outcome of validating a contact form: at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormValidation {
    errors: BTreeMap<ContactFormField, ContactFormFieldError>,
}

impl ContactFormValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &BTreeMap<ContactFormField, ContactFormFieldError> {
        &self.errors
    }

    pub fn error(&self, field: ContactFormField) -> Option<ContactFormFieldError> {
        self.errors.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Keep only the errors of the given fields.
    pub fn visible(&self, touched: &BTreeSet<ContactFormField>) -> Self {
        self.errors
            .values()
            .copied()
            .filter(|err| touched.contains(&err.field()))
            .collect()
    }
}

impl FromIterator<ContactFormFieldError> for ContactFormValidation {
    fn from_iter<T: IntoIterator<Item = ContactFormFieldError>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().map(|err| (err.field(), err)).collect(),
        }
    }
}

impl Serialize for ContactFormValidation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let errors = self
            .errors
            .iter()
            .map(|(field, err)| (field, err.to_string()))
            .collect::<BTreeMap<_, _>>();

        let mut s = serializer.serialize_struct("ContactFormValidation", 2)?;
        s.serialize_field("is_valid", &self.is_valid())?;
        s.serialize_field("errors", &errors)?;
        s.end()
    }
}

#[cfg(feature = "mock")]
impl MockContactFormValidationService {
    pub fn with_parse(
        mut self,
        fields: ContactFormFields,
        result: Result<ContactFormSubmission, ContactFormValidation>,
    ) -> Self {
        self.expect_parse()
            .once()
            .with(mockall::predicate::eq(fields))
            .return_once(|_| result);
        self
    }
}
