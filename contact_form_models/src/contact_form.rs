use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accepted shape of an email address: `local@domain.tld` without whitespace.
///
/// This is a pinned policy, not an RFC 5322 validator.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// One of the input slots of the contact form, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ContactFormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl ContactFormField {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactFormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactFormField {
    type Err = UnknownContactFormFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownContactFormFieldError(s.into()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field: {0}")]
pub struct UnknownContactFormFieldError(pub String);

/// The raw, unvalidated values the user typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormFields {
    pub fn get(&self, field: ContactFormField) -> &str {
        match field {
            ContactFormField::FirstName => &self.first_name,
            ContactFormField::LastName => &self.last_name,
            ContactFormField::Email => &self.email,
            ContactFormField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactFormField, value: impl Into<String>) {
        let slot = match field {
            ContactFormField::FirstName => &mut self.first_name,
            ContactFormField::LastName => &mut self.last_name,
            ContactFormField::Email => &mut self.email,
            ContactFormField::Message => &mut self.message,
        };
        *slot = value.into();
    }
}

#[nutype(
    validate(predicate = |name: &str| {
        name.trim().chars().count() >= ContactFormFirstName::MIN_LEN
    }),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactFormFirstName(String);

impl ContactFormFirstName {
    /// Minimum number of characters after trimming surrounding whitespace.
    pub const MIN_LEN: usize = 5;
}

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactFormLastName(String);

#[nutype(
    validate(regex = EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactFormEmail(String);

#[nutype(
    default = "",
    derive(Debug, Clone, Default, PartialEq, Eq, From, Deref, Serialize, Deserialize)
)]
pub struct ContactFormMessage(String);

/// Snapshot of a contact form taken at the moment it was successfully
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormSubmission {
    pub first_name: ContactFormFirstName,
    pub last_name: ContactFormLastName,
    pub email: ContactFormEmail,
    pub message: ContactFormMessage,
}

impl ContactFormSubmission {
    /// The message, if the user wrote one.
    pub fn message(&self) -> Option<&str> {
        Some(self.message.as_str()).filter(|message| !message.is_empty())
    }

    pub fn to_fields(&self) -> ContactFormFields {
        ContactFormFields {
            first_name: (*self.first_name).clone(),
            last_name: (*self.last_name).clone(),
            email: (*self.email).clone(),
            message: (*self.message).clone(),
        }
    }

    pub fn into_fields(self) -> ContactFormFields {
        ContactFormFields {
            first_name: self.first_name.into_inner(),
            last_name: self.last_name.into_inner(),
            email: self.email.into_inner(),
            message: self.message.into_inner(),
        }
    }
}

/// Caller-held state of a form session.
///
/// A field becomes touched when the user changes it. A submit attempt
/// touches every field. Only errors of touched fields are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFormFields,
    touched: BTreeSet<ContactFormField>,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: ContactFormField, value: impl Into<String>) {
        self.fields.set(field, value);
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(ContactFormField::ALL);
    }

    pub fn touched(&self) -> &BTreeSet<ContactFormField> {
        &self.touched
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
