//! Field validation for point of interest writes.
//!
//! Create, full update, and patched views are checked against the same constraints
//! before anything reaches the store. Violations are collected per field so a single
//! response can report every problem at once.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::server::model::point_of_interest::{NewPointOfInterest, PointOfInterestForUpdate};

/// Maximum length of a point of interest name, in characters.
pub const NAME_MAX_LENGTH: usize = 50;

/// Maximum length of a point of interest description, in characters.
pub const DESCRIPTION_MAX_LENGTH: usize = 200;

pub const NAME_FIELD: &str = "Name";
pub const DESCRIPTION_FIELD: &str = "Description";

/// Field name to messages map produced by a failed validation.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("One or more validation errors occurred.")]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

impl Validate for NewPointOfInterest {
    fn validate(&self) -> Result<(), FieldErrors> {
        check_fields(Some(&self.name), self.description.as_deref())
    }
}

impl Validate for PointOfInterestForUpdate {
    fn validate(&self) -> Result<(), FieldErrors> {
        check_fields(self.name.as_deref(), self.description.as_deref())
    }
}

fn check_fields(name: Option<&str>, description: Option<&str>) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    match name {
        Some(name) if !name.trim().is_empty() => {
            if exceeds(name, NAME_MAX_LENGTH) {
                errors.add(NAME_FIELD, max_length_message(NAME_FIELD, NAME_MAX_LENGTH));
            }
        }
        _ => errors.add(NAME_FIELD, required_message(NAME_FIELD)),
    }

    if let Some(description) = description {
        if exceeds(description, DESCRIPTION_MAX_LENGTH) {
            errors.add(
                DESCRIPTION_FIELD,
                max_length_message(DESCRIPTION_FIELD, DESCRIPTION_MAX_LENGTH),
            );
        }
    }

    errors.into_result()
}

fn exceeds(value: &str, max: usize) -> bool {
    value.chars().count() > max
}

fn required_message(field: &str) -> String {
    format!("The {} field is required.", field)
}

fn max_length_message(field: &str, max: usize) -> String {
    format!(
        "The field {} must be a string or array type with a maximum length of '{}'.",
        field, max
    )
}
