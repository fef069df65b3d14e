//! Partial updates of points of interest through JSON Patch documents.
//!
//! A document is parsed as a whole into a closed set of [`PointOfInterestPatch`]
//! operations before anything is applied. Only `replace` on `/name` and `/description`
//! is supported; every other verb or path is a structural failure. Application is pure:
//! operations are folded in order over a fresh [`PointOfInterestForUpdate`] view, the
//! result is validated, and only a valid view is handed back for write-back.
//!
//! ```text
//! Pending -> Applying -> StructurallyInvalid | SemanticallyInvalid | Valid -> WrittenBack
//! ```

use serde_json::Value;
use thiserror::Error;

use crate::{
    model::point_of_interest::JsonPatchOperationDto,
    server::{
        model::point_of_interest::PointOfInterestForUpdate,
        validation::{FieldErrors, Validate},
    },
};

#[cfg(test)]
mod test;

const REPLACE_OP: &str = "replace";

/// A single parsed patch operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointOfInterestPatch {
    /// Replace the name. `None` clears it, which validation rejects.
    Name(Option<String>),
    /// Replace the description. `None` clears it.
    Description(Option<String>),
}

/// Reasons a patch document is rejected before it is applied.
///
/// `index` is the zero-based position of the offending operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("Patch operation {index}: unsupported operation '{op}'")]
    UnsupportedOperation { index: usize, op: String },

    #[error("Patch operation {index}: the target location specified by path '{path}' was not found")]
    UnknownPath { index: usize, path: String },

    #[error("Patch operation {index}: the value is not valid for path '{path}'")]
    InvalidValue { index: usize, path: String },
}

/// Outcome of a rejected patch request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatchRejection {
    /// The document itself is malformed.
    #[error(transparent)]
    Structural(#[from] PatchError),

    /// The document applied cleanly but the resulting view violates field constraints.
    #[error(transparent)]
    Validation(#[from] FieldErrors),
}

#[derive(Clone, Copy)]
enum PatchPath {
    Name,
    Description,
}

impl PatchPath {
    fn parse(path: &str) -> Option<Self> {
        let path = path.strip_suffix('/').unwrap_or(path);
        if path.eq_ignore_ascii_case("/name") {
            Some(Self::Name)
        } else if path.eq_ignore_ascii_case("/description") {
            Some(Self::Description)
        } else {
            None
        }
    }
}

impl PointOfInterestPatch {
    /// Parses one operation of a document.
    ///
    /// # Arguments
    /// - `index` - Position of the operation, reported back on failure
    /// - `operation` - Raw operation as received on the wire
    ///
    /// # Returns
    /// - `Ok(PointOfInterestPatch)` - Supported `replace` operation
    /// - `Err(PatchError)` - Unsupported verb, unknown path, or a value of the wrong type
    pub fn parse_operation(
        index: usize,
        operation: JsonPatchOperationDto,
    ) -> Result<Self, PatchError> {
        if !operation.op.eq_ignore_ascii_case(REPLACE_OP) {
            return Err(PatchError::UnsupportedOperation {
                index,
                op: operation.op,
            });
        }

        let Some(path) = PatchPath::parse(&operation.path) else {
            return Err(PatchError::UnknownPath {
                index,
                path: operation.path,
            });
        };

        let value = match operation.value {
            None | Some(Value::Null) => None,
            Some(Value::String(value)) => Some(value),
            Some(_) => {
                return Err(PatchError::InvalidValue {
                    index,
                    path: operation.path,
                })
            }
        };

        Ok(match path {
            PatchPath::Name => Self::Name(value),
            PatchPath::Description => Self::Description(value),
        })
    }
}

/// Parses a whole document; the first malformed operation rejects it.
pub fn parse(document: Vec<JsonPatchOperationDto>) -> Result<Vec<PointOfInterestPatch>, PatchError> {
    document
        .into_iter()
        .enumerate()
        .map(|(index, operation)| PointOfInterestPatch::parse_operation(index, operation))
        .collect()
}

/// Applies parsed operations in order. Later operations on a field overwrite earlier ones.
pub fn apply(
    mut view: PointOfInterestForUpdate,
    operations: Vec<PointOfInterestPatch>,
) -> PointOfInterestForUpdate {
    for operation in operations {
        match operation {
            PointOfInterestPatch::Name(name) => view.name = name,
            PointOfInterestPatch::Description(description) => view.description = description,
        }
    }
    view
}

pub fn validate(view: &PointOfInterestForUpdate) -> Result<(), FieldErrors> {
    view.validate()
}

/// Parses, applies, and validates a document against a view.
///
/// # Returns
/// - `Ok(PointOfInterestForUpdate)` - Valid view, ready to be copied back
/// - `Err(PatchRejection::Structural)` - Document could not be parsed
/// - `Err(PatchRejection::Validation)` - Resulting view violates field constraints
pub fn run(
    view: PointOfInterestForUpdate,
    document: Vec<JsonPatchOperationDto>,
) -> Result<PointOfInterestForUpdate, PatchRejection> {
    let operations = parse(document)?;
    let view = apply(view, operations);
    validate(&view)?;
    Ok(view)
}
