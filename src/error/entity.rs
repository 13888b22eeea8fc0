use thiserror::Error;

use crate::model::position::{PositionCategory, PositionKind};

#[derive(Error, Debug, PartialEq)]
pub enum EntityError {
    // The remote state may have changed between the moment a reference was
    // created and the moment it is resolved, so this is an expected outcome.
    #[error("No {category} entry with id {id:?} in the current snapshot")]
    NotFound { category: &'static str, id: String },
    /// A leaderboard query was issued with a (category, kind) pair whose record
    /// shape does not match the data returned for it.
    #[error("Position shape mismatch for {category:?}/{kind:?}: {reason}")]
    ShapeMismatch {
        category: PositionCategory,
        kind: PositionKind,
        reason: String,
    },
    #[error("{entity} record is missing required field {field:?}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },
    #[error("{entity} record has invalid value {value:?} for field {field:?}")]
    InvalidValue {
        entity: &'static str,
        field: &'static str,
        value: String,
    },
}
