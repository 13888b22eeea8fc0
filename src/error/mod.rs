//! Error types for the OGame API client.
//!
//! Errors are split by the layer that produces them: configuration loading, the
//! transport/decode collaborator, and entity construction or lookup. Each domain
//! has its own `thiserror` enum and the crate-level [`Error`] aggregates them so
//! callers can use `?` throughout while still matching on the failing layer.

pub mod config;
pub mod entity;
pub mod transport;

use thiserror::Error;

use crate::error::{config::ConfigError, entity::EntityError, transport::TransportError};

/// Main error type returned by every fallible operation of the crate.
///
/// Variants are transparent wrappers so the message of the underlying domain
/// error is shown unchanged. Nothing in the crate retries or recovers from these;
/// they always reach the immediate caller of the failing retrieval.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Fetching or decoding a category document failed.
    #[error(transparent)]
    TransportError(#[from] TransportError),
    /// Building or looking up an entity failed.
    #[error(transparent)]
    EntityError(#[from] EntityError),
}

impl Error {
    /// Returns true when a lazy reference or id lookup found no matching entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntityError(EntityError::NotFound { .. }))
    }

    /// Returns true when a leaderboard query was made with an inconsistent shape.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::EntityError(EntityError::ShapeMismatch { .. }))
    }
}
