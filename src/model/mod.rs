//! Typed entities built from normalized API records.
//!
//! Builders are synchronous and never touch the network. Fields that point at
//! another entity are stored as [`reference::LazyReference`] handles into the
//! universe that produced the record, so the player/alliance/planet graph is
//! never loaded eagerly.

pub mod alliance;
pub mod localization;
pub mod planet;
pub mod player;
pub mod position;
pub mod reference;
pub mod server_data;
pub mod snapshot;

pub(crate) mod record;
