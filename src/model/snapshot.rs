use chrono::{DateTime, Utc};

use crate::{error::entity::EntityError, universe::Universe, xml::XmlElement};

/// Attributes every category document carries on its root element.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub timestamp: DateTime<Utc>,
    pub server_id: Option<String>,
}

impl Envelope {
    /// Reads the envelope of a category root; `category` names the document in errors.
    pub fn from_root(root: &XmlElement, category: &'static str) -> Result<Self, EntityError> {
        let raw = root
            .value("timestamp")
            .ok_or(EntityError::MissingField {
                entity: category,
                field: "timestamp",
            })?;

        let timestamp = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .ok_or_else(|| EntityError::InvalidValue {
                entity: category,
                field: "timestamp",
                value: raw.to_string(),
            })?;

        Ok(Self {
            timestamp,
            server_id: root
                .value("serverId")
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        })
    }
}

/// Owning universe and fetch time threaded through every builder of one call.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotContext<'a> {
    pub universe: &'a Universe,
    pub timestamp: DateTime<Utc>,
}

impl<'a> SnapshotContext<'a> {
    pub fn new(universe: &'a Universe, timestamp: DateTime<Utc>) -> Self {
        Self {
            universe,
            timestamp,
        }
    }
}
