//! Leaderboard positions from `highscore.xml`.
//!
//! The shape of a record depends on the requested category and ranking kind:
//! player military rankings carry a `ships` count, every other combination only
//! carries position and score. [`PositionShape::of`] picks the shape from the
//! query before any record is read, and each shape has its own builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::entity::EntityError,
    model::{
        record::Record,
        reference::{AllianceReference, PlayerReference},
        snapshot::SnapshotContext,
    },
    xml::XmlValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionCategory {
    Player,
    Alliance,
}

impl PositionCategory {
    /// Value of the `category` query parameter.
    pub fn code(self) -> u8 {
        match self {
            Self::Player => 1,
            Self::Alliance => 2,
        }
    }
}

impl TryFrom<u8> for PositionCategory {
    type Error = EntityError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Player),
            2 => Ok(Self::Alliance),
            other => Err(EntityError::InvalidValue {
                entity: "highscore",
                field: "category",
                value: other.to_string(),
            }),
        }
    }
}

/// Ranking kind, sent as the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PositionKind {
    Total,
    Economy,
    Research,
    Military,
    MilitaryLost,
    MilitaryBuilt,
    MilitaryDestroyed,
    Honor,
}

impl PositionKind {
    pub const ALL: [PositionKind; 8] = [
        Self::Total,
        Self::Economy,
        Self::Research,
        Self::Military,
        Self::MilitaryLost,
        Self::MilitaryBuilt,
        Self::MilitaryDestroyed,
        Self::Honor,
    ];

    pub fn code(self) -> u8 {
        match self {
            Self::Total => 0,
            Self::Economy => 1,
            Self::Research => 2,
            Self::Military => 3,
            Self::MilitaryLost => 4,
            Self::MilitaryBuilt => 5,
            Self::MilitaryDestroyed => 6,
            Self::Honor => 7,
        }
    }
}

impl TryFrom<u8> for PositionKind {
    type Error = EntityError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or(EntityError::InvalidValue {
                entity: "position",
                field: "type",
                value: code.to_string(),
            })
    }
}

/// Concrete record shape of a (category, kind) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionShape {
    Player,
    MilitaryPlayer,
    Alliance,
}

impl PositionShape {
    pub fn of(category: PositionCategory, kind: PositionKind) -> Self {
        match (category, kind) {
            (PositionCategory::Player, PositionKind::Military) => Self::MilitaryPlayer,
            (PositionCategory::Player, _) => Self::Player,
            (PositionCategory::Alliance, _) => Self::Alliance,
        }
    }

    /// Tag of the repeated element holding the records of this shape.
    pub fn record_key(self) -> &'static str {
        match self {
            Self::Player | Self::MilitaryPlayer => "player",
            Self::Alliance => "alliance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPosition {
    pub player: PlayerReference,
    pub kind: PositionKind,
    pub position: u32,
    pub score: i64,
    pub timestamp: DateTime<Utc>,
}

/// Player position on the military ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilitaryPlayerPosition {
    pub player: PlayerReference,
    pub position: u32,
    pub score: i64,
    pub ships: u64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlliancePosition {
    pub alliance: AllianceReference,
    pub kind: PositionKind,
    pub position: u32,
    pub score: i64,
    pub timestamp: DateTime<Utc>,
}

impl PlayerPosition {
    /// Any stray `ships` attribute is ignored for non-military kinds.
    pub fn from_record(
        value: &XmlValue,
        kind: PositionKind,
        ctx: &SnapshotContext<'_>,
    ) -> Result<Self, EntityError> {
        let record = Record::from_value("position", value);

        Ok(Self {
            player: PlayerReference::new(record.required("id")?, ctx),
            kind,
            position: record.parse("position")?,
            score: record.parse("score")?,
            timestamp: ctx.timestamp,
        })
    }
}

impl MilitaryPlayerPosition {
    pub fn from_record(value: &XmlValue, ctx: &SnapshotContext<'_>) -> Result<Self, EntityError> {
        let record = Record::from_value("position", value);

        let ships = match record.parse_optional("ships")? {
            Some(ships) => ships,
            None => {
                return Err(EntityError::ShapeMismatch {
                    category: PositionCategory::Player,
                    kind: PositionKind::Military,
                    reason: format!(
                        "player {} has no ships attribute",
                        record.optional("id").unwrap_or("<unknown>")
                    ),
                })
            }
        };

        Ok(Self {
            player: PlayerReference::new(record.required("id")?, ctx),
            position: record.parse("position")?,
            score: record.parse("score")?,
            ships,
            timestamp: ctx.timestamp,
        })
    }
}

impl AlliancePosition {
    pub fn from_record(
        value: &XmlValue,
        kind: PositionKind,
        ctx: &SnapshotContext<'_>,
    ) -> Result<Self, EntityError> {
        let record = Record::from_value("position", value);

        Ok(Self {
            alliance: AllianceReference::new(record.required("id")?, ctx),
            kind,
            position: record.parse("position")?,
            score: record.parse("score")?,
            timestamp: ctx.timestamp,
        })
    }
}

/// A leaderboard entry of any shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum Position {
    Player(PlayerPosition),
    MilitaryPlayer(MilitaryPlayerPosition),
    Alliance(AlliancePosition),
}

impl Position {
    /// Builds a record with the builder selected by `shape`.
    pub fn from_record(
        value: &XmlValue,
        shape: PositionShape,
        kind: PositionKind,
        ctx: &SnapshotContext<'_>,
    ) -> Result<Self, EntityError> {
        Ok(match shape {
            PositionShape::Player => Self::Player(PlayerPosition::from_record(value, kind, ctx)?),
            PositionShape::MilitaryPlayer => {
                Self::MilitaryPlayer(MilitaryPlayerPosition::from_record(value, ctx)?)
            }
            PositionShape::Alliance => {
                Self::Alliance(AlliancePosition::from_record(value, kind, ctx)?)
            }
        })
    }

    pub fn shape(&self) -> PositionShape {
        match self {
            Self::Player(_) => PositionShape::Player,
            Self::MilitaryPlayer(_) => PositionShape::MilitaryPlayer,
            Self::Alliance(_) => PositionShape::Alliance,
        }
    }

    /// Identifier of the ranked player or alliance.
    pub fn id(&self) -> &str {
        match self {
            Self::Player(position) => position.player.id(),
            Self::MilitaryPlayer(position) => position.player.id(),
            Self::Alliance(position) => position.alliance.id(),
        }
    }

    pub fn kind(&self) -> PositionKind {
        match self {
            Self::Player(position) => position.kind,
            Self::MilitaryPlayer(_) => PositionKind::Military,
            Self::Alliance(position) => position.kind,
        }
    }

    pub fn position(&self) -> u32 {
        match self {
            Self::Player(position) => position.position,
            Self::MilitaryPlayer(position) => position.position,
            Self::Alliance(position) => position.position,
        }
    }

    pub fn score(&self) -> i64 {
        match self {
            Self::Player(position) => position.score,
            Self::MilitaryPlayer(position) => position.score,
            Self::Alliance(position) => position.score,
        }
    }

    /// Ship count, only carried by player military positions.
    pub fn ships(&self) -> Option<u64> {
        match self {
            Self::MilitaryPlayer(position) => Some(position.ships),
            _ => None,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Player(position) => position.timestamp,
            Self::MilitaryPlayer(position) => position.timestamp,
            Self::Alliance(position) => position.timestamp,
        }
    }
}
