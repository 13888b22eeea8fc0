use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::{
    error::entity::EntityError,
    model::{record::Record, reference::PlayerReference, snapshot::SnapshotContext},
    universe::Universe,
    xml::XmlValue,
};

/// Planet entry of `universe.xml`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub id: String,
    pub name: String,
    /// Owner of the planet.
    pub player: PlayerReference,
    pub coords: Coords,
    pub moon: Option<Moon>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip)]
    pub universe: Universe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Moon {
    pub id: String,
    pub name: String,
    pub size: Option<u32>,
}

/// Galaxy/system/position triple written as `"g:s:p"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coords {
    pub galaxy: u16,
    pub system: u16,
    pub position: u8,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid coordinates {0:?}, expected galaxy:system:position")]
pub struct ParseCoordsError(String);

impl FromStr for Coords {
    type Err = ParseCoordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseCoordsError(s.to_string());
        let mut parts = s.trim().split(':');

        let galaxy = parts.next().and_then(|part| part.parse().ok()).ok_or_else(invalid)?;
        let system = parts.next().and_then(|part| part.parse().ok()).ok_or_else(invalid)?;
        let position = parts.next().and_then(|part| part.parse().ok()).ok_or_else(invalid)?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            galaxy,
            system,
            position,
        })
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.galaxy, self.system, self.position)
    }
}

impl Planet {
    pub fn from_record(value: &XmlValue, ctx: &SnapshotContext<'_>) -> Result<Self, EntityError> {
        Self::from_parts(Record::from_value("planet", value), None, ctx)
    }

    /// Builds a planet; `owner` overrides the `player` attribute for documents
    /// that nest planets under their owner.
    pub(crate) fn from_parts(
        record: Record<'_>,
        owner: Option<&str>,
        ctx: &SnapshotContext<'_>,
    ) -> Result<Self, EntityError> {
        let owner = match owner {
            Some(owner) => owner,
            None => record.required("player")?,
        };

        let moon = record
            .children("moon", "moon")
            .into_iter()
            .next()
            .map(|moon| {
                Ok::<_, EntityError>(Moon {
                    id: moon.required("id")?.to_string(),
                    name: moon.required("name")?.to_string(),
                    size: moon.parse_optional("size")?,
                })
            })
            .transpose()?;

        Ok(Self {
            id: record.required("id")?.to_string(),
            name: record.required("name")?.to_string(),
            player: PlayerReference::new(owner, ctx),
            coords: record.parse("coords")?,
            moon,
            timestamp: ctx.timestamp,
            universe: ctx.universe.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::Client, xml::XmlElement};

    fn universe() -> Universe {
        Universe::from_endpoint(&Client::new().unwrap(), "http://localhost/api")
    }

    fn context(universe: &Universe) -> SnapshotContext<'_> {
        SnapshotContext::new(universe, DateTime::from_timestamp(1_700_000_000, 0).unwrap())
    }

    fn planet_element() -> XmlElement {
        XmlElement::new()
            .with_attr("id", "33620000")
            .with_attr("player", "100")
            .with_attr("name", "Homeworld")
            .with_attr("coords", "1:220:8")
    }

    #[test]
    fn test_parse_coords() {
        let coords: Coords = "1:220:8".parse().unwrap();
        assert_eq!(
            coords,
            Coords {
                galaxy: 1,
                system: 220,
                position: 8
            }
        );
        assert_eq!(coords.to_string(), "1:220:8");
    }

    #[test]
    fn test_parse_coords_rejects_malformed() {
        for raw in ["", "1:2", "1:2:3:4", "a:b:c", "1:2:-3"] {
            assert!(raw.parse::<Coords>().is_err(), "{raw:?} should not parse");
        }
    }

    #[test]
    fn test_coords_error_message() {
        let error = "1:2".parse::<Coords>().unwrap_err();
        assert_eq!(
            error.to_string(),
            r#"invalid coordinates "1:2", expected galaxy:system:position"#
        );
    }

    #[test]
    fn test_builds_planet_without_moon() {
        let universe = universe();
        let planet =
            Planet::from_record(&planet_element().into_value(), &context(&universe)).unwrap();

        assert_eq!(planet.id, "33620000");
        assert_eq!(planet.player.id(), "100");
        assert_eq!(planet.coords.system, 220);
        assert!(planet.moon.is_none());
    }

    #[test]
    fn test_builds_planet_with_moon() {
        let universe = universe();
        let element = planet_element().with_child(
            "moon",
            XmlElement::new()
                .with_attr("id", "33620001")
                .with_attr("name", "Moon")
                .with_attr("size", "8774"),
        );

        let planet = Planet::from_record(&element.into_value(), &context(&universe)).unwrap();
        let moon = planet.moon.unwrap();
        assert_eq!(moon.id, "33620001");
        assert_eq!(moon.size, Some(8774));
    }

    #[test]
    fn test_invalid_coords_fail() {
        let universe = universe();
        let element = XmlElement::new()
            .with_attr("id", "1")
            .with_attr("player", "100")
            .with_attr("name", "Lost")
            .with_attr("coords", "nowhere");

        let result = Planet::from_record(&element.into_value(), &context(&universe));
        assert!(matches!(
            result,
            Err(EntityError::InvalidValue { field: "coords", .. })
        ));
    }
}
