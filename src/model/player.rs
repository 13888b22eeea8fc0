use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::entity::EntityError,
    model::{
        planet::Planet,
        position::PositionKind,
        record::Record,
        reference::{AllianceReference, PlayerReference},
        snapshot::SnapshotContext,
    },
    universe::Universe,
    xml::{XmlElement, XmlValue},
};

/// Player entry of `players.xml`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    /// Raw status flags as sent by the server (for example `"vI"`), absent for active players.
    pub status: Option<String>,
    pub alliance: Option<AllianceReference>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip)]
    pub universe: Universe,
}

impl Player {
    pub fn from_record(value: &XmlValue, ctx: &SnapshotContext<'_>) -> Result<Self, EntityError> {
        let record = Record::from_value("player", value);

        Ok(Self {
            id: record.required("id")?.to_string(),
            name: record.required("name")?.to_string(),
            status: record.optional("status").map(str::to_string),
            alliance: record
                .optional("alliance")
                .map(|id| AllianceReference::new(id, ctx)),
            timestamp: ctx.timestamp,
            universe: ctx.universe.clone(),
        })
    }

    /// Lazy reference to this player in the snapshot it was read from.
    pub fn reference(&self) -> PlayerReference {
        PlayerReference::new(
            self.id.as_str(),
            &SnapshotContext::new(&self.universe, self.timestamp),
        )
    }
}

/// Per-player document `playerData.xml?id=`: scores, planets and alliance in one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetails {
    pub id: String,
    pub name: String,
    pub scores: Vec<PlayerScore>,
    pub planets: Vec<Planet>,
    pub alliance: Option<AllianceSummary>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip)]
    pub universe: Universe,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerScore {
    pub kind: PositionKind,
    pub position: u32,
    pub score: i64,
    /// Only present on the military ranking.
    pub ships: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllianceSummary {
    pub alliance: AllianceReference,
    pub name: Option<String>,
    pub tag: Option<String>,
}

impl PlayerDetails {
    pub fn from_root(root: &XmlElement, ctx: &SnapshotContext<'_>) -> Result<Self, EntityError> {
        let record = Record::from_element("playerData", root);
        let id = record.required("id")?;

        let scores = record
            .children("positions", "positions")
            .into_iter()
            .flat_map(|positions| positions.children("position", "position"))
            .map(|position| {
                let code: u8 = position.parse("type")?;
                Ok(PlayerScore {
                    kind: PositionKind::try_from(code)?,
                    position: position.parse_raw(
                        "position",
                        position.text().ok_or(EntityError::MissingField {
                            entity: "position",
                            field: "position",
                        })?,
                    )?,
                    score: position.parse("score")?,
                    ships: position.parse_optional("ships")?,
                })
            })
            .collect::<Result<Vec<_>, EntityError>>()?;

        let planets = record
            .children("planets", "planets")
            .into_iter()
            .flat_map(|planets| planets.children("planet", "planet"))
            .map(|planet| Planet::from_parts(planet, Some(id), ctx))
            .collect::<Result<Vec<_>, EntityError>>()?;

        let alliance = record
            .children("alliance", "alliance")
            .into_iter()
            .next()
            .and_then(|alliance| {
                alliance.optional("id").map(|alliance_id| AllianceSummary {
                    alliance: AllianceReference::new(alliance_id, ctx),
                    name: alliance.optional("name").map(str::to_string),
                    tag: alliance.optional("tag").map(str::to_string),
                })
            });

        Ok(Self {
            id: id.to_string(),
            name: record.required("name")?.to_string(),
            scores,
            planets,
            alliance,
            timestamp: ctx.timestamp,
            universe: ctx.universe.clone(),
        })
    }

    pub fn score(&self, kind: PositionKind) -> Option<&PlayerScore> {
        self.scores.iter().find(|score| score.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{client::Client, xml::parse_document};

    fn universe() -> Universe {
        Universe::from_endpoint(&Client::new().unwrap(), "http://localhost/api")
    }

    fn context(universe: &Universe) -> SnapshotContext<'_> {
        SnapshotContext::new(universe, DateTime::from_timestamp(1_700_000_000, 0).unwrap())
    }

    fn player_value(attributes: &[(&str, &str)]) -> XmlValue {
        attributes
            .iter()
            .fold(XmlElement::new(), |element, (key, value)| {
                element.with_attr(*key, *value)
            })
            .into_value()
    }

    #[test]
    fn test_builds_player_with_alliance_reference() {
        let universe = universe();
        let ctx = context(&universe);
        let value = player_value(&[
            ("id", "100"),
            ("name", "Ares"),
            ("status", "vI"),
            ("alliance", "500"),
        ]);

        let player = Player::from_record(&value, &ctx).unwrap();
        assert_eq!(player.id, "100");
        assert_eq!(player.name, "Ares");
        assert_eq!(player.status.as_deref(), Some("vI"));
        assert_eq!(player.alliance.as_ref().map(|a| a.id()), Some("500"));
        assert_eq!(player.timestamp, ctx.timestamp);
    }

    #[test]
    fn test_empty_alliance_attribute_is_none() {
        let universe = universe();
        let value = player_value(&[("id", "100"), ("name", "Ares"), ("alliance", "")]);

        let player = Player::from_record(&value, &context(&universe)).unwrap();
        assert!(player.alliance.is_none());
        assert!(player.status.is_none());
    }

    #[test]
    fn test_missing_id_fails() {
        let universe = universe();
        let value = player_value(&[("name", "Ares")]);

        let result = Player::from_record(&value, &context(&universe));
        assert_eq!(
            result,
            Err(EntityError::MissingField {
                entity: "player",
                field: "id"
            })
        );
    }

    #[test]
    fn test_reference_points_back_at_same_snapshot() {
        let universe = universe();
        let ctx = context(&universe);
        let player = Player::from_record(&player_value(&[("id", "7"), ("name", "Hermes")]), &ctx)
            .unwrap();

        assert_eq!(player.reference(), PlayerReference::new("7", &ctx));
    }

    #[test]
    fn test_builds_player_details() {
        let xml = r#"<playerData id="100" name="Ares" serverId="en1" timestamp="1700000000">
            <positions>
                <position type="0" score="5000">12</position>
                <position type="3" score="900" ships="42">3</position>
            </positions>
            <planets>
                <planet id="1" name="Homeworld" coords="1:2:3"><moon id="2" name="Moon" size="8000"/></planet>
                <planet id="3" name="Colony" coords="4:5:6"/>
            </planets>
            <alliance id="500"><name>Olympus</name><tag>OLY</tag></alliance>
        </playerData>"#;
        let document = parse_document(xml).unwrap().unwrap();
        let universe = universe();

        let details = PlayerDetails::from_root(&document.root, &context(&universe)).unwrap();
        assert_eq!(details.name, "Ares");
        assert_eq!(details.scores.len(), 2);
        let military = details.score(PositionKind::Military).unwrap();
        assert_eq!(military.position, 3);
        assert_eq!(military.ships, Some(42));
        assert_eq!(details.score(PositionKind::Total).unwrap().ships, None);
        assert_eq!(details.planets.len(), 2);
        assert_eq!(details.planets[0].player.id(), "100");
        assert!(details.planets[0].moon.is_some());
        let alliance = details.alliance.unwrap();
        assert_eq!(alliance.alliance.id(), "500");
        assert_eq!(alliance.tag.as_deref(), Some("OLY"));
    }

    #[test]
    fn test_player_details_without_alliance_or_planets() {
        let xml = r#"<playerData id="100" name="Ares" timestamp="1700000000"><positions/></playerData>"#;
        let document = parse_document(xml).unwrap().unwrap();
        let universe = universe();

        let details = PlayerDetails::from_root(&document.root, &context(&universe)).unwrap();
        assert!(details.scores.is_empty());
        assert!(details.planets.is_empty());
        assert!(details.alliance.is_none());
    }
}
