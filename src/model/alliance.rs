use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    error::entity::EntityError,
    model::{record::Record, reference::PlayerReference, snapshot::SnapshotContext},
    universe::Universe,
    xml::XmlValue,
};

/// Alliance entry of `alliances.xml`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alliance {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub founder: PlayerReference,
    pub found_date: Option<DateTime<Utc>>,
    pub logo: Option<String>,
    /// Whether the alliance accepts applications.
    pub open: bool,
    pub homepage: Option<String>,
    /// Members in document order, founder included.
    pub members: Vec<PlayerReference>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip)]
    pub universe: Universe,
}

impl Alliance {
    pub fn from_record(value: &XmlValue, ctx: &SnapshotContext<'_>) -> Result<Self, EntityError> {
        let record = Record::from_value("alliance", value);

        let found_date = match record.parse_optional::<i64>("foundDate")? {
            Some(secs) => Some(DateTime::from_timestamp(secs, 0).ok_or_else(|| {
                EntityError::InvalidValue {
                    entity: "alliance",
                    field: "foundDate",
                    value: secs.to_string(),
                }
            })?),
            None => None,
        };

        let members = record
            .children("player", "member")
            .into_iter()
            .map(|member| Ok(PlayerReference::new(member.required("id")?, ctx)))
            .collect::<Result<Vec<_>, EntityError>>()?;

        Ok(Self {
            id: record.required("id")?.to_string(),
            name: record.required("name")?.to_string(),
            tag: record.required("tag")?.to_string(),
            founder: PlayerReference::new(record.required("founder")?, ctx),
            found_date,
            logo: record.optional("logo").map(str::to_string),
            open: record.flag("open"),
            homepage: record.optional("homepage").map(str::to_string),
            members,
            timestamp: ctx.timestamp,
            universe: ctx.universe.clone(),
        })
    }

    pub fn is_member(&self, player_id: &str) -> bool {
        self.members.iter().any(|member| member.id() == player_id)
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

    fn alliance_element() -> XmlElement {
        XmlElement::new()
            .with_attr("id", "500")
            .with_attr("name", "Olympus")
            .with_attr("tag", "OLY")
            .with_attr("founder", "1")
            .with_attr("foundDate", "1600000000")
    }

    fn member(id: &str) -> XmlElement {
        XmlElement::new().with_attr("id", id)
    }

    #[test]
    fn test_single_member_becomes_one_element_list() {
        let universe = universe();
        let element = alliance_element().with_child("player", member("1"));

        let alliance = Alliance::from_record(&element.into_value(), &context(&universe)).unwrap();
        assert_eq!(alliance.members.len(), 1);
        assert_eq!(alliance.members[0].id(), "1");
    }

    #[test]
    fn test_members_keep_document_order() {
        let universe = universe();
        let element = alliance_element()
            .with_child("player", member("2"))
            .with_child("player", member("1"));

        let alliance = Alliance::from_record(&element.into_value(), &context(&universe)).unwrap();
        let ids: Vec<_> = alliance.members.iter().map(|m| m.id()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(alliance.founder.id(), "1");
        assert!(alliance.is_member("2"));
    }

    #[test]
    fn test_no_members_is_empty_list() {
        let universe = universe();
        let alliance =
            Alliance::from_record(&alliance_element().into_value(), &context(&universe)).unwrap();
        assert!(alliance.members.is_empty());
    }

    #[test]
    fn test_optional_fields_absent() {
        let universe = universe();
        let alliance =
            Alliance::from_record(&alliance_element().into_value(), &context(&universe)).unwrap();

        assert!(alliance.logo.is_none());
        assert!(alliance.homepage.is_none());
        assert!(!alliance.open);
        assert_eq!(alliance.found_date.unwrap().timestamp(), 1_600_000_000);
    }

    #[test]
    fn test_open_flag_truthiness() {
        let universe = universe();
        for (raw, expected) in [("1", true), ("0", false), ("", false)] {
            let element = alliance_element().with_attr("open", raw);
            let alliance =
                Alliance::from_record(&element.into_value(), &context(&universe)).unwrap();
            assert_eq!(alliance.open, expected, "open={raw:?}");
        }
    }

    #[test]
    fn test_missing_founder_fails() {
        let universe = universe();
        let element = XmlElement::new()
            .with_attr("id", "500")
            .with_attr("name", "Olympus")
            .with_attr("tag", "OLY");

        let result = Alliance::from_record(&element.into_value(), &context(&universe));
        assert!(matches!(
            result,
            Err(EntityError::MissingField { field: "founder", .. })
        ));
    }
}
