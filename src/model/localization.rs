use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::entity::EntityError, model::record::Record, xml::XmlElement};

/// Localized names from `localization.xml`, keyed by technology or mission id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Localizations {
    pub timestamp: DateTime<Utc>,
    pub techs: BTreeMap<String, String>,
    pub missions: BTreeMap<String, String>,
}

impl Localizations {
    pub fn from_root(root: &XmlElement, timestamp: DateTime<Utc>) -> Result<Self, EntityError> {
        let record = Record::from_element("localization", root);

        Ok(Self {
            timestamp,
            techs: names(&record, "techs")?,
            missions: names(&record, "missions")?,
        })
    }

    pub fn tech(&self, id: &str) -> Option<&str> {
        self.techs.get(id).map(String::as_str)
    }

    pub fn mission(&self, id: &str) -> Option<&str> {
        self.missions.get(id).map(String::as_str)
    }
}

fn names(
    record: &Record<'_>,
    group: &'static str,
) -> Result<BTreeMap<String, String>, EntityError> {
    record
        .children(group, group)
        .into_iter()
        .flat_map(|group| group.children("name", "name"))
        .map(|name| {
            Ok((
                name.required("id")?.to_string(),
                name.text().unwrap_or_default().to_string(),
            ))
        })
        .collect()
}
