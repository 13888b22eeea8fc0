use serde::Serialize;

use crate::{
    client::Client, error::entity::EntityError, model::record::Record, universe::Universe,
    xml::XmlValue,
};

/// Entry of `universes.xml`: another universe of the same community.
///
/// The endpoint is taken verbatim from the entry's `href`, so no region has to
/// be guessed for it.
#[derive(Debug, Clone, Serialize)]
pub struct NearbyUniverse {
    pub id: String,
    pub endpoint: String,
    #[serde(skip)]
    client: Client,
}

impl NearbyUniverse {
    pub(crate) fn from_record(value: &XmlValue, client: &Client) -> Result<Self, EntityError> {
        let record = Record::from_value("universe", value);

        Ok(Self {
            id: record.required("id")?.to_string(),
            endpoint: record.required("href")?.trim_end_matches('/').to_string(),
            client: client.clone(),
        })
    }

    /// Universe handle for this entry, sharing the client it was fetched with.
    pub fn universe(&self) -> Universe {
        Universe::from_endpoint(&self.client, self.endpoint.as_str())
    }
}

impl PartialEq for NearbyUniverse {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.endpoint == other.endpoint
    }
}
