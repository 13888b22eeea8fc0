use std::str::FromStr;

use crate::{
    error::entity::EntityError,
    util::truthy::is_truthy,
    xml::{XmlElement, XmlValue},
};

/// Read-only view over one normalized record, tagged with the entity it builds.
///
/// Empty attributes are treated as absent: the feed writes `alliance=""` for a
/// player without an alliance.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Record<'a> {
    entity: &'static str,
    element: Option<&'a XmlElement>,
    text: Option<&'a str>,
}

impl<'a> Record<'a> {
    pub fn from_value(entity: &'static str, value: &'a XmlValue) -> Self {
        Self {
            entity,
            element: value.as_element(),
            text: value.text(),
        }
    }

    pub fn from_element(entity: &'static str, element: &'a XmlElement) -> Self {
        Self {
            entity,
            element: Some(element),
            text: element.text(),
        }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Text content of the record itself.
    pub fn text(&self) -> Option<&'a str> {
        self.text.filter(|text| !text.is_empty())
    }

    pub fn optional(&self, field: &'static str) -> Option<&'a str> {
        self.element
            .and_then(|element| element.value(field))
            .filter(|value| !value.is_empty())
    }

    pub fn required(&self, field: &'static str) -> Result<&'a str, EntityError> {
        self.optional(field).ok_or(EntityError::MissingField {
            entity: self.entity,
            field,
        })
    }

    pub fn flag(&self, field: &'static str) -> bool {
        is_truthy(self.optional(field))
    }

    pub fn parse<T: FromStr>(&self, field: &'static str) -> Result<T, EntityError> {
        let raw = self.required(field)?;
        self.parse_raw(field, raw)
    }

    pub fn parse_optional<T: FromStr>(
        &self,
        field: &'static str,
    ) -> Result<Option<T>, EntityError> {
        self.optional(field)
            .map(|raw| self.parse_raw(field, raw))
            .transpose()
    }

    pub fn parse_raw<T: FromStr>(&self, field: &'static str, raw: &str) -> Result<T, EntityError> {
        raw.trim().parse().map_err(|_| EntityError::InvalidValue {
            entity: self.entity,
            field,
            value: raw.to_string(),
        })
    }

    /// Normalized child records stored under `key`, each tagged as `entity`.
    pub fn children(&self, key: &str, entity: &'static str) -> Vec<Record<'a>> {
        self.element
            .map(|element| element.records(key))
            .unwrap_or_default()
            .into_iter()
            .map(|value| Record::from_value(entity, value))
            .collect()
    }
}
