use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{util::truthy::is_truthy, xml::XmlElement};

/// Properties the feed encodes as loose booleans.
const FLAG_PROPERTIES: [&str; 5] = ["acs", "rapidFire", "donutGalaxy", "donutSystem", "wfEnabled"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ServerValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ServerValue {
    fn decode(key: &str, raw: &str) -> Self {
        if FLAG_PROPERTIES.contains(&key) {
            return Self::Bool(is_truthy(Some(raw)));
        }

        match parse_number(raw) {
            Some(number) => Self::Number(number),
            None => Self::Text(raw.to_string()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

// Only plain decimal literals count; Rust also accepts "inf" and "NaN".
fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let looks_numeric = !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        && raw.chars().any(|c| c.is_ascii_digit());

    if !looks_numeric {
        return None;
    }
    raw.parse::<f64>().ok().filter(|number| number.is_finite())
}

/// Server settings from `serverData.xml`, keyed by property name.
///
/// Values are passed through untouched apart from numeric and flag decoding;
/// their game meaning is left to the caller. Flag properties are always present
/// and default to `false`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerData {
    pub timestamp: DateTime<Utc>,
    pub properties: BTreeMap<String, ServerValue>,
}

impl ServerData {
    pub fn from_root(root: &XmlElement, timestamp: DateTime<Utc>) -> Self {
        let mut properties: BTreeMap<String, ServerValue> = root
            .fields()
            .filter(|(key, _)| !key.starts_with("xmlns") && !key.contains(':'))
            .filter_map(|(key, value)| {
                let raw = value.first()?.text().unwrap_or_default();
                Some((key.to_string(), ServerValue::decode(key, raw)))
            })
            .collect();

        for flag in FLAG_PROPERTIES {
            properties
                .entry(flag.to_string())
                .or_insert(ServerValue::Bool(false));
        }

        Self {
            timestamp,
            properties,
        }
    }

    pub fn get(&self, key: &str) -> Option<&ServerValue> {
        self.properties.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ServerValue::as_text)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ServerValue::as_number)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ServerValue::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServerValue)> {
        self.properties.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
