use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

/// Server identifier: a number (`s{n}` hosts) or a named server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum UniverseId {
    Number(u32),
    Name(String),
}

impl From<u32> for UniverseId {
    fn from(number: u32) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for UniverseId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for UniverseId {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for UniverseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "s{}", number),
            Self::Name(name) => f.write_str(&name.to_lowercase()),
        }
    }
}

/// Community region a universe belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    En,
    De,
    Es,
    Fr,
    It,
    Pl,
    Pt,
    Nl,
    Tr,
    Us,
    Ar,
    Br,
    Mx,
}

impl Region {
    pub const ALL: [Region; 13] = [
        Self::En,
        Self::De,
        Self::Es,
        Self::Fr,
        Self::It,
        Self::Pl,
        Self::Pt,
        Self::Nl,
        Self::Tr,
        Self::Us,
        Self::Ar,
        Self::Br,
        Self::Mx,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::It => "it",
            Self::Pl => "pl",
            Self::Pt => "pt",
            Self::Nl => "nl",
            Self::Tr => "tr",
            Self::Us => "us",
            Self::Ar => "ar",
            Self::Br => "br",
            Self::Mx => "mx",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown region {0:?}")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRegion(s.to_string()))
    }
}

/// API endpoint of a universe: `https://{id}-{region}.ogame.gameforge.com/api`.
pub fn parse_endpoint(id: &UniverseId, region: Region) -> String {
    format!("https://{}-{}.ogame.gameforge.com/api", id, region)
}
