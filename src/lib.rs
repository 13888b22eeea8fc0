//! Typed client for the public OGame XML API.
//!
//! A [`Universe`] is created from a [`Client`] and a server id + region (or a raw
//! endpoint). Each of its retrieval methods fetches one category document
//! (`players.xml`, `alliances.xml`, `universe.xml`, `highscore.xml`, ...),
//! normalizes repeated elements and builds immutable entities stamped with the
//! document's timestamp. Cross-entity fields such as an alliance's members or a
//! planet's owner are [`LazyReference`]s that resolve with a separate fetch.
//!
//! ```no_run
//! # async fn run() -> Result<(), ogame_api::Error> {
//! use ogame_api::{Client, Region};
//!
//! let client = Client::new()?;
//! let universe = client.universe(152, Region::En);
//!
//! for alliance in universe.alliances().await? {
//!     let founder = alliance.founder.resolve().await?;
//!     println!("[{}] {} founded by {}", alliance.tag, alliance.name, founder.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod universe;
pub mod util;
pub mod xml;

pub use client::{Client, ClientBuilder};
pub use config::Config;
pub use error::{config::ConfigError, entity::EntityError, transport::TransportError, Error};
pub use model::{
    alliance::Alliance,
    localization::Localizations,
    planet::{Coords, Moon, Planet},
    player::{AllianceSummary, Player, PlayerDetails, PlayerScore},
    position::{
        AlliancePosition, MilitaryPlayerPosition, PlayerPosition, Position, PositionCategory,
        PositionKind, PositionShape,
    },
    reference::{resolve_all, AllianceReference, LazyReference, PlayerReference, Resolvable},
    server_data::{ServerData, ServerValue},
    snapshot::{Envelope, SnapshotContext},
};
pub use universe::{parse_endpoint, NearbyUniverse, Region, Universe, UniverseId};
pub use util::cardinality::{normalize, OneOrMany};
