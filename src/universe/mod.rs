//! Universe snapshot: the aggregation root of the entity graph.
//!
//! A [`Universe`] is an immutable handle on one server's API endpoint. Each
//! retrieval method performs exactly one fetch of its category document, builds
//! every record against the document's timestamp and returns the entities. The
//! universe itself holds no fetched state, so concurrent and repeated calls are
//! independent and may observe different timestamps.

mod endpoint;
mod nearby;

#[cfg(test)]
mod tests;

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{
    client::Client,
    error::{entity::EntityError, Error},
    model::{
        alliance::Alliance,
        localization::Localizations,
        planet::Planet,
        player::{Player, PlayerDetails},
        position::{
            AlliancePosition, MilitaryPlayerPosition, PlayerPosition, Position, PositionCategory,
            PositionKind, PositionShape,
        },
        reference::find_by_id,
        server_data::ServerData,
        snapshot::{Envelope, SnapshotContext},
    },
    xml::{XmlElement, XmlValue},
};

pub use endpoint::{parse_endpoint, Region, UniverseId, UnknownRegion};
pub use nearby::NearbyUniverse;

const PLAYERS: &str = "players";
const PLAYER_DATA: &str = "playerData";
const ALLIANCES: &str = "alliances";
const PLANETS: &str = "universe";
const HIGHSCORE: &str = "highscore";
const SERVER_DATA: &str = "serverData";
const LOCALIZATION: &str = "localization";
const UNIVERSES: &str = "universes";

#[derive(Clone)]
pub struct Universe {
    inner: Arc<UniverseInner>,
}

struct UniverseInner {
    client: Client,
    endpoint: String,
    id: Option<UniverseId>,
    region: Option<Region>,
}

impl Universe {
    pub fn new(client: &Client, id: impl Into<UniverseId>, region: Region) -> Self {
        let id = id.into();
        Self {
            inner: Arc::new(UniverseInner {
                client: client.clone(),
                endpoint: parse_endpoint(&id, region),
                id: Some(id),
                region: Some(region),
            }),
        }
    }

    /// Universe on a raw endpoint, such as a mirror or a test server.
    pub fn from_endpoint(client: &Client, endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            inner: Arc::new(UniverseInner {
                client: client.clone(),
                endpoint: endpoint.trim_end_matches('/').to_string(),
                id: None,
                region: None,
            }),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Server id, when the universe was created from one.
    pub fn id(&self) -> Option<&UniverseId> {
        self.inner.id.as_ref()
    }

    pub fn region(&self) -> Option<Region> {
        self.inner.region
    }

    pub fn client(&self) -> &Client {
        &self.inner.client
    }

    /// Every player of the universe.
    pub async fn players(&self) -> Result<Vec<Player>, Error> {
        let (root, envelope) = self.fetch(PLAYERS, &[]).await?;
        self.build_all(&root, "player", &envelope, Player::from_record)
    }

    /// One player, looked up in a fresh fetch of the players document.
    pub async fn player(&self, id: &str) -> Result<Player, Error> {
        find_by_id(self.players().await?, id)
    }

    /// Scores, planets and alliance of one player.
    pub async fn player_details(&self, id: &str) -> Result<PlayerDetails, Error> {
        let (root, envelope) = self.fetch(PLAYER_DATA, &[("id", id.to_string())]).await?;
        let ctx = SnapshotContext::new(self, envelope.timestamp);

        Ok(PlayerDetails::from_root(&root, &ctx)?)
    }

    pub async fn alliances(&self) -> Result<Vec<Alliance>, Error> {
        let (root, envelope) = self.fetch(ALLIANCES, &[]).await?;
        self.build_all(&root, "alliance", &envelope, Alliance::from_record)
    }

    pub async fn alliance(&self, id: &str) -> Result<Alliance, Error> {
        find_by_id(self.alliances().await?, id)
    }

    pub async fn planets(&self) -> Result<Vec<Planet>, Error> {
        let (root, envelope) = self.fetch(PLANETS, &[]).await?;
        self.build_all(&root, "planet", &envelope, Planet::from_record)
    }

    /// Leaderboard of `category` ranked by `kind`, in rank order.
    ///
    /// The shape of every returned entry is fixed by the (category, kind) pair.
    pub async fn positions(
        &self,
        category: PositionCategory,
        kind: PositionKind,
    ) -> Result<Vec<Position>, Error> {
        let shape = PositionShape::of(category, kind);
        self.highscore(category, kind, |value, ctx| {
            Position::from_record(value, shape, kind, ctx)
        })
        .await
    }

    /// Player leaderboard for a non-military kind.
    ///
    /// The military kind has its own shape; use
    /// [`military_player_positions`](Self::military_player_positions) for it.
    pub async fn player_positions(&self, kind: PositionKind) -> Result<Vec<PlayerPosition>, Error> {
        if PositionShape::of(PositionCategory::Player, kind) != PositionShape::Player {
            return Err(EntityError::ShapeMismatch {
                category: PositionCategory::Player,
                kind,
                reason: "military player positions carry ships; use military_player_positions"
                    .to_string(),
            }
            .into());
        }

        self.highscore(PositionCategory::Player, kind, |value, ctx| {
            PlayerPosition::from_record(value, kind, ctx)
        })
        .await
    }

    pub async fn military_player_positions(&self) -> Result<Vec<MilitaryPlayerPosition>, Error> {
        self.highscore(
            PositionCategory::Player,
            PositionKind::Military,
            MilitaryPlayerPosition::from_record,
        )
        .await
    }

    pub async fn alliance_positions(
        &self,
        kind: PositionKind,
    ) -> Result<Vec<AlliancePosition>, Error> {
        self.highscore(PositionCategory::Alliance, kind, |value, ctx| {
            AlliancePosition::from_record(value, kind, ctx)
        })
        .await
    }

    pub async fn server_data(&self) -> Result<ServerData, Error> {
        let (root, envelope) = self.fetch(SERVER_DATA, &[]).await?;
        Ok(ServerData::from_root(&root, envelope.timestamp))
    }

    pub async fn localizations(&self) -> Result<Localizations, Error> {
        let (root, envelope) = self.fetch(LOCALIZATION, &[]).await?;
        Ok(Localizations::from_root(&root, envelope.timestamp)?)
    }

    /// Other universes of the same community.
    pub async fn nearby_universes(&self) -> Result<Vec<NearbyUniverse>, Error> {
        let root = self
            .inner
            .client
            .fetch_category(self.endpoint(), UNIVERSES, &[])
            .await?;

        root.records("universe")
            .into_iter()
            .map(|value| NearbyUniverse::from_record(value, &self.inner.client))
            .collect::<Result<Vec<_>, EntityError>>()
            .map_err(Error::from)
    }

    async fn fetch(
        &self,
        category: &'static str,
        query: &[(&str, String)],
    ) -> Result<(XmlElement, Envelope), Error> {
        let root = self
            .inner
            .client
            .fetch_category(self.endpoint(), category, query)
            .await?;
        let envelope = Envelope::from_root(&root, category)?;

        Ok((root, envelope))
    }

    async fn highscore<T, F>(
        &self,
        category: PositionCategory,
        kind: PositionKind,
        build: F,
    ) -> Result<Vec<T>, Error>
    where
        F: Fn(&XmlValue, &SnapshotContext<'_>) -> Result<T, EntityError>,
    {
        let query = [
            ("category", category.code().to_string()),
            ("type", kind.code().to_string()),
        ];
        let (root, envelope) = self.fetch(HIGHSCORE, &query).await?;
        check_highscore_query(&root, category, kind)?;

        let key = PositionShape::of(category, kind).record_key();
        self.build_all(&root, key, &envelope, build)
    }

    fn build_all<T, F>(
        &self,
        root: &XmlElement,
        key: &str,
        envelope: &Envelope,
        build: F,
    ) -> Result<Vec<T>, Error>
    where
        F: Fn(&XmlValue, &SnapshotContext<'_>) -> Result<T, EntityError>,
    {
        let ctx = SnapshotContext::new(self, envelope.timestamp);
        let entities = root
            .records(key)
            .into_iter()
            .map(|value| build(value, &ctx))
            .collect::<Result<Vec<_>, EntityError>>()?;

        tracing::trace!(
            "Built {} {} records from {} at {}",
            entities.len(),
            key,
            self.endpoint(),
            envelope.timestamp
        );

        Ok(entities)
    }
}

/// Rejects a highscore document answering a different query than the one sent.
fn check_highscore_query(
    root: &XmlElement,
    category: PositionCategory,
    kind: PositionKind,
) -> Result<(), EntityError> {
    let checks = [
        ("category", category.code()),
        ("type", kind.code()),
    ];

    for (field, expected) in checks {
        if let Some(raw) = root.value(field) {
            if raw.trim().parse::<u8>().ok() != Some(expected) {
                return Err(EntityError::ShapeMismatch {
                    category,
                    kind,
                    reason: format!("server answered with {} {:?}", field, raw),
                });
            }
        }
    }

    Ok(())
}

impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.endpoint() == other.endpoint()
    }
}

impl Eq for Universe {}

impl Hash for Universe {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoint().hash(state);
    }
}

impl fmt::Debug for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Universe")
            .field("endpoint", &self.inner.endpoint)
            .field("id", &self.inner.id)
            .field("region", &self.inner.region)
            .finish()
    }
}
