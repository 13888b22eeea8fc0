//! Deferred handles to entities of the same universe.
//!
//! A [`LazyReference`] stores only the target's identifier, the universe it was
//! read from and the timestamp of that read. Resolving it performs a fresh fetch
//! of the target's category against the same universe; nothing is cached.

use std::{
    collections::HashMap,
    fmt,
    future::Future,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Serialize, Serializer};

use crate::{
    error::{entity::EntityError, Error},
    model::{alliance::Alliance, player::Player, snapshot::SnapshotContext},
    universe::Universe,
};

/// An entity category that lazy references can point at.
pub trait Resolvable: Sized {
    /// Category name used in [`EntityError::NotFound`].
    const CATEGORY: &'static str;

    /// Identifier the entity is keyed by within its category.
    fn id(&self) -> &str;

    /// Fetches every entity of the category from `universe`.
    fn fetch_all(universe: &Universe) -> impl Future<Output = Result<Vec<Self>, Error>> + Send;
}

impl Resolvable for Player {
    const CATEGORY: &'static str = "players";

    fn id(&self) -> &str {
        &self.id
    }

    async fn fetch_all(universe: &Universe) -> Result<Vec<Self>, Error> {
        universe.players().await
    }
}

impl Resolvable for Alliance {
    const CATEGORY: &'static str = "alliances";

    fn id(&self) -> &str {
        &self.id
    }

    async fn fetch_all(universe: &Universe) -> Result<Vec<Self>, Error> {
        universe.alliances().await
    }
}

/// Handle to an entity of type `E`, resolved on demand.
pub struct LazyReference<E> {
    id: String,
    universe: Universe,
    timestamp: DateTime<Utc>,
    _entity: PhantomData<fn() -> E>,
}

pub type PlayerReference = LazyReference<Player>;
pub type AllianceReference = LazyReference<Alliance>;

impl<E> LazyReference<E> {
    pub fn new(id: impl Into<String>, ctx: &SnapshotContext<'_>) -> Self {
        Self {
            id: id.into(),
            universe: ctx.universe.clone(),
            timestamp: ctx.timestamp,
            _entity: PhantomData,
        }
    }

    /// Identifier exactly as it appeared in the source record.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Fetch time of the record this reference was read from.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl<E: Resolvable> LazyReference<E> {
    /// Fetches the target's category and returns the entity with this identifier.
    ///
    /// Every call performs a new request. Fails with [`EntityError::NotFound`]
    /// when the identifier is no longer present in the category.
    pub async fn resolve(&self) -> Result<E, Error> {
        let entities = E::fetch_all(&self.universe).await?;
        find_by_id(entities, &self.id)
    }
}

/// Resolves a batch of references with one category fetch per distinct universe.
///
/// Results are returned in the order of `references`. The first failure, either a
/// transport error or a missing identifier, aborts the whole batch.
pub async fn resolve_all<E>(references: &[LazyReference<E>]) -> Result<Vec<E>, Error>
where
    E: Resolvable + Clone,
{
    let mut universes: Vec<&Universe> = Vec::new();
    for reference in references {
        if !universes.contains(&&reference.universe) {
            universes.push(&reference.universe);
        }
    }

    let fetched = join_all(universes.iter().map(|universe| E::fetch_all(universe))).await;

    let mut by_universe: Vec<(&Universe, HashMap<String, E>)> = Vec::with_capacity(fetched.len());
    for (universe, entities) in universes.into_iter().zip(fetched) {
        let entities = entities?
            .into_iter()
            .map(|entity| (entity.id().to_string(), entity))
            .collect();
        by_universe.push((universe, entities));
    }

    references
        .iter()
        .map(|reference| {
            by_universe
                .iter()
                .find(|(universe, _)| **universe == reference.universe)
                .and_then(|(_, entities)| entities.get(&reference.id).cloned())
                .ok_or_else(|| not_found::<E>(&reference.id))
        })
        .collect()
}

pub(crate) fn find_by_id<E: Resolvable>(entities: Vec<E>, id: &str) -> Result<E, Error> {
    entities
        .into_iter()
        .find(|entity| entity.id() == id)
        .ok_or_else(|| not_found::<E>(id))
}

fn not_found<E: Resolvable>(id: &str) -> Error {
    EntityError::NotFound {
        category: E::CATEGORY,
        id: id.to_string(),
    }
    .into()
}

impl<E> Clone for LazyReference<E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            universe: self.universe.clone(),
            timestamp: self.timestamp,
            _entity: PhantomData,
        }
    }
}

impl<E> PartialEq for LazyReference<E> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.universe == other.universe && self.timestamp == other.timestamp
    }
}

impl<E> Eq for LazyReference<E> {}

impl<E> Hash for LazyReference<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.universe.hash(state);
        self.timestamp.hash(state);
    }
}

impl<E> fmt::Debug for LazyReference<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyReference")
            .field("id", &self.id)
            .field("endpoint", &self.universe.endpoint())
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

impl<E> Serialize for LazyReference<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}
