//! Favorite events, kept in the local store.

use serde::{Deserialize, Serialize};

use crate::error::EventfinderResult;
use crate::store::{KeyValueStore, read_json, write_json};

/// Store key holding the JSON array of favorite event ids.
pub const FAVORITES_KEY: &str = "eventFavorites";

/// Favorite event ids in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<i64>,
}

impl FavoriteSet {
    pub fn from_ids(ids: impl IntoIterator<Item = i64>) -> Self {
        let mut set = FavoriteSet::default();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn load(store: &dyn KeyValueStore) -> EventfinderResult<Self> {
        let ids: Option<Vec<i64>> = read_json(store, FAVORITES_KEY)?;
        Ok(FavoriteSet::from_ids(ids.unwrap_or_default()))
    }

    pub fn save(&self, store: &dyn KeyValueStore) -> EventfinderResult<()> {
        write_json(store, FAVORITES_KEY, self)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Add the id if absent, remove it if present. Returns whether the id is
    /// now a favorite.
    pub fn toggle(&mut self, id: i64) -> bool {
        if let Some(pos) = self.ids.iter().position(|&f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }
}

/// Load, toggle and save in one step. Returns whether the id is now a favorite.
pub fn toggle_favorite(store: &dyn KeyValueStore, id: i64) -> EventfinderResult<bool> {
    let mut favorites = FavoriteSet::load(store)?;
    let added = favorites.toggle(id);
    favorites.save(store)?;

    tracing::debug!(id, added, "toggled favorite");
    Ok(added)
}
