// crates/nomad-core/src/store/collections.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

use super::KeyValueStore;
use crate::error::Result;
use crate::model::UserProfile;

pub const PROFILE_KEY: &str = "nomad_user_profile";

/// The id lists kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdListKind {
    /// Liked city ids, stored as `{"cityIds": [...]}`.
    Favorites,
    /// Saved-for-later city ids, stored as `{"cityIds": [...]}`.
    Bookmarks,
    /// Joined event ids, stored as a bare JSON array.
    Participations,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CityIds {
    #[serde(rename = "cityIds")]
    city_ids: Vec<String>,
}

impl IdListKind {
    pub fn key(&self) -> &'static str {
        match self {
            IdListKind::Favorites => "nomad_favorites_user",
            IdListKind::Bookmarks => "nomad_bookmarks_user",
            IdListKind::Participations => "nomad_event_participations_user",
        }
    }

    fn is_wrapped(&self) -> bool {
        !matches!(self, IdListKind::Participations)
    }

    /// Reads the list. Malformed JSON reads as empty.
    pub fn read<S: KeyValueStore + ?Sized>(&self, store: &S) -> Result<Vec<String>> {
        let Some(raw) = store.get(self.key())? else {
            return Ok(Vec::new());
        };
        let parsed = if self.is_wrapped() {
            serde_json::from_str::<CityIds>(&raw).map(|w| w.city_ids)
        } else {
            serde_json::from_str::<Vec<String>>(&raw)
        };
        Ok(parsed.unwrap_or_else(|e| {
            warn!(key = self.key(), error = %e, "Ignoring malformed stored id list");
            Vec::new()
        }))
    }

    fn write<S: KeyValueStore + ?Sized>(&self, store: &mut S, ids: Vec<String>) -> Result<()> {
        let raw = if self.is_wrapped() {
            serde_json::to_string(&CityIds { city_ids: ids })?
        } else {
            serde_json::to_string(&ids)?
        };
        store.set(self.key(), raw)
    }
}

impl fmt::Display for IdListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IdListKind::Favorites => "favorites",
            IdListKind::Bookmarks => "bookmarks",
            IdListKind::Participations => "participations",
        };
        f.write_str(name)
    }
}

/// Editable view of one id list in a store.
pub struct IdList<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
    kind: IdListKind,
}

impl<'s, S: KeyValueStore + ?Sized> IdList<'s, S> {
    pub fn new(store: &'s mut S, kind: IdListKind) -> Self {
        Self { store, kind }
    }

    pub fn favorites(store: &'s mut S) -> Self {
        Self::new(store, IdListKind::Favorites)
    }

    pub fn bookmarks(store: &'s mut S) -> Self {
        Self::new(store, IdListKind::Bookmarks)
    }

    pub fn participations(store: &'s mut S) -> Self {
        Self::new(store, IdListKind::Participations)
    }

    pub fn kind(&self) -> IdListKind {
        self.kind
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> Result<Vec<String>> {
        self.kind.read(&*self.store)
    }

    pub fn id_set(&self) -> Result<HashSet<String>> {
        Ok(self.ids()?.into_iter().collect())
    }

    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.ids()?.iter().any(|x| x == id))
    }

    /// Appends `id` unless present. Returns whether it was added.
    pub fn add(&mut self, id: &str) -> Result<bool> {
        let mut ids = self.ids()?;
        if ids.iter().any(|x| x == id) {
            return Ok(false);
        }
        ids.push(id.to_string());
        self.kind.write(&mut *self.store, ids)?;
        Ok(true)
    }

    /// Removes `id`. Returns whether it was present.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let ids = self.ids()?;
        let before = ids.len();
        let kept: Vec<String> = ids.into_iter().filter(|x| x != id).collect();
        if kept.len() == before {
            return Ok(false);
        }
        self.kind.write(&mut *self.store, kept)?;
        Ok(true)
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        if self.contains(id)? {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }
}

/// Profile kept in the store, falling back to a default user.
pub struct ProfileStore<'s, S: KeyValueStore + ?Sized> {
    store: &'s mut S,
    fallback: UserProfile,
}

impl<'s, S: KeyValueStore + ?Sized> ProfileStore<'s, S> {
    pub fn new(store: &'s mut S, fallback: UserProfile) -> Self {
        Self { store, fallback }
    }

    /// Stored profile, or the fallback when missing or malformed.
    pub fn load(&self) -> Result<UserProfile> {
        let Some(raw) = self.store.get(PROFILE_KEY)? else {
            return Ok(self.fallback.clone());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(key = PROFILE_KEY, error = %e, "Ignoring malformed stored profile");
            self.fallback.clone()
        }))
    }

    pub fn save(&mut self, profile: &UserProfile) -> Result<()> {
        let raw = serde_json::to_string(profile)?;
        self.store.set(PROFILE_KEY, raw)
    }

    pub fn update_name(&mut self, name: &str) -> Result<UserProfile> {
        self.update(|p| p.name = name.to_string())
    }

    pub fn update_bio(&mut self, bio: &str) -> Result<UserProfile> {
        self.update(|p| p.bio = Some(bio.to_string()))
    }

    pub fn update_avatar(&mut self, avatar_url: &str) -> Result<UserProfile> {
        self.update(|p| p.avatar_url = Some(avatar_url.to_string()))
    }

    fn update(&mut self, edit: impl FnOnce(&mut UserProfile)) -> Result<UserProfile> {
        let mut profile = self.load()?;
        edit(&mut profile);
        self.save(&profile)?;
        Ok(profile)
    }
}
