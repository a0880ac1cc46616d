#![allow(dead_code)]

//! Profile store collaborator — best-effort persistence of the user profile
//! as a single JSON document in Redis.
//!
//! The core neither knows nor cares about durability: `load` falls back to a
//! default profile and `save` failures are logged and swallowed. Persistence
//! must never block the student's flow.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{info, warn};

use crate::models::profile::UserProfile;

/// Redis key holding the single active session's profile.
const PROFILE_KEY: &str = "futurenav:profile";

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Loads the stored profile, or `None` if absent or unreadable.
    async fn load(&self) -> Option<UserProfile>;

    /// Persists the profile. Best-effort; errors are reported, not returned.
    async fn save(&self, profile: &UserProfile);
}

pub struct RedisProfileStore {
    client: redis::Client,
}

impl RedisProfileStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    async fn try_load(&self) -> anyhow::Result<Option<UserProfile>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(PROFILE_KEY).await?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn try_save(&self, profile: &UserProfile) -> anyhow::Result<()> {
        let json = serde_json::to_string(profile)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(PROFILE_KEY, json).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for RedisProfileStore {
    async fn load(&self) -> Option<UserProfile> {
        match self.try_load().await {
            Ok(Some(profile)) => {
                info!("Loaded stored profile for '{}'", profile.name);
                Some(profile)
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to load profile, starting fresh: {e}");
                None
            }
        }
    }

    async fn save(&self, profile: &UserProfile) {
        if let Err(e) = self.try_save(profile).await {
            warn!("Failed to persist profile (continuing): {e}");
        }
    }
}

/// In-memory store used by tests and available for running without Redis.
#[derive(Default)]
pub struct MemoryProfileStore {
    slot: tokio::sync::Mutex<Option<String>>,
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Option<UserProfile> {
        let slot = self.slot.lock().await;
        slot.as_deref()
            .and_then(|json| serde_json::from_str(json).ok())
    }

    async fn save(&self, profile: &UserProfile) {
        if let Ok(json) = serde_json::to_string(profile) {
            *self.slot.lock().await = Some(json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryProfileStore::default();
        assert!(store.load().await.is_none());

        let mut profile = UserProfile::default();
        profile.name = "Asha".to_string();
        store.save(&profile).await;

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.name, "Asha");
    }

    #[tokio::test]
    async fn test_memory_store_overwrites() {
        let store = MemoryProfileStore::default();
        let mut profile = UserProfile::default();
        profile.name = "One".to_string();
        store.save(&profile).await;
        profile.name = "Two".to_string();
        store.save(&profile).await;
        assert_eq!(store.load().await.unwrap().name, "Two");
    }
}
