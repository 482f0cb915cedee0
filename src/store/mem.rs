use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::journal::JournalEntry;
use crate::models::mood::MoodEntry;
use crate::models::user::UserProfile;

use super::{Store, StoreResult};

/// Ephemeral store keyed by owner id. Backs local development without a
/// database and the gateway test suite.
#[derive(Default)]
pub struct MemStore {
    inner: RwLock<Collections>,
}

#[derive(Default)]
struct Collections {
    moods: HashMap<String, Vec<MoodEntry>>,
    journals: HashMap<String, Vec<JournalEntry>>,
    profiles: HashMap<String, UserProfile>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemStore {
    async fn insert_mood(&self, entry: MoodEntry) -> StoreResult<MoodEntry> {
        let mut inner = self.inner.write().await;
        inner
            .moods
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    async fn list_moods(&self, user_id: &str) -> StoreResult<Vec<MoodEntry>> {
        let inner = self.inner.read().await;
        let mut entries = inner.moods.get(user_id).cloned().unwrap_or_default();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }

    async fn insert_journal(&self, entry: JournalEntry) -> StoreResult<JournalEntry> {
        let mut inner = self.inner.write().await;
        inner
            .journals
            .entry(entry.user_id.clone())
            .or_default()
            .push(entry.clone());
        Ok(entry)
    }

    async fn list_journals(&self, user_id: &str) -> StoreResult<Vec<JournalEntry>> {
        let inner = self.inner.read().await;
        let mut entries = inner.journals.get(user_id).cloned().unwrap_or_default();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn find_profile(&self, user_id: &str) -> StoreResult<Option<UserProfile>> {
        let inner = self.inner.read().await;
        Ok(inner.profiles.get(user_id).cloned())
    }

    async fn insert_profile(&self, profile: UserProfile) -> StoreResult<UserProfile> {
        let mut inner = self.inner.write().await;
        inner
            .profiles
            .insert(profile.user_id.clone(), profile.clone());
        Ok(profile)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    fn mood(user_id: &str, score: i32, offset_secs: i64) -> MoodEntry {
        let at = Utc::now() + Duration::seconds(offset_secs);
        MoodEntry {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            mood_score: score,
            notes: String::new(),
            factors: vec![],
            date: at,
            created_at: at,
        }
    }

    #[tokio::test]
    async fn test_moods_listed_descending_by_date() {
        let store = MemStore::new();
        store.insert_mood(mood("u1", 3, 0)).await.unwrap();
        store.insert_mood(mood("u1", 8, 60)).await.unwrap();
        store.insert_mood(mood("u1", 5, 30)).await.unwrap();

        let entries = store.list_moods("u1").await.unwrap();
        let scores: Vec<i32> = entries.iter().map(|e| e.mood_score).collect();
        assert_eq!(scores, vec![8, 5, 3]);
    }

    #[tokio::test]
    async fn test_moods_scoped_by_owner() {
        let store = MemStore::new();
        store.insert_mood(mood("u1", 3, 0)).await.unwrap();
        store.insert_mood(mood("u2", 9, 0)).await.unwrap();

        assert_eq!(store.list_moods("u1").await.unwrap().len(), 1);
        assert_eq!(store.list_moods("u2").await.unwrap().len(), 1);
        assert!(store.list_moods("u3").await.unwrap().is_empty());
    }
}
