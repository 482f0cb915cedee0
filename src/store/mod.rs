//! Owner-scoped document storage seam. The gateway only ever inserts
//! records and reads back an owner's full collection in descending time
//! order, so the trait is deliberately narrow.

use async_trait::async_trait;

use crate::models::journal::JournalEntry;
use crate::models::mood::MoodEntry;
use crate::models::user::UserProfile;

pub mod mem;
pub mod pg;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_mood(&self, entry: MoodEntry) -> StoreResult<MoodEntry>;

    /// All mood entries for one owner, descending by event date.
    async fn list_moods(&self, user_id: &str) -> StoreResult<Vec<MoodEntry>>;

    async fn insert_journal(&self, entry: JournalEntry) -> StoreResult<JournalEntry>;

    /// All journal entries for one owner, descending by creation time.
    async fn list_journals(&self, user_id: &str) -> StoreResult<Vec<JournalEntry>>;

    async fn find_profile(&self, user_id: &str) -> StoreResult<Option<UserProfile>>;

    async fn insert_profile(&self, profile: UserProfile) -> StoreResult<UserProfile>;

    /// Readiness probe against the backing store.
    async fn ping(&self) -> StoreResult<()>;
}
