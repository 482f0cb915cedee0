use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::journal::JournalEntry;
use crate::models::mood::MoodEntry;
use crate::models::user::{ProfileStats, UserProfile};

use super::{Store, StoreResult};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await
}

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row shape; `UserProfile` nests its stats for the wire format.
#[derive(FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: String,
    email: Option<String>,
    mood_streak: i32,
    journal_streak: i32,
    created_at: DateTime<Utc>,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            email: row.email,
            stats: ProfileStats {
                mood_streak: row.mood_streak,
                journal_streak: row.journal_streak,
            },
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_mood(&self, entry: MoodEntry) -> StoreResult<MoodEntry> {
        let stored = sqlx::query_as::<_, MoodEntry>(
            r#"
            INSERT INTO mood_entries (id, user_id, mood_score, notes, factors, date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(entry.mood_score)
        .bind(&entry.notes)
        .bind(&entry.factors)
        .bind(entry.date)
        .bind(entry.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_moods(&self, user_id: &str) -> StoreResult<Vec<MoodEntry>> {
        let entries = sqlx::query_as::<_, MoodEntry>(
            r#"
            SELECT * FROM mood_entries
            WHERE user_id = $1
            ORDER BY date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn insert_journal(&self, entry: JournalEntry) -> StoreResult<JournalEntry> {
        let stored = sqlx::query_as::<_, JournalEntry>(
            r#"
            INSERT INTO journal_entries (id, user_id, title, content, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(entry.id)
        .bind(&entry.user_id)
        .bind(&entry.title)
        .bind(&entry.content)
        .bind(&entry.tags)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(stored)
    }

    async fn list_journals(&self, user_id: &str) -> StoreResult<Vec<JournalEntry>> {
        let entries = sqlx::query_as::<_, JournalEntry>(
            r#"
            SELECT * FROM journal_entries
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    async fn find_profile(&self, user_id: &str) -> StoreResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT * FROM profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UserProfile::from))
    }

    async fn insert_profile(&self, profile: UserProfile) -> StoreResult<UserProfile> {
        // Uniqueness on user_id is enforced by the schema; a concurrent
        // duplicate insert surfaces as a storage failure.
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (id, user_id, email, mood_streak, journal_streak, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(profile.id)
        .bind(&profile.user_id)
        .bind(&profile.email)
        .bind(profile.stats.mood_streak)
        .bind(profile.stats.journal_streak)
        .bind(profile.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
