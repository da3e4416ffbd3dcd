//! Mood repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Mood entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MoodEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: String,
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

/// Mood repository
pub struct MoodRepository;

impl MoodRepository {
    /// Create a new mood entry
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        mood: &str,
        note: Option<&str>,
    ) -> Result<MoodEntryRecord> {
        let record = sqlx::query_as::<_, MoodEntryRecord>(
            r#"
            INSERT INTO mood_entries (user_id, mood, note)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, mood, note, recorded_at
            "#,
        )
        .bind(user_id)
        .bind(mood)
        .bind(note)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's mood entries, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<MoodEntryRecord>> {
        let records = sqlx::query_as::<_, MoodEntryRecord>(
            r#"
            SELECT id, user_id, mood, note, recorded_at
            FROM mood_entries
            WHERE user_id = $1
            ORDER BY recorded_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
