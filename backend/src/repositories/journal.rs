//! Journal repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Journal entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JournalEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
    pub overthinking_level: String,
    pub triggers: Vec<String>,
    pub reframed_thoughts: Option<String>,
    pub action_steps: Vec<String>,
    pub reflection_notes: Option<String>,
    pub entry_date: DateTime<Utc>,
}

/// Input for creating a journal entry
#[derive(Debug, Clone)]
pub struct CreateJournalEntry {
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub mood: Option<String>,
    pub overthinking_level: String,
    pub triggers: Vec<String>,
    pub reframed_thoughts: Option<String>,
    pub action_steps: Vec<String>,
    pub reflection_notes: Option<String>,
}

/// Journal repository
pub struct JournalRepository;

impl JournalRepository {
    /// Create a new journal entry
    pub async fn create(pool: &PgPool, input: CreateJournalEntry) -> Result<JournalEntryRecord> {
        let record = sqlx::query_as::<_, JournalEntryRecord>(
            r#"
            INSERT INTO journal_entries (
                user_id, title, content, mood, overthinking_level,
                triggers, reframed_thoughts, action_steps, reflection_notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, user_id, title, content, mood, overthinking_level,
                      triggers, reframed_thoughts, action_steps, reflection_notes,
                      entry_date
            "#,
        )
        .bind(input.user_id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.mood)
        .bind(&input.overthinking_level)
        .bind(&input.triggers)
        .bind(&input.reframed_thoughts)
        .bind(&input.action_steps)
        .bind(&input.reflection_notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's journal entries, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<JournalEntryRecord>> {
        let records = sqlx::query_as::<_, JournalEntryRecord>(
            r#"
            SELECT id, user_id, title, content, mood, overthinking_level,
                   triggers, reframed_thoughts, action_steps, reflection_notes,
                   entry_date
            FROM journal_entries
            WHERE user_id = $1
            ORDER BY entry_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a single entry by id, regardless of owner. Ownership is decided
    /// by the caller.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<JournalEntryRecord>> {
        let record = sqlx::query_as::<_, JournalEntryRecord>(
            r#"
            SELECT id, user_id, title, content, mood, overthinking_level,
                   triggers, reframed_thoughts, action_steps, reflection_notes,
                   entry_date
            FROM journal_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
