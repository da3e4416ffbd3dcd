//! Journal service

use crate::auth::ownership;
use crate::error::ApiError;
use crate::repositories::{CreateJournalEntry, JournalEntryRecord, JournalRepository};
use mindwell_shared::models::OverthinkingLevel;
use mindwell_shared::types::{CreateJournalRequest, JournalEntryResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Journal service
pub struct JournalService;

impl JournalService {
    /// List the caller's entries, newest first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<JournalEntryResponse>, ApiError> {
        let records = JournalRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Create an entry for the caller
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateJournalRequest,
    ) -> Result<JournalEntryResponse, ApiError> {
        let (title, content) = match (req.title, req.content) {
            (Some(t), Some(c)) if !t.is_empty() && !c.is_empty() => (t, c),
            _ => {
                return Err(ApiError::Validation(
                    "Please provide all required fields".to_string(),
                ))
            }
        };

        let overthinking_level = match req.overthinking_level {
            Some(raw) => raw
                .parse::<OverthinkingLevel>()
                .map_err(|_| ApiError::Validation("Invalid overthinking level".to_string()))?,
            None => OverthinkingLevel::default(),
        };

        let record = JournalRepository::create(
            pool,
            CreateJournalEntry {
                user_id,
                title,
                content,
                mood: req.mood,
                overthinking_level: overthinking_level.as_str().to_string(),
                triggers: req.triggers.unwrap_or_default(),
                reframed_thoughts: req.reframed_thoughts,
                action_steps: req.action_steps.unwrap_or_default(),
                reflection_notes: req.reflection_notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// Fetch a single entry; only the owner may read it
    pub async fn get(
        pool: &PgPool,
        user_id: Uuid,
        entry_id: Uuid,
    ) -> Result<JournalEntryResponse, ApiError> {
        let record = JournalRepository::find_by_id(pool, entry_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Journal entry not found".to_string()))?;

        ownership::ensure_owner(record.user_id, user_id)?;

        Ok(to_response(record))
    }
}

fn to_response(record: JournalEntryRecord) -> JournalEntryResponse {
    JournalEntryResponse {
        id: record.id.to_string(),
        title: record.title,
        content: record.content,
        mood: record.mood,
        overthinking_level: record.overthinking_level,
        triggers: record.triggers,
        reframed_thoughts: record.reframed_thoughts,
        action_steps: record.action_steps,
        reflection_notes: record.reflection_notes,
        date: record.entry_date,
    }
}
