//! Mood tracking service

use crate::error::ApiError;
use crate::repositories::{MoodEntryRecord, MoodRepository};
use mindwell_shared::models::MoodKind;
use mindwell_shared::types::{CreateMoodRequest, MoodEntryResponse};
use sqlx::PgPool;
use uuid::Uuid;

/// Mood service
pub struct MoodService;

impl MoodService {
    /// List the caller's mood entries, newest first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<MoodEntryResponse>, ApiError> {
        let records = MoodRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Record a mood for the caller
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateMoodRequest,
    ) -> Result<MoodEntryResponse, ApiError> {
        let mood = req
            .mood
            .filter(|m| !m.is_empty())
            .ok_or_else(|| ApiError::Validation("Please provide all required fields".to_string()))?
            .parse::<MoodKind>()
            .map_err(|_| ApiError::Validation("Invalid mood".to_string()))?;

        let record = MoodRepository::create(pool, user_id, mood.as_str(), req.note.as_deref())
            .await
            .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }
}

fn to_response(record: MoodEntryRecord) -> MoodEntryResponse {
    MoodEntryResponse {
        id: record.id.to_string(),
        mood: record.mood,
        note: record.note,
        date: record.recorded_at,
    }
}
