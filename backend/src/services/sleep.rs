//! Sleep tracking service

use crate::auth::ownership;
use crate::error::ApiError;
use crate::repositories::{CreateSleepRecord, SleepRecord, SleepRepository, UpdateSleepRecord};
use mindwell_shared::types::{
    CreateSleepRequest, MessageResponse, SleepRecordResponse, UpdateSleepRequest,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Sleep quality is rated on a 1-10 scale
const QUALITY_MIN: i32 = 1;
const QUALITY_MAX: i32 = 10;

/// Sleep service
pub struct SleepService;

impl SleepService {
    /// List the caller's sleep records, newest first
    pub async fn list(pool: &PgPool, user_id: Uuid) -> Result<Vec<SleepRecordResponse>, ApiError> {
        let records = SleepRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_response).collect())
    }

    /// Record a night of sleep for the caller
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        req: CreateSleepRequest,
    ) -> Result<SleepRecordResponse, ApiError> {
        let (sleep_time, wake_time, duration, quality) =
            match (req.sleep_time, req.wake_time, req.duration, req.quality) {
                (Some(s), Some(w), Some(d), Some(q)) if !s.is_empty() && !w.is_empty() => {
                    (s, w, d, q)
                }
                _ => {
                    return Err(ApiError::Validation(
                        "Please provide all required fields".to_string(),
                    ))
                }
            };

        validate_quality(quality)?;

        let record = SleepRepository::create(
            pool,
            CreateSleepRecord {
                user_id,
                record_date: req.date,
                sleep_time,
                wake_time,
                duration_hours: duration,
                quality,
                notes: req.notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// Update a record; only the owner may
    pub async fn update(
        pool: &PgPool,
        user_id: Uuid,
        record_id: Uuid,
        req: UpdateSleepRequest,
    ) -> Result<SleepRecordResponse, ApiError> {
        let existing = SleepRepository::find_by_id(pool, record_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Sleep record not found".to_string()))?;

        ownership::ensure_owner(existing.user_id, user_id)?;

        if let Some(quality) = req.quality {
            validate_quality(quality)?;
        }

        let record = SleepRepository::update(
            pool,
            record_id,
            UpdateSleepRecord {
                sleep_time: req.sleep_time,
                wake_time: req.wake_time,
                duration_hours: req.duration,
                quality: req.quality,
                notes: req.notes,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(to_response(record))
    }

    /// Delete a record; only the owner may
    pub async fn delete(
        pool: &PgPool,
        user_id: Uuid,
        record_id: Uuid,
    ) -> Result<MessageResponse, ApiError> {
        let existing = SleepRepository::find_by_id(pool, record_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Sleep record not found".to_string()))?;

        ownership::ensure_owner(existing.user_id, user_id)?;

        SleepRepository::delete(pool, record_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(MessageResponse {
            msg: "Sleep record removed".to_string(),
        })
    }
}

fn validate_quality(quality: i32) -> Result<(), ApiError> {
    if !(QUALITY_MIN..=QUALITY_MAX).contains(&quality) {
        return Err(ApiError::Validation(format!(
            "Quality must be between {QUALITY_MIN} and {QUALITY_MAX}"
        )));
    }
    Ok(())
}

fn to_response(record: SleepRecord) -> SleepRecordResponse {
    SleepRecordResponse {
        id: record.id.to_string(),
        date: record.record_date,
        sleep_time: record.sleep_time,
        wake_time: record.wake_time,
        duration: record.duration_hours,
        quality: record.quality,
        notes: record.notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_bounds() {
        assert!(validate_quality(1).is_ok());
        assert!(validate_quality(10).is_ok());
        assert!(validate_quality(0).is_err());
        assert!(validate_quality(11).is_err());
    }
}
