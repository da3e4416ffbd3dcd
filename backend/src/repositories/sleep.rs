//! Sleep repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Sleep record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SleepRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub record_date: DateTime<Utc>,
    pub sleep_time: String,
    pub wake_time: String,
    pub duration_hours: f64,
    pub quality: i32,
    pub notes: Option<String>,
}

/// Input for creating a sleep record
#[derive(Debug, Clone)]
pub struct CreateSleepRecord {
    pub user_id: Uuid,
    pub record_date: Option<DateTime<Utc>>,
    pub sleep_time: String,
    pub wake_time: String,
    pub duration_hours: f64,
    pub quality: i32,
    pub notes: Option<String>,
}

/// Partial update; None leaves the stored value unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateSleepRecord {
    pub sleep_time: Option<String>,
    pub wake_time: Option<String>,
    pub duration_hours: Option<f64>,
    pub quality: Option<i32>,
    pub notes: Option<String>,
}

/// Sleep repository
pub struct SleepRepository;

impl SleepRepository {
    /// Create a new sleep record
    pub async fn create(pool: &PgPool, input: CreateSleepRecord) -> Result<SleepRecord> {
        let record = sqlx::query_as::<_, SleepRecord>(
            r#"
            INSERT INTO sleep_records (
                user_id, record_date, sleep_time, wake_time, duration_hours, quality, notes
            )
            VALUES ($1, COALESCE($2, NOW()), $3, $4, $5, $6, $7)
            RETURNING id, user_id, record_date, sleep_time, wake_time,
                      duration_hours, quality, notes
            "#,
        )
        .bind(input.user_id)
        .bind(input.record_date)
        .bind(&input.sleep_time)
        .bind(&input.wake_time)
        .bind(input.duration_hours)
        .bind(input.quality)
        .bind(&input.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List a user's sleep records, newest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<SleepRecord>> {
        let records = sqlx::query_as::<_, SleepRecord>(
            r#"
            SELECT id, user_id, record_date, sleep_time, wake_time,
                   duration_hours, quality, notes
            FROM sleep_records
            WHERE user_id = $1
            ORDER BY record_date DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a record by id, regardless of owner. Ownership is decided by
    /// the caller.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<SleepRecord>> {
        let record = sqlx::query_as::<_, SleepRecord>(
            r#"
            SELECT id, user_id, record_date, sleep_time, wake_time,
                   duration_hours, quality, notes
            FROM sleep_records
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Apply a partial update
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateSleepRecord,
    ) -> Result<SleepRecord> {
        let record = sqlx::query_as::<_, SleepRecord>(
            r#"
            UPDATE sleep_records SET
                sleep_time = COALESCE($2, sleep_time),
                wake_time = COALESCE($3, wake_time),
                duration_hours = COALESCE($4, duration_hours),
                quality = COALESCE($5, quality),
                notes = COALESCE($6, notes)
            WHERE id = $1
            RETURNING id, user_id, record_date, sleep_time, wake_time,
                      duration_hours, quality, notes
            "#,
        )
        .bind(id)
        .bind(updates.sleep_time)
        .bind(updates.wake_time)
        .bind(updates.duration_hours)
        .bind(updates.quality)
        .bind(updates.notes)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Delete a sleep record
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM sleep_records WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
