//! Therapist directory and appointment repository

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Therapist record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TherapistRecord {
    pub id: Uuid,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub experience: String,
    pub bio: String,
    pub image: String,
    pub availability: Vec<String>,
    pub price: Decimal,
    pub rating: f64,
    pub reviews: i32,
}

/// Appointment record with the therapist's display fields joined in
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub therapist_id: Uuid,
    pub therapist_name: String,
    pub therapist_title: String,
    pub therapist_image: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub session_type: String,
    pub concerns: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for booking an appointment
#[derive(Debug, Clone)]
pub struct CreateAppointment {
    pub user_id: Uuid,
    pub therapist_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub session_type: String,
    pub concerns: Option<String>,
}

/// Partial update; None leaves the stored value unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateAppointment {
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub session_type: Option<String>,
    pub concerns: Option<String>,
}

const APPOINTMENT_COLUMNS: &str = r#"
    a.id, a.user_id, a.therapist_id, t.name AS therapist_name,
    t.title AS therapist_title, t.image AS therapist_image,
    a.appointment_date, a.appointment_time, a.session_type, a.concerns,
    a.created_at
"#;

/// Therapist repository
pub struct TherapistRepository;

impl TherapistRepository {
    /// List therapists, optionally filtered by specialty
    pub async fn list(pool: &PgPool, specialty: Option<&str>) -> Result<Vec<TherapistRecord>> {
        let records = sqlx::query_as::<_, TherapistRecord>(
            r#"
            SELECT id, name, title, specialties, experience, bio, image,
                   availability, price, rating, reviews
            FROM therapists
            WHERE ($1::text IS NULL OR $1 = ANY(specialties))
            ORDER BY name
            "#,
        )
        .bind(specialty)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Find a therapist by id
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TherapistRecord>> {
        let record = sqlx::query_as::<_, TherapistRecord>(
            r#"
            SELECT id, name, title, specialties, experience, bio, image,
                   availability, price, rating, reviews
            FROM therapists
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

/// Appointment repository
pub struct AppointmentRepository;

impl AppointmentRepository {
    /// Book an appointment and return it with joined therapist fields
    pub async fn create(pool: &PgPool, input: CreateAppointment) -> Result<AppointmentRecord> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO appointments (
                user_id, therapist_id, appointment_date, appointment_time,
                session_type, concerns
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(input.user_id)
        .bind(input.therapist_id)
        .bind(input.date)
        .bind(&input.time)
        .bind(&input.session_type)
        .bind(&input.concerns)
        .fetch_one(pool)
        .await?;

        let record = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("appointment vanished after insert"))?;
        Ok(record)
    }

    /// A user's appointments, soonest first
    pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<AppointmentRecord>> {
        let query = format!(
            r#"
            SELECT {APPOINTMENT_COLUMNS}
            FROM appointments a
            JOIN therapists t ON t.id = a.therapist_id
            WHERE a.user_id = $1
            ORDER BY a.appointment_date ASC
            "#
        );

        let records = sqlx::query_as::<_, AppointmentRecord>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        Ok(records)
    }

    /// Find an appointment by id, regardless of owner. Ownership is
    /// decided by the caller.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<AppointmentRecord>> {
        let query = format!(
            r#"
            SELECT {APPOINTMENT_COLUMNS}
            FROM appointments a
            JOIN therapists t ON t.id = a.therapist_id
            WHERE a.id = $1
            "#
        );

        let record = sqlx::query_as::<_, AppointmentRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Apply a partial update
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        updates: UpdateAppointment,
    ) -> Result<AppointmentRecord> {
        sqlx::query(
            r#"
            UPDATE appointments SET
                appointment_date = COALESCE($2, appointment_date),
                appointment_time = COALESCE($3, appointment_time),
                session_type = COALESCE($4, session_type),
                concerns = COALESCE($5, concerns)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(updates.date)
        .bind(updates.time)
        .bind(updates.session_type)
        .bind(updates.concerns)
        .execute(pool)
        .await?;

        let record = Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("appointment vanished during update"))?;
        Ok(record)
    }

    /// Cancel (delete) an appointment
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query(r#"DELETE FROM appointments WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
