//! Therapist directory and appointment booking service

use crate::auth::ownership;
use crate::error::ApiError;
use crate::repositories::{
    AppointmentRecord, AppointmentRepository, CreateAppointment, TherapistRecord,
    TherapistRepository, UpdateAppointment,
};
use mindwell_shared::types::{
    AppointmentResponse, BookAppointmentRequest, MessageResponse, TherapistQuery,
    TherapistResponse, TherapistSummary, UpdateAppointmentRequest,
};
use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;

/// Therapy service
pub struct TherapyService;

impl TherapyService {
    /// List therapists, optionally filtered by specialty
    pub async fn list_therapists(
        pool: &PgPool,
        query: TherapistQuery,
    ) -> Result<Vec<TherapistResponse>, ApiError> {
        let records = TherapistRepository::list(pool, query.specialty.as_deref())
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_therapist_response).collect())
    }

    /// Single therapist by id
    pub async fn get_therapist(pool: &PgPool, id: Uuid) -> Result<TherapistResponse, ApiError> {
        let record = TherapistRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Therapist not found".to_string()))?;

        Ok(to_therapist_response(record))
    }

    /// Book an appointment for the caller
    pub async fn book(
        pool: &PgPool,
        user_id: Uuid,
        req: BookAppointmentRequest,
    ) -> Result<AppointmentResponse, ApiError> {
        let (therapist_id, date, time, kind) = match (req.therapist_id, req.date, req.time, req.kind)
        {
            (Some(t), Some(d), Some(tm), Some(k)) if !tm.is_empty() && !k.is_empty() => {
                (t, d, tm, k)
            }
            _ => {
                return Err(ApiError::Validation(
                    "Please provide all required fields".to_string(),
                ))
            }
        };

        let therapist_id = Uuid::parse_str(&therapist_id)
            .map_err(|_| ApiError::Validation("Invalid therapist ID".to_string()))?;

        TherapistRepository::find_by_id(pool, therapist_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Therapist not found".to_string()))?;

        let record = AppointmentRepository::create(
            pool,
            CreateAppointment {
                user_id,
                therapist_id,
                date,
                time,
                session_type: kind,
                concerns: req.concerns,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(to_appointment_response(record))
    }

    /// The caller's appointments, soonest first
    pub async fn list_appointments(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<AppointmentResponse>, ApiError> {
        let records = AppointmentRepository::list_by_user(pool, user_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(records.into_iter().map(to_appointment_response).collect())
    }

    /// Update an appointment; only the owner may
    pub async fn update_appointment(
        pool: &PgPool,
        user_id: Uuid,
        appointment_id: Uuid,
        req: UpdateAppointmentRequest,
    ) -> Result<AppointmentResponse, ApiError> {
        let existing = AppointmentRepository::find_by_id(pool, appointment_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Appointment not found".to_string()))?;

        ownership::ensure_owner(existing.user_id, user_id)?;

        let record = AppointmentRepository::update(
            pool,
            appointment_id,
            UpdateAppointment {
                date: req.date,
                time: req.time,
                session_type: req.kind,
                concerns: req.concerns,
            },
        )
        .await
        .map_err(ApiError::Internal)?;

        Ok(to_appointment_response(record))
    }

    /// Cancel an appointment; only the owner may
    pub async fn cancel_appointment(
        pool: &PgPool,
        user_id: Uuid,
        appointment_id: Uuid,
    ) -> Result<MessageResponse, ApiError> {
        let existing = AppointmentRepository::find_by_id(pool, appointment_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Appointment not found".to_string()))?;

        ownership::ensure_owner(existing.user_id, user_id)?;

        AppointmentRepository::delete(pool, appointment_id)
            .await
            .map_err(ApiError::Internal)?;

        Ok(MessageResponse {
            msg: "Appointment cancelled".to_string(),
        })
    }
}

fn to_therapist_response(record: TherapistRecord) -> TherapistResponse {
    TherapistResponse {
        id: record.id.to_string(),
        name: record.name,
        title: record.title,
        specialties: record.specialties,
        experience: record.experience,
        bio: record.bio,
        image: record.image,
        availability: record.availability,
        price: record.price.to_f64().unwrap_or(0.0),
        rating: record.rating,
        reviews: record.reviews,
    }
}

fn to_appointment_response(record: AppointmentRecord) -> AppointmentResponse {
    AppointmentResponse {
        id: record.id.to_string(),
        therapist: TherapistSummary {
            id: record.therapist_id.to_string(),
            name: record.therapist_name,
            title: record.therapist_title,
            image: record.therapist_image,
        },
        date: record.appointment_date,
        time: record.appointment_time,
        kind: record.session_type,
        concerns: record.concerns,
        created_at: record.created_at,
    }
}
