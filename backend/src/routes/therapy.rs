//! Therapy booking API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::TherapyService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use mindwell_shared::types::{
    AppointmentResponse, BookAppointmentRequest, MessageResponse, TherapistQuery,
    TherapistResponse, UpdateAppointmentRequest,
};

/// Create therapy routes
pub fn therapy_routes() -> Router<AppState> {
    Router::new()
        .route("/therapists", get(list_therapists))
        .route("/therapists/:id", get(get_therapist))
        .route("/appointment", post(book_appointment))
        .route("/appointments", get(list_appointments))
        .route(
            "/appointment/:id",
            put(update_appointment).delete(cancel_appointment),
        )
}

/// GET /api/therapy/therapists - Therapist directory
async fn list_therapists(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<TherapistQuery>,
) -> ApiResult<Json<Vec<TherapistResponse>>> {
    let therapists = TherapyService::list_therapists(&state.db, query).await?;
    Ok(Json(therapists))
}

/// GET /api/therapy/therapists/:id - A specific therapist
async fn get_therapist(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TherapistResponse>> {
    let therapist_id = parse_id(&id, "Therapist")?;
    let therapist = TherapyService::get_therapist(&state.db, therapist_id).await?;
    Ok(Json(therapist))
}

/// POST /api/therapy/appointment - Book an appointment
async fn book_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<BookAppointmentRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let appointment = TherapyService::book(&state.db, auth.user_id, req).await?;
    Ok(Json(appointment))
}

/// GET /api/therapy/appointments - The current user's appointments
async fn list_appointments(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<AppointmentResponse>>> {
    let appointments = TherapyService::list_appointments(&state.db, auth.user_id).await?;
    Ok(Json(appointments))
}

/// PUT /api/therapy/appointment/:id - Update an appointment; owner only
async fn update_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateAppointmentRequest>,
) -> ApiResult<Json<AppointmentResponse>> {
    let appointment_id = parse_id(&id, "Appointment")?;
    let appointment =
        TherapyService::update_appointment(&state.db, auth.user_id, appointment_id, req).await?;
    Ok(Json(appointment))
}

/// DELETE /api/therapy/appointment/:id - Cancel an appointment; owner only
async fn cancel_appointment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let appointment_id = parse_id(&id, "Appointment")?;
    let response =
        TherapyService::cancel_appointment(&state.db, auth.user_id, appointment_id).await?;
    Ok(Json(response))
}
