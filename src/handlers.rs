use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    AppState,
    auth::{require_coach, verify_token},
    calendar::{build_week, week_start},
    error::ApiError,
    models::{Booking, BookingDraft, DaySlot, Pitch, UserInfo},
    validation::validate_booking,
};

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    /// Any date inside the week to show; defaults to today.
    pub date: Option<NaiveDate>,
    /// "Pitch 1" or "Pitch 2"; absent means all pitches.
    pub pitch: Option<Pitch>,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekView {
    #[schema(value_type = String, format = "date", example = "2026-09-07")]
    pub week_start: NaiveDate,
    #[schema(value_type = String, format = "date", example = "2026-09-13")]
    pub week_end: NaiveDate,
    pub days: Vec<DaySlot>,
}

#[utoipa::path(get, path = "/", tag = "bookings")]
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Pitch Booking API",
        "endpoints": {
            "/auth/login": "Log in and receive a session token",
            "/bookings/week": "Weekly calendar of bookings as JSON",
            "/bookings/week.ical": "Weekly calendar as an iCal file",
            "/bookings": "Add a booking (coach only)"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "bookings")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "bookings")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token and user details", body = LoginResponse),
        (status = 401, description = "Unknown username or wrong password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state
        .users
        .authenticate(&credentials.username, &credentials.password)
        .ok_or_else(|| ApiError::Unauthorized("Invalid username or password".into()))?;

    let token = state.sessions.issue(user);
    Ok(Json(LoginResponse {
        token,
        user: UserInfo::from(user),
    }))
}

#[utoipa::path(
    get,
    path = "/bookings/week",
    params(
        ("date" = Option<String>, Query, description = "Any date inside the week to show (YYYY-MM-DD, default today)"),
        ("pitch" = Option<String>, Query, description = "Pitch filter: 'Pitch 1' or 'Pitch 2' (default all)")
    ),
    responses(
        (status = 200, description = "Seven day slots, Monday through Sunday", body = WeekView)
    ),
    tag = "bookings"
)]
pub async fn get_week(
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<WeekQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let reference = query.date.unwrap_or_else(|| Local::now().date_naive());
    let snapshot = state.store.snapshot();
    let days = build_week(reference, &snapshot, query.pitch);

    let start = week_start(reference);
    Ok(Json(WeekView {
        week_start: start,
        week_end: start + Duration::days(6),
        days,
    }))
}

#[utoipa::path(
    get,
    path = "/bookings/week.ical",
    params(
        ("date" = Option<String>, Query, description = "Any date inside the week to export (YYYY-MM-DD, default today)"),
        ("pitch" = Option<String>, Query, description = "Pitch filter: 'Pitch 1' or 'Pitch 2' (default all)"),
        ("token" = Option<String>, Query, description = "Authentication token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "iCal file", content_type = "text/calendar"),
        (status = 401, description = "Invalid authentication token")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "bookings"
)]
pub async fn get_week_ical(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    axum::extract::Query(query): axum::extract::Query<WeekQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_token(&state.sessions, auth_header, query.token.as_deref())?;

    let reference = query.date.unwrap_or_else(|| Local::now().date_naive());
    let snapshot = state.store.snapshot();
    let days = build_week(reference, &snapshot, query.pitch);
    let week: Vec<Booking> = days.into_iter().flat_map(|slot| slot.bookings).collect();

    let body = state.exporter.generate(&week);
    Ok((
        StatusCode::OK,
        [
            ("content-type", "text/calendar"),
            (
                "content-disposition",
                "attachment; filename=pitch_bookings.ics",
            ),
        ],
        body,
    ))
}

#[utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingDraft,
    responses(
        (status = 201, description = "Booking accepted and stored", body = Booking),
        (status = 401, description = "Invalid authentication token"),
        (status = 403, description = "Caller is not a coach"),
        (status = 422, description = "Booking rejected by validation; body carries the reason")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn create_booking(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Json(draft): Json<BookingDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    let user = verify_token(&state.sessions, auth_header, None)?;
    require_coach(&user)?;

    let snapshot = state.store.snapshot();
    let now = Local::now().naive_local();
    let valid = validate_booking(&draft, &snapshot, now)?;

    let booking = state.store.add(valid, user.id);
    Ok((StatusCode::CREATED, Json(booking)))
}
