use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::AuthUser,
    error::ApiError,
    state::AppState,
};

use super::{
    dto::{BookSessionRequest, MessageResponse},
    notify,
    repo::Booking,
};

pub fn booking_routes() -> Router<AppState> {
    Router::new().route("/api/book-session", post(book_session))
}

/// Persists the booking, then sends the admin copy and the user
/// confirmation. The two steps are not transactional: a booking that is
/// already saved stays saved even when a notification fails, and the
/// failure is reported in the response.
#[instrument(skip(state, payload))]
pub async fn book_session(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<BookSessionRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let booking = Booking::create(&state.db, claims.sub, &payload)
        .await
        .map_err(ApiError::BookingFailed)?;

    notify::send_booking_emails(
        state.mailer.as_ref(),
        &state.config.smtp.admin_address,
        &payload,
    )
    .await
    .map_err(ApiError::BookingFailed)?;

    info!(booking_id = %booking.id, user_id = %claims.sub, "booking confirmed");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Booking confirmed, emails sent!".into(),
        }),
    ))
}
