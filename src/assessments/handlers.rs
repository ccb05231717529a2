use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};

use crate::{auth::AuthUser, error::ApiError, state::AppState};

use super::{dto::SubmitAssessmentRequest, repo::Assessment};

pub fn assessment_routes() -> Router<AppState> {
    Router::new().route(
        "/api/assessments",
        post(submit_assessment).get(list_assessments),
    )
}

#[instrument(skip(state, payload))]
pub async fn submit_assessment(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    Json(payload): Json<SubmitAssessmentRequest>,
) -> Result<(StatusCode, Json<Assessment>), ApiError> {
    let assessment =
        Assessment::create(&state.db, claims.sub, &payload.answers, &payload.results).await?;
    info!(assessment_id = %assessment.id, user_id = %claims.sub, "assessment saved");
    Ok((StatusCode::CREATED, Json(assessment)))
}

#[instrument(skip(state))]
pub async fn list_assessments(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<Assessment>>, ApiError> {
    let assessments = Assessment::list_by_user(&state.db, claims.sub).await?;
    Ok(Json(assessments))
}
