// src/handlers/leaderboard.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::{
    error::{AppError, ErrorBody},
    models::leaderboard::{LeaderboardEntry, SubmitScoreRequest},
    ranking,
    state::SharedStore,
};

const MISSING_FIELDS: &str = "Missing required score data";

/// Returns every stored entry, sorted by score (desc) then username.
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Full ranked leaderboard", body = Vec<LeaderboardEntry>),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
pub async fn get_leaderboard(State(store): State<SharedStore>) -> Result<impl IntoResponse, AppError> {
    let mut entries = store
        .list()
        .await
        .map_err(|e| AppError::from(e).with_public_message("Could not fetch leaderboard"))?;

    ranking::rank(&mut entries);

    Ok(Json(entries))
}

/// Records one finished quiz.
///
/// Only presence of the four fields is checked. The submitted score is
/// trusted as-is and never recomputed from the question bank.
#[utoipa::path(
    post,
    path = "/api/leaderboard",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score stored"),
        (status = 400, description = "A required field is missing", body = ErrorBody),
        (status = 500, description = "Store unavailable", body = ErrorBody),
    )
)]
pub async fn submit_score(
    State(store): State<SharedStore>,
    payload: Result<Json<SubmitScoreRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;

    if let Err(validation_errors) = req.validate() {
        tracing::debug!("Rejected score submission: {}", validation_errors);
        return Err(AppError::BadRequest(MISSING_FIELDS.to_string()));
    }

    let entry = req
        .into_new_entry()
        .ok_or_else(|| AppError::BadRequest(MISSING_FIELDS.to_string()))?;

    let saved = store
        .append(entry)
        .await
        .map_err(|e| AppError::from(e).with_public_message("Could not save score"))?;

    tracing::info!(
        username = %saved.username,
        score = saved.score,
        total = saved.total,
        difficulty = %saved.difficulty,
        "Score saved to leaderboard"
    );

    Ok((StatusCode::CREATED, Json(json!({ "success": true }))))
}
