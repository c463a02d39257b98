// src/handlers/questions.rs

use axum::{Json, extract::Path, response::IntoResponse};

use crate::{bank, error::{AppError, ErrorBody}, models::question::Question};

/// Returns the full question list for a difficulty tier.
///
/// Questions are served in bank order, answers included.
#[utoipa::path(
    get,
    path = "/api/questions/{difficulty}",
    params(("difficulty" = String, Path, description = "easy, medium or hard")),
    responses(
        (status = 200, description = "Questions for the tier", body = Vec<Question>),
        (status = 404, description = "Unknown difficulty", body = ErrorBody),
    )
)]
pub async fn get_questions(Path(difficulty): Path<String>) -> Result<impl IntoResponse, AppError> {
    let questions = bank::lookup(&difficulty).ok_or_else(|| {
        tracing::debug!("Rejected unknown difficulty {:?}", difficulty);
        AppError::NotFound("Difficulty not found".to_string())
    })?;

    Ok(Json(questions.to_vec()))
}
