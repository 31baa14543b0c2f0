use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::{
    dto::{
        common::{ActionResponse, CreatedResponse},
        score::{ScoreInput, ScoreSummary, ScoreUpdate},
    },
    error::AppError,
    services::score_service,
    state::SharedState,
};

/// Routes managing the player score collection.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/scores", get(list_scores).post(submit_score))
        .route(
            "/scores/{id}",
            get(get_score).put(update_score).delete(delete_score),
        )
}

/// List every recorded player score.
#[utoipa::path(
    get,
    path = "/scores",
    tag = "scores",
    responses(
        (status = 200, description = "All recorded scores", body = [ScoreSummary])
    )
)]
pub async fn list_scores(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ScoreSummary>>, AppError> {
    let summaries = score_service::list(&state).await?;
    Ok(Json(summaries))
}

/// Record a player score in the scores collection.
#[utoipa::path(
    post,
    path = "/scores",
    tag = "scores",
    request_body = ScoreInput,
    responses(
        (status = 200, description = "Score recorded", body = CreatedResponse)
    )
)]
pub async fn submit_score(
    State(state): State<SharedState>,
    Json(payload): Json<ScoreInput>,
) -> Result<Json<CreatedResponse>, AppError> {
    let created = score_service::submit(&state, payload).await?;
    Ok(Json(created))
}

/// Fetch a single recorded score by id.
#[utoipa::path(
    get,
    path = "/scores/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Identifier of the score")),
    responses(
        (status = 200, description = "Score found", body = ScoreSummary),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No score with that identifier")
    )
)]
pub async fn get_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ScoreSummary>, AppError> {
    let summary = score_service::fetch(&state, &id).await?;
    Ok(Json(summary))
}

/// Apply a partial field map to a recorded score.
#[utoipa::path(
    put,
    path = "/scores/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Identifier of the score")),
    request_body = ScoreUpdate,
    responses(
        (status = 200, description = "Score updated", body = ActionResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Update modified no record")
    )
)]
pub async fn update_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<ScoreUpdate>,
) -> Result<Json<ActionResponse>, AppError> {
    let confirmation = score_service::update(&state, &id, payload).await?;
    Ok(Json(confirmation))
}

/// Delete a recorded score by id.
#[utoipa::path(
    delete,
    path = "/scores/{id}",
    tag = "scores",
    params(("id" = String, Path, description = "Identifier of the score")),
    responses(
        (status = 200, description = "Score deleted", body = ActionResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No score with that identifier")
    )
)]
pub async fn delete_score(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    let confirmation = score_service::delete(&state, &id).await?;
    Ok(Json(confirmation))
}
