use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    routing::get,
};

use crate::{
    dao::assets::AssetKind,
    dto::{
        asset::{AssetSummary, AssetUpdate},
        common::{ActionResponse, CreatedResponse},
    },
    error::AppError,
    routes::read_upload,
    services::asset_service,
    state::SharedState,
};

/// Routes managing the audio file collection.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/audio", get(list_audio).post(upload_audio))
        .route(
            "/audio/{id}",
            get(get_audio).put(update_audio).delete(delete_audio),
        )
}

/// List every stored audio file's id and filename.
#[utoipa::path(
    get,
    path = "/audio",
    tag = "audio",
    responses(
        (status = 200, description = "All stored audio files", body = [AssetSummary])
    )
)]
pub async fn list_audio(
    State(state): State<SharedState>,
) -> Result<Json<Vec<AssetSummary>>, AppError> {
    let summaries = asset_service::list(&state, AssetKind::Audio).await?;
    Ok(Json(summaries))
}

/// Upload an audio file and persist it in the audio collection.
#[utoipa::path(
    post,
    path = "/audio",
    tag = "audio",
    responses(
        (status = 200, description = "Audio file uploaded", body = CreatedResponse),
        (status = 400, description = "Uploaded file is empty")
    )
)]
pub async fn upload_audio(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<CreatedResponse>, AppError> {
    let (filename, content) = read_upload(&mut multipart).await?;
    let created = asset_service::upload(&state, AssetKind::Audio, filename, content).await?;
    Ok(Json(created))
}

/// Fetch a single audio file's summary by id.
#[utoipa::path(
    get,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Identifier of the audio file")),
    responses(
        (status = 200, description = "Audio file found", body = AssetSummary),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No audio file with that identifier")
    )
)]
pub async fn get_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<AssetSummary>, AppError> {
    let summary = asset_service::fetch(&state, AssetKind::Audio, &id).await?;
    Ok(Json(summary))
}

/// Apply a partial field map to a stored audio file.
#[utoipa::path(
    put,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Identifier of the audio file")),
    request_body = AssetUpdate,
    responses(
        (status = 200, description = "Audio file updated", body = ActionResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Update modified no record")
    )
)]
pub async fn update_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<AssetUpdate>,
) -> Result<Json<ActionResponse>, AppError> {
    let confirmation = asset_service::update(&state, AssetKind::Audio, &id, payload).await?;
    Ok(Json(confirmation))
}

/// Delete a stored audio file by id.
#[utoipa::path(
    delete,
    path = "/audio/{id}",
    tag = "audio",
    params(("id" = String, Path, description = "Identifier of the audio file")),
    responses(
        (status = 200, description = "Audio file deleted", body = ActionResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No audio file with that identifier")
    )
)]
pub async fn delete_audio(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    let confirmation = asset_service::delete(&state, AssetKind::Audio, &id).await?;
    Ok(Json(confirmation))
}
