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

/// Routes managing the sprite image collection.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/sprites", get(list_sprites).post(upload_sprite))
        .route(
            "/sprites/{id}",
            get(get_sprite).put(update_sprite).delete(delete_sprite),
        )
}

/// List every stored sprite's id and filename.
#[utoipa::path(
    get,
    path = "/sprites",
    tag = "sprites",
    responses(
        (status = 200, description = "All stored sprites", body = [AssetSummary])
    )
)]
pub async fn list_sprites(
    State(state): State<SharedState>,
) -> Result<Json<Vec<AssetSummary>>, AppError> {
    let summaries = asset_service::list(&state, AssetKind::Sprite).await?;
    Ok(Json(summaries))
}

/// Upload a sprite image and persist it in the sprites collection.
#[utoipa::path(
    post,
    path = "/sprites",
    tag = "sprites",
    responses(
        (status = 200, description = "Sprite uploaded", body = CreatedResponse),
        (status = 400, description = "Uploaded file is empty")
    )
)]
pub async fn upload_sprite(
    State(state): State<SharedState>,
    mut multipart: Multipart,
) -> Result<Json<CreatedResponse>, AppError> {
    let (filename, content) = read_upload(&mut multipart).await?;
    let created = asset_service::upload(&state, AssetKind::Sprite, filename, content).await?;
    Ok(Json(created))
}

/// Fetch a single sprite's summary by id.
#[utoipa::path(
    get,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Identifier of the sprite")),
    responses(
        (status = 200, description = "Sprite found", body = AssetSummary),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No sprite with that identifier")
    )
)]
pub async fn get_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<AssetSummary>, AppError> {
    let summary = asset_service::fetch(&state, AssetKind::Sprite, &id).await?;
    Ok(Json(summary))
}

/// Apply a partial field map to a stored sprite.
#[utoipa::path(
    put,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Identifier of the sprite")),
    request_body = AssetUpdate,
    responses(
        (status = 200, description = "Sprite updated", body = ActionResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Update modified no record")
    )
)]
pub async fn update_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(payload): Json<AssetUpdate>,
) -> Result<Json<ActionResponse>, AppError> {
    let confirmation = asset_service::update(&state, AssetKind::Sprite, &id, payload).await?;
    Ok(Json(confirmation))
}

/// Delete a stored sprite by id.
#[utoipa::path(
    delete,
    path = "/sprites/{id}",
    tag = "sprites",
    params(("id" = String, Path, description = "Identifier of the sprite")),
    responses(
        (status = 200, description = "Sprite deleted", body = ActionResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "No sprite with that identifier")
    )
)]
pub async fn delete_sprite(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<ActionResponse>, AppError> {
    let confirmation = asset_service::delete(&state, AssetKind::Sprite, &id).await?;
    Ok(Json(confirmation))
}
