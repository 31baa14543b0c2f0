use axum::{Router, extract::Multipart};

use crate::{error::AppError, state::SharedState};

pub mod audio;
pub mod docs;
pub mod health;
pub mod scores;
pub mod sprites;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(sprites::router())
        .merge(audio::router())
        .merge(scores::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}

/// Pull the uploaded file out of a multipart body.
///
/// The first field is taken as the file; its name defaults to `"unnamed"`
/// when the part carries none. Emptiness of the bytes is judged by the
/// service layer, not here.
pub(crate) async fn read_upload(multipart: &mut Multipart) -> Result<(String, Vec<u8>), AppError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(format!("failed to read multipart field: {err}")))?
        .ok_or_else(|| AppError::BadRequest("no file uploaded".into()))?;

    let filename = field.file_name().unwrap_or("unnamed").to_owned();
    let bytes = field
        .bytes()
        .await
        .map_err(|err| AppError::BadRequest(format!("failed to read file bytes: {err}")))?;

    Ok((filename, bytes.to_vec()))
}
