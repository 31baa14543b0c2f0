//! CRUD operations shared by the sprite and audio resources.

use mongodb::bson::oid::ObjectId;

use crate::{
    dao::{
        assets::{AssetKind, AssetRepository},
        models::{AssetDocument, AssetPatch},
    },
    dto::{
        asset::{AssetSummary, AssetUpdate},
        common::{ActionResponse, CreatedResponse},
        validation::parse_object_id,
    },
    error::ServiceError,
    state::SharedState,
};

/// Persist an uploaded file and return the store-assigned id.
///
/// Zero-length uploads are rejected before anything touches the store.
pub async fn upload(
    state: &SharedState,
    kind: AssetKind,
    filename: String,
    content: Vec<u8>,
) -> Result<CreatedResponse, ServiceError> {
    if content.is_empty() {
        return Err(ServiceError::EmptyPayload);
    }

    let repository = AssetRepository::new(state.require_mongo().await?, kind);
    let id = repository
        .insert(AssetDocument::new(filename, content))
        .await?;

    Ok(CreatedResponse::new(
        format!("{} uploaded", kind.display_name()),
        id,
    ))
}

/// List every stored asset's id and filename.
pub async fn list(state: &SharedState, kind: AssetKind) -> Result<Vec<AssetSummary>, ServiceError> {
    let repository = AssetRepository::new(state.require_mongo().await?, kind);
    let records = repository.list().await?;

    Ok(records.into_iter().map(AssetSummary::from).collect())
}

/// Fetch a single asset's summary by its identifier string.
pub async fn fetch(
    state: &SharedState,
    kind: AssetKind,
    id: &str,
) -> Result<AssetSummary, ServiceError> {
    let object_id = validate_id(id)?;

    let repository = AssetRepository::new(state.require_mongo().await?, kind);
    let Some(record) = repository.find(object_id).await? else {
        return Err(not_found(kind, id));
    };

    Ok(record.into())
}

/// Apply a partial field map to a stored asset.
pub async fn update(
    state: &SharedState,
    kind: AssetKind,
    id: &str,
    update: AssetUpdate,
) -> Result<ActionResponse, ServiceError> {
    let object_id = validate_id(id)?;

    // The blob stays non-empty across the whole record lifecycle, not just at
    // creation time.
    if update.content.as_ref().is_some_and(|bytes| bytes.is_empty()) {
        return Err(ServiceError::EmptyPayload);
    }

    let patch = AssetPatch::from(update);
    if patch.is_empty() {
        return Err(ServiceError::NotUpdated);
    }

    let repository = AssetRepository::new(state.require_mongo().await?, kind);
    if repository.update(object_id, patch).await? == 0 {
        return Err(ServiceError::NotUpdated);
    }

    Ok(ActionResponse::new(format!(
        "{} updated",
        kind.display_name()
    )))
}

/// Delete a stored asset by its identifier string.
pub async fn delete(
    state: &SharedState,
    kind: AssetKind,
    id: &str,
) -> Result<ActionResponse, ServiceError> {
    let object_id = validate_id(id)?;

    let repository = AssetRepository::new(state.require_mongo().await?, kind);
    if repository.delete(object_id).await? == 0 {
        return Err(not_found(kind, id));
    }

    Ok(ActionResponse::new(format!(
        "{} deleted",
        kind.display_name()
    )))
}

fn validate_id(id: &str) -> Result<ObjectId, ServiceError> {
    parse_object_id(id).map_err(|_| ServiceError::InvalidIdentifier(id.to_owned()))
}

fn not_found(kind: AssetKind, id: &str) -> ServiceError {
    ServiceError::NotFound(format!(
        "{} `{id}` not found",
        kind.display_name().to_lowercase()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    const WELL_FORMED_ID: &str = "64f1c0ffee0123456789abcd";

    #[tokio::test]
    async fn empty_upload_is_rejected_before_store_access() {
        // No connection is installed, so reaching the store would fail with
        // Degraded; EmptyPayload proves the upload never got that far.
        let state = AppState::new();
        let result = upload(&state, AssetKind::Sprite, "ship.png".into(), Vec::new()).await;
        assert!(matches!(result, Err(ServiceError::EmptyPayload)));
    }

    #[tokio::test]
    async fn malformed_id_is_rejected_before_store_access() {
        let state = AppState::new();

        let result = fetch(&state, AssetKind::Sprite, "not-an-id").await;
        assert!(matches!(result, Err(ServiceError::InvalidIdentifier(_))));

        let result = delete(&state, AssetKind::Audio, "1234").await;
        assert!(matches!(result, Err(ServiceError::InvalidIdentifier(_))));

        let result = update(&state, AssetKind::Audio, "xyz", AssetUpdate::default()).await;
        assert!(matches!(result, Err(ServiceError::InvalidIdentifier(_))));
    }

    #[tokio::test]
    async fn well_formed_id_reaches_the_store_requirement() {
        let state = AppState::new();
        let result = fetch(&state, AssetKind::Sprite, WELL_FORMED_ID).await;
        assert!(matches!(result, Err(ServiceError::Degraded)));
    }

    #[tokio::test]
    async fn update_without_fields_is_not_updated() {
        let state = AppState::new();
        let result = update(
            &state,
            AssetKind::Sprite,
            WELL_FORMED_ID,
            AssetUpdate::default(),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::NotUpdated)));
    }

    #[tokio::test]
    async fn update_with_empty_content_is_rejected() {
        let state = AppState::new();
        let result = update(
            &state,
            AssetKind::Audio,
            WELL_FORMED_ID,
            AssetUpdate {
                filename: None,
                content: Some(Vec::new()),
            },
        )
        .await;
        assert!(matches!(result, Err(ServiceError::EmptyPayload)));
    }
}
