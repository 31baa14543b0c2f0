//! CRUD operations for the player score resource.

use mongodb::bson::oid::ObjectId;

use crate::{
    dao::{models::ScorePatch, scores::ScoreRepository},
    dto::{
        common::{ActionResponse, CreatedResponse},
        score::{ScoreInput, ScoreSummary, ScoreUpdate},
        validation::parse_object_id,
    },
    error::ServiceError,
    state::SharedState,
};

/// Persist a submitted score and return the store-assigned id.
///
/// Unlike uploads there is no emptiness check: any name/score pair is stored
/// as-is.
pub async fn submit(
    state: &SharedState,
    input: ScoreInput,
) -> Result<CreatedResponse, ServiceError> {
    let repository = ScoreRepository::new(state.require_mongo().await?);
    let id = repository.insert(input.into()).await?;

    Ok(CreatedResponse::new("Score recorded", id))
}

/// List every recorded score.
pub async fn list(state: &SharedState) -> Result<Vec<ScoreSummary>, ServiceError> {
    let repository = ScoreRepository::new(state.require_mongo().await?);
    let records = repository.list().await?;

    Ok(records.into_iter().map(ScoreSummary::from).collect())
}

/// Fetch a single score by its identifier string.
pub async fn fetch(state: &SharedState, id: &str) -> Result<ScoreSummary, ServiceError> {
    let object_id = validate_id(id)?;

    let repository = ScoreRepository::new(state.require_mongo().await?);
    let Some(record) = repository.find(object_id).await? else {
        return Err(ServiceError::NotFound(format!("score `{id}` not found")));
    };

    Ok(record.into())
}

/// Apply a partial field map to a recorded score.
pub async fn update(
    state: &SharedState,
    id: &str,
    update: ScoreUpdate,
) -> Result<ActionResponse, ServiceError> {
    let object_id = validate_id(id)?;

    let patch = ScorePatch::from(update);
    if patch.is_empty() {
        return Err(ServiceError::NotUpdated);
    }

    let repository = ScoreRepository::new(state.require_mongo().await?);
    if repository.update(object_id, patch).await? == 0 {
        return Err(ServiceError::NotUpdated);
    }

    Ok(ActionResponse::new("Score updated"))
}

/// Delete a recorded score by its identifier string.
pub async fn delete(state: &SharedState, id: &str) -> Result<ActionResponse, ServiceError> {
    let object_id = validate_id(id)?;

    let repository = ScoreRepository::new(state.require_mongo().await?);
    if repository.delete(object_id).await? == 0 {
        return Err(ServiceError::NotFound(format!("score `{id}` not found")));
    }

    Ok(ActionResponse::new("Score deleted"))
}

fn validate_id(id: &str) -> Result<ObjectId, ServiceError> {
    parse_object_id(id).map_err(|_| ServiceError::InvalidIdentifier(id.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    const WELL_FORMED_ID: &str = "64f1c0ffee0123456789abcd";

    #[tokio::test]
    async fn malformed_id_is_rejected_before_store_access() {
        let state = AppState::new();

        let result = fetch(&state, "nope").await;
        assert!(matches!(result, Err(ServiceError::InvalidIdentifier(_))));

        let result = delete(&state, "64f1c0ffee").await;
        assert!(matches!(result, Err(ServiceError::InvalidIdentifier(_))));

        let result = update(&state, "!!", ScoreUpdate::default()).await;
        assert!(matches!(result, Err(ServiceError::InvalidIdentifier(_))));
    }

    #[tokio::test]
    async fn well_formed_id_reaches_the_store_requirement() {
        let state = AppState::new();
        let result = fetch(&state, WELL_FORMED_ID).await;
        assert!(matches!(result, Err(ServiceError::Degraded)));
    }

    #[tokio::test]
    async fn update_without_fields_is_not_updated() {
        let state = AppState::new();
        let result = update(&state, WELL_FORMED_ID, ScoreUpdate::default()).await;
        assert!(matches!(result, Err(ServiceError::NotUpdated)));
    }
}
