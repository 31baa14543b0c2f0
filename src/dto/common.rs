use mongodb::bson::oid::ObjectId;
use serde::Serialize;
use utoipa::ToSchema;

/// Response returned when a create operation persisted a new record.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Human readable confirmation, e.g. `"Sprite uploaded"`.
    pub message: String,
    /// Store-assigned identifier of the new record, as a 24-character hex string.
    pub id: String,
}

impl CreatedResponse {
    pub fn new(message: impl Into<String>, id: ObjectId) -> Self {
        Self {
            message: message.into(),
            id: id.to_hex(),
        }
    }
}

/// Bare confirmation returned by update and delete operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human readable confirmation, e.g. `"Score deleted"`.
    pub message: String,
}

impl ActionResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
