use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};
use utoipa::ToSchema;

use crate::dao::models::{AssetPatch, AssetRecord};

/// Summary of a stored sprite or audio file: everything except the blob.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetSummary {
    /// Store-assigned identifier, as a 24-character hex string.
    pub id: String,
    /// Filename supplied with the upload.
    pub filename: String,
}

impl From<AssetRecord> for AssetSummary {
    fn from(record: AssetRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            filename: record.filename,
        }
    }
}

/// Partial field map accepted by asset update operations.
///
/// Unknown fields are rejected rather than silently dropped; `content`
/// travels base64-encoded since the surrounding payload is JSON.
#[serde_as]
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AssetUpdate {
    /// Replacement filename.
    #[serde(default)]
    pub filename: Option<String>,
    /// Replacement file bytes, base64-encoded.
    #[serde_as(as = "Option<Base64>")]
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Byte)]
    pub content: Option<Vec<u8>>,
}

impl From<AssetUpdate> for AssetPatch {
    fn from(update: AssetUpdate) -> Self {
        Self {
            filename: update.filename,
            content: update.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_accepts_partial_payloads() {
        let update: AssetUpdate = serde_json::from_str(r#"{"filename":"ship.png"}"#).unwrap();
        assert_eq!(update.filename.as_deref(), Some("ship.png"));
        assert!(update.content.is_none());

        let update: AssetUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.filename.is_none());
        assert!(update.content.is_none());
    }

    #[test]
    fn update_decodes_base64_content() {
        // "AQID" is the base64 encoding of [1, 2, 3].
        let update: AssetUpdate = serde_json::from_str(r#"{"content":"AQID"}"#).unwrap();
        assert_eq!(update.content, Some(vec![1, 2, 3]));
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let result = serde_json::from_str::<AssetUpdate>(r#"{"filenme":"typo.png"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_rejects_malformed_base64() {
        let result = serde_json::from_str::<AssetUpdate>(r#"{"content":"@@not-base64@@"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn summary_exposes_hex_identifier() {
        let record = AssetRecord {
            id: mongodb::bson::oid::ObjectId::parse_str("64f1c0ffee0123456789abcd").unwrap(),
            filename: "laser.wav".into(),
        };

        let summary = AssetSummary::from(record);
        assert_eq!(summary.id, "64f1c0ffee0123456789abcd");
        assert_eq!(summary.filename, "laser.wav");
    }
}
