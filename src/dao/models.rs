use mongodb::bson::{Binary, Document, oid::ObjectId, spec::BinarySubtype};
use serde::{Deserialize, Serialize};

/// Insert model for a sprite or audio document.
///
/// Carries no `_id` so the store assigns one on insert.
#[derive(Debug, Clone, Serialize)]
pub struct AssetDocument {
    /// Filename supplied with the upload.
    pub filename: String,
    /// Raw file bytes, stored as an opaque BSON binary and never decoded.
    pub content: Binary,
}

impl AssetDocument {
    /// Wrap raw upload bytes into the persisted binary representation.
    pub fn new(filename: String, content: Vec<u8>) -> Self {
        Self {
            filename,
            content: Binary {
                subtype: BinarySubtype::Generic,
                bytes: content,
            },
        }
    }
}

/// Read model for a sprite or audio document, fetched with a projection that
/// leaves the blob behind.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetRecord {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Filename supplied with the upload.
    pub filename: String,
}

/// Partial field set applied to an asset by an update operation.
#[derive(Debug, Clone, Default)]
pub struct AssetPatch {
    /// Replacement filename, when provided.
    pub filename: Option<String>,
    /// Replacement file bytes, when provided.
    pub content: Option<Vec<u8>>,
}

impl AssetPatch {
    /// True when the patch carries no fields to apply.
    pub fn is_empty(&self) -> bool {
        self.filename.is_none() && self.content.is_none()
    }

    /// Flatten the provided fields into a `$set` document.
    pub(crate) fn into_set_document(self) -> Document {
        let mut fields = Document::new();
        if let Some(filename) = self.filename {
            fields.insert("filename", filename);
        }
        if let Some(content) = self.content {
            fields.insert(
                "content",
                Binary {
                    subtype: BinarySubtype::Generic,
                    bytes: content,
                },
            );
        }
        fields
    }
}

/// Insert model for a player score document.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreDocument {
    /// Display name of the player; no uniqueness constraint.
    pub player_name: String,
    /// Submitted score value.
    pub score: i64,
}

/// Read model for a player score document.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRecord {
    /// Store-assigned identifier.
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Display name of the player.
    pub player_name: String,
    /// Stored score value.
    pub score: i64,
}

/// Partial field set applied to a player score by an update operation.
#[derive(Debug, Clone, Default)]
pub struct ScorePatch {
    /// Replacement player name, when provided.
    pub player_name: Option<String>,
    /// Replacement score, when provided.
    pub score: Option<i64>,
}

impl ScorePatch {
    /// True when the patch carries no fields to apply.
    pub fn is_empty(&self) -> bool {
        self.player_name.is_none() && self.score.is_none()
    }

    /// Flatten the provided fields into a `$set` document.
    pub(crate) fn into_set_document(self) -> Document {
        let mut fields = Document::new();
        if let Some(player_name) = self.player_name {
            fields.insert("player_name", player_name);
        }
        if let Some(score) = self.score {
            fields.insert("score", score);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::Bson;

    use super::*;

    #[test]
    fn asset_patch_set_document_keeps_only_provided_fields() {
        let patch = AssetPatch {
            filename: Some("ship.png".into()),
            content: None,
        };

        let fields = patch.into_set_document();
        assert_eq!(
            fields.get("filename"),
            Some(&Bson::String("ship.png".into()))
        );
        assert!(!fields.contains_key("content"));
    }

    #[test]
    fn asset_patch_content_becomes_generic_binary() {
        let patch = AssetPatch {
            filename: None,
            content: Some(vec![1, 2, 3]),
        };

        let fields = patch.into_set_document();
        match fields.get("content") {
            Some(Bson::Binary(binary)) => {
                assert_eq!(binary.subtype, BinarySubtype::Generic);
                assert_eq!(binary.bytes, vec![1, 2, 3]);
            }
            other => panic!("expected binary content field, got {other:?}"),
        }
    }

    #[test]
    fn empty_patches_report_empty() {
        assert!(AssetPatch::default().is_empty());
        assert!(ScorePatch::default().is_empty());
        assert!(
            !ScorePatch {
                score: Some(10),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn score_patch_set_document_keeps_only_provided_fields() {
        let patch = ScorePatch {
            player_name: None,
            score: Some(99),
        };

        let fields = patch.into_set_document();
        assert_eq!(fields.get("score"), Some(&Bson::Int64(99)));
        assert!(!fields.contains_key("player_name"));
    }
}
