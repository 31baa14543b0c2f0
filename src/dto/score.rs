use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dao::models::{ScoreDocument, ScorePatch, ScoreRecord};

/// Payload submitted to record a new player score.
///
/// Neither field carries a range or uniqueness constraint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScoreInput {
    /// Display name of the player.
    pub player_name: String,
    /// Score value achieved.
    pub score: i64,
}

impl From<ScoreInput> for ScoreDocument {
    fn from(input: ScoreInput) -> Self {
        Self {
            player_name: input.player_name,
            score: input.score,
        }
    }
}

/// Summary of a recorded score as returned by list and get operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreSummary {
    /// Store-assigned identifier, as a 24-character hex string.
    pub id: String,
    /// Display name of the player.
    pub player_name: String,
    /// Stored score value.
    pub score: i64,
}

impl From<ScoreRecord> for ScoreSummary {
    fn from(record: ScoreRecord) -> Self {
        Self {
            id: record.id.to_hex(),
            player_name: record.player_name,
            score: record.score,
        }
    }
}

/// Partial field map accepted by score update operations.
///
/// Unknown fields are rejected rather than silently dropped.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ScoreUpdate {
    /// Replacement player name.
    #[serde(default)]
    pub player_name: Option<String>,
    /// Replacement score value.
    #[serde(default)]
    pub score: Option<i64>,
}

impl From<ScoreUpdate> for ScorePatch {
    fn from(update: ScoreUpdate) -> Self {
        Self {
            player_name: update.player_name,
            score: update.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_deserializes_name_and_score() {
        let input: ScoreInput =
            serde_json::from_str(r#"{"player_name":"Ana","score":42}"#).unwrap();
        assert_eq!(input.player_name, "Ana");
        assert_eq!(input.score, 42);
    }

    #[test]
    fn update_accepts_score_only_payload() {
        let update: ScoreUpdate = serde_json::from_str(r#"{"score":99}"#).unwrap();
        assert!(update.player_name.is_none());
        assert_eq!(update.score, Some(99));
    }

    #[test]
    fn update_rejects_unknown_fields() {
        let result = serde_json::from_str::<ScoreUpdate>(r#"{"score":99,"rank":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn summary_serializes_expected_shape() {
        let record = ScoreRecord {
            id: mongodb::bson::oid::ObjectId::parse_str("64f1c0ffee0123456789abcd").unwrap(),
            player_name: "Ana".into(),
            score: 42,
        };

        let value = serde_json::to_value(ScoreSummary::from(record)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "64f1c0ffee0123456789abcd",
                "player_name": "Ana",
                "score": 42,
            })
        );
    }
}
