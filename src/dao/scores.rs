use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};

use super::{
    models::{ScoreDocument, ScorePatch, ScoreRecord},
    mongodb::{MongoDaoError, MongoManager, MongoResult},
};

const SCORE_COLLECTION_NAME: &str = "scores";

/// Data Access Object encapsulating MongoDB interaction for player scores.
#[derive(Clone)]
pub struct ScoreRepository {
    mongo: MongoManager,
}

impl ScoreRepository {
    pub fn new(mongo: MongoManager) -> Self {
        Self { mongo }
    }

    fn collection(&self) -> Collection<ScoreDocument> {
        self.mongo
            .database()
            .collection::<ScoreDocument>(SCORE_COLLECTION_NAME)
    }

    fn record_collection(&self) -> Collection<ScoreRecord> {
        self.mongo
            .database()
            .collection::<ScoreRecord>(SCORE_COLLECTION_NAME)
    }

    /// Persist a new score and return the store-assigned identifier.
    pub async fn insert(&self, score: ScoreDocument) -> MongoResult<ObjectId> {
        let result = self.collection().insert_one(&score).await.map_err(|source| {
            MongoDaoError::Insert {
                collection: SCORE_COLLECTION_NAME,
                source,
            }
        })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or(MongoDaoError::UnexpectedInsertedId {
                collection: SCORE_COLLECTION_NAME,
            })
    }

    /// Fetch every recorded score.
    pub async fn list(&self) -> MongoResult<Vec<ScoreRecord>> {
        self.record_collection()
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::List {
                collection: SCORE_COLLECTION_NAME,
                source,
            })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List {
                collection: SCORE_COLLECTION_NAME,
                source,
            })
    }

    /// Fetch a single score by id.
    pub async fn find(&self, id: ObjectId) -> MongoResult<Option<ScoreRecord>> {
        self.record_collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|source| MongoDaoError::Load {
                collection: SCORE_COLLECTION_NAME,
                source,
            })
    }

    /// Apply a partial field set to a score, returning the number of records
    /// the store reports as modified.
    pub async fn update(&self, id: ObjectId, patch: ScorePatch) -> MongoResult<u64> {
        let result = self
            .collection()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": patch.into_set_document() },
            )
            .await
            .map_err(|source| MongoDaoError::Update {
                collection: SCORE_COLLECTION_NAME,
                source,
            })?;

        Ok(result.modified_count)
    }

    /// Delete a score by id, returning the number of records removed.
    pub async fn delete(&self, id: ObjectId) -> MongoResult<u64> {
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|source| MongoDaoError::Delete {
                collection: SCORE_COLLECTION_NAME,
                source,
            })?;

        Ok(result.deleted_count)
    }
}
