use futures::TryStreamExt;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};

use super::{
    models::{AssetDocument, AssetPatch, AssetRecord},
    mongodb::{MongoDaoError, MongoManager, MongoResult},
};

/// The two blob-backed resources served by the API.
///
/// Sprites and audio files share handlers, service calls, and storage layout;
/// the kind only selects the backing collection and the user-facing noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Sprite images, stored in the `sprites` collection.
    Sprite,
    /// Audio files, stored in the `audio` collection.
    Audio,
}

impl AssetKind {
    /// Name of the backing MongoDB collection.
    pub fn collection_name(self) -> &'static str {
        match self {
            AssetKind::Sprite => "sprites",
            AssetKind::Audio => "audio",
        }
    }

    /// Noun used in response messages and errors.
    pub fn display_name(self) -> &'static str {
        match self {
            AssetKind::Sprite => "Sprite",
            AssetKind::Audio => "Audio file",
        }
    }
}

/// Data Access Object encapsulating MongoDB interaction for sprite and audio
/// documents.
#[derive(Clone)]
pub struct AssetRepository {
    mongo: MongoManager,
    kind: AssetKind,
}

impl AssetRepository {
    pub fn new(mongo: MongoManager, kind: AssetKind) -> Self {
        Self { mongo, kind }
    }

    fn collection(&self) -> Collection<AssetDocument> {
        self.mongo
            .database()
            .collection::<AssetDocument>(self.kind.collection_name())
    }

    /// Typed view used for reads; paired with a projection so the blob never
    /// leaves the store.
    fn summary_collection(&self) -> Collection<AssetRecord> {
        self.mongo
            .database()
            .collection::<AssetRecord>(self.kind.collection_name())
    }

    /// Persist a new asset and return the store-assigned identifier.
    pub async fn insert(&self, asset: AssetDocument) -> MongoResult<ObjectId> {
        let collection = self.kind.collection_name();
        let result = self
            .collection()
            .insert_one(&asset)
            .await
            .map_err(|source| MongoDaoError::Insert { collection, source })?;

        result
            .inserted_id
            .as_object_id()
            .ok_or(MongoDaoError::UnexpectedInsertedId { collection })
    }

    /// Fetch every asset's id and filename.
    pub async fn list(&self) -> MongoResult<Vec<AssetRecord>> {
        let collection = self.kind.collection_name();
        self.summary_collection()
            .find(doc! {})
            .projection(doc! { "content": 0 })
            .await
            .map_err(|source| MongoDaoError::List { collection, source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::List { collection, source })
    }

    /// Fetch a single asset by id, blob excluded.
    pub async fn find(&self, id: ObjectId) -> MongoResult<Option<AssetRecord>> {
        let collection = self.kind.collection_name();
        self.summary_collection()
            .find_one(doc! { "_id": id })
            .projection(doc! { "content": 0 })
            .await
            .map_err(|source| MongoDaoError::Load { collection, source })
    }

    /// Apply a partial field set to an asset, returning the number of records
    /// the store reports as modified.
    pub async fn update(&self, id: ObjectId, patch: AssetPatch) -> MongoResult<u64> {
        let collection = self.kind.collection_name();
        let result = self
            .collection()
            .update_one(
                doc! { "_id": id },
                doc! { "$set": patch.into_set_document() },
            )
            .await
            .map_err(|source| MongoDaoError::Update { collection, source })?;

        Ok(result.modified_count)
    }

    /// Delete an asset by id, returning the number of records removed.
    pub async fn delete(&self, id: ObjectId) -> MongoResult<u64> {
        let collection = self.kind.collection_name();
        let result = self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|source| MongoDaoError::Delete { collection, source })?;

        Ok(result.deleted_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_distinct_collections() {
        assert_eq!(AssetKind::Sprite.collection_name(), "sprites");
        assert_eq!(AssetKind::Audio.collection_name(), "audio");
        assert_ne!(
            AssetKind::Sprite.collection_name(),
            AssetKind::Audio.collection_name()
        );
    }
}
