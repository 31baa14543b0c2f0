//! MongoDB connection handling and the error type shared by the repositories.

use std::time::Duration;

use mongodb::{Client, Database, bson::doc, error::Error as MongoError, options::ClientOptions};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{info, warn};

const DEFAULT_DB: &str = "game_media";
const MAX_CONNECT_ATTEMPTS: u32 = 10;
const BASE_RETRY_DELAY_MS: u64 = 250;

/// Result alias for DAO operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Errors raised by the MongoDB connection layer and the repositories.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        uri: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        #[source]
        source: MongoError,
    },
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        attempts: u32,
        #[source]
        source: MongoError,
    },
    #[error("MongoDB ping health check failed")]
    HealthPing {
        #[source]
        source: MongoError,
    },
    #[error("failed to insert into `{collection}`")]
    Insert {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("store returned a non-ObjectId identifier for `{collection}`")]
    UnexpectedInsertedId { collection: &'static str },
    #[error("failed to list `{collection}`")]
    List {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to load record from `{collection}`")]
    Load {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to update record in `{collection}`")]
    Update {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to delete record from `{collection}`")]
    Delete {
        collection: &'static str,
        #[source]
        source: MongoError,
    },
}

/// Cheap cloneable handle over the active database connection.
///
/// Handlers share the manager installed into the application state. The
/// supervisor task replaces the whole handle when connectivity is lost, so no
/// interior mutability is needed here.
#[derive(Clone)]
pub struct MongoManager {
    database: Database,
}

impl MongoManager {
    /// Database handle for building typed collections.
    pub fn database(&self) -> Database {
        self.database.clone()
    }

    /// Issue a ping against the current MongoDB connection.
    pub async fn ping(&self) -> MongoResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|source| MongoDaoError::HealthPing { source })?;
        Ok(())
    }
}

/// Connect to MongoDB and verify the connection with a ping before returning.
pub async fn connect(uri: &str, db_name: Option<&str>) -> MongoResult<MongoManager> {
    let database_name = db_name.unwrap_or(DEFAULT_DB);
    let options = ClientOptions::parse(uri)
        .await
        .map_err(|source| MongoDaoError::InvalidUri {
            uri: uri.to_owned(),
            source,
        })?;

    let database = establish_connection(options, database_name).await?;
    Ok(MongoManager { database })
}

async fn establish_connection(
    options: ClientOptions,
    database_name: &str,
) -> MongoResult<Database> {
    let client = Client::with_options(options)
        .map_err(|source| MongoDaoError::ClientConstruction { source })?;
    let database = client.database(database_name);

    let mut attempt: u32 = 0;
    loop {
        attempt += 1;

        match database.run_command(doc! { "ping": 1 }).await {
            Ok(_) => {
                if attempt > 1 {
                    info!(attempt, "connected to MongoDB after retry");
                }
                return Ok(database);
            }
            Err(err) if attempt < MAX_CONNECT_ATTEMPTS => {
                let backoff_multiplier = 1u64 << (attempt.saturating_sub(1).min(4));
                let wait = Duration::from_millis(BASE_RETRY_DELAY_MS * backoff_multiplier)
                    .min(Duration::from_secs(5));
                warn!(
                    attempt,
                    wait_ms = wait.as_millis(),
                    error = %err,
                    "MongoDB ping failed during initial connection; retrying"
                );
                sleep(wait).await;
            }
            Err(err) => {
                return Err(MongoDaoError::InitialPing {
                    attempts: attempt,
                    source: err,
                });
            }
        }
    }
}
