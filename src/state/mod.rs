//! Process-wide shared state handed to every request handler.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{dao::mongodb::MongoManager, error::ServiceError};

/// Cheaply cloneable handle on the application state.
pub type SharedState = Arc<AppState>;

/// Central application state holding the database handle.
///
/// The handle is the only long-lived shared resource: installed once by the
/// connection supervisor, read-only-shared by handlers, replaced wholesale on
/// reconnect. While the slot is empty the service runs in degraded mode.
pub struct AppState {
    mongo: RwLock<Option<MongoManager>>,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The application starts in degraded mode until a connection is installed.
    pub fn new() -> SharedState {
        Arc::new(Self {
            mongo: RwLock::new(None),
        })
    }

    /// Obtain a handle to the current connection, if one is installed.
    pub async fn mongo(&self) -> Option<MongoManager> {
        let guard = self.mongo.read().await;
        guard.as_ref().cloned()
    }

    /// Obtain the current connection or fail with the degraded-mode error.
    pub async fn require_mongo(&self) -> Result<MongoManager, ServiceError> {
        self.mongo().await.ok_or(ServiceError::Degraded)
    }

    /// Install a fresh connection and leave degraded mode.
    pub async fn install_mongo(&self, manager: MongoManager) {
        let mut guard = self.mongo.write().await;
        *guard = Some(manager);
    }

    /// Drop the current connection and enter degraded mode.
    pub async fn clear_mongo(&self) {
        let mut guard = self.mongo.write().await;
        guard.take();
    }

    /// True while no connection is installed.
    pub async fn is_degraded(&self) -> bool {
        let guard = self.mongo.read().await;
        guard.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_degraded() {
        let state = AppState::new();
        assert!(state.is_degraded().await);
        assert!(state.mongo().await.is_none());
    }

    #[tokio::test]
    async fn require_mongo_fails_while_degraded() {
        let state = AppState::new();
        assert!(matches!(
            state.require_mongo().await,
            Err(ServiceError::Degraded)
        ));
    }
}
