use tracing::warn;

use crate::{
    dto::health::{HealthResponse, HealthStatus},
    state::SharedState,
};

/// Report the current health status, pinging MongoDB when a connection is
/// installed and logging connectivity issues.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    let status = match state.mongo().await {
        Some(mongo) => match mongo.ping().await {
            Ok(()) => HealthStatus::Ok,
            Err(err) => {
                warn!(error = %err, "MongoDB health ping failed");
                HealthStatus::Degraded
            }
        },
        None => {
            warn!("storage unavailable (degraded mode)");
            HealthStatus::Degraded
        }
    };

    status.into()
}
