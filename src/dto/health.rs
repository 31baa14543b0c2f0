use serde::Serialize;
use utoipa::ToSchema;

/// Connectivity status reported by the `/healthcheck` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The store connection is installed and answering pings.
    Ok,
    /// No store connection is currently available.
    Degraded,
}

/// Body of the `/healthcheck` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: HealthStatus,
}

impl From<HealthStatus> for HealthResponse {
    fn from(status: HealthStatus) -> Self {
        Self { status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let body = serde_json::to_value(HealthResponse::from(HealthStatus::Degraded)).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "degraded" }));
    }
}
