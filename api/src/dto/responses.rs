use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Liveness value reported by the health endpoint.
pub const STATUS_UP: &str = "UP";

/// Body of `GET /health`
///
/// Built fresh for every request and dropped once serialized.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

impl HealthStatus {
    /// Snapshot taken at `now`, rendered as `2026-10-18T12:34:56.789Z`
    pub fn up_at(now: DateTime<Utc>) -> Self {
        Self {
            status: STATUS_UP.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn up() -> Self {
        Self::up_at(Utc::now())
    }
}

/// Error body shared by every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
