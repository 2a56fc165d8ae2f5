use axum::{Json, Router, routing::get};

use crate::dto::HealthStatus;

/// GET /health
/// Response: 200 OK with `{ "status": "UP", "timestamp": "<RFC 3339>" }`
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::up())
}

/// Mounts the health check on `router` at `prefix` and `prefix/`.
///
/// Trailing slashes on `prefix` are ignored; an empty or `/` prefix mounts at the root only.
pub fn register<S>(router: Router<S>, prefix: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let base = prefix.trim_end_matches('/');
    if base.is_empty() {
        return router.route("/", get(health_check));
    }

    router
        .route(base, get(health_check))
        .route(&format!("{base}/"), get(health_check))
}

/// Normalized path the health check answers on, for logging.
pub fn mounted_path(prefix: &str) -> String {
    format!("{}/", prefix.trim_end_matches('/'))
}
