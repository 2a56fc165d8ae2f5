pub mod health;

use crate::errors::ApiError;

/// Any path no route claims
pub async fn fallback() -> ApiError {
    ApiError::NotFound
}
