//! Requesting-principal extractor.
//!
//! There is no real authentication in this version: requests act on
//! behalf of a single default user. The identity is still an explicit
//! value threaded into every storage call — handlers never reach for a
//! hardcoded constant — so a later multi-tenant version only has to
//! change how this extractor is populated.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

/// Identity assumed when the request does not carry one.
pub const DEFAULT_USER_ID: &str = "default-user";

/// Identity a request acts on behalf of, from the `x-user-id` header
/// when present, [`DEFAULT_USER_ID`] otherwise.
///
/// ```ignore
/// async fn my_handler(principal: Principal) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %principal.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Principal {
    pub user_id: String,
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = match parts.headers.get("x-user-id") {
            Some(value) => {
                let value = value
                    .to_str()
                    .map_err(|_| AppError::BadRequest("Invalid x-user-id header".into()))?
                    .trim();
                if value.is_empty() {
                    return Err(AppError::BadRequest("Invalid x-user-id header".into()));
                }
                value.to_string()
            }
            None => DEFAULT_USER_ID.to_string(),
        };

        Ok(Principal { user_id })
    }
}
