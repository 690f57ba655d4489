use std::collections::HashMap;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::connector::api::ApiError;
use crate::domain::{parse_repository_id, DomainError};

/// Path parameter carrying the repository id.
pub const ID_PARAM: &str = "id";

pub fn check_repository_id(id: &str) -> Result<(), DomainError> {
    parse_repository_id(id)
        .map(|_| ())
        .ok_or_else(|| DomainError::invalid_id(id))
}

/// Rejects the request with 400 unless the `{id}` path segment is a UUID.
///
/// Installed as a route layer, so it only sees requests that already matched
/// an `{id}` route; the handler never runs for a bad id. A segment that does
/// not even decode to UTF-8 gets the same answer.
pub async fn validate_repository_id(
    params: Result<Path<HashMap<String, String>>, PathRejection>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Ok(Path(params)) = params else {
        debug!("Undecodable repository id in {}", request.uri());
        return Err(ApiError::InvalidId);
    };
    let id = params.get(ID_PARAM).map(String::as_str).unwrap_or_default();
    if let Err(err) = check_repository_id(id) {
        debug!("{}", err);
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
