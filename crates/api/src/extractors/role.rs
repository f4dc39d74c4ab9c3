use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use hostelhub_store::models::Role;

use crate::error::ApiError;

/// Caller identity taken from the client-supplied role/email headers.
/// Session verification belongs to the fronting layer; this service only
/// parses and gates on the declared role.
#[derive(Debug, Clone)]
pub struct RoleUser {
    pub role: Role,
    pub email: String,
}

impl<S> FromRequestParts<S> for RoleUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get("x-user-role")
            .and_then(|v| v.to_str().ok())
            .and_then(Role::parse)
            .ok_or_else(|| {
                ApiError::Unauthorized("Missing or invalid x-user-role header".to_string())
            })?;

        let email = parts
            .headers
            .get("x-user-email")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(RoleUser { role, email })
    }
}
