use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, StatusCode},
};
use std::sync::Arc;

/// Proof that the request carried the expected bearer credential.
///
/// The core never inspects credentials; any handler that takes this extractor
/// is behind the check, and a missing or wrong token is rejected with a plain
/// 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthToken;

// Bearer token extractor
impl FromRequestParts<Arc<crate::AppState>> for AuthToken {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<crate::AppState>,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        // Exact match against the configured credential
        if token != state.config.auth.bearer_token {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Ok(AuthToken)
    }
}
