//! Bearer-token authentication for the admin API.
//!
//! Every `/api` route requires `Authorization: Bearer <token>` matching the
//! configured `ADMIN_API_TOKEN`. The presented and expected tokens are
//! hashed with SHA-256 and the digests compared, so the comparison is
//! fixed-length regardless of what the client sends.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that rejects requests without a valid admin bearer token.
///
/// Returns 401 for a missing header, a non-Bearer scheme, or a token that
/// does not match the configured one.
pub async fn require_api_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token);

    match provided {
        Some(token) if token_matches(token, &state.config().api_token) => {
            next.run(request).await
        }
        _ => {
            tracing::warn!("Admin API request rejected: invalid or missing bearer token");
            AppError::Unauthorized.into_response()
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Compare a presented token against the configured one via SHA-256 digests.
fn token_matches(provided: &str, expected: &SecretString) -> bool {
    let provided_digest = Sha256::digest(provided.as_bytes());
    let expected_digest = Sha256::digest(expected.expose_secret().as_bytes());
    provided_digest == expected_digest
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extracts_value() {
        assert_eq!(bearer_token("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_bearer_token_rejects_other_schemes() {
        assert_eq!(bearer_token("Basic abc123"), None);
        assert_eq!(bearer_token("abc123"), None);
    }

    #[test]
    fn test_bearer_token_rejects_empty_token() {
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer    "), None);
    }

    #[test]
    fn test_token_matches_accepts_configured_token() {
        let expected = SecretString::from("kJ8#mN2$pQ5&rT9*vX3^zA6!cE0@gH4b");
        assert!(token_matches("kJ8#mN2$pQ5&rT9*vX3^zA6!cE0@gH4b", &expected));
    }

    #[test]
    fn test_token_matches_rejects_wrong_token() {
        let expected = SecretString::from("kJ8#mN2$pQ5&rT9*vX3^zA6!cE0@gH4b");
        assert!(!token_matches("wrong-token", &expected));
        assert!(!token_matches("", &expected));
        // One character off
        assert!(!token_matches("kJ8#mN2$pQ5&rT9*vX3^zA6!cE0@gH4c", &expected));
    }
}
