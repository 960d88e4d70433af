//! `CurrentPrincipal` extractor — resolves the bearer token, if any, to a principal.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use roster_entity::Principal;

use crate::state::AppState;

/// The caller's identity, or `None` for anonymous requests.
///
/// Extraction never rejects. A missing, malformed, expired, or forged token
/// resolves to `None`; whether an operation accepts anonymous callers is the
/// service layer's decision, not the transport's.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Option<Principal>);

impl std::ops::Deref for CurrentPrincipal {
    type Target = Option<Principal>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentPrincipal {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|token| state.authenticator.resolve_principal(token));

        Ok(Self(principal))
    }
}
