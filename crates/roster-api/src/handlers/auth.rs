//! Auth handlers — login and me.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use roster_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, PrincipalResponse};
use crate::error::ApiError;
use crate::extractors::CurrentPrincipal;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|err| AppError::validation(err.to_string()))?;

    let result = state.authenticator.login(&req.email, &req.secret).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        id: result.principal.id,
        email: result.principal.email.clone(),
        role: result.principal.role,
        token: result.token,
        expires_at: result.expires_at,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
) -> Result<Json<ApiResponse<PrincipalResponse>>, ApiError> {
    let principal = state.policy.require_principal(principal.as_ref())?;
    Ok(Json(ApiResponse::ok(PrincipalResponse::from(principal))))
}
