//! Employee directory handlers — list, read, add, update, delete.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use roster_core::error::AppError;
use roster_core::types::Connection;
use roster_entity::Employee;

use crate::dto::request::{EmployeeListParams, NewEmployeeRequest, UpdateEmployeeRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentPrincipal;
use crate::extractors::path::parse_employee_id;
use crate::state::AppState;

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    Query(params): Query<EmployeeListParams>,
) -> Result<Json<ApiResponse<Connection<Employee>>>, ApiError> {
    let query = params.into_query()?;
    let connection = state
        .directory
        .employees(principal.as_ref(), &query)
        .await?;
    Ok(Json(ApiResponse::ok(connection)))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let id = parse_employee_id(&id)?;
    let employee = state.directory.employee(principal.as_ref(), &id).await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// POST /api/employees
pub async fn add_employee(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    Json(req): Json<NewEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    req.validate()
        .map_err(|err| AppError::validation(err.to_string()))?;

    let employee = state
        .directory
        .add_employee(principal.as_ref(), req.into_input())
        .await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// PATCH /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let id = parse_employee_id(&id)?;
    req.validate()
        .map_err(|err| AppError::validation(err.to_string()))?;

    let employee = state
        .directory
        .update_employee(principal.as_ref(), &id, req.into_patch())
        .await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    principal: CurrentPrincipal,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<bool>>, ApiError> {
    let id = parse_employee_id(&id)?;
    let deleted = state
        .directory
        .delete_employee(principal.as_ref(), &id)
        .await?;
    Ok(Json(ApiResponse::ok(deleted)))
}
