//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::core::config::{DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::{EmployeeQuery, StatusFilter};
use crate::utils::response::{self, ApiResponse, PagedResponse};
use crate::utils::{AppError, AppResult, validation};

/// List query parameters, before boundary normalization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    page: Option<i64>,
    per_page: Option<i64>,
    search: Option<String>,
    status: Option<String>,
}

/// Availability check parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckQuery {
    value: Option<String>,
    exclude_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityData {
    pub available: bool,
}

#[derive(Debug, Serialize)]
pub struct StatsData {
    pub total: usize,
}

/// List employees with pagination and search
///
/// Out-of-range paging values fall back to the defaults here, never in the
/// repository: page/perPage below 1 become 1/10, perPage is capped at 100.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<PagedResponse<Employee>>> {
    let page = match query.page {
        Some(page) if page >= 1 => page as usize,
        _ => DEFAULT_PAGE,
    };
    let per_page = match query.per_page {
        Some(per_page) if per_page >= 1 => (per_page as usize).min(MAX_PER_PAGE),
        _ => DEFAULT_PER_PAGE,
    };
    let status = match query.status.as_deref() {
        None | Some("") => StatusFilter::All,
        Some(value) => value
            .parse()
            .map_err(|_| AppError::validation("Status must be one of: active, inactive, all"))?,
    };

    let page = state
        .employees
        .find_all(&EmployeeQuery {
            page,
            per_page,
            search: query.search.unwrap_or_default(),
            status,
        })
        .await?;

    Ok(response::paged(page))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let employee = state
        .employees
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {id} not found")))?;
    Ok(response::ok(employee))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Employee>>)> {
    validation::check(&payload)?;

    let employee = state.employees.create(payload).await?;

    tracing::info!(employee_id = %employee.id, username = %employee.username, "Employee created");

    Ok((
        StatusCode::CREATED,
        response::ok_with_message(employee, "Employee created successfully"),
    ))
}

/// Update an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<impl IntoResponse> {
    validation::check(&payload)?;

    let employee = state.employees.update(&id, payload).await?;

    tracing::info!(employee_id = %employee.id, "Employee updated");

    Ok(response::ok_with_message(
        employee,
        "Employee updated successfully",
    ))
}

/// Hard delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.employees.delete(&id).await?;

    tracing::info!(employee_id = %id, "Employee deleted");

    Ok(response::message("Employee deleted successfully"))
}

/// Check username availability
///
/// `excludeId` lets an edit form re-submit the record's own username.
pub async fn check_username(
    State(state): State<ServerState>,
    Query(query): Query<CheckQuery>,
) -> AppResult<impl IntoResponse> {
    let value = query
        .value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("Username is required"))?;

    let available = match state.employees.find_by_username(&value).await? {
        None => true,
        Some(employee) => query.exclude_id.as_deref() == Some(employee.id.as_str()),
    };

    Ok(response::ok(AvailabilityData { available }))
}

/// Check email availability
pub async fn check_email(
    State(state): State<ServerState>,
    Query(query): Query<CheckQuery>,
) -> AppResult<impl IntoResponse> {
    let value = query
        .value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation("Email is required"))?;

    let available = match state.employees.find_by_email(&value).await? {
        None => true,
        Some(employee) => query.exclude_id.as_deref() == Some(employee.id.as_str()),
    };

    Ok(response::ok(AvailabilityData { available }))
}

/// Employee statistics
pub async fn stats(State(state): State<ServerState>) -> AppResult<impl IntoResponse> {
    let total = state.employees.count().await?;
    Ok(response::ok(StatsData { total }))
}
