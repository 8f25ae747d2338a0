//! Employee HTTP Routes
//!
//! - `/employees` - lookup, listing, create, update, delete
//! - `/employees/all` - paginated listing
//!
//! Handlers hold no lock of their own; the store's lock is the only
//! serialization point.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tracing::warn;

use crate::employee::{Employee, EmployeeStore};
use crate::observability::MetricsRegistry;

use super::errors::{ApiError, ApiResult};
use super::pagination::PageParams;

// ==================
// Shared State
// ==================

/// State shared across employee handlers
pub struct EmployeeState<S: EmployeeStore> {
    pub store: Arc<S>,
    pub metrics: Arc<MetricsRegistry>,
}

impl<S: EmployeeStore> EmployeeState<S> {
    pub fn new(store: Arc<S>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    /// Count and log a failed request, passing the error through
    fn reject(&self, err: ApiError) -> ApiError {
        self.metrics.increment_rejected();
        if err == ApiError::NotFound {
            self.metrics.increment_not_found();
        }
        warn!(status = err.status_code().as_u16(), error = %err, "request rejected");
        err
    }
}

type SharedState<S> = Arc<EmployeeState<S>>;

// ==================
// Request Types
// ==================

/// Body accepted by DELETE when no `id` query parameter is given
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub delete_id: i64,
}

// ==================
// Employee Routes
// ==================

/// Create employee routes
pub fn employee_routes<S: EmployeeStore + 'static>(state: SharedState<S>) -> Router {
    Router::new()
        .route(
            "/employees",
            get(get_employees::<S>)
                .post(create_employee::<S>)
                .put(update_employee::<S>)
                .delete(delete_employee::<S>)
                .fallback(method_not_allowed::<S>),
        )
        .route(
            "/employees/all",
            get(list_employees_page::<S>).fallback(method_not_allowed::<S>),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// GET /employees[?id=N]
async fn get_employees<S: EmployeeStore + 'static>(
    State(state): State<SharedState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    lookup_or_list(&state, &query).map_err(|e| state.reject(e))
}

/// POST /employees
async fn create_employee<S: EmployeeStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let employee = create(&state, &body).map_err(|e| state.reject(e))?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /employees
async fn update_employee<S: EmployeeStore + 'static>(
    State(state): State<SharedState<S>>,
    body: Bytes,
) -> Result<Json<Employee>, ApiError> {
    let employee = update(&state, &body).map_err(|e| state.reject(e))?;
    Ok(Json(employee))
}

/// DELETE /employees?id=N, or with a `{"delete_id": N}` body
async fn delete_employee<S: EmployeeStore + 'static>(
    State(state): State<SharedState<S>>,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    delete(&state, &query, &body).map_err(|e| state.reject(e))?;
    Ok(StatusCode::OK)
}

/// GET /employees/all?page=P&perPage=N
async fn list_employees_page<S: EmployeeStore + 'static>(
    State(state): State<SharedState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    list_page(&state, &query).map_err(|e| state.reject(e))
}

/// Any verb an endpoint does not serve
async fn method_not_allowed<S: EmployeeStore + 'static>(
    State(state): State<SharedState<S>>,
) -> ApiError {
    state.reject(ApiError::MethodNotSupported)
}

// ==================
// Operations
// ==================

fn lookup_or_list<S: EmployeeStore>(
    state: &EmployeeState<S>,
    query: &HashMap<String, String>,
) -> ApiResult<Response> {
    match id_param(query)? {
        Some(id) => {
            let employee = state.store.get_by_id(id)?.ok_or(ApiError::NotFound)?;
            Ok(Json(employee).into_response())
        }
        None => Ok(Json(state.store.list_all()?).into_response()),
    }
}

fn create<S: EmployeeStore>(state: &EmployeeState<S>, body: &[u8]) -> ApiResult<Employee> {
    let employee: Employee = decode_body(body)?;
    state.store.create(employee.clone())?;
    state.metrics.increment_created();
    Ok(employee)
}

fn update<S: EmployeeStore>(state: &EmployeeState<S>, body: &[u8]) -> ApiResult<Employee> {
    let employee: Employee = decode_body(body)?;
    if !state.store.update(employee.clone())? {
        return Err(ApiError::NotFound);
    }
    state.metrics.increment_updated();
    Ok(employee)
}

fn delete<S: EmployeeStore>(
    state: &EmployeeState<S>,
    query: &HashMap<String, String>,
    body: &[u8],
) -> ApiResult<()> {
    let id = match id_param(query)? {
        Some(id) => id,
        None => decode_body::<DeleteRequest>(body)?.delete_id,
    };

    if !state.store.delete(id)? {
        return Err(ApiError::NotFound);
    }
    state.metrics.increment_deleted();
    Ok(())
}

fn list_page<S: EmployeeStore>(
    state: &EmployeeState<S>,
    query: &HashMap<String, String>,
) -> ApiResult<Response> {
    let params = PageParams::parse(query);
    let employees = state.store.list_paginated(params.offset(), params.limit())?;
    let body = to_pretty_json(&employees)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

// ==================
// Helpers
// ==================

/// The `id` query parameter, if present and non-empty
fn id_param(query: &HashMap<String, String>) -> ApiResult<Option<i64>> {
    match query.get("id").filter(|raw| !raw.is_empty()) {
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ApiError::invalid_id(raw)),
        None => Ok(None),
    }
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(ApiError::invalid_body)
}

/// Serialize with 4-space indentation
fn to_pretty_json<T: Serialize>(value: &T) -> ApiResult<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));

    value
        .serialize(&mut serializer)
        .map_err(|e| ApiError::Internal(format!("Failed to format response: {}", e)))?;

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_id_param() {
        assert_eq!(id_param(&query(&[])).unwrap(), None);
        assert_eq!(id_param(&query(&[("id", "")])).unwrap(), None);
        assert_eq!(id_param(&query(&[("id", "42")])).unwrap(), Some(42));
        assert!(matches!(
            id_param(&query(&[("id", "4x")])),
            Err(ApiError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_decode_delete_request() {
        let request: DeleteRequest = decode_body(br#"{"delete_id": 5}"#).unwrap();
        assert_eq!(request.delete_id, 5);

        let err = decode_body::<DeleteRequest>(b"not json").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_pretty_json_uses_four_spaces() {
        let employees = vec![Employee::new(1, "A", "Eng", 1000.0)];
        let body = String::from_utf8(to_pretty_json(&employees).unwrap()).unwrap();

        assert!(body.starts_with("[\n    {\n        \"id\": 1,"));
    }

    #[test]
    fn test_pretty_json_empty_is_array() {
        let employees: Vec<Employee> = Vec::new();
        assert_eq!(to_pretty_json(&employees).unwrap(), b"[]");
    }
}
