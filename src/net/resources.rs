//! Typed clients for the HR resource endpoints.
//!
//! Each listing call takes the shared [`PageParams`] and returns one
//! [`Paged`] slice; the query string is serialized centrally so every
//! resource follows the same `page/size/sort/direction/search` contract.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use super::api::ApiError;
use super::types::{
    Company, Department, Employee, LeaveRequest, NewEmployee, Paged, PageParams, Position,
};

#[cfg(any(test, feature = "hydrate"))]
fn list_path(resource: &str, params: &PageParams) -> String {
    format!("/api/{resource}{}", params.query_string())
}

/// `GET /api/companies`.
pub async fn list_companies(params: &PageParams) -> Result<Paged<Company>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json(&list_path("companies", params)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err(ApiError::unavailable())
    }
}

/// `GET /api/departments`.
pub async fn list_departments(params: &PageParams) -> Result<Paged<Department>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json(&list_path("departments", params)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err(ApiError::unavailable())
    }
}

/// `GET /api/positions`.
pub async fn list_positions(params: &PageParams) -> Result<Paged<Position>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json(&list_path("positions", params)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err(ApiError::unavailable())
    }
}

/// `GET /api/employees`.
pub async fn list_employees(params: &PageParams) -> Result<Paged<Employee>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json(&list_path("employees", params)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err(ApiError::unavailable())
    }
}

/// `GET /api/leave-requests`.
pub async fn list_leave_requests(params: &PageParams) -> Result<Paged<LeaveRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get_json(&list_path("leave-requests", params)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
        Err(ApiError::unavailable())
    }
}

/// `POST /api/employees`. Returns the created record.
pub async fn create_employee(payload: &NewEmployee) -> Result<Employee, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post_json("/api/employees", payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::unavailable())
    }
}

/// `DELETE /api/employees/{id}`.
pub async fn delete_employee(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete_empty(&format!("/api/employees/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}
