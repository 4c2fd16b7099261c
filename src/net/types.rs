//! Shared wire DTOs for the HR backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON payloads so serde
//! round-trips stay lossless. Display concerns (enum labels, full names)
//! live here as direct lookups so pages never branch over raw strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Number of rows requested per page unless a page chooses otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Login form payload sent to the authentication endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Authenticated user snapshot returned by the login and profile endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier assigned by the backend.
    pub id: String,
    /// Login name, unique per account.
    pub username: String,
    /// Human-readable name shown in the header.
    pub display_name: String,
    /// Backend role string (e.g. `"ADMIN"`, `"HR"`); interpreted server-side.
    pub role: String,
}

/// Successful login payload: the session token plus the user it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserProfile,
}

/// Success/data envelope wrapped around auth endpoint responses.
///
/// Failure details are not modeled here; error bodies are kept raw and
/// resolved to a message by `net::api::resolve_error_message`.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
}

/// Sort order accepted by every listing endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// Wire spelling used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    /// The opposite order, used when a sorted column header is clicked again.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Query parameters for paginated listing endpoints.
///
/// Mutated only through `state::paged::PagedState`; pages never touch the
/// fields directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageParams {
    /// 1-based page index.
    pub page: u32,
    /// Rows per page, always positive.
    pub size: u32,
    /// Field name the listing is ordered by.
    pub sort: String,
    pub direction: SortDirection,
    /// Free-text filter; `None` means no `search` key in the query.
    pub search: Option<String>,
}

impl PageParams {
    /// First page, default size, ascending order on `field`, no filter.
    pub fn sorted_by(field: &str) -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
            sort: field.to_owned(),
            direction: SortDirection::default(),
            search: None,
        }
    }

    /// Direction a header click on `field` should request next: toggled when
    /// the listing is already sorted by `field`, ascending otherwise.
    pub fn next_direction_for(&self, field: &str) -> SortDirection {
        if self.sort == field {
            self.direction.toggled()
        } else {
            SortDirection::Asc
        }
    }

    /// Key/value pairs in wire order, dropping the unset `search` key.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sort", self.sort.clone()),
            ("direction", self.direction.as_str().to_owned()),
        ];
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        pairs
    }

    /// Full query string starting with `?`, values percent-encoded.
    pub fn query_string(&self) -> String {
        let encoded: Vec<String> = self
            .query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{key}={}", super::api::encode_query_component(&value)))
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

/// One page of a larger collection plus the metadata to navigate it.
///
/// Invariants maintained by the backend: `items.len() <= limit` and
/// `total_pages == ceil(total / limit)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// A company record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// A department within a company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: String,
    pub name: String,
    pub company_name: String,
}

/// A job position within a department.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub title: String,
    pub department_name: String,
}

/// Employment status of an employee record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    OnLeave,
    Terminated,
}

impl EmployeeStatus {
    /// Table cell label for the variant.
    pub fn label(self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On leave",
            EmployeeStatus::Terminated => "Terminated",
        }
    }
}

/// An employee record as listed on the employees page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Denormalized department name for display.
    pub department_name: String,
    /// Denormalized position title for display.
    pub position_title: String,
    /// ISO `YYYY-MM-DD` date string; rendered verbatim.
    pub hire_date: String,
    pub status: EmployeeStatus,
}

impl Employee {
    /// First and last name joined for table rendering.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload for creating an employee from the create dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Category of a leave request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveKind {
    Annual,
    Sick,
    Unpaid,
    Parental,
}

impl LeaveKind {
    pub fn label(self) -> &'static str {
        match self {
            LeaveKind::Annual => "Annual",
            LeaveKind::Sick => "Sick",
            LeaveKind::Unpaid => "Unpaid",
            LeaveKind::Parental => "Parental",
        }
    }
}

/// Review state of a leave request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    /// CSS modifier suffix for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "badge--pending",
            LeaveStatus::Approved => "badge--approved",
            LeaveStatus::Rejected => "badge--rejected",
        }
    }
}

/// A leave request as listed on the leave-requests page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: String,
    /// Denormalized employee name for display.
    pub employee_name: String,
    pub kind: LeaveKind,
    /// ISO `YYYY-MM-DD` date string; rendered verbatim.
    pub start_date: String,
    /// ISO `YYYY-MM-DD` date string; rendered verbatim.
    pub end_date: String,
    pub status: LeaveStatus,
    pub reason: Option<String>,
}
