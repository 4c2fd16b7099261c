use super::*;

fn sample_user() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        username: "alice".to_owned(),
        display_name: "Alice Park".to_owned(),
        role: "HR".to_owned(),
    }
}

// =============================================================
// PageParams
// =============================================================

#[test]
fn sorted_by_starts_on_first_page_without_filter() {
    let params = PageParams::sorted_by("lastName");
    assert_eq!(params.page, 1);
    assert_eq!(params.size, DEFAULT_PAGE_SIZE);
    assert_eq!(params.sort, "lastName");
    assert_eq!(params.direction, SortDirection::Asc);
    assert!(params.search.is_none());
}

#[test]
fn query_pairs_drop_unset_search() {
    let params = PageParams::sorted_by("name");
    let keys: Vec<&str> = params.query_pairs().into_iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["page", "size", "sort", "direction"]);
}

#[test]
fn query_pairs_include_set_search() {
    let mut params = PageParams::sorted_by("name");
    params.search = Some("ops".to_owned());
    let pairs = params.query_pairs();
    assert_eq!(pairs.last(), Some(&("search", "ops".to_owned())));
}

#[test]
fn query_string_percent_encodes_values() {
    let mut params = PageParams::sorted_by("lastName");
    params.search = Some("a b".to_owned());
    assert_eq!(
        params.query_string(),
        "?page=1&size=10&sort=lastName&direction=ASC&search=a%20b"
    );
}

#[test]
fn next_direction_toggles_only_the_active_column() {
    let mut params = PageParams::sorted_by("lastName");
    assert_eq!(params.next_direction_for("lastName"), SortDirection::Desc);
    assert_eq!(params.next_direction_for("hireDate"), SortDirection::Asc);

    params.direction = SortDirection::Desc;
    assert_eq!(params.next_direction_for("lastName"), SortDirection::Asc);
}

// =============================================================
// SortDirection
// =============================================================

#[test]
fn sort_direction_wire_spelling() {
    assert_eq!(SortDirection::Asc.as_str(), "ASC");
    assert_eq!(SortDirection::Desc.as_str(), "DESC");
}

#[test]
fn sort_direction_toggles_round_trip() {
    assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    assert_eq!(SortDirection::Asc.toggled().toggled(), SortDirection::Asc);
}

// =============================================================
// Wire decoding
// =============================================================

#[test]
fn paged_response_decodes_camel_case_metadata() {
    let body = r#"{
        "items": [{"id":"c-1","name":"Acme","address":null,"phone":"555-0101"}],
        "total": 41,
        "page": 2,
        "limit": 10,
        "totalPages": 5
    }"#;
    let page: Paged<Company> = serde_json::from_str(body).expect("paged company json");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Acme");
    assert!(page.items[0].address.is_none());
    assert_eq!(page.total, 41);
    assert_eq!(page.total_pages, 5);
}

#[test]
fn employee_decodes_camel_case_fields_and_status() {
    let body = r#"{
        "id": "e-7",
        "firstName": "Alice",
        "lastName": "Park",
        "email": "alice@acme.test",
        "departmentName": "Engineering",
        "positionTitle": "Developer",
        "hireDate": "2021-04-12",
        "status": "ON_LEAVE"
    }"#;
    let employee: Employee = serde_json::from_str(body).expect("employee json");
    assert_eq!(employee.full_name(), "Alice Park");
    assert_eq!(employee.status, EmployeeStatus::OnLeave);
}

#[test]
fn login_envelope_decodes_success_payload() {
    let body = r#"{
        "success": true,
        "data": {
            "token": "tok-123",
            "user": {"id":"u-1","username":"alice","displayName":"Alice Park","role":"HR"}
        }
    }"#;
    let envelope: ApiEnvelope<LoginData> = serde_json::from_str(body).expect("login envelope");
    assert!(envelope.success);
    let data = envelope.data.expect("login data");
    assert_eq!(data.token, "tok-123");
    assert_eq!(data.user, sample_user());
}

#[test]
fn login_envelope_defaults_success_to_false() {
    let envelope: ApiEnvelope<LoginData> =
        serde_json::from_str(r#"{"error":"Invalid credentials"}"#).expect("failure envelope");
    assert!(!envelope.success);
    assert!(envelope.data.is_none());
}

#[test]
fn leave_request_decodes_kind_and_status() {
    let body = r#"{
        "id": "l-3",
        "employeeName": "Alice Park",
        "kind": "SICK",
        "startDate": "2024-02-01",
        "endDate": "2024-02-05",
        "status": "PENDING",
        "reason": null
    }"#;
    let request: LeaveRequest = serde_json::from_str(body).expect("leave request json");
    assert_eq!(request.kind, LeaveKind::Sick);
    assert_eq!(request.status, LeaveStatus::Pending);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn employee_status_labels() {
    assert_eq!(EmployeeStatus::Active.label(), "Active");
    assert_eq!(EmployeeStatus::OnLeave.label(), "On leave");
    assert_eq!(EmployeeStatus::Terminated.label(), "Terminated");
}

#[test]
fn leave_kind_labels() {
    assert_eq!(LeaveKind::Annual.label(), "Annual");
    assert_eq!(LeaveKind::Sick.label(), "Sick");
    assert_eq!(LeaveKind::Unpaid.label(), "Unpaid");
    assert_eq!(LeaveKind::Parental.label(), "Parental");
}

#[test]
fn leave_status_labels_and_badges() {
    assert_eq!(LeaveStatus::Approved.label(), "Approved");
    assert_eq!(LeaveStatus::Rejected.badge_class(), "badge--rejected");
    assert_eq!(LeaveStatus::Pending.badge_class(), "badge--pending");
}
