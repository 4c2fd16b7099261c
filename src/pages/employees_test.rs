use super::*;

#[test]
fn sort_indicator_marks_only_the_active_column() {
    let mut params = PageParams::sorted_by("lastName");
    assert_eq!(sort_indicator(&params, "lastName"), " \u{25b2}");
    assert_eq!(sort_indicator(&params, "hireDate"), "");

    params.direction = SortDirection::Desc;
    assert_eq!(sort_indicator(&params, "lastName"), " \u{25bc}");
}

#[test]
fn validate_new_employee_trims_fields() {
    let payload =
        validate_new_employee(" Alice ", " Park ", " alice@acme.test ").expect("valid input");
    assert_eq!(payload.first_name, "Alice");
    assert_eq!(payload.last_name, "Park");
    assert_eq!(payload.email, "alice@acme.test");
}

#[test]
fn validate_new_employee_requires_every_field() {
    assert!(validate_new_employee("", "Park", "a@b.test").is_err());
    assert!(validate_new_employee("Alice", "  ", "a@b.test").is_err());
    assert!(validate_new_employee("Alice", "Park", "").is_err());
}
