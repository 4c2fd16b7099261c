use super::*;

// =============================================================
// validate_login_input
// =============================================================

#[test]
fn validate_trims_username() {
    let credentials = validate_login_input("  alice  ", "hunter2").expect("valid input");
    assert_eq!(credentials.username, "alice");
    assert_eq!(credentials.password, "hunter2");
}

#[test]
fn validate_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "hunter2"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("   ", "hunter2"),
        Err("Enter both username and password.")
    );
    assert_eq!(
        validate_login_input("alice", ""),
        Err("Enter both username and password.")
    );
}

#[test]
fn validate_keeps_password_verbatim() {
    let credentials = validate_login_input("alice", "  spaces kept  ").expect("valid input");
    assert_eq!(credentials.password, "  spaces kept  ");
}

// =============================================================
// post_login_destination
// =============================================================

#[test]
fn destination_honors_callback_param() {
    assert_eq!(
        post_login_destination("?callbackUrl=/employees"),
        "/employees"
    );
}

#[test]
fn destination_defaults_to_root() {
    assert_eq!(post_login_destination(""), "/");
    assert_eq!(post_login_destination("?from=nav"), "/");
}

#[test]
fn destination_rejects_login_loop() {
    assert_eq!(post_login_destination("?callbackUrl=/login"), "/");
}
