use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn root_is_protected_by_exact_match() {
    assert_eq!(classify("/"), RouteClass::Protected);
}

#[test]
fn resource_sections_are_protected_by_prefix() {
    assert_eq!(classify("/employees"), RouteClass::Protected);
    assert_eq!(classify("/employees/42"), RouteClass::Protected);
    assert_eq!(classify("/leave-requests"), RouteClass::Protected);
    assert_eq!(classify("/companies"), RouteClass::Protected);
    assert_eq!(classify("/departments"), RouteClass::Protected);
    assert_eq!(classify("/positions"), RouteClass::Protected);
}

#[test]
fn login_is_auth_only() {
    assert_eq!(classify("/login"), RouteClass::AuthOnly);
}

#[test]
fn unknown_paths_are_public() {
    assert_eq!(classify("/about"), RouteClass::Public);
    assert_eq!(classify("/health"), RouteClass::Public);
}

// =============================================================
// decide: protected paths
// =============================================================

#[test]
fn protected_without_token_redirects_to_login_with_callback() {
    for path in ["/", "/employees", "/employees/42", "/leave-requests"] {
        assert_eq!(
            decide(path, None, false),
            Decision::Redirect(format!("/login?callbackUrl={path}")),
            "path {path}"
        );
    }
}

#[test]
fn protected_with_token_is_allowed() {
    assert_eq!(decide("/employees", None, true), Decision::Allow);
    assert_eq!(decide("/", None, true), Decision::Allow);
}

// =============================================================
// decide: public paths never redirect
// =============================================================

#[test]
fn public_paths_never_redirect() {
    for token_present in [false, true] {
        assert_eq!(decide("/about", None, token_present), Decision::Allow);
        assert_eq!(
            decide("/about", Some("/employees"), token_present),
            Decision::Allow
        );
    }
}

// =============================================================
// decide: leaving the login page
// =============================================================

#[test]
fn login_with_token_honors_callback() {
    assert_eq!(
        decide("/login", Some("/employees"), true),
        Decision::Redirect("/employees".to_owned())
    );
}

#[test]
fn login_with_token_rejects_login_callback() {
    assert_eq!(
        decide("/login", Some("/login"), true),
        Decision::Redirect("/".to_owned())
    );
}

#[test]
fn login_with_token_and_no_callback_goes_to_root() {
    assert_eq!(
        decide("/login", None, true),
        Decision::Redirect("/".to_owned())
    );
}

#[test]
fn login_with_token_rejects_external_callback() {
    assert_eq!(
        decide("/login", Some("https://evil.test/"), true),
        Decision::Redirect("/".to_owned())
    );
}

#[test]
fn login_without_token_is_allowed() {
    assert_eq!(decide("/login", None, false), Decision::Allow);
}

// =============================================================
// callback_param
// =============================================================

#[test]
fn callback_param_reads_value_with_and_without_question_mark() {
    assert_eq!(
        callback_param("?callbackUrl=/employees"),
        Some("/employees".to_owned())
    );
    assert_eq!(
        callback_param("callbackUrl=/employees"),
        Some("/employees".to_owned())
    );
}

#[test]
fn callback_param_finds_value_among_other_pairs() {
    assert_eq!(
        callback_param("?from=nav&callbackUrl=/departments&x=1"),
        Some("/departments".to_owned())
    );
}

#[test]
fn callback_param_ignores_missing_or_empty_value() {
    assert_eq!(callback_param(""), None);
    assert_eq!(callback_param("?from=nav"), None);
    assert_eq!(callback_param("?callbackUrl="), None);
}
