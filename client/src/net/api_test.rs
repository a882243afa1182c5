use super::*;

// =============================================================
// AuthError::from_message
// =============================================================

#[test]
fn from_message_detects_unique_constraint_marker() {
    let raw = "\nInvalid `prisma.user.create()` invocation:\n\nUnique constraint failed on the fields: (`email`)";
    assert_eq!(AuthError::from_message(raw), AuthError::DuplicateEmail(raw.to_owned()));
}

#[test]
fn from_message_other_text_is_rejected() {
    assert_eq!(
        AuthError::from_message("Invalid email or password"),
        AuthError::Rejected("Invalid email or password".to_owned())
    );
}

#[test]
fn auth_error_displays_raw_message() {
    assert_eq!(AuthError::Rejected("nope".to_owned()).to_string(), "nope");
    assert_eq!(AuthError::DuplicateEmail("taken".to_owned()).to_string(), "taken");
    assert_eq!(AuthError::Unavailable.to_string(), "not available on server");
}

// =============================================================
// decode_failure
// =============================================================

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("login", 401), "login failed: 401");
}

#[test]
fn decode_failure_uses_structured_code() {
    let body = r#"{"code":"duplicate_email","message":"Email taken"}"#;
    assert_eq!(
        decode_failure("signup", 409, body),
        AuthError::DuplicateEmail("Email taken".to_owned())
    );
}

#[test]
fn decode_failure_falls_back_to_marker_in_message() {
    let body = r#"{"message":"Unique constraint failed on the fields: (`email`)"}"#;
    assert!(matches!(decode_failure("signup", 500, body), AuthError::DuplicateEmail(_)));
}

#[test]
fn decode_failure_unknown_code_keeps_message() {
    let body = r#"{"code":"bad_credentials","message":"Invalid password"}"#;
    assert_eq!(
        decode_failure("login", 401, body),
        AuthError::Rejected("Invalid password".to_owned())
    );
}

#[test]
fn decode_failure_without_body_reports_status() {
    assert_eq!(
        decode_failure("logout", 502, "<html>Bad Gateway</html>"),
        AuthError::Rejected("logout failed: 502".to_owned())
    );
    assert_eq!(
        decode_failure("login", 500, r#"{"message":"   "}"#),
        AuthError::Rejected("login failed: 500".to_owned())
    );
}

// =============================================================
// HttpAuthService outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_service_is_unavailable_without_browser() {
    let service = HttpAuthService;
    let creds = Credentials::new("m@example.com", "x");
    assert_eq!(futures::executor::block_on(service.login(creds.clone())), Err(AuthError::Unavailable));
    assert_eq!(futures::executor::block_on(service.signup(creds)), Err(AuthError::Unavailable));
    assert_eq!(futures::executor::block_on(service.logout()), Err(AuthError::Unavailable));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("m@example.com", "hunter2");
    let debug = format!("{creds:?}");
    assert!(debug.contains("m@example.com"));
    assert!(!debug.contains("hunter2"));
}
