use super::*;

#[test]
fn credentials_from_fields_trims_email_only() {
    assert_eq!(
        credentials_from_fields("  m@example.com ", " pass "),
        Some(Credentials::new("m@example.com", " pass "))
    );
}

#[test]
fn credentials_from_fields_requires_both_values() {
    assert_eq!(credentials_from_fields("", "x"), None);
    assert_eq!(credentials_from_fields("   ", "x"), None);
    assert_eq!(credentials_from_fields("m@example.com", ""), None);
}
