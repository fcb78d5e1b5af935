//! Tests for the built-in validator factories.

use formwork::prelude::*;
use formwork_validators::{email, email_with, required, required_with, username, username_with};

// ============================================================================
// required
// ============================================================================

#[test]
fn required_fails_only_on_the_empty_string() {
    let v = required();
    assert_eq!(v(""), Err("This field is required".to_string()));
    assert_eq!(v("x"), Ok(()));
    // Whitespace is a value; required does not trim.
    assert_eq!(v(" "), Ok(()));
}

#[test]
fn required_with_custom_message() {
    let v = required_with("Name is required");
    assert_eq!(v(""), Err("Name is required".to_string()));
}

// ============================================================================
// email
// ============================================================================

#[test]
fn email_accepts_local_at_domain_tld() {
    let v = email();
    assert_eq!(v("user@example.com"), Ok(()));
    assert_eq!(v("first.last+tag@sub.example.co"), Ok(()));
}

#[test]
fn email_rejects_malformed_addresses() {
    let v = email();
    for bad in ["", "not-an-email", "user@", "@example.com", "a@b", "user@domain.c"] {
        assert_eq!(v(bad), Err("Email is not valid".to_string()), "case: {:?}", bad);
    }
}

#[test]
fn email_with_custom_message() {
    let v = email_with("Check your email");
    assert_eq!(v("nope"), Err("Check your email".to_string()));
}

// ============================================================================
// username
// ============================================================================

#[test]
fn username_accepts_two_to_thirty_word_characters() {
    let v = username();
    assert_eq!(v("ab"), Ok(()));
    assert_eq!(v("new-user_123"), Ok(()));
    assert_eq!(v(&"a".repeat(30)), Ok(()));
}

#[test]
fn username_rejects_out_of_range_or_bad_characters() {
    let v = username();
    for bad in ["", "a", "has space", "usér", "dot.ted"] {
        assert_eq!(v(bad), Err("Username is not valid".to_string()), "case: {:?}", bad);
    }
    assert_eq!(v(&"a".repeat(31)), Err("Username is not valid".to_string()));
}

#[test]
fn username_with_custom_message() {
    let v = username_with("Pick a better handle");
    assert_eq!(v("!"), Err("Pick a better handle".to_string()));
}

// ============================================================================
// Factories in a form
// ============================================================================

#[tokio::test]
async fn factories_compose_in_declared_order() {
    let form = Form::new(FormSchema::new().field(
        "email",
        FieldSchema::new("").validator(required()).validator(email()),
    ));

    form.change("email", "").await.unwrap();
    assert_eq!(
        form.store().error_log("email").unwrap(),
        vec!["This field is required", "Email is not valid"]
    );

    form.change("email", "ada@example.com").await.unwrap();
    assert!(form.store().is_valid());
}
