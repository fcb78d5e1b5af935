//! Built-in validator factories.
//!
//! Each factory returns a [`SyncValidator`] with a default user-facing
//! message; the `*_with` variants take a custom message instead.

use formwork::validator::{SyncValidator, rule};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";
const USERNAME_PATTERN: &str = r"^[-a-zA-Z0-9_]{2,30}$";

/// Fails iff the value is the empty string.
pub fn required() -> SyncValidator {
    required_with("This field is required")
}

/// [`required`] with a custom message.
pub fn required_with(msg: impl Into<String>) -> SyncValidator {
    rule(|v| !v.is_empty(), msg)
}

/// Fails iff the value is not a `local@domain.tld` address.
pub fn email() -> SyncValidator {
    email_with("Email is not valid")
}

/// [`email`] with a custom message.
pub fn email_with(msg: impl Into<String>) -> SyncValidator {
    let re = Regex::new(EMAIL_PATTERN).expect("Invalid regex pattern");
    rule(move |v| re.is_match(v), msg)
}

/// Fails iff the value is not 2-30 characters of letters, digits, hyphen,
/// or underscore.
pub fn username() -> SyncValidator {
    username_with("Username is not valid")
}

/// [`username`] with a custom message.
pub fn username_with(msg: impl Into<String>) -> SyncValidator {
    let re = Regex::new(USERNAME_PATTERN).expect("Invalid regex pattern");
    rule(move |v| re.is_match(v), msg)
}
