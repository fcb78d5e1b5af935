//! Initial field state derivation.
//!
//! Pure, invoked once at form construction: derives the starting
//! interaction state and an empty error log for every declared field.

use std::collections::HashMap;

use crate::schema::FormSchema;
use crate::store::FieldInteraction;

/// Derive the initial per-field state and error logs from a schema.
///
/// A field starts `valid` only when it declares no validators at all: a
/// validatable field is invalid until proven otherwise, a validator-free
/// field is vacuously valid. Error logs start empty either way.
pub fn initialize(
    schema: &FormSchema,
) -> (
    HashMap<String, FieldInteraction>,
    HashMap<String, Vec<String>>,
) {
    let mut fields = HashMap::new();
    let mut error_logs = HashMap::new();

    for (name, field) in schema.iter() {
        fields.insert(
            name.to_string(),
            FieldInteraction {
                value: field.initial().to_string(),
                touched: false,
                dirty: false,
                valid: !field.has_rules(),
            },
        );
        error_logs.insert(name.to_string(), Vec::new());
    }

    (fields, error_logs)
}
