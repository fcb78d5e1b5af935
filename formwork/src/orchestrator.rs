//! The validation orchestrator.
//!
//! [`Form`] ties a [`FormSchema`] to a [`FormStore`] and decides, for every
//! field-level event, which validators run and how their results land in
//! the store. Both entry points execute the same three-phase protocol:
//!
//! 1. State touch: mark `touched` (focus) or write the value and mark
//!    `dirty` (change). Both flags are monotonic.
//! 2. Synchronous phase: run the field's sync validators in declared order,
//!    merge the failures immediately so cheap checks reflect in the same
//!    step.
//! 3. Asynchronous phase: dispatch all async validators and await them
//!    jointly (a barrier, not a race). If any failed, republish the
//!    combined list; otherwise the synchronous result stands.
//!
//! Once dispatched, async validators always run to completion and always
//! attempt to merge: there is no cancellation and no generation guard, so a
//! slow run triggered by an older event can overwrite a newer
//! synchronous-only result. The store accepts whichever merge lands last.

use futures::future::join_all;
use log::debug;
use thiserror::Error;

use crate::schema::{FieldSchema, FormSchema};
use crate::store::FormStore;

/// Error type for orchestrator entry points.
///
/// Validation failures are not errors; they are data merged into the error
/// log. The orchestrator itself fails only when an event names a field the
/// schema never declared.
#[derive(Debug, Clone, Error)]
pub enum FormError {
    /// The event named a field that is not in the schema.
    #[error("field not declared in form schema: {0}")]
    UnknownField(String),
}

/// Which entry point triggered a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    Focus,
    Change,
}

/// A live form instance: immutable schema plus the mutable state store.
#[derive(Clone)]
pub struct Form {
    schema: FormSchema,
    store: FormStore,
}

impl Form {
    /// Construct a form from its schema, deriving the initial field states.
    pub fn new(schema: FormSchema) -> Self {
        let store = FormStore::initialize(&schema);
        Self { schema, store }
    }

    /// The live state store. Consumers read snapshots and subscribe here.
    pub fn store(&self) -> &FormStore {
        &self.store
    }

    /// The schema this form was built from.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Focus entry point: the field gained input focus.
    ///
    /// Marks the field touched and validates `value` (the control's live
    /// value; the stored value is not overwritten by focus).
    pub async fn focus(&self, field: &str, value: &str) -> Result<(), FormError> {
        self.run(field, value, Trigger::Focus).await
    }

    /// Change entry point: the field's value mutated.
    ///
    /// Writes the new value, marks the field dirty, and validates.
    pub async fn change(&self, field: &str, value: &str) -> Result<(), FormError> {
        self.run(field, value, Trigger::Change).await
    }

    async fn run(&self, field: &str, value: &str, trigger: Trigger) -> Result<(), FormError> {
        let schema = self
            .schema
            .get(field)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;

        // Phase 1: state touch.
        match trigger {
            Trigger::Focus => self.store.touch(field),
            Trigger::Change => self.store.set_value(field, value),
        }

        // Phase 2: synchronous validators, merged immediately.
        let sync_failures = run_sync(schema, value);
        let valid = self.store.merge(field, sync_failures.clone());
        debug!(
            "{:?} on '{}': sync phase valid={}, form valid={}",
            trigger,
            field,
            valid,
            self.store.is_valid()
        );

        // Phase 3: async validators, awaited jointly, merged once settled.
        if schema.async_rules().is_empty() {
            return Ok(());
        }
        let async_failures = run_async(schema, value).await;
        if !async_failures.is_empty() {
            let mut combined = async_failures;
            combined.extend(sync_failures);
            let valid = self.store.merge(field, combined);
            debug!(
                "{:?} on '{}': async phase valid={}, form valid={}",
                trigger,
                field,
                valid,
                self.store.is_valid()
            );
        }

        Ok(())
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("schema", &self.schema)
            .field("store", &self.store)
            .finish()
    }
}

/// Run the sync validators in declared order, collecting failure messages.
fn run_sync(schema: &FieldSchema, value: &str) -> Vec<String> {
    let mut failures = Vec::new();
    for rule in schema.sync_rules() {
        if let Err(msg) = rule(value) {
            failures.push(msg);
        }
    }
    failures
}

/// Dispatch all async validators in declared order and await them jointly.
///
/// Failure messages come back in declared order regardless of which future
/// settles first.
async fn run_async(schema: &FieldSchema, value: &str) -> Vec<String> {
    let futures: Vec<_> = schema
        .async_rules()
        .iter()
        .map(|rule| rule(value.to_string()))
        .collect();

    join_all(futures)
        .await
        .into_iter()
        .filter_map(|result| result.err())
        .collect()
}
