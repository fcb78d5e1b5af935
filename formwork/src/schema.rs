//! Declarative form schema.
//!
//! A [`FormSchema`] maps field names to [`FieldSchema`] entries: the initial
//! value plus ordered lists of synchronous and asynchronous validators. The
//! schema is supplied once at form construction and is read-only afterwards.

use std::collections::HashMap;
use std::future::Future;

use crate::validator::{self, AsyncValidator, SyncValidator};

/// Per-field validation configuration: initial value plus ordered validator
/// lists. Either list may be empty.
///
/// # Example
///
/// ```ignore
/// let username = FieldSchema::new("")
///     .validator(required())
///     .async_validator(username_available);
/// ```
#[derive(Clone, Default)]
pub struct FieldSchema {
    initial: String,
    sync_rules: Vec<SyncValidator>,
    async_rules: Vec<AsyncValidator>,
}

impl FieldSchema {
    /// Create a schema entry with the given initial value and no validators.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            sync_rules: Vec::new(),
            async_rules: Vec::new(),
        }
    }

    /// Append a synchronous validator. Validators run in append order.
    pub fn validator(mut self, v: SyncValidator) -> Self {
        self.sync_rules.push(v);
        self
    }

    /// Append an asynchronous validator. Dispatch follows append order.
    pub fn async_validator(mut self, v: AsyncValidator) -> Self {
        self.async_rules.push(v);
        self
    }

    /// Append a synchronous rule built from a predicate and a fixed message.
    pub fn rule<F>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validator(validator::rule(f, msg))
    }

    /// Append an asynchronous rule built from an async predicate and a fixed
    /// message.
    pub fn rule_async<F, Fut>(self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.async_validator(validator::rule_async(f, msg))
    }

    /// The initial value for the field.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// The synchronous validators, in declared order.
    pub fn sync_rules(&self) -> &[SyncValidator] {
        &self.sync_rules
    }

    /// The asynchronous validators, in declared order.
    pub fn async_rules(&self) -> &[AsyncValidator] {
        &self.async_rules
    }

    /// Whether the field declares any validator at all.
    pub fn has_rules(&self) -> bool {
        !self.sync_rules.is_empty() || !self.async_rules.is_empty()
    }
}

impl std::fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSchema")
            .field("initial", &self.initial)
            .field("sync_rules", &self.sync_rules.len())
            .field("async_rules", &self.async_rules.len())
            .finish()
    }
}

/// The declarative configuration for a whole form: field name → schema.
#[derive(Clone, Debug, Default)]
pub struct FormSchema {
    fields: HashMap<String, FieldSchema>,
}

impl FormSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Re-declaring a name replaces the previous entry.
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.insert(name.into(), schema);
        self
    }

    /// Look up a field's schema.
    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    /// Whether a field is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterate over declared fields.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldSchema)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
