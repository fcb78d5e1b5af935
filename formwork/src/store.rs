//! Live form state.
//!
//! [`FormStore`] owns the per-field interaction state and error logs. It is
//! mutated only through the orchestrator's update protocol (state touch,
//! then merge); consumers read snapshots and subscribe for change signals.
//!
//! `FormStore` uses `Arc<RwLock>` internally, making it cheap to clone and
//! safe to share across async task boundaries.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, RwLock};

use log::trace;

use crate::notify::{self, Notifier, StoreListener};
use crate::registry;
use crate::schema::FormSchema;

/// Live interaction state for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInteraction {
    /// Current raw input value.
    pub value: String,
    /// The field has received focus at least once. Monotonic.
    pub touched: bool,
    /// The field's value has changed at least once. Monotonic.
    pub dirty: bool,
    /// The most recent completed merge produced zero errors.
    pub valid: bool,
}

#[derive(Debug, Default)]
struct StoreInner {
    fields: HashMap<String, FieldInteraction>,
    error_logs: HashMap<String, Vec<String>>,
}

/// Owned, shareable store of form interaction state.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    inner: Arc<RwLock<StoreInner>>,
    subscribers: Arc<Mutex<Vec<Notifier>>>,
}

impl FormStore {
    /// Build the store from a schema, deriving the initial field states.
    pub fn initialize(schema: &FormSchema) -> Self {
        let (fields, error_logs) = registry::initialize(schema);
        Self {
            inner: Arc::new(RwLock::new(StoreInner { fields, error_logs })),
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    // -------------------------------------------------------------------
    // Read surface
    // -------------------------------------------------------------------

    /// Snapshot of one field's interaction state.
    pub fn field(&self, name: &str) -> Option<FieldInteraction> {
        self.read(|inner| inner.fields.get(name).cloned())
    }

    /// Snapshot of every field's interaction state.
    pub fn fields(&self) -> HashMap<String, FieldInteraction> {
        self.read(|inner| inner.fields.clone())
    }

    /// Snapshot of one field's error log.
    pub fn error_log(&self, name: &str) -> Option<Vec<String>> {
        self.read(|inner| inner.error_logs.get(name).cloned())
    }

    /// Snapshot of every field's error log.
    pub fn error_logs(&self) -> HashMap<String, Vec<String>> {
        self.read(|inner| inner.error_logs.clone())
    }

    /// Aggregate form validity: true iff every field is currently valid.
    ///
    /// A pure projection over the per-field flags, recomputed on every read
    /// rather than cached.
    pub fn is_valid(&self) -> bool {
        self.read(|inner| inner.fields.values().all(|f| f.valid))
    }

    /// Subscribe to change signals. Every mutation wakes the listener.
    pub fn subscribe(&self) -> StoreListener {
        let (notifier, listener) = notify::channel();
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(notifier);
        }
        listener
    }

    // -------------------------------------------------------------------
    // Update protocol (orchestrator only)
    // -------------------------------------------------------------------

    /// Mark a field as having received focus. Monotonic.
    pub(crate) fn touch(&self, name: &str) {
        self.write(|inner| {
            if let Some(field) = inner.fields.get_mut(name) {
                field.touched = true;
            }
        });
    }

    /// Record a value change: updates the value and marks the field dirty.
    pub(crate) fn set_value(&self, name: &str, value: &str) {
        self.write(|inner| {
            if let Some(field) = inner.fields.get_mut(name) {
                field.value = value.to_string();
                field.dirty = true;
            }
        });
    }

    /// Install a candidate error list for one field and recompute validity.
    ///
    /// The candidate is deduplicated by message text (first occurrence
    /// wins), replaces the field's error log wholesale, and sets the
    /// field's `valid` flag. Returns the new flag.
    pub(crate) fn merge(&self, name: &str, candidate: Vec<String>) -> bool {
        let deduped = dedup_messages(candidate);
        let valid = deduped.is_empty();
        trace!("merge for '{}': {} error(s), valid={}", name, deduped.len(), valid);

        self.write(|inner| {
            if let Some(field) = inner.fields.get_mut(name) {
                field.valid = valid;
            }
            if let Some(log) = inner.error_logs.get_mut(name) {
                *log = deduped;
            }
        });
        valid
    }

    // -------------------------------------------------------------------
    // Lock plumbing
    // -------------------------------------------------------------------

    fn read<T>(&self, f: impl FnOnce(&StoreInner) -> T) -> T {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn write(&self, f: impl FnOnce(&mut StoreInner)) {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
        }
        self.wake_subscribers();
    }

    fn wake_subscribers(&self) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.retain(|n| n.is_open());
            for notifier in subs.iter() {
                notifier.signal();
            }
        }
    }
}

/// Deduplicate messages by text, preserving first-occurrence order.
fn dedup_messages(messages: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    messages
        .into_iter()
        .filter(|msg| seen.insert(msg.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let messages = vec![
            "b".to_string(),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            "a".to_string(),
        ];
        assert_eq!(dedup_messages(messages), vec!["b", "a", "c"]);
    }

    #[test]
    fn dedup_of_distinct_list_is_identity() {
        let messages = vec!["a".to_string(), "b".to_string()];
        assert_eq!(dedup_messages(messages), vec!["a", "b"]);
    }
}
