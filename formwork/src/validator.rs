//! Validator contracts for form fields.
//!
//! A validator is a pure check over the raw string value of a field. It
//! either passes (`Ok(())`) or fails with its fixed, user-facing message
//! (`Err(msg)`). Failure is data, never an exception: the orchestrator
//! merges failure messages into the field's error log and moves on.
//!
//! Async validators have the same contract but produce their result through
//! a future (e.g. a server-side uniqueness check). They must eventually
//! settle; the core imposes no timeout.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for boxed futures used by async validators.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A synchronous validator: passes or fails with a fixed message.
pub type SyncValidator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// An asynchronous validator: the same contract, settled through a future.
pub type AsyncValidator =
    Arc<dyn Fn(String) -> BoxFuture<'static, Result<(), String>> + Send + Sync>;

/// Build a synchronous validator from a pass/fail predicate and a message.
///
/// # Example
///
/// ```ignore
/// let not_blank = rule(|v| !v.is_empty(), "This field is required");
/// assert!(not_blank("").is_err());
/// ```
pub fn rule<F>(f: F, msg: impl Into<String>) -> SyncValidator
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    let msg = msg.into();
    Arc::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) })
}

/// Build an asynchronous validator from an async pass/fail predicate and a
/// message.
pub fn rule_async<F, Fut>(f: F, msg: impl Into<String>) -> AsyncValidator
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    let msg = msg.into();
    Arc::new(move |v| {
        let fut = f(v);
        let msg = msg.clone();
        Box::pin(async move { if fut.await { Ok(()) } else { Err(msg) } })
    })
}
