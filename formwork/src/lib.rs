//! Per-field validation orchestration for interactive forms.
//!
//! Formwork takes a declarative [`schema::FormSchema`] — field names mapped
//! to initial values and ordered sync/async validators — and tracks each
//! field's interaction state (touched, dirty, valid) through focus and
//! change events. Synchronous results publish immediately; asynchronous
//! results are awaited jointly and reconciled into the same field once all
//! have settled. Aggregate form validity is recomputed after every publish.

pub mod binding;
pub mod notify;
pub mod orchestrator;
pub mod registry;
pub mod schema;
pub mod store;
pub mod validator;

pub use orchestrator::{Form, FormError};

pub mod prelude {
    pub use crate::binding::{FocusHandler, InputControl};
    pub use crate::notify::StoreListener;
    pub use crate::orchestrator::{Form, FormError};
    pub use crate::schema::{FieldSchema, FormSchema};
    pub use crate::store::{FieldInteraction, FormStore};
    pub use crate::validator::{AsyncValidator, BoxFuture, SyncValidator, rule, rule_async};
}
