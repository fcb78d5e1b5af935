//! Event binding layer.
//!
//! A thin relay between rendered input controls and the orchestrator's
//! focus entry point. On mount, every control whose field name appears in
//! the schema gets a focus handler that forwards the control's live value
//! to [`Form::focus`]; on unmount the handlers are cleared. The binding
//! layer holds no validation state of its own.

use std::sync::Arc;

use log::warn;

use crate::orchestrator::Form;
use crate::validator::BoxFuture;

/// Handler installed on a control; invoked with the control's live value.
///
/// Returns the future that drives the orchestrator, so the host event loop
/// decides whether to await it inline or spawn it.
pub type FocusHandler = Arc<dyn Fn(String) -> BoxFuture<'static, ()> + Send + Sync>;

/// A rendered input control the binding layer can attach to.
///
/// Implemented by whatever rendering layer hosts the form; the core only
/// needs a field name, a live value, and a slot for the focus handler.
pub trait InputControl {
    /// The schema field this control renders.
    fn field_name(&self) -> &str;

    /// The control's current live value.
    fn live_value(&self) -> String;

    /// Install the focus handler. Replaces any previous handler.
    fn set_focus_handler(&mut self, handler: FocusHandler);

    /// Remove the installed focus handler.
    fn clear_focus_handler(&mut self);
}

/// Attach focus handlers for every control declared in the form's schema.
///
/// Controls whose field name is not declared are skipped.
pub fn mount<C: InputControl + ?Sized>(form: &Arc<Form>, controls: &mut [Box<C>]) {
    for control in controls.iter_mut() {
        let name = control.field_name().to_string();
        if !form.schema().contains(&name) {
            continue;
        }
        let form = Arc::clone(form);
        control.set_focus_handler(Arc::new(move |value: String| {
            let form = Arc::clone(&form);
            let name = name.clone();
            Box::pin(async move {
                if let Err(err) = form.focus(&name, &value).await {
                    warn!("focus relay failed: {}", err);
                }
            })
        }));
    }
}

/// Detach the focus handlers installed by [`mount`].
pub fn unmount<C: InputControl + ?Sized>(controls: &mut [Box<C>]) {
    for control in controls.iter_mut() {
        control.clear_focus_handler();
    }
}
