//! Registration Form Example
//!
//! A scripted demo of the validation orchestrator:
//! - Five fields with mixed sync/async validators
//! - A simulated server-side username uniqueness check
//! - The two-phase publish: sync errors land immediately, the async
//!   verdict is reconciled once it settles
//!
//! Debug logs go to `registration.log`.

use std::fs::File;
use std::sync::Arc;
use std::time::Duration;

use formwork::prelude::*;
use formwork_validators::{email, required};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

const EXISTING_USERS: &[&str] = &[
    "pixelpioneer",
    "techtraveler",
    "codecrafter",
    "digitaldreamer",
    "bytebuilder",
    "nerdynavigator",
    "geekyguru",
    "circuitsage",
    "binaryboss",
    "techietitan",
];

/// Simulated uniqueness check against the user directory.
fn username_available(msg: impl Into<String>) -> AsyncValidator {
    rule_async(
        |value: String| async move {
            tokio::time::sleep(Duration::from_millis(200)).await;
            !EXISTING_USERS.contains(&value.as_str())
        },
        msg,
    )
}

/// A stand-in for a rendered input control.
struct TextField {
    name: String,
    value: String,
    on_focus: Option<FocusHandler>,
}

impl TextField {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            value: String::new(),
            on_focus: None,
        }
    }

    async fn gain_focus(&self) {
        if let Some(handler) = &self.on_focus {
            handler(self.live_value()).await;
        }
    }
}

impl InputControl for TextField {
    fn field_name(&self) -> &str {
        &self.name
    }

    fn live_value(&self) -> String {
        self.value.clone()
    }

    fn set_focus_handler(&mut self, handler: FocusHandler) {
        self.on_focus = Some(handler);
    }

    fn clear_focus_handler(&mut self) {
        self.on_focus = None;
    }
}

fn print_field(form: &Form, name: &str) {
    let field = form.store().field(name).unwrap();
    let errors = form.store().error_log(name).unwrap();
    println!(
        "  {:<10} value={:?} touched={} dirty={} valid={} errors={:?}",
        name, field.value, field.touched, field.dirty, field.valid, errors
    );
}

#[tokio::main]
async fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("registration.log").expect("create log file"),
    );

    let schema = FormSchema::new()
        .field("fullName", FieldSchema::new("").validator(required()))
        .field("company", FieldSchema::new(""))
        .field(
            "username",
            FieldSchema::new("")
                .validator(required())
                .async_validator(username_available("User with username already exists")),
        )
        .field(
            "email",
            FieldSchema::new("").validator(required()).validator(email()),
        )
        .field("password", FieldSchema::new("").validator(required()));

    let form = Arc::new(Form::new(schema));

    let mut controls: Vec<Box<TextField>> = vec![
        Box::new(TextField::new("fullName")),
        Box::new(TextField::new("company")),
        Box::new(TextField::new("username")),
        Box::new(TextField::new("email")),
        Box::new(TextField::new("password")),
    ];
    formwork::binding::mount(&form, &mut controls);

    println!("-- initial state (form valid: {})", form.store().is_valid());
    for name in ["fullName", "company", "username", "email", "password"] {
        print_field(&form, name);
    }

    // Tab into the username field: the required error shows up at once.
    println!("\n-- focus username");
    controls[2].gain_focus().await;
    print_field(&form, "username");

    // Type a name that is already taken: the sync phase clears the
    // required error, then the uniqueness check lands.
    println!("\n-- change username to \"pixelpioneer\"");
    form.change("username", "pixelpioneer").await.unwrap();
    print_field(&form, "username");

    println!("\n-- change username to \"newuser123\"");
    form.change("username", "newuser123").await.unwrap();
    print_field(&form, "username");

    // Fill out the rest.
    println!("\n-- fill remaining fields");
    form.change("fullName", "Ada Lovelace").await.unwrap();
    form.change("email", "ada@example.com").await.unwrap();
    form.change("password", "hunter2!").await.unwrap();
    for name in ["fullName", "company", "username", "email", "password"] {
        print_field(&form, name);
    }
    println!("\nform valid: {}", form.store().is_valid());

    formwork::binding::unmount(&mut controls);
}
