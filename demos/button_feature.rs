// SPDX-License-Identifier: MIT OR Apache-2.0

//! Button feature example.
//!
//! This example demonstrates:
//! - Reading a feature's variables with and without a typed wrapper
//! - Binding the same feature eagerly and lazily
//! - Literal-or-resource text: the same document with and without a matching
//!   string resource
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example button_feature
//! ```

use feature_variables::prelude::*;
use std::sync::Arc;

const BUTTON_JSON: &str = r#"{
    "buttonColor": "red",
    "buttonText": "treatment_button_label"
}"#;

/// All fields resolved when the config is built.
#[derive(Debug, Clone, PartialEq)]
struct EagerButtonConfig {
    button_color: Color,
    button_text: String,
}

impl FromVariables for EagerButtonConfig {
    fn from_variables(variables: &Variables) -> Self {
        Self {
            button_color: variables.color("buttonColor").unwrap_or(Color::BLUE),
            button_text: variables
                .localized_text("buttonText")
                .unwrap_or_else(|| "Okay then".to_string()),
        }
    }
}

/// Each field resolved the first time it is read.
struct LazyButtonConfig {
    variables: Variables,
    button_color: LazyField<Color>,
    button_text: LazyField<String>,
}

impl LazyButtonConfig {
    fn button_color(&self) -> Color {
        *self
            .button_color
            .get_or_resolve(|| self.variables.color("buttonColor").unwrap_or(Color::BLUE))
    }

    fn button_text(&self) -> &str {
        self.button_text.get_or_resolve(|| {
            self.variables
                .localized_text("buttonText")
                .unwrap_or_else(|| "Okay then".to_string())
        })
    }
}

impl FromVariables for LazyButtonConfig {
    fn from_variables(variables: &Variables) -> Self {
        Self {
            variables: variables.clone(),
            button_color: LazyField::new(),
            button_text: LazyField::new(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Feature Variables: Button Feature ===\n");

    let client = Arc::new(InMemoryFeatureClient::new().with_feature("button-feature", BUTTON_JSON));

    // Without a typed wrapper, feature code manages keys and defaults itself.
    println!("--- Without a wrapper ---");
    let service = FeatureVariablesService::builder()
        .with_client(client.clone())
        .build();
    let config = service.variables("button-feature");
    let text = config
        .localized_text("buttonText")
        .unwrap_or_else(|| "Ok then".to_string());
    let color = config.color("buttonColor").unwrap_or(Color::BLUE);
    println!("button text:  {}", text);
    println!("button color: {}\n", color);

    // With typed wrappers the keys and defaults live in one place.
    println!("--- Eager and lazy wrappers ---");
    let eager: EagerButtonConfig = service.bind("button-feature");
    let lazy: LazyButtonConfig = service.bind("button-feature");
    println!("eager: {:?}", eager);
    println!(
        "lazy:  button_color={} button_text={:?}",
        lazy.button_color(),
        lazy.button_text()
    );
    assert_eq!(eager.button_color, lazy.button_color());
    assert_eq!(eager.button_text, lazy.button_text());
    println!();

    // The same document, now with a string resource of that name registered.
    println!("--- With a translated resource ---");
    let service = FeatureVariablesService::builder()
        .with_client(client)
        .with_resources(Arc::new(
            StaticResources::new().with_string("treatment_button_label", "Try the new button"),
        ))
        .build();
    let eager: EagerButtonConfig = service.bind("button-feature");
    println!("button text:  {}", eager.button_text);

    // A feature nobody configured still yields a usable config.
    println!("\n--- Unconfigured feature ---");
    let fallback: EagerButtonConfig = service.bind("unknown-feature");
    println!("fallback: {:?}", fallback);
}
