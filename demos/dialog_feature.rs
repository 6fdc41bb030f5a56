// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dialog feature example with nested objects.
//!
//! This example demonstrates:
//! - Binding a feature whose buttons are nested objects
//! - Fully literal defaults for nested objects that are missing
//! - Reading the same feature as a whole document and field by field
//!
//! To run this example:
//! ```bash
//! cargo run --example dialog_feature
//! ```

use feature_variables::prelude::*;
use std::sync::Arc;

const DIALOG_JSON: &str = r#"{
    "title": "Self Destruct",
    "description": "Are you sure you wish to destroy the ship?",
    "positiveButton": {
        "color": "red",
        "text": "Continue"
    },
    "negativeButton": {
        "text": "No, cancel"
    }
}"#;

#[derive(Debug, Clone, PartialEq)]
struct ButtonConfig {
    text: String,
    color: Color,
}

impl FromVariables for ButtonConfig {
    fn from_variables(variables: &Variables) -> Self {
        Self {
            text: variables
                .localized_text("text")
                .unwrap_or_else(|| "Ok then".to_string()),
            color: variables.color("color").unwrap_or(Color::BLUE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct SelfDestructDialogConfig {
    title: String,
    description: String,
    icon: Option<ResourceId>,
    positive_button: ButtonConfig,
    negative_button: ButtonConfig,
}

impl FromVariables for SelfDestructDialogConfig {
    fn from_variables(variables: &Variables) -> Self {
        Self {
            title: variables
                .localized_text("title")
                .unwrap_or_else(|| "Auto destruct".to_string()),
            description: variables
                .localized_text("description")
                .unwrap_or_else(|| variables.as_text("auto_destruct_description")),
            icon: variables
                .drawable_handle("icon")
                .or_else(|| variables.as_drawable("ic_auto_destruct")),
            positive_button: variables
                .bind_child("positiveButton")
                .unwrap_or_else(|| ButtonConfig {
                    text: variables.as_text("auto_destruct_proceed"),
                    color: Color::BLUE,
                }),
            negative_button: variables
                .bind_child("negativeButton")
                .unwrap_or_else(|| ButtonConfig {
                    text: variables.as_text("auto_destruct_cancel"),
                    color: Color::RED,
                }),
        }
    }
}

fn resources() -> Arc<StaticResources> {
    Arc::new(
        StaticResources::new()
            .with_string("auto_destruct_description", "Continue?")
            .with_string("auto_destruct_proceed", "Ok then")
            .with_string("auto_destruct_cancel", "No")
            .with_drawable("ic_auto_destruct"),
    )
}

fn show(config: &SelfDestructDialogConfig) {
    println!("[{}] {}", config.title, config.description);
    println!("  icon:     {:?}", config.icon);
    println!(
        "  positive: {} ({})",
        config.positive_button.text, config.positive_button.color
    );
    println!(
        "  negative: {} ({})",
        config.negative_button.text, config.negative_button.color
    );
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Feature Variables: Dialog Feature ===\n");

    println!("--- Configured dialog ---");
    let client = InMemoryFeatureClient::new().with_feature("self-destruct-dialog", DIALOG_JSON);
    let service = FeatureVariablesService::builder()
        .with_client(Arc::new(client))
        .with_resources(resources())
        .build();
    let config: SelfDestructDialogConfig = service.bind("self-destruct-dialog");
    show(&config);

    println!("\n--- Dialog without buttons ---");
    let client = InMemoryFeatureClient::new()
        .with_feature("self-destruct-dialog", r#"{ "title": "Self Destruct" }"#);
    let service = FeatureVariablesService::builder()
        .with_client(Arc::new(client))
        .with_resources(resources())
        .build();
    let config: SelfDestructDialogConfig = service.bind("self-destruct-dialog");
    show(&config);

    println!("\n--- Whole document and field by field ---");
    for mode in [SourceMode::Json, SourceMode::Remote] {
        let client = InMemoryFeatureClient::new().with_feature("self-destruct-dialog", DIALOG_JSON);
        let service = FeatureVariablesService::builder()
            .with_client(Arc::new(client))
            .with_resources(resources())
            .with_mode(mode)
            .build();
        println!("source mode: {:?}", service.mode());
        let config: SelfDestructDialogConfig = service.bind("self-destruct-dialog");
        show(&config);
    }
}
