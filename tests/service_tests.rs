// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the feature lookup entry point.

mod common;

use common::{ButtonConfig, EagerButtonFeature, SelfDestructDialogConfig, BUTTON_JSON, DIALOG_JSON};
use feature_variables::prelude::*;
use std::sync::Arc;

fn client() -> InMemoryFeatureClient {
    InMemoryFeatureClient::new()
        .with_feature("button-feature", BUTTON_JSON)
        .with_feature("self-destruct-dialog", DIALOG_JSON)
        .with_feature("broken", "{ \"title\": ")
}

fn service(mode: SourceMode) -> FeatureVariablesService {
    FeatureVariablesService::builder()
        .with_client(Arc::new(client()))
        .with_resources(Arc::new(
            StaticResources::new().with_string("treatment_button_label", "Try it"),
        ))
        .with_mode(mode)
        .build()
}

#[test]
fn test_bind_through_service() {
    for mode in [SourceMode::Json, SourceMode::Remote] {
        let button: EagerButtonFeature = service(mode).bind("button-feature");
        assert_eq!(button.button_color, Color::RED, "{:?}", mode);
        assert_eq!(button.button_text, "Try it", "{:?}", mode);
    }
}

#[test]
fn test_json_and_remote_modes_agree() {
    let json: SelfDestructDialogConfig = service(SourceMode::Json).bind("self-destruct-dialog");
    let remote: SelfDestructDialogConfig = service(SourceMode::Remote).bind("self-destruct-dialog");
    assert_eq!(json, remote);
    assert_eq!(json.positive_button, ButtonConfig::new("Continue", Color::RED));
}

#[test]
fn test_malformed_document_resolves_to_defaults() {
    let service = service(SourceMode::Json);
    assert_eq!(service.variables("broken").source_name(), "null");

    let dialog: SelfDestructDialogConfig = service.bind("broken");
    assert_eq!(dialog.title, "Auto destruct");
    assert_eq!(dialog.negative_button, ButtonConfig::new("No", Color::RED));
}

#[test]
fn test_malformed_document_in_remote_mode_resolves_to_defaults() {
    let service = service(SourceMode::Remote);
    let dialog: SelfDestructDialogConfig = service.bind("broken");
    assert_eq!(dialog.title, "Auto destruct");
}

#[test]
fn test_unknown_feature_resolves_to_defaults() {
    let button: EagerButtonFeature = service(SourceMode::Json).bind("unknown");
    assert_eq!(button.button_color, Color::BLUE);
    assert_eq!(button.button_text, "Okay then");
}

#[test]
fn test_service_without_client() {
    let service = FeatureVariablesService::default();
    let button: EagerButtonFeature = service.bind("button-feature");
    assert_eq!(button.button_color, Color::BLUE);
}

#[test]
fn test_auto_mode_uses_features_api_branch() {
    let service = FeatureVariablesService::builder()
        .with_client(Arc::new(client().with_branch("features-api", "json")))
        .build();
    assert_eq!(service.mode(), SourceMode::Json);
    assert_eq!(service.variables("button-feature").source_name(), "document");

    let service = FeatureVariablesService::builder()
        .with_client(Arc::new(client()))
        .build();
    assert_eq!(service.mode(), SourceMode::Remote);
    assert_eq!(service.variables("button-feature").source_name(), "remote");
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_parser_for_whole_documents() {
    let client = InMemoryFeatureClient::new().with_feature("button-feature", "buttonColor: red\n");
    let service = FeatureVariablesService::builder()
        .with_client(Arc::new(client))
        .with_parser(Arc::new(YamlParser::new()))
        .with_mode(SourceMode::Json)
        .build();

    assert_eq!(service.variables("button-feature").color("buttonColor"), Some(Color::RED));
}

#[test]
fn test_variables_with_transform() {
    let service = service(SourceMode::Remote);
    let proceed = service.variables_with("self-destruct-dialog", |v| {
        v.child("positiveButton")
            .and_then(|b| b.localized_text("text"))
            .unwrap_or_else(|| "Okay then".to_string())
    });
    assert_eq!(proceed, "Continue");
}
