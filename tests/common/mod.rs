// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.
//!
//! These are the kinds of config types an application writes (or generates) on top
//! of `Variables`: a flat button feature bound eagerly and lazily, and a dialog with
//! nested button objects.

#![allow(dead_code)]

use feature_variables::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const BUTTON_JSON: &str = r#"{
    "buttonColor": "red",
    "buttonText": "treatment_button_label"
}"#;

pub const DIALOG_JSON: &str = r#"{
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

pub fn variables(json: &str) -> Variables {
    Variables::from_document(Document::from_json_str(json).unwrap())
}

/// The button feature, resolved entirely at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct EagerButtonFeature {
    pub button_color: Color,
    pub button_text: String,
}

impl FromVariables for EagerButtonFeature {
    fn from_variables(variables: &Variables) -> Self {
        Self {
            button_color: variables.color("buttonColor").unwrap_or(Color::BLUE),
            button_text: variables
                .localized_text("buttonText")
                .unwrap_or_else(|| "Okay then".to_string()),
        }
    }
}

/// The same button feature, resolving each field on first read.
#[derive(Debug)]
pub struct LazyButtonFeature {
    variables: Variables,
    button_color: LazyField<Color>,
    button_text: LazyField<String>,
}

impl LazyButtonFeature {
    pub fn button_color(&self) -> Color {
        *self.button_color.get_or_resolve(|| {
            self.variables.color("buttonColor").unwrap_or(Color::BLUE)
        })
    }

    pub fn button_text(&self) -> &str {
        self.button_text.get_or_resolve(|| {
            self.variables
                .localized_text("buttonText")
                .unwrap_or_else(|| "Okay then".to_string())
        })
    }

    pub fn resolved_fields(&self) -> usize {
        usize::from(self.button_color.is_resolved()) + usize::from(self.button_text.is_resolved())
    }
}

impl FromVariables for LazyButtonFeature {
    fn from_variables(variables: &Variables) -> Self {
        Self {
            variables: variables.clone(),
            button_color: LazyField::new(),
            button_text: LazyField::new(),
        }
    }
}

/// A reusable button config, nested inside other features.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    pub text: String,
    pub color: Color,
}

impl ButtonConfig {
    pub fn new(text: &str, color: Color) -> Self {
        Self {
            text: text.to_string(),
            color,
        }
    }
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

/// A dialog with two nested buttons, resolved eagerly.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfDestructDialogConfig {
    pub title: String,
    pub description: String,
    pub icon: Option<ResourceId>,
    pub positive_button: ButtonConfig,
    pub negative_button: ButtonConfig,
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
                .unwrap_or_else(|| ButtonConfig::new("Ok then", Color::BLUE)),
            negative_button: variables
                .bind_child("negativeButton")
                .unwrap_or_else(|| ButtonConfig::new("No", Color::RED)),
        }
    }
}

/// The same dialog, resolved lazily. Nested buttons are bound on first read.
#[derive(Debug)]
pub struct LazyDialogConfig {
    variables: Variables,
    title: LazyField<String>,
    positive_button: LazyField<ButtonConfig>,
    negative_button: LazyField<ButtonConfig>,
}

impl LazyDialogConfig {
    pub fn title(&self) -> &str {
        self.title.get_or_resolve(|| {
            self.variables
                .localized_text("title")
                .unwrap_or_else(|| "Auto destruct".to_string())
        })
    }

    pub fn positive_button(&self) -> &ButtonConfig {
        self.positive_button.get_or_resolve(|| {
            self.variables
                .bind_child("positiveButton")
                .unwrap_or_else(|| ButtonConfig::new("Ok then", Color::BLUE))
        })
    }

    pub fn negative_button(&self) -> &ButtonConfig {
        self.negative_button.get_or_resolve(|| {
            self.variables
                .bind_child("negativeButton")
                .unwrap_or_else(|| ButtonConfig::new("No", Color::RED))
        })
    }
}

impl FromVariables for LazyDialogConfig {
    fn from_variables(variables: &Variables) -> Self {
        Self {
            variables: variables.clone(),
            title: LazyField::new(),
            positive_button: LazyField::new(),
            negative_button: LazyField::new(),
        }
    }
}

/// A value source that counts the lookups made against it.
pub struct CountingSource {
    inner: Arc<dyn ValueSource>,
    lookups: Arc<AtomicUsize>,
}

impl CountingSource {
    pub fn new(inner: Arc<dyn ValueSource>) -> (Self, Arc<AtomicUsize>) {
        let lookups = Arc::new(AtomicUsize::new(0));
        let source = Self {
            inner,
            lookups: Arc::clone(&lookups),
        };
        (source, lookups)
    }

    fn count(&self) {
        self.lookups.fetch_add(1, Ordering::SeqCst);
    }
}

impl ValueSource for CountingSource {
    fn name(&self) -> &str {
        "counting"
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.count();
        self.inner.get_string(key)
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.count();
        self.inner.get_int(key)
    }

    fn get_bool(&self, key: &str) -> Option<bool> {
        self.count();
        self.inner.get_bool(key)
    }

    fn get_child(&self, key: &str) -> Option<Arc<dyn ValueSource>> {
        self.count();
        self.inner.get_child(key)
    }
}
