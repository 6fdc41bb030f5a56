// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, defaulted access to feature configuration.
//!
//! An experimentation system hands each feature of an application a small document
//! of variables: colors, text, flags, nested objects. This crate resolves those
//! documents into application values. Every lookup is optional, so feature code
//! always supplies its own default and keeps working when no configuration exists.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`FeatureId`, `Document`, `Color`, `ResourceId`, errors)
//! - **Ports**: Trait definitions (`ValueSource`, `FeatureClient`, `ResourceResolver`,
//!   `DocumentParser`)
//! - **Adapters**: The three value sources (document, remote, null), parsers, and
//!   bundled clients and resource tables
//! - **Service**: The typed resolver (`Variables`), binding support and the feature
//!   lookup entry point (`FeatureVariablesService`)
//!
//! # Failure model
//!
//! Missing keys, values of the wrong type, unparsable colors and unknown resource
//! names all resolve to `None`. A malformed document or a failing client makes the
//! whole feature resolve to the null source. Feature lookup itself never fails.
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML feature documents (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use feature_variables::prelude::*;
//! use std::sync::Arc;
//!
//! let client = InMemoryFeatureClient::new().with_feature(
//!     "self-destruct-dialog",
//!     r#"{ "title": "Self Destruct", "positiveButton": { "text": "Continue" } }"#,
//! );
//! let service = FeatureVariablesService::builder()
//!     .with_client(Arc::new(client))
//!     .build();
//!
//! let config = service.variables("self-destruct-dialog");
//! let title = config.localized_text("title").unwrap_or_else(|| "Auto destruct".to_string());
//! let proceed = config
//!     .child("positiveButton")
//!     .and_then(|button| button.localized_text("text"))
//!     .unwrap_or_else(|| "Okay then".to_string());
//!
//! assert_eq!(title, "Self Destruct");
//! assert_eq!(proceed, "Continue");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        Color, Document, FeatureId, ResourceId, ResourceKind, Result, Value, VariablesError,
    };
    pub use crate::ports::{DocumentParser, FeatureClient, ResourceResolver, ValueSource};
    pub use crate::service::{
        FeatureVariablesService, FromVariables, LazyField, SourceMode, Variables,
    };

    pub use crate::adapters::{
        DocumentSource, InMemoryFeatureClient, JsonParser, NullSource, RemoteSource,
        StaticResources,
    };
    // Re-export adapters based on feature flags
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
