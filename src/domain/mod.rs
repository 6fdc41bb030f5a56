// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the fundamental concepts of the crate: feature identifiers,
//! the configuration document tree, colors, resource handles and errors. It does not
//! depend on any port or adapter.

pub mod color;
pub mod document;
pub mod errors;
pub mod feature_id;
pub mod resource;

// Re-export commonly used types
pub use color::Color;
pub use document::{Document, Value};
pub use errors::{Result, VariablesError};
pub use feature_id::FeatureId;
pub use resource::{ResourceId, ResourceKind};
