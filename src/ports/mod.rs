// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! of the crate. They are implemented by adapters in the adapters layer, or by the
//! host application for the boundaries it owns (feature client, resources).

pub mod client;
pub mod parser;
pub mod resources;
pub mod source;

// Re-export commonly used types
pub use client::{FeatureClient, FEATURES_API_EXPERIMENT, JSON_BRANCH};
pub use parser::DocumentParser;
pub use resources::{NoResources, ResourceResolver};
pub use source::ValueSource;
