// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the typed resolver, binding support and the feature
//! lookup entry point.

pub mod binding;
pub mod feature_service;
pub mod variables;

// Re-export commonly used types
pub use binding::{FromVariables, LazyField};
pub use feature_service::{FeatureVariablesService, FeatureVariablesServiceBuilder, SourceMode};
pub use variables::Variables;
