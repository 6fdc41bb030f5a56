// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains the concrete implementations of the traits defined in the
//! ports layer: the three value source variants, the document parsers, an
//! in-memory resource table and an in-memory feature client.

pub mod json;
pub mod memory_client;
pub mod null_source;
pub mod remote_source;
pub mod document_source;
pub mod static_resources;
#[cfg(feature = "yaml")]
pub mod yaml;

// Re-export adapters based on feature flags
pub use document_source::DocumentSource;
pub use json::JsonParser;
pub use memory_client::InMemoryFeatureClient;
pub use null_source::NullSource;
pub use remote_source::RemoteSource;
pub use static_resources::StaticResources;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;
