// SPDX-License-Identifier: MIT OR Apache-2.0

//! Feature lookup entry point.
//!
//! This module provides `FeatureVariablesService`, which turns a feature id into a
//! ready-to-use [`Variables`]. It picks the value source for each lookup and makes
//! sure a lookup never fails: whatever goes wrong (no client, no document, malformed
//! document, client error) the feature resolves to the null source and every field
//! falls back to its caller-supplied default.

use crate::adapters::{DocumentSource, JsonParser, NullSource, RemoteSource};
use crate::domain::{FeatureId, Result};
use crate::ports::{
    DocumentParser, FeatureClient, NoResources, ResourceResolver, ValueSource,
    FEATURES_API_EXPERIMENT, JSON_BRANCH,
};
use crate::service::binding::FromVariables;
use crate::service::variables::Variables;
use std::fmt;
use std::sync::Arc;

/// How feature variables are read from the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Fetch each feature's whole document once and parse it locally.
    Json,
    /// Read every field with its own call across the client boundary.
    Remote,
    /// Ask the client: enrollment in the `json` branch of the `features-api`
    /// experiment selects [`SourceMode::Json`], anything else [`SourceMode::Remote`].
    #[default]
    Auto,
}

/// The feature variables service.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::InMemoryFeatureClient;
/// use feature_variables::domain::Color;
/// use feature_variables::service::FeatureVariablesService;
/// use std::sync::Arc;
///
/// let client = InMemoryFeatureClient::new()
///     .with_feature("button-feature", r#"{ "buttonColor": "red" }"#);
///
/// let service = FeatureVariablesService::builder()
///     .with_client(Arc::new(client))
///     .build();
///
/// let variables = service.variables("button-feature");
/// assert_eq!(variables.color("buttonColor"), Some(Color::RED));
///
/// // Unknown features are empty, never an error.
/// assert_eq!(service.variables("other").color("buttonColor"), None);
/// ```
pub struct FeatureVariablesService {
    client: Option<Arc<dyn FeatureClient>>,
    resources: Arc<dyn ResourceResolver>,
    parser: Arc<dyn DocumentParser>,
    /// Always `Json` or `Remote` once built
    mode: SourceMode,
}

impl FeatureVariablesService {
    /// Creates a service with no client: every feature resolves to the null source.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new service builder.
    pub fn builder() -> FeatureVariablesServiceBuilder {
        FeatureVariablesServiceBuilder::new()
    }

    /// Returns the source mode in effect, after `Auto` has been decided.
    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// Returns the value source for a feature.
    pub fn value_source(&self, feature: impl Into<FeatureId>) -> Arc<dyn ValueSource> {
        let feature = feature.into();
        let Some(client) = &self.client else {
            return Arc::new(NullSource::for_feature(feature));
        };

        match self.mode {
            SourceMode::Remote => Arc::new(RemoteSource::new(Arc::clone(client), feature)),
            _ => match self.load_document(client.as_ref(), &feature) {
                Ok(Some(source)) => Arc::new(source.for_feature(feature)),
                Ok(None) => {
                    tracing::debug!("No variables for feature '{}'", feature);
                    Arc::new(NullSource::for_feature(feature))
                }
                Err(e) => {
                    tracing::warn!(
                        "Variables for feature '{}' are unusable, using defaults: {}",
                        feature,
                        e
                    );
                    Arc::new(NullSource::for_feature(feature))
                }
            },
        }
    }

    /// Returns the variables for a feature.
    pub fn variables(&self, feature: impl Into<FeatureId>) -> Variables {
        Variables::new(self.value_source(feature), Arc::clone(&self.resources))
    }

    /// Returns the variables for a feature, transformed by `transform`.
    pub fn variables_with<T, F>(&self, feature: impl Into<FeatureId>, transform: F) -> T
    where
        F: FnOnce(&Variables) -> T,
    {
        transform(&self.variables(feature))
    }

    /// Binds the variables for a feature to an application config type.
    pub fn bind<T: FromVariables>(&self, feature: impl Into<FeatureId>) -> T {
        self.variables_with(feature, T::from_variables)
    }

    fn load_document(
        &self,
        client: &dyn FeatureClient,
        feature: &FeatureId,
    ) -> Result<Option<DocumentSource>> {
        client
            .feature_variables_json(feature)?
            .map(|content| DocumentSource::parse(self.parser.as_ref(), &content))
            .transpose()
    }
}

impl Default for FeatureVariablesService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FeatureVariablesService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureVariablesService")
            .field("client", &self.client.as_ref().map(|c| c.name().to_string()))
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `FeatureVariablesService`.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::{InMemoryFeatureClient, StaticResources};
/// use feature_variables::service::{FeatureVariablesServiceBuilder, SourceMode};
/// use std::sync::Arc;
///
/// let service = FeatureVariablesServiceBuilder::new()
///     .with_client(Arc::new(InMemoryFeatureClient::new()))
///     .with_resources(Arc::new(StaticResources::new().with_string("ok_label", "OK")))
///     .with_mode(SourceMode::Remote)
///     .build();
///
/// assert_eq!(service.mode(), SourceMode::Remote);
/// ```
pub struct FeatureVariablesServiceBuilder {
    client: Option<Arc<dyn FeatureClient>>,
    resources: Option<Arc<dyn ResourceResolver>>,
    parser: Option<Arc<dyn DocumentParser>>,
    mode: SourceMode,
}

impl FeatureVariablesServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            client: None,
            resources: None,
            parser: None,
            mode: SourceMode::default(),
        }
    }

    /// Sets the feature client.
    pub fn with_client(mut self, client: Arc<dyn FeatureClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the platform resource resolver.
    pub fn with_resources(mut self, resources: Arc<dyn ResourceResolver>) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Sets the parser for whole feature documents. Defaults to JSON.
    ///
    /// The parser reads what [`FeatureClient::feature_variables_json`] returns in
    /// [`SourceMode::Json`]. Nested objects read through
    /// [`FeatureClient::feature_variable_json`] in [`SourceMode::Remote`] are JSON at
    /// the boundary and are always parsed as JSON.
    pub fn with_parser(mut self, parser: Arc<dyn DocumentParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Sets the source mode. Defaults to [`SourceMode::Auto`].
    pub fn with_mode(mut self, mode: SourceMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builds the service, deciding the source mode if it is `Auto`.
    pub fn build(self) -> FeatureVariablesService {
        let mode = match (self.mode, &self.client) {
            (SourceMode::Auto, Some(client)) => detect_mode(client.as_ref()),
            (SourceMode::Auto, None) => SourceMode::Json,
            (mode, _) => mode,
        };

        if let Some(client) = &self.client {
            tracing::info!(
                "Reading feature variables from '{}' in {:?} mode",
                client.name(),
                mode
            );
        }

        FeatureVariablesService {
            client: self.client,
            resources: self.resources.unwrap_or_else(|| Arc::new(NoResources)),
            parser: self.parser.unwrap_or_else(|| Arc::new(JsonParser::new())),
            mode,
        }
    }
}

impl Default for FeatureVariablesServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_mode(client: &dyn FeatureClient) -> SourceMode {
    match client.experiment_branch(FEATURES_API_EXPERIMENT) {
        Ok(Some(branch)) if branch == JSON_BRANCH => SourceMode::Json,
        Ok(_) => SourceMode::Remote,
        Err(e) => {
            tracing::debug!(
                "Could not read the '{}' branch from '{}': {}",
                FEATURES_API_EXPERIMENT,
                client.name(),
                e
            );
            SourceMode::Remote
        }
    }
}
