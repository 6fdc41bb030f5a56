// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed resolver over a value source.
//!
//! `Variables` is what feature code holds. It asks its [`ValueSource`] for raw
//! values and turns them into application types: colors, localized text, resource
//! handles and nested `Variables`. Every getter returns `Option`, where `None` means
//! "use your own default". Nothing here fails or panics.

use crate::adapters::{DocumentSource, NullSource};
use crate::domain::{Color, Document, FeatureId, ResourceId, ResourceKind};
use crate::ports::{NoResources, ResourceResolver, ValueSource};
use crate::service::binding::FromVariables;
use std::fmt;
use std::sync::Arc;

/// Typed access to one feature's (or sub-object's) variables.
///
/// Cloning is cheap and clones share the same source. A `Variables` is `Send + Sync`
/// and can be read from any number of threads.
///
/// # Examples
///
/// ```rust
/// use feature_variables::domain::{Color, Document};
/// use feature_variables::service::Variables;
///
/// let doc = Document::from_json_str(
///     r#"{ "buttonColor": "red", "buttonText": "Go", "positiveButton": { "text": "Continue" } }"#,
/// ).unwrap();
/// let variables = Variables::from_document(doc);
///
/// let color = variables.color("buttonColor").unwrap_or(Color::BLUE);
/// assert_eq!(color, Color::RED);
///
/// let text = variables.localized_text("buttonText").unwrap_or_else(|| "Okay then".to_string());
/// assert_eq!(text, "Go");
///
/// let positive = variables.child("positiveButton").unwrap();
/// assert_eq!(positive.string("text").as_deref(), Some("Continue"));
/// ```
#[derive(Clone)]
pub struct Variables {
    source: Arc<dyn ValueSource>,
    resources: Arc<dyn ResourceResolver>,
}

impl Variables {
    /// Creates a resolver over `source`, resolving symbolic names with `resources`.
    pub fn new(source: Arc<dyn ValueSource>, resources: Arc<dyn ResourceResolver>) -> Self {
        Self { source, resources }
    }

    /// Creates a resolver with nothing in it. Every getter returns `None`.
    pub fn empty() -> Self {
        Self::new(Arc::new(NullSource::new()), Arc::new(NoResources))
    }

    /// Creates a resolver over a parsed document, without any platform resources.
    pub fn from_document(document: Document) -> Self {
        Self::new(Arc::new(DocumentSource::new(document)), Arc::new(NoResources))
    }

    /// Replaces the resource resolver.
    pub fn with_resources(mut self, resources: Arc<dyn ResourceResolver>) -> Self {
        self.resources = resources;
        self
    }

    /// Returns the name of the underlying value source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Returns the feature these variables were resolved for, if any.
    pub fn feature(&self) -> Option<&FeatureId> {
        self.source.feature()
    }

    // These `as_*` methods are the transformations the getters apply to raw values.
    // They are public so binders can build literal defaults the same way.

    /// Parses `value` as a color.
    ///
    /// Returns `None` if it is not valid color syntax.
    pub fn as_color(&self, value: &str) -> Option<Color> {
        match value.parse() {
            Ok(color) => Some(color),
            Err(e) => {
                tracing::debug!("Ignoring color value: {}", e);
                None
            }
        }
    }

    /// Returns the localized string of a string resource.
    pub fn as_localized(&self, id: ResourceId) -> Option<String> {
        self.resources.localized_string(id)
    }

    /// Resolves `value` as text.
    ///
    /// If `value` names a string resource, its localized text is returned. Otherwise
    /// `value` itself is the text.
    pub fn as_text(&self, value: &str) -> String {
        self.as_text_resource(value)
            .and_then(|id| self.as_localized(id))
            .unwrap_or_else(|| value.to_string())
    }

    /// Resolves `value` as the name of a string resource.
    pub fn as_text_resource(&self, value: &str) -> Option<ResourceId> {
        self.resources.resolve_resource_id(value, ResourceKind::String)
    }

    /// Resolves `value` as the name of a drawable resource.
    pub fn as_drawable(&self, value: &str) -> Option<ResourceId> {
        self.resources
            .resolve_resource_id(value, ResourceKind::Drawable)
    }

    /// Returns the string at `key`.
    pub fn string(&self, key: &str) -> Option<String> {
        self.source.get_string(key)
    }

    /// Returns the integer at `key`.
    pub fn integer(&self, key: &str) -> Option<i64> {
        self.source.get_int(key)
    }

    /// Returns the boolean at `key`.
    pub fn boolean(&self, key: &str) -> Option<bool> {
        self.source.get_bool(key)
    }

    /// Returns the string at `key` parsed as a color.
    ///
    /// A value that is not valid color syntax is treated as absent.
    pub fn color(&self, key: &str) -> Option<Color> {
        let value = self.string(key)?;
        match value.parse() {
            Ok(color) => Some(color),
            Err(e) => {
                tracing::debug!(
                    "Ignoring color at '{}' of feature '{}': {}",
                    key,
                    self.feature().map_or("<none>", FeatureId::as_str),
                    e
                );
                None
            }
        }
    }

    /// Returns the string at `key` as text, following string resource names.
    ///
    /// Configuration authors may either write the text inline or name a translated
    /// string resource; both resolve here.
    pub fn localized_text(&self, key: &str) -> Option<String> {
        self.string(key).map(|value| self.as_text(&value))
    }

    /// Returns the string resource named by the string at `key`.
    pub fn text_resource(&self, key: &str) -> Option<ResourceId> {
        self.string(key)
            .and_then(|value| self.as_text_resource(&value))
    }

    /// Returns the drawable resource named by the string at `key`.
    pub fn drawable_handle(&self, key: &str) -> Option<ResourceId> {
        self.string(key).and_then(|value| self.as_drawable(&value))
    }

    /// Returns the nested object at `key` as its own `Variables`.
    ///
    /// The child shares this resolver's resources.
    pub fn child(&self, key: &str) -> Option<Variables> {
        self.source.get_child(key).map(|source| Variables {
            source,
            resources: Arc::clone(&self.resources),
        })
    }

    /// Returns the nested object at `key`, transformed by `transform`.
    pub fn child_with<T, F>(&self, key: &str, transform: F) -> Option<T>
    where
        F: FnOnce(&Variables) -> T,
    {
        self.child(key).map(|child| transform(&child))
    }

    /// Binds this resolver to an application config type.
    pub fn bind<T: FromVariables>(&self) -> T {
        T::from_variables(self)
    }

    /// Binds the nested object at `key` to an application config type.
    ///
    /// Returns `None` when there is no object at `key`, so the caller can substitute a
    /// fully literal default rather than an object built from absent fields.
    pub fn bind_child<T: FromVariables>(&self, key: &str) -> Option<T> {
        self.child_with(key, T::from_variables)
    }
}

impl Default for Variables {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Variables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variables")
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}
