// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resource resolver trait definition.
//!
//! The host platform owns localized strings, drawables and color resources. This
//! port is the narrow window through which the typed resolver turns symbolic names
//! found in a configuration document into platform handles and translated text.

use crate::domain::{ResourceId, ResourceKind};

/// A lookup from symbolic resource names to platform handles and localized text.
///
/// # Examples
///
/// ```rust
/// use feature_variables::domain::{ResourceId, ResourceKind};
/// use feature_variables::ports::ResourceResolver;
///
/// struct OneString;
///
/// impl ResourceResolver for OneString {
///     fn resolve_resource_id(&self, name: &str, kind: ResourceKind) -> Option<ResourceId> {
///         (name == "ok_label" && kind == ResourceKind::String).then(|| ResourceId::new(1))
///     }
///
///     fn localized_string(&self, id: ResourceId) -> Option<String> {
///         (id == ResourceId::new(1)).then(|| "OK".to_string())
///     }
/// }
///
/// let resources = OneString;
/// let id = resources.resolve_resource_id("ok_label", ResourceKind::String).unwrap();
/// assert_eq!(resources.localized_string(id).as_deref(), Some("OK"));
/// ```
pub trait ResourceResolver: Send + Sync {
    /// Resolves a symbolic name of the given kind to a platform handle.
    ///
    /// Returns `None` when no such resource exists.
    fn resolve_resource_id(&self, name: &str, kind: ResourceKind) -> Option<ResourceId>;

    /// Returns the localized text of a string resource.
    ///
    /// Returns `None` when the handle does not name a string resource.
    fn localized_string(&self, id: ResourceId) -> Option<String>;
}

/// A resolver that knows no resources.
///
/// Used when the host supplies none: every symbolic name stays unresolved, so text
/// lookups fall back to the literal and drawable lookups resolve to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResources;

impl ResourceResolver for NoResources {
    fn resolve_resource_id(&self, _name: &str, _kind: ResourceKind) -> Option<ResourceId> {
        None
    }

    fn localized_string(&self, _id: ResourceId) -> Option<String> {
        None
    }
}
