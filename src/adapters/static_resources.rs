// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory resource table.
//!
//! Hosts that do not have a platform resource system (servers, tests, desktop
//! tools) register their symbolic names here instead.

use crate::domain::{ResourceId, ResourceKind};
use crate::ports::ResourceResolver;
use std::collections::HashMap;

/// First handle handed out, mirroring the application resource id range.
const FIRST_RESOURCE_ID: u32 = 0x7f01_0001;

/// A resource resolver backed by in-memory tables.
///
/// Handles are assigned in registration order. Registering the same name and kind
/// twice replaces the earlier entry's text but keeps its handle.
///
/// # Examples
///
/// ```rust
/// use feature_variables::adapters::StaticResources;
/// use feature_variables::domain::ResourceKind;
/// use feature_variables::ports::ResourceResolver;
///
/// let resources = StaticResources::new()
///     .with_string("treatment_button_label", "Try it now")
///     .with_drawable("ic_auto_destruct");
///
/// let id = resources
///     .resolve_resource_id("treatment_button_label", ResourceKind::String)
///     .unwrap();
/// assert_eq!(resources.localized_string(id).as_deref(), Some("Try it now"));
/// assert!(resources
///     .resolve_resource_id("ic_auto_destruct", ResourceKind::Drawable)
///     .is_some());
/// ```
#[derive(Debug, Clone)]
pub struct StaticResources {
    ids: HashMap<(ResourceKind, String), ResourceId>,
    strings: HashMap<ResourceId, String>,
    next_id: u32,
}

impl StaticResources {
    /// Creates an empty resource table.
    pub fn new() -> Self {
        Self {
            ids: HashMap::new(),
            strings: HashMap::new(),
            next_id: FIRST_RESOURCE_ID,
        }
    }

    /// Registers a localized string resource.
    pub fn with_string(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        let id = self.register(name.into(), ResourceKind::String);
        self.strings.insert(id, text.into());
        self
    }

    /// Registers a drawable resource.
    pub fn with_drawable(mut self, name: impl Into<String>) -> Self {
        self.register(name.into(), ResourceKind::Drawable);
        self
    }

    /// Registers a color resource.
    pub fn with_color(mut self, name: impl Into<String>) -> Self {
        self.register(name.into(), ResourceKind::Color);
        self
    }

    /// Returns the number of registered resources.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn register(&mut self, name: String, kind: ResourceKind) -> ResourceId {
        let next_id = &mut self.next_id;
        *self.ids.entry((kind, name)).or_insert_with(|| {
            let id = ResourceId::new(*next_id);
            *next_id += 1;
            id
        })
    }
}

impl Default for StaticResources {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceResolver for StaticResources {
    fn resolve_resource_id(&self, name: &str, kind: ResourceKind) -> Option<ResourceId> {
        self.ids.get(&(kind, name.to_string())).copied()
    }

    fn localized_string(&self, id: ResourceId) -> Option<String> {
        self.strings.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_separate_namespaces() {
        let resources = StaticResources::new()
            .with_string("ok", "OK")
            .with_drawable("ok");

        let string_id = resources.resolve_resource_id("ok", ResourceKind::String);
        let drawable_id = resources.resolve_resource_id("ok", ResourceKind::Drawable);

        assert!(string_id.is_some());
        assert!(drawable_id.is_some());
        assert_ne!(string_id, drawable_id);
        assert!(resources.resolve_resource_id("ok", ResourceKind::Color).is_none());
    }

    #[test]
    fn test_drawable_has_no_string() {
        let resources = StaticResources::new().with_drawable("icon");
        let id = resources
            .resolve_resource_id("icon", ResourceKind::Drawable)
            .unwrap();
        assert_eq!(resources.localized_string(id), None);
    }

    #[test]
    fn test_reregistering_keeps_handle() {
        let resources = StaticResources::new()
            .with_string("label", "first")
            .with_string("label", "second");

        assert_eq!(resources.len(), 1);
        let id = resources
            .resolve_resource_id("label", ResourceKind::String)
            .unwrap();
        assert_eq!(id.raw(), FIRST_RESOURCE_ID);
        assert_eq!(resources.localized_string(id).as_deref(), Some("second"));
    }

    #[test]
    fn test_unknown_name() {
        let resources = StaticResources::default();
        assert!(resources.is_empty());
        assert!(resources
            .resolve_resource_id("missing", ResourceKind::String)
            .is_none());
    }
}
