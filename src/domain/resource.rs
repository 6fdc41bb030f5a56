// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform resource handles.

use std::fmt;

/// The kind of platform resource a symbolic name refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// A localized string.
    String,
    /// A drawable or image.
    Drawable,
    /// A color resource.
    Color,
}

impl ResourceKind {
    /// Returns the platform's name for this resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::String => "string",
            ResourceKind::Drawable => "drawable",
            ResourceKind::Color => "color",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque handle to a platform resource.
///
/// Handles are only ever produced by a
/// [`ResourceResolver`](crate::ports::ResourceResolver); the crate never invents one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u32);

impl ResourceId {
    /// Wraps a raw platform handle.
    pub const fn new(raw: u32) -> Self {
        ResourceId(raw)
    }

    /// Returns the raw platform handle.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
