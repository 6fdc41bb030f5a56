// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binding variables to application config types.
//!
//! Application code usually wants a plain struct rather than string-keyed lookups.
//! Two binding styles are supported and must produce the same field values for the
//! same document:
//!
//! - **Eager**: implement [`FromVariables`] and resolve every field in
//!   `from_variables`. The result is a plain value, cheap to read, easy to compare
//!   and share.
//! - **Lazy**: keep the [`Variables`] and one [`LazyField`] per field, resolving each
//!   field the first time it is read. Fields that are never read are never resolved.
//!
//! # Examples
//!
//! ```rust
//! use feature_variables::domain::{Color, Document};
//! use feature_variables::service::{FromVariables, LazyField, Variables};
//!
//! #[derive(Debug, PartialEq)]
//! struct EagerButton {
//!     color: Color,
//!     text: String,
//! }
//!
//! impl FromVariables for EagerButton {
//!     fn from_variables(variables: &Variables) -> Self {
//!         Self {
//!             color: variables.color("buttonColor").unwrap_or(Color::BLUE),
//!             text: variables.localized_text("buttonText").unwrap_or_else(|| "Okay then".into()),
//!         }
//!     }
//! }
//!
//! struct LazyButton {
//!     variables: Variables,
//!     color: LazyField<Color>,
//! }
//!
//! impl LazyButton {
//!     fn color(&self) -> Color {
//!         *self.color.get_or_resolve(|| self.variables.color("buttonColor").unwrap_or(Color::BLUE))
//!     }
//! }
//!
//! let variables = Variables::from_document(
//!     Document::from_json_str(r#"{ "buttonColor": "red" }"#).unwrap(),
//! );
//! let eager: EagerButton = variables.bind();
//! let lazy = LazyButton { variables, color: LazyField::new() };
//!
//! assert_eq!(eager.color, lazy.color());
//! assert_eq!(eager.text, "Okay then");
//! ```

use crate::service::variables::Variables;
use once_cell::sync::OnceCell;
use std::fmt;

/// An application config type that can be built from [`Variables`].
///
/// Implementations resolve every field, falling back to a literal default when the
/// resolver returns `None`. Nested config objects are bound with
/// [`Variables::bind_child`], substituting a fully literal default object when the
/// nested key is absent.
pub trait FromVariables: Sized {
    /// Builds the config from `variables`.
    fn from_variables(variables: &Variables) -> Self;
}

/// A compute-once cell for one lazily bound field.
///
/// The first read resolves the value; later reads return the cached value and never
/// resolve again. Resolution happens at most once even when several threads race on
/// the first read: the losers block until the winner has stored its value, then
/// read it.
pub struct LazyField<T> {
    cell: OnceCell<T>,
}

impl<T> LazyField<T> {
    /// Creates an unresolved field.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the field's value, resolving it with `resolve` on first access.
    pub fn get_or_resolve<F>(&self, resolve: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(resolve)
    }

    /// Returns the value if the field has been resolved.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Returns true once the field has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T> Default for LazyField<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LazyField<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LazyField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("LazyField").field(value).finish(),
            None => f.write_str("LazyField(<unresolved>)"),
        }
    }
}
