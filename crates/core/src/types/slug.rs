//! URL slug type derived from product names.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`] directly.
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacter,
    /// The input starts or ends with a hyphen.
    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A URL-safe product slug.
///
/// Slugs are derived from the product name at creation time and never
/// re-derived afterwards, even when the name changes: lowercase the name,
/// collapse every run of non-alphanumeric characters into a single hyphen,
/// and strip leading/trailing hyphens.
///
/// ## Examples
///
/// ```
/// use rezar_core::Slug;
///
/// assert_eq!(Slug::from_name("Swing Door Model 2").as_str(), "swing-door-model-2");
/// assert_eq!(Slug::from_name("  Sliding   Window  ").as_str(), "sliding-window");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Derive a slug from a product name.
    ///
    /// Never fails; a name without any alphanumeric characters derives the
    /// empty slug.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut out = String::with_capacity(name.len());
        let mut pending_hyphen = false;

        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_hyphen && !out.is_empty() {
                    out.push('-');
                }
                out.push(c.to_ascii_lowercase());
                pending_hyphen = false;
            } else {
                pending_hyphen = true;
            }
        }

        Self(out)
    }

    /// Parse a `Slug` from an already-derived string.
    ///
    /// Used at trust boundaries such as seed files; derivation itself goes
    /// through [`Slug::from_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains a character outside
    /// `[a-z0-9-]`, or has a hyphen at either edge.
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if !s.chars().all(|c| c == '-' || c.is_ascii_digit() || c.is_ascii_lowercase()) {
            return Err(SlugError::InvalidCharacter);
        }

        if s.starts_with('-') || s.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns true for the empty slug (name had no alphanumerics).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
