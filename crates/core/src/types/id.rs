//! Product identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductIdError {
    /// The input string is empty.
    #[error("product id cannot be empty")]
    Empty,
    /// The input does not start with the `rezar-` prefix.
    #[error("product id must start with \"{}\"", ProductId::PREFIX)]
    MissingPrefix,
    /// The part after the prefix has the wrong length.
    #[error("product id suffix must be exactly {} characters", ProductId::SUFFIX_LENGTH)]
    WrongSuffixLength,
    /// The part after the prefix contains a non-hex character.
    #[error("product id suffix must be lowercase hex")]
    InvalidSuffix,
}

/// A catalog product identifier.
///
/// Ids have the fixed shape `rezar-<8 lowercase hex digits>` and are
/// generated from the leading digits of a v4 UUID. They are assigned at
/// creation and never change afterwards.
///
/// ## Examples
///
/// ```
/// use rezar_core::ProductId;
///
/// assert!(ProductId::parse("rezar-a1b2c3d4").is_ok());
/// assert!(ProductId::parse("rezar-A1B2C3D4").is_err()); // uppercase
/// assert!(ProductId::parse("sku-a1b2c3d4").is_err());   // wrong prefix
/// assert!(ProductId::parse("rezar-a1b2").is_err());     // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Prefix shared by every product id.
    pub const PREFIX: &'static str = "rezar-";

    /// Number of hex digits following the prefix.
    pub const SUFFIX_LENGTH: usize = 8;

    /// Generate a fresh random id.
    ///
    /// Uses the first 32 bits of a v4 UUID, rendered as 8 lowercase hex
    /// digits.
    #[must_use]
    pub fn generate() -> Self {
        let (head, ..) = Uuid::new_v4().as_fields();
        Self(format!("{}{head:08x}", Self::PREFIX))
    }

    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Does not start with `rezar-`
    /// - Has a suffix that is not exactly 8 lowercase hex digits
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.is_empty() {
            return Err(ProductIdError::Empty);
        }

        let suffix = s.strip_prefix(Self::PREFIX).ok_or(ProductIdError::MissingPrefix)?;

        if suffix.len() != Self::SUFFIX_LENGTH {
            return Err(ProductIdError::WrongSuffixLength);
        }

        if !suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()) {
            return Err(ProductIdError::InvalidSuffix);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
