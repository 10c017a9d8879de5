//! Validated item type identifier
//!
//! Materials are upper-case keys such as `DIAMOND_SWORD`, optionally
//! namespaced (`MINECRAFT:DIAMOND_SWORD`). Input is trimmed and upper-cased.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a material key
const MAX_MATERIAL_LENGTH: usize = 128;

/// A validated material key (non-empty, <=128 chars, `[A-Z0-9_:]` only)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Material(String);

impl Material {
    /// Create a new validated material.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The key is empty after trimming
    /// - The key exceeds 128 characters
    /// - The key contains characters other than letters, digits, `_` or `:`
    pub fn new(key: impl Into<String>) -> Result<Self, DomainError> {
        let key = key.into();
        let normalized = key.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::validation("Material cannot be empty"));
        }
        if normalized.len() > MAX_MATERIAL_LENGTH {
            return Err(DomainError::validation(format!(
                "Material cannot exceed {} characters",
                MAX_MATERIAL_LENGTH
            )));
        }
        if let Some(bad) = normalized
            .chars()
            .find(|c| !(c.is_ascii_uppercase() || c.is_ascii_digit() || *c == '_' || *c == ':'))
        {
            return Err(DomainError::validation(format!(
                "Material '{}' contains invalid character '{}'",
                normalized, bad
            )));
        }
        Ok(Self(normalized))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Material {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Material> for String {
    fn from(value: Material) -> Self {
        value.0
    }
}

impl std::str::FromStr for Material {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
