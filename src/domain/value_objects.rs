//! Domain value objects for animal records
//!
//! Breeds and pet names are wrapped in distinct NewTypes so a name can never be
//! passed where a breed is expected:
//!
//! ```rust,ignore
//! let breed = Breed::new("Angus")?;
//! let name = PetName::new("Nate")?;
//! // CowData::new(name, birth)   ✗ Compile error!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Breed
// ============================================================================

/// Breed of an animal, e.g. "Border Collie".
///
/// # Validation
/// - Must not be empty or whitespace-only
/// - Maximum length: 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breed(String);

impl Breed {
    const MAX_LENGTH: usize = 64;

    /// Creates a new Breed with validation.
    ///
    /// # Errors
    /// Returns `Err` if the breed is blank or exceeds the maximum length.
    pub fn new(breed: impl Into<String>) -> Result<Self, ValidationError> {
        let breed = breed.into();
        validate_text("Breed", &breed, Self::MAX_LENGTH)?;
        Ok(Self(breed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Breed {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// PetName
// ============================================================================

/// Given name of a pet. Only the Dog capability carries one.
///
/// # Validation
/// - Must not be empty or whitespace-only
/// - Maximum length: 64 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetName(String);

impl PetName {
    const MAX_LENGTH: usize = 64;

    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_text("PetName", &name, Self::MAX_LENGTH)?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn validate_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    let actual = value.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    if let Some(character) = value.chars().find(|c| c.is_control()) {
        return Err(ValidationError::InvalidCharacter { field, character });
    }
    Ok(())
}

// ============================================================================
// Validation Errors
// ============================================================================

/// Validation errors for domain value objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty but must not be.
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Field exceeds maximum length.
    #[error("{field} exceeds maximum length of {max} (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Field contains invalid character.
    #[error("{field} contains invalid character {character:?}")]
    InvalidCharacter {
        field: &'static str,
        character: char,
    },
}
