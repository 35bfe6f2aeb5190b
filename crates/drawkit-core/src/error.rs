//! Error handling for DrawKit
//!
//! Provides error types for the two failure families of the core:
//! - Registry errors (missing prototype keys)
//! - Validation errors (malformed prototype data)
//!
//! All error types use `thiserror` for ergonomic error handling. Every
//! failure is a synchronous return-path error; nothing is retried and no
//! operation leaves partial state behind.

use thiserror::Error;

/// Registry error type
///
/// Represents failures when addressing the prototype registry by key.
/// Always recoverable by the caller and never corrupts registry state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No prototype is registered under the given name
    #[error("Prototype not found: {name}")]
    NotFound {
        /// The key that was looked up.
        name: String,
    },
}

/// Validation error type
///
/// Represents malformed prototype data, rejected before any mutation
/// occurs (all-or-nothing).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Prototype names key the registry and must not be empty
    #[error("Prototype name must not be empty")]
    EmptyName,

    /// Radii must be strictly positive
    #[error("Radius must be positive, got {radius}")]
    NonPositiveRadius {
        /// The rejected radius value.
        radius: i32,
    },
}

/// Main error type for DrawKit
///
/// A unified error type that can represent any error from the core.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Registry error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Check if this is a missing-key registry error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Registry(RegistryError::NotFound { .. }))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
