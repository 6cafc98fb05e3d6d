//! Common error types for the tendera platform.
//!
//! This module provides shared error types that are used across multiple crates.

use thiserror::Error;

/// A result type using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core errors that can occur throughout the tendera system.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A role string did not match any known role.
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A user ID string was not a valid integer.
    #[error("invalid user ID: {0}")]
    InvalidUserId(String),
}
