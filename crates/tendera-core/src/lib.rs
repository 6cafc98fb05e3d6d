//! Core types and utilities for the tendera platform.
//!
//! This crate provides the foundational types used throughout the tender
//! procurement system:
//!
//! - **Identity types**: strongly-typed user identifiers and roles
//! - **Error types**: common error definitions shared across crates
//!
//! # Example
//!
//! ```
//! use tendera_core::{Identity, Role, UserId};
//!
//! // Parse a role from its wire representation
//! let role: Role = "manager".parse().unwrap();
//!
//! // Build the identity context attached to an authenticated request
//! let identity = Identity::new(UserId::new(42), role);
//! assert_eq!(identity.user_id.as_i64(), 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod identity;

pub use error::{CoreError, Result};
pub use identity::{Identity, Role, UserId};
