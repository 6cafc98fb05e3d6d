//! Identity types for the tendera platform.
//!
//! This module provides the strongly-typed user identifier and role used to
//! describe "who is calling" once a credential has been validated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A numeric user identifier.
///
/// User IDs are assigned by the auth service and carried in the `user_id`
/// claim of access tokens.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new `UserId` from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Return the underlying integer.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UserId({})", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidUserId(s.to_string()))
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// The role a user holds within the tender system.
///
/// Roles are carried in the `role` claim of access tokens and propagated to
/// backend services, which apply their own per-role authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator.
    Admin,
    /// Tender manager; may create tenders and review applications.
    Manager,
    /// Regular client; may browse tenders and submit applications.
    Client,
}

impl Role {
    /// Return the wire representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "manager" => Ok(Self::Manager),
            "client" => Ok(Self::Client),
            other => Err(CoreError::UnknownRole(other.to_string())),
        }
    }
}

/// The validated identity attached to an in-flight request.
///
/// An `Identity` exists only for requests whose credential has been verified;
/// it is passed explicitly from the auth gate to the proxy and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The authenticated user's role.
    pub role: Role,
}

impl Identity {
    /// Create a new identity context.
    #[must_use]
    pub const fn new(user_id: UserId, role: Role) -> Self {
        Self { user_id, role }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_roundtrip() {
        let id = UserId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!("42".parse::<UserId>().unwrap(), id);
    }

    #[test]
    fn user_id_rejects_non_numeric() {
        assert!("abc".parse::<UserId>().is_err());
    }

    #[test]
    fn user_id_serializes_as_integer() {
        let json = serde_json::to_string(&UserId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn role_wire_format() {
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!(Role::Manager.as_str(), "manager");
        assert_eq!(Role::Client.as_str(), "client");

        assert_eq!("manager".parse::<Role>().unwrap(), Role::Manager);
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn role_serde_lowercase() {
        let json = serde_json::to_string(&Role::Client).unwrap();
        assert_eq!(json, "\"client\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn identity_carries_user_and_role() {
        let identity = Identity::new(UserId::new(7), Role::Client);
        assert_eq!(identity.user_id.as_i64(), 7);
        assert_eq!(identity.role, Role::Client);
    }
}
