//! Resolver-facing types
//!
//! The upstream role/policy resolver produces a [`PermissionSet`] for each
//! signed-in [`Principal`]: an explicit nested map from organization id to
//! action name to the raw scope strings granted for that action. This crate
//! consumes the map as-is and never interprets action names.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Organization identifier
pub type OrgId = i64;

/// Resolved permissions for a principal: organization id to action name to
/// an ordered list of raw scope strings.
///
/// Scope order carries no semantic weight in access decisions; deny scopes
/// override allow scopes wherever they appear in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashMap<OrgId, HashMap<String, Vec<String>>>);

impl PermissionSet {
    /// Create an empty permission set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append scopes for an action within an organization
    pub fn grant(&mut self, org: OrgId, action: impl Into<String>, scopes: Vec<String>) {
        self.0
            .entry(org)
            .or_default()
            .entry(action.into())
            .or_default()
            .extend(scopes);
    }

    /// Raw scopes granted for an action within an organization
    pub fn scopes(&self, org: OrgId, action: &str) -> Option<&[String]> {
        self.0
            .get(&org)
            .and_then(|actions| actions.get(action))
            .map(|scopes| scopes.as_slice())
    }

    /// All action-to-scopes entries for an organization
    pub fn actions(&self, org: OrgId) -> Option<&HashMap<String, Vec<String>>> {
        self.0.get(&org)
    }

    /// Whether the set holds no organizations at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Deserialize a permission set from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a permission set from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// The signed-in caller as produced by the upstream resolver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Principal identifier (e.g., "user:alice@example.com")
    pub id: String,

    /// Organization the principal is acting in
    pub org_id: OrgId,

    /// Resolved permissions, keyed by organization
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl Principal {
    /// Create a new principal with no permissions
    pub fn new(id: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            id: id.into(),
            org_id,
            permissions: PermissionSet::new(),
        }
    }

    /// Attach a resolved permission set
    pub fn with_permissions(mut self, permissions: PermissionSet) -> Self {
        self.permissions = permissions;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_lookup() {
        let mut permissions = PermissionSet::new();
        permissions.grant(1, "files:read", vec!["files:path:/a/*".to_string()]);
        permissions.grant(1, "files:read", vec!["files:path:!/a/b/*".to_string()]);

        let scopes = permissions.scopes(1, "files:read").unwrap();
        assert_eq!(scopes.len(), 2);
        assert_eq!(scopes[0], "files:path:/a/*");
        assert_eq!(scopes[1], "files:path:!/a/b/*");
    }

    #[test]
    fn test_missing_entries() {
        let mut permissions = PermissionSet::new();
        permissions.grant(1, "files:read", vec!["files:path:/a/*".to_string()]);

        assert!(permissions.scopes(2, "files:read").is_none());
        assert!(permissions.scopes(1, "files:write").is_none());
        assert!(permissions.actions(2).is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let mut permissions = PermissionSet::new();
        permissions.grant(0, "files:read", vec!["files:path:/b/*".to_string()]);

        let json = serde_json::to_string(&permissions).unwrap();
        let parsed = PermissionSet::from_json(&json).unwrap();
        assert_eq!(parsed, permissions);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PermissionSet::from_json("not json").is_err());
    }

    #[test]
    fn test_principal_creation() {
        let mut permissions = PermissionSet::new();
        permissions.grant(3, "files:write", vec!["files:path:/uploads/*".to_string()]);

        let principal = Principal::new("user:alice@example.com", 3)
            .with_permissions(permissions);

        assert_eq!(principal.id, "user:alice@example.com");
        assert_eq!(principal.org_id, 3);
        assert!(principal.permissions.scopes(3, "files:write").is_some());
    }
}
