//! Access decisions over one principal's resolved permissions
//!
//! A [`Guardian`] is built once per request or session from the permission
//! map the upstream resolver produced, then answers any number of
//! [`can`](Guardian::can) queries. Construction parses every scope exactly
//! once; decisions are pure functions of (scopes, action, path) with no
//! interior mutation, so a guardian can be shared across threads freely.

pub mod cache;

use std::collections::HashMap;
use tracing::{debug, trace};

use crate::scope::{path_portion, PathPattern};
use crate::types::{OrgId, PermissionSet, Principal};

/// Allow and deny patterns for one action, parsed once at construction
#[derive(Debug, Clone, Default)]
struct ActionPatterns {
    allow: Vec<PathPattern>,
    deny: Vec<PathPattern>,
}

/// Immutable access-control evaluator for one principal within one
/// organization
///
/// # Examples
///
/// ```
/// use filestore_authz::{file_scope, Guardian, PermissionSet};
///
/// let mut permissions = PermissionSet::new();
/// permissions.grant(0, "files:read", vec![file_scope("/gitB/*")]);
///
/// let guardian = Guardian::for_org(&permissions, 0);
/// assert!(guardian.can("files:read", "/gitB/nested/dashboard.json"));
/// assert!(!guardian.can("files:read", "/gitA/dashboard.json"));
/// ```
#[derive(Debug, Clone)]
pub struct Guardian {
    patterns: HashMap<String, ActionPatterns>,
}

impl Guardian {
    /// Build a guardian for `principal` in its active organization
    pub fn new(principal: &Principal) -> Self {
        Self::for_org(&principal.permissions, principal.org_id)
    }

    /// Build a guardian from a permission set for a specific organization
    ///
    /// Organizations absent from the set yield a guardian that denies
    /// everything.
    pub fn for_org(permissions: &PermissionSet, org: OrgId) -> Self {
        let mut patterns: HashMap<String, ActionPatterns> = HashMap::new();

        if let Some(actions) = permissions.actions(org) {
            for (action, scopes) in actions {
                let entry = patterns.entry(action.clone()).or_default();
                for raw in scopes {
                    let pattern = PathPattern::parse(path_portion(raw));
                    if pattern.negated() {
                        entry.deny.push(pattern);
                    } else {
                        entry.allow.push(pattern);
                    }
                }
            }
        }

        debug!(
            "guardian constructed for org {} covering {} actions",
            org,
            patterns.len()
        );

        Self { patterns }
    }

    /// Decide whether `action` may be performed on `path`
    ///
    /// Fail-closed: an action with no scopes resolves to denial. Deny
    /// scopes override allow scopes unconditionally, independent of scope
    /// order or pattern specificity. A deny scope only fires when it covers
    /// the path itself; being an ancestor of a denied subtree is not a
    /// denial, so the folders above a restricted area stay navigable.
    pub fn can(&self, action: &str, path: &str) -> bool {
        let Some(patterns) = self.patterns.get(action) else {
            trace!("no scopes for action {}, denying {}", action, path);
            return false;
        };

        // Two independent, order-independent scans combined by AND-NOT
        let deny_hit = patterns.deny.iter().any(|p| p.matches(path).is_direct());
        let allow_hit = patterns.allow.iter().any(|p| p.matches(path).is_hit());

        let allowed = allow_hit && !deny_hit;
        trace!("decision for {} on {}: {}", action, path, allowed);
        allowed
    }
}
