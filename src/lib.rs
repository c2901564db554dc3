//! # filestore-authz
//!
//! Path-scope access control for a virtual file-storage namespace.
//!
//! ## Features
//!
//! - **Total scope parsing** - every scope string is interpretable; there is
//!   no malformed-scope state
//! - **Wildcard coverage with explicit negation** - `!` deny scopes override
//!   allow scopes unconditionally, independent of order or specificity
//! - **Folder navigability** - directories on the way to a reachable path
//!   stay visible without leaking their sibling content
//! - **Storage-root mounting** - one evaluator serves any number of mounted
//!   roots through uniform prefixing
//! - **Lock-free reuse** - guardians are immutable and safe to share across
//!   any number of threads
//!
//! ## Example
//!
//! ```rust
//! use filestore_authz::{file_scope, Guardian, PermissionSet, Principal};
//!
//! let mut permissions = PermissionSet::new();
//! permissions.grant(1, "files:read", vec![
//!     file_scope("/reports/*"),
//!     file_scope("!/reports/private/*"),
//! ]);
//!
//! let principal = Principal::new("user:alice@example.com", 1)
//!     .with_permissions(permissions);
//! let guardian = Guardian::new(&principal);
//!
//! assert!(guardian.can("files:read", "/reports/q3.json"));
//! assert!(!guardian.can("files:read", "/reports/private/salaries.json"));
//! assert!(!guardian.can("files:write", "/reports/q3.json"));
//! ```

pub mod error;
pub mod guardian;
pub mod scope;
pub mod types;

// Re-export commonly used types
pub use error::{AuthzError, Result};
pub use guardian::cache::{CacheStats, GuardianCache};
pub use guardian::Guardian;
pub use scope::{
    file_scope, path_portion, rebase_path, rebase_scope, PathPattern, PatternMatch,
};
pub use types::{OrgId, PermissionSet, Principal};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
