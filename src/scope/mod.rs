//! Path-scope parsing and matching
//!
//! A path scope is a capability string granting or denying access to a range
//! of paths inside the storage namespace. The external form is
//! `<namespace>:<dimension>:[!]<path>[*]`; this module interprets only the
//! path portion, with an optional leading `!` for negation and an optional
//! trailing `*` for wildcard coverage.
//!
//! # Examples
//!
//! ```
//! use filestore_authz::scope::{PathPattern, PatternMatch};
//!
//! let pattern = PathPattern::parse("/reports/*");
//! assert_eq!(pattern.matches("/reports/q3.json"), PatternMatch::WildcardPrefix);
//! assert_eq!(pattern.matches("/"), PatternMatch::Ancestor);
//! assert_eq!(pattern.matches("/other/"), PatternMatch::None);
//! ```

mod pattern;
mod raw;


pub use pattern::{PathPattern, PatternMatch};
pub use raw::{file_scope, path_portion, rebase_path, rebase_scope, FILES_SCOPE_PREFIX};
