//! Raw scope strings and storage-root rebasing
//!
//! Raw scopes arrive from the permission resolver in the external form
//! `<namespace>:<dimension>:[!]<path>[*]`, e.g. `files:path:!/a/b/*`. The
//! namespace and dimension belong to the resolver; the evaluator only ever
//! interprets the path portion. Bare path scopes without the frame are
//! accepted too.
//!
//! Rebasing mounts a storage root in front of every path literal and every
//! queried path. It is pure string concatenation, with no canonicalization
//! and no separator deduplication: applied uniformly to both sides of every
//! comparison, the byte-exact matching still lines up, so one evaluator
//! serves arbitrarily many mounted roots.

/// Scope frame for the file-storage namespace
pub const FILES_SCOPE_PREFIX: &str = "files:path:";

/// Build a raw file-storage scope for `path`
///
/// # Examples
///
/// ```
/// use filestore_authz::scope::file_scope;
///
/// assert_eq!(file_scope("!/a/b/*"), "files:path:!/a/b/*");
/// ```
pub fn file_scope(path: &str) -> String {
    format!("{}{}", FILES_SCOPE_PREFIX, path)
}

/// Return the path portion of a raw scope, stripping a
/// `namespace:dimension:` frame when one is present
///
/// Only colons before the first `/` are treated as frame separators, so
/// colons inside the path survive untouched and bare path scopes pass
/// through unchanged.
pub fn path_portion(raw: &str) -> &str {
    let head_end = raw.find('/').unwrap_or(raw.len());
    match raw[..head_end].rfind(':') {
        Some(idx) => &raw[idx + 1..],
        None => raw,
    }
}

/// Prefix a queried path with the active storage root
///
/// The same root must be applied to scope literals via [`rebase_scope`] for
/// decisions to be meaningful.
pub fn rebase_path(root: &str, path: &str) -> String {
    format!("{}{}", root, path)
}

/// Prefix the path literal inside a raw scope with the active storage root,
/// preserving the `namespace:dimension:` frame and the negation marker
///
/// # Examples
///
/// ```
/// use filestore_authz::scope::rebase_scope;
///
/// assert_eq!(
///     rebase_scope("/my-storage/", "files:path:!/a/*"),
///     "files:path:!/my-storage//a/*",
/// );
/// ```
pub fn rebase_scope(root: &str, raw: &str) -> String {
    let portion = path_portion(raw);
    let frame = &raw[..raw.len() - portion.len()];

    let (negation, path) = match portion.strip_prefix('!') {
        Some(rest) => ("!", rest),
        None => ("", portion),
    };

    format!("{}{}{}{}", frame, negation, root, path)
}
