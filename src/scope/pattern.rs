//! Scope pattern parsing and path matching
//!
//! Parsing is total: every string is interpretable as a pattern, so there is
//! no malformed-scope state and no reject path. All comparisons are
//! byte-exact, with no case folding and no path canonicalization.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// How a pattern relates to a candidate path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternMatch {
    /// No relationship
    None,

    /// The path equals the pattern literal
    Exact,

    /// The pattern is a wildcard and its literal is a raw prefix of the
    /// path. Segment boundaries are not required: literal `/a/b/c/d.`
    /// covers `/a/b/c/d.e/f.jpg`.
    WildcardPrefix,

    /// The path is a directory (trailing `/`) on the way to the literal,
    /// i.e. the literal starts with the path. Makes the folders leading to
    /// a reachable location visible without exposing their sibling content.
    Ancestor,
}

impl PatternMatch {
    /// The pattern covers the path itself, exactly or through a wildcard
    pub fn is_direct(self) -> bool {
        matches!(self, PatternMatch::Exact | PatternMatch::WildcardPrefix)
    }

    /// Any relationship that makes the path visible
    pub fn is_hit(self) -> bool {
        !matches!(self, PatternMatch::None)
    }
}

/// A parsed path scope: optional negation, literal, optional trailing
/// wildcard
///
/// # Examples
///
/// ```
/// use filestore_authz::scope::PathPattern;
///
/// let pattern = PathPattern::parse("!/a/b/*");
/// assert!(pattern.negated());
/// assert_eq!(pattern.literal(), "/a/b/");
/// assert!(pattern.wildcard());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathPattern {
    /// Whether this pattern denies rather than grants
    negated: bool,
    /// The path portion after stripping negation and wildcard markers
    literal: String,
    /// Whether the literal covers everything it prefixes
    wildcard: bool,
}

impl PathPattern {
    /// Parse a path-scope string
    ///
    /// An optional leading `!` marks negation and an optional trailing `*`
    /// marks a wildcard; both are consumed and everything remaining is the
    /// literal. The `*` is only meaningful as the final character and has
    /// no special meaning anywhere else in the string.
    pub fn parse(scope: &str) -> Self {
        let (negated, rest) = match scope.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, scope),
        };

        let (wildcard, literal) = match rest.strip_suffix('*') {
            Some(rest) => (true, rest),
            None => (false, rest),
        };

        Self {
            negated,
            literal: literal.to_string(),
            wildcard,
        }
    }

    /// Whether this pattern denies rather than grants
    pub fn negated(&self) -> bool {
        self.negated
    }

    /// The path portion after stripping negation and wildcard markers
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Whether the literal covers everything it prefixes
    pub fn wildcard(&self) -> bool {
        self.wildcard
    }

    /// Classify the relationship between this pattern and `path`
    ///
    /// A pattern whose literal equals a directory path satisfies both the
    /// exact and the ancestor reading; the exact classification wins and
    /// either way the path counts as matched.
    pub fn matches(&self, path: &str) -> PatternMatch {
        if path == self.literal {
            return PatternMatch::Exact;
        }

        if self.wildcard && path.starts_with(&self.literal) {
            return PatternMatch::WildcardPrefix;
        }

        if path.ends_with('/') && self.literal.starts_with(path) {
            return PatternMatch::Ancestor;
        }

        PatternMatch::None
    }
}

impl FromStr for PathPattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!")?;
        }
        write!(f, "{}", self.literal)?;
        if self.wildcard {
            write!(f, "*")?;
        }
        Ok(())
    }
}
