//! Pinned vs. unpinned revisions and their short forms.

/// Revision keyword meaning "track the default branch".
pub const LATEST: &str = "latest";

/// Minimum length for a revision to be treated as a full commit hash.
const COMMIT_HASH_MIN_LEN: usize = 40;

/// Length of the shortened commit hash used in filenames and reports.
pub const SHORT_HASH_LEN: usize = 8;

/// A configured revision after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    /// Absent, empty, or `"latest"`.
    Latest,
    /// Any other value; expected to be a commit-like identifier.
    Pinned(String),
}

impl Revision {
    pub fn from_config(raw: Option<&str>) -> Self {
        match raw {
            None | Some("") | Some(LATEST) => Revision::Latest,
            Some(rev) => Revision::Pinned(rev.to_string()),
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, Revision::Pinned(_))
    }

    pub fn pinned(&self) -> Option<&str> {
        match self {
            Revision::Latest => None,
            Revision::Pinned(rev) => Some(rev),
        }
    }
}

/// True for strings of at least 40 hex digits (either case).
pub fn is_commit_hash(s: &str) -> bool {
    s.len() >= COMMIT_HASH_MIN_LEN && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// First 8 characters of a full commit hash; anything else is returned verbatim.
pub fn short_revision(rev: &str) -> &str {
    if is_commit_hash(rev) {
        // All ASCII, so byte slicing is on a char boundary.
        &rev[..SHORT_HASH_LEN]
    } else {
        rev
    }
}
