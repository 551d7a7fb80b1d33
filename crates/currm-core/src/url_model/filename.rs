//! Local filename derivation for rule entries.

use crate::config::RuleEntry;
use crate::revision::short_revision;

/// Extension of rule files in the local store.
pub const RULE_EXTENSION: &str = "mdc";

/// `<name>.mdc`, or `<name>-<short>.mdc` when the revision is pinned.
///
/// The name is used as-is; a name containing a path separator yields a
/// nested or invalid path.
pub fn resolve_filename(entry: &RuleEntry) -> String {
    match entry.revision().pinned() {
        Some(rev) => format!("{}-{}.{}", entry.name, short_revision(rev), RULE_EXTENSION),
        None => format!("{}.{}", entry.name, RULE_EXTENSION),
    }
}
