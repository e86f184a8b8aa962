//! Commit identifiers captured from git

pub mod commit_hash;

/// Shortest abbreviation git will produce (`core.abbrev` minimum)
pub const MIN_HASH_LENGTH: usize = 4;
/// Length of a full SHA-256 object name
pub const MAX_HASH_LENGTH: usize = 64;
