//! Commit hash reported by `git log`
//!
//! ## Format
//!
//! - Short: the abbreviated object name (7 characters by default, at least 4)
//! - Long: the full object name (40 characters for SHA-1, 64 for SHA-256)
//!
//! Only hexadecimal digits are accepted, which keeps the value safe to embed
//! inside a C# string literal without escaping.

use crate::artifacts::hash::{MAX_HASH_LENGTH, MIN_HASH_LENGTH};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitHash(String);

impl CommitHash {
    /// Parse and validate a hash, ignoring surrounding whitespace
    pub fn try_parse(raw: &str) -> anyhow::Result<Self> {
        let hash = raw.trim();

        if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&hash.len()) {
            anyhow::bail!("Invalid commit hash length: {}", hash.len());
        }
        if !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid commit hash characters: {}", hash);
        }

        Ok(Self(hash.to_string()))
    }
}

impl AsRef<str> for CommitHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
