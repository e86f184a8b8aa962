use crate::artifacts::options::{CLASS_NAME_REGEX, DEFAULT_CLASS_NAME, NAMESPACE_NAME_REGEX};
use anyhow::Context;

/// Dotted C# namespace, e.g. `Acme.Build`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceName(String);

impl NamespaceName {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        let re = regex::Regex::new(NAMESPACE_NAME_REGEX)
            .with_context(|| format!("invalid namespace name regex: {NAMESPACE_NAME_REGEX}"))?;

        if re.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            anyhow::bail!("invalid namespace name: {}", name);
        }
    }
}

impl AsRef<str> for NamespaceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NamespaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the generated static class
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    pub fn try_parse(name: &str) -> anyhow::Result<Self> {
        let re = regex::Regex::new(CLASS_NAME_REGEX)
            .with_context(|| format!("invalid class name regex: {CLASS_NAME_REGEX}"))?;

        if re.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            anyhow::bail!("invalid class name: {}", name);
        }
    }
}

impl Default for ClassName {
    fn default() -> Self {
        Self(DEFAULT_CLASS_NAME.to_string())
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
