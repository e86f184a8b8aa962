use crate::artifacts::options::choice::{AccessModifier, HashLength, Indenting, LineEnding};
use crate::artifacts::options::identifier::{ClassName, NamespaceName};
use crate::artifacts::options::{DEFAULT_INDENT_SIZE, DEFAULT_OUTPUT_FILENAME, MAX_INDENT_SIZE};
use crate::errors::GenerateError;
use std::path::PathBuf;
use std::time::Duration;

const NON_NEGATIVE_INTEGER: &str = "integer greater than or equal to zero";
const INDENT_SIZE_RANGE: &str = "integer from 0 to 256";

/// Everything a generation run needs to know, validated up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub output: PathBuf,
    pub namespace: Option<NamespaceName>,
    pub class: ClassName,
    pub access_modifier: AccessModifier,
    pub indenting: Indenting,
    pub indent_size: u32,
    pub line_ending: LineEnding,
    pub hash_length: HashLength,
    pub timeout: Option<Duration>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILENAME),
            namespace: None,
            class: ClassName::default(),
            access_modifier: AccessModifier::default(),
            indenting: Indenting::default(),
            indent_size: DEFAULT_INDENT_SIZE,
            line_ending: LineEnding::default(),
            hash_length: HashLength::default(),
            timeout: None,
        }
    }
}

impl GeneratorOptions {
    /// Build the options from `key=value` pairs, stopping at the first bad one.
    ///
    /// Keys are case-sensitive, enumerated values are not. Later pairs override
    /// earlier ones for the same setting.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, GenerateError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();

        for (key, value) in pairs {
            options.apply(key.as_ref(), value.as_ref())?;
        }

        Ok(options)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), GenerateError> {
        match key {
            "namespace" | "ns" => {
                let namespace = NamespaceName::try_parse(value).map_err(|_| {
                    GenerateError::invalid_option(
                        "namespace/ns",
                        value,
                        "valid C# namespace name",
                    )
                })?;
                self.namespace = Some(namespace);
            }
            "class" => {
                self.class = ClassName::try_parse(value).map_err(|_| {
                    GenerateError::invalid_option("class", value, "valid C# class name")
                })?;
            }
            "output" => self.output = PathBuf::from(value),
            "hash" => {
                self.hash_length = HashLength::try_parse(value).ok_or_else(|| {
                    GenerateError::invalid_option("hash", value, HashLength::ALLOWED)
                })?;
            }
            "access-modifier" => {
                self.access_modifier = AccessModifier::try_parse(value).ok_or_else(|| {
                    GenerateError::invalid_option("access-modifier", value, AccessModifier::ALLOWED)
                })?;
            }
            "indent" | "indenting" => {
                self.indenting = Indenting::try_parse(value).ok_or_else(|| {
                    GenerateError::invalid_option("indent/indenting", value, Indenting::ALLOWED)
                })?;
            }
            "indent-size" | "indenting-size" => {
                self.indent_size = parse_non_negative(value)
                    .filter(|size| *size <= MAX_INDENT_SIZE)
                    .ok_or_else(|| {
                        GenerateError::invalid_option(
                            "indent-size/indenting-size",
                            value,
                            INDENT_SIZE_RANGE,
                        )
                    })?;
            }
            "line-ending" => {
                self.line_ending = LineEnding::try_parse(value).ok_or_else(|| {
                    GenerateError::invalid_option("line-ending", value, LineEnding::ALLOWED)
                })?;
            }
            "timeout" => {
                let seconds = parse_non_negative(value).ok_or_else(|| {
                    GenerateError::invalid_option("timeout", value, NON_NEGATIVE_INTEGER)
                })?;
                self.timeout = (seconds > 0).then(|| Duration::from_secs(u64::from(seconds)));
            }
            unknown => return Err(GenerateError::UnknownOption(unknown.to_string())),
        }

        Ok(())
    }
}

fn parse_non_negative(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}
