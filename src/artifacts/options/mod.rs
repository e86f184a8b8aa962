//! Generator configuration
//!
//! The options record is built from key/value pairs, mirroring the command line:
//!
//! - `identifier`: validated namespace and class names
//! - `choice`: the enumerated settings (access modifier, indenting, line ending, hash length)
//! - `generator_options`: the immutable configuration record and its parser

pub mod choice;
pub mod generator_options;
pub mod identifier;

pub const NAMESPACE_NAME_REGEX: &str = r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$";
pub const CLASS_NAME_REGEX: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

pub const DEFAULT_OUTPUT_FILENAME: &str = "GitCommitHash.cs";
pub const DEFAULT_CLASS_NAME: &str = "GitCommitHash";
pub const DEFAULT_INDENT_SIZE: u32 = 4;
pub const MAX_INDENT_SIZE: u32 = 256;
