//! Generate a C# source file exposing the current git commit hash
//!
//! A run is a straight pipeline: validate the options, ask git for the HEAD
//! commit hash, render the class and write it to the output path.
//!
//! - `areas`: git and the workspace the file is written into
//! - `artifacts`: options, commit hash and source rendering
//! - `commands`: the generate pipeline
//! - `errors`: run failures and their exit codes

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
