//! Command implementations
//!
//! - `generate`: query git, render the class and write the output file

pub mod generate;
