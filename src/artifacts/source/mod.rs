//! C# source rendering
//!
//! - `source_builder`: line-oriented text builder tracking block nesting
//! - `template`: the commit hash class layout

pub mod source_builder;
pub mod template;
