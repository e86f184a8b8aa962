//! Values flowing through a generation run
//!
//! - `hash`: the validated commit hash captured from git
//! - `options`: generator configuration and its validation
//! - `source`: C# source rendering

pub mod hash;
pub mod options;
pub mod source;
