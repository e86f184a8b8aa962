//! Outside world touched by a generation run
//!
//! - `generator`: coordinates one run rooted at a directory
//! - `git`: the `git` executable, queried for the HEAD commit hash
//! - `workspace`: the working directory the generated file is written into

pub mod generator;
pub mod git;
pub mod workspace;
