//! Layout of the generated commit hash class
//!
//! ```text
//! using System;
//!
//! namespace <Namespace>                 (only when configured)
//! {
//!     /// <summary> ... </summary>
//!     <access> static class <Class>
//!     {
//!         /// <summary> ... </summary>
//!         public static string Value
//!         {
//!             get { return "<hash>"; }
//!         }
//!     }
//! }
//! ```

use crate::artifacts::hash::commit_hash::CommitHash;
use crate::artifacts::options::generator_options::GeneratorOptions;
use crate::artifacts::source::source_builder::SourceBuilder;

const CLASS_COMMENT: [&str; 3] = [
    "/// <summary>",
    "/// Stores the git commit hash of the current HEAD of your local repository.",
    "/// </summary>",
];

const PROPERTY_COMMENT: [&str; 3] = [
    "/// <summary>",
    "/// Gets the git commit hash.",
    "/// </summary>",
];

pub fn render(options: &GeneratorOptions, hash: &CommitHash) -> anyhow::Result<String> {
    let mut source = SourceBuilder::new(options.indenting, options.indent_size, options.line_ending);

    source.line("using System;").blank();

    if let Some(namespace) = &options.namespace {
        source.open_block(&format!("namespace {namespace}"));
    }

    source.lines(&CLASS_COMMENT).open_block(&format!(
        "{} static class {}",
        options.access_modifier.keyword(),
        options.class
    ));

    source
        .lines(&PROPERTY_COMMENT)
        .open_block("public static string Value")
        .line(&format!("get {{ return \"{hash}\"; }}"));

    // accessor, then class
    source.close_block()?.close_block()?;

    if options.namespace.is_some() {
        source.close_block()?;
    }

    source.finish()
}
