use crate::areas::generator::Generator;
use crate::artifacts::options::generator_options::GeneratorOptions;
use crate::artifacts::source::template;
use crate::errors::GenerateError;
use std::path::PathBuf;

impl Generator {
    /// Query git, render the class and write it out.
    ///
    /// Nothing is written unless git produced a usable hash.
    pub async fn generate(&self, options: &GeneratorOptions) -> Result<PathBuf, GenerateError> {
        let hash = self
            .git()
            .head_commit_hash(options.hash_length, options.timeout)
            .await?;

        let source = template::render(options, &hash)?;

        let written = self.workspace().write_file(&options.output, &source)?;

        tracing::info!(
            path = %written.display(),
            hash = %hash,
            bytes = source.len(),
            "generated commit hash source"
        );

        Ok(written)
    }
}
