use crate::errors::GenerateError;
use derive_new::new;
use std::path::{Component, Path, PathBuf};

/// Working directory the generated file is written relative to
#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    /// Absolute, lexically normalized location of `output`
    pub fn resolve(&self, output: &Path) -> PathBuf {
        if output.is_absolute() {
            normalize(output)
        } else {
            normalize(&self.path.join(output))
        }
    }

    /// Write `contents` to `output`, creating missing parent directories and
    /// replacing any existing file. Returns the path that was written.
    pub fn write_file(&self, output: &Path, contents: &str) -> Result<PathBuf, GenerateError> {
        let file_path = self.resolve(output);

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                tracing::debug!(path = %parent.display(), "creating output directory");
                std::fs::create_dir_all(parent).map_err(|source| GenerateError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(&file_path, contents).map_err(|source| GenerateError::Write {
            path: file_path.clone(),
            source,
        })?;

        Ok(file_path)
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
