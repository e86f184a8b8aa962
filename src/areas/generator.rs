use crate::areas::git::Git;
use crate::areas::workspace::Workspace;
use std::path::Path;

/// A generation run rooted at one directory
///
/// git is queried in that directory and relative output paths are resolved
/// against it.
#[derive(Debug)]
pub struct Generator {
    git: Git,
    workspace: Workspace,
}

impl Generator {
    pub fn new(path: &Path) -> Self {
        Generator {
            git: Git::new(path.into()),
            workspace: Workspace::new(path.into()),
        }
    }

    pub fn with_git(mut self, git: Git) -> Self {
        self.git = git;
        self
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
