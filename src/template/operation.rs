use crate::error::{Error, Result};
use std::path::PathBuf;

/// A manifest entry after rendering: its content and final location.
#[derive(Debug)]
pub struct RenderedFile {
    pub target: PathBuf,
    pub content: String,
}

impl RenderedFile {
    /// Writes the content, creating parent directories as needed.
    ///
    /// # Returns
    /// * `Err(Error::RenderWriteFailure)` - carrying the path that failed
    pub fn write(&self) -> Result<()> {
        let failure = |source| Error::RenderWriteFailure {
            path: self.target.display().to_string(),
            source,
        };

        if let Some(parent) = self.target.parent() {
            std::fs::create_dir_all(parent).map_err(failure)?;
        }
        std::fs::write(&self.target, &self.content).map_err(failure)
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };
        format!("{}Writing '{}'", prefix, self.target.display())
    }
}
