use std::io;
use std::path::{Path, PathBuf};

/// Extension trait for Path with the checks the generator runs on its target
pub trait PathExt {
    /// Returns `true` when the directory holds no entry at all.
    ///
    /// # Returns
    /// * `Ok(bool)` - Whether the directory is empty
    /// * `Err(io::Error)` - If the directory cannot be listed
    fn is_empty_dir(&self) -> io::Result<bool>;

    /// Probes whether files can be created inside the directory.
    ///
    /// A uniquely named temporary file is created and removed again, so the
    /// directory content is unchanged afterwards.
    fn is_writable_dir(&self) -> bool;

    /// Absolute form of the path for diagnostics; falls back to the path as given.
    ///
    /// # Examples
    /// ```
    /// use fieldtype_scaffold::ext::PathExt;
    /// use std::path::Path;
    ///
    /// assert!(Path::new("out").to_absolute().is_absolute());
    /// ```
    fn to_absolute(&self) -> PathBuf;
}

impl PathExt for Path {
    fn is_empty_dir(&self) -> io::Result<bool> {
        Ok(std::fs::read_dir(self)?.next().is_none())
    }

    fn is_writable_dir(&self) -> bool {
        tempfile::Builder::new().prefix(".fieldtype-probe").tempfile_in(self).is_ok()
    }

    fn to_absolute(&self) -> PathBuf {
        std::path::absolute(self).unwrap_or_else(|_| self.to_path_buf())
    }
}
