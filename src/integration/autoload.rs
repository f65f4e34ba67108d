use super::AutoloadChecker;
use crate::{
    constants::{COMPOSER_FILE, NAMESPACE_SEPARATOR},
    error::Result,
};
use log::debug;
use serde_json::Value;
use std::path::{Path, PathBuf};

const AUTOLOAD_SECTIONS: &[&str] = &["autoload", "autoload-dev"];

/// Resolves classes through the PSR-4 and PSR-0 maps of a Composer project.
///
/// A class counts as loadable when one of the mapped directories contains
/// the file the class name resolves to.
pub struct ComposerAutoloader {
    project_root: PathBuf,
}

impl ComposerAutoloader {
    pub fn new<P: Into<PathBuf>>(project_root: P) -> Self {
        Self { project_root: project_root.into() }
    }

    fn load_manifest(&self) -> Result<Value> {
        let content = std::fs::read_to_string(self.project_root.join(COMPOSER_FILE))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Candidate class files for `class` under the manifest's mappings.
    fn candidates(&self, manifest: &Value, class: &str) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        let class_path = class.replace(NAMESPACE_SEPARATOR, "/");

        for section in AUTOLOAD_SECTIONS {
            let autoload = &manifest[*section];

            if let Some(psr4) = autoload["psr-4"].as_object() {
                for (prefix, dirs) in psr4 {
                    if let Some(relative) = class.strip_prefix(prefix.as_str()) {
                        let relative = relative.replace(NAMESPACE_SEPARATOR, "/");
                        for dir in mapped_dirs(dirs) {
                            candidates.push(self.class_file(dir, &relative));
                        }
                    }
                }
            }

            if let Some(psr0) = autoload["psr-0"].as_object() {
                for (prefix, dirs) in psr0 {
                    if class.starts_with(prefix.as_str()) {
                        for dir in mapped_dirs(dirs) {
                            candidates.push(self.class_file(dir, &class_path));
                        }
                    }
                }
            }
        }

        candidates
    }

    fn class_file(&self, dir: &str, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.project_root.join(dir), |path, part| path.join(part))
            .with_extension("php")
    }
}

/// A mapping value is either one directory or a list of them.
fn mapped_dirs(value: &Value) -> Vec<&str> {
    match value {
        Value::String(dir) => vec![dir.as_str()],
        Value::Array(dirs) => dirs.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

impl AutoloadChecker for ComposerAutoloader {
    fn is_loadable(&self, class: &str) -> bool {
        let manifest = match self.load_manifest() {
            Ok(manifest) => manifest,
            Err(e) => {
                debug!(
                    "Cannot read {} in {}: {e}",
                    COMPOSER_FILE,
                    self.project_root.display()
                );
                return false;
            }
        };

        self.candidates(&manifest, class).iter().any(|candidate| {
            debug!("Looking for {class} in {}", candidate.display());
            Path::is_file(candidate)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CLASS: &str = "Acme\\FooBundle\\AcmeFooBundle";

    fn project(composer: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(COMPOSER_FILE), composer).unwrap();
        dir
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "<?php\n").unwrap();
    }

    #[test]
    fn resolves_psr4_mappings() {
        let dir = project(
            r#"{"autoload": {"psr-4": {"Acme\\FooBundle\\": "src/Acme/FooBundle/src/bundle/"}}}"#,
        );
        let autoloader = ComposerAutoloader::new(dir.path());
        assert!(!autoloader.is_loadable(CLASS));

        touch(dir.path(), "src/Acme/FooBundle/src/bundle/AcmeFooBundle.php");
        assert!(autoloader.is_loadable(CLASS));
    }

    #[test]
    fn resolves_psr0_mappings_with_directory_lists() {
        let dir = project(r#"{"autoload-dev": {"psr-0": {"Acme\\": ["lib/", "src/"]}}}"#);
        touch(dir.path(), "src/Acme/FooBundle/AcmeFooBundle.php");
        assert!(ComposerAutoloader::new(dir.path()).is_loadable(CLASS));
    }

    #[test]
    fn unmapped_namespace_is_not_loadable() {
        let dir = project(r#"{"autoload": {"psr-4": {"Other\\": "src/"}}}"#);
        touch(dir.path(), "src/Acme/FooBundle/AcmeFooBundle.php");
        assert!(!ComposerAutoloader::new(dir.path()).is_loadable(CLASS));
    }

    #[test]
    fn missing_or_broken_manifest_is_not_loadable() {
        let dir = TempDir::new().unwrap();
        assert!(!ComposerAutoloader::new(dir.path()).is_loadable(CLASS));

        let broken = project("{ not json");
        assert!(!ComposerAutoloader::new(broken.path()).is_loadable(CLASS));
    }
}
