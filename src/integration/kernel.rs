use super::{BundleRegistrar, Registration};
use crate::error::Result;
use log::{debug, info};
use regex::Regex;
use std::path::PathBuf;

const REGISTER_METHOD: &str = "function registerBundles";
const BUNDLE_LIST_PATTERN: &str = r"\$bundles\s*=\s*(\[|array\s*\()";

/// Registers bundles by editing the `registerBundles()` method of a kernel file.
///
/// The bundle is appended to the `$bundles = [...]` (or `array(...)`)
/// literal; kernels that build the list any other way are left untouched.
pub struct KernelFileRegistrar {
    kernel_file: PathBuf,
}

impl KernelFileRegistrar {
    pub fn new<P: Into<PathBuf>>(kernel_file: P) -> Self {
        Self { kernel_file: kernel_file.into() }
    }

    /// Returns the kernel source with `class` appended to the bundle list,
    /// or `None` when the list cannot be located.
    fn insert_bundle(source: &str, class: &str) -> Result<Option<String>> {
        let Some(method) = source.find(REGISTER_METHOD) else {
            return Ok(None);
        };
        let Some(opener) = Regex::new(BUNDLE_LIST_PATTERN)?.find(&source[method..]) else {
            return Ok(None);
        };

        let list_start = method + opener.end();
        let closing = if opener.as_str().ends_with('[') { ']' } else { ')' };
        let Some(list_end) = find_closing(&source[list_start..], closing) else {
            return Ok(None);
        };
        let list_end = list_start + list_end;

        // Single-line lists such as `$bundles = [];` have no line to insert before.
        let closing_line_start = source[..list_end].rfind('\n').map_or(0, |i| i + 1);
        if closing_line_start <= list_start {
            return Ok(None);
        }

        let indent: String = source[closing_line_start..]
            .chars()
            .take_while(|c| *c == ' ' || *c == '\t')
            .collect();

        let mut updated = String::with_capacity(source.len() + class.len() + 16);
        let before = source[..closing_line_start].trim_end();
        updated.push_str(before);
        if before.len() > list_start && !before.ends_with(',') {
            updated.push(',');
        }
        updated.push('\n');
        updated.push_str(&format!("{indent}    new {class}(),\n"));
        updated.push_str(&source[closing_line_start..]);

        Ok(Some(updated))
    }
}

/// Byte offset of the bracket closing an already opened list.
fn find_closing(source: &str, closing: char) -> Option<usize> {
    let opening = if closing == ']' { '[' } else { '(' };
    let mut depth = 0usize;
    for (i, c) in source.char_indices() {
        if c == opening {
            depth += 1;
        } else if c == closing {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        }
    }
    None
}

impl BundleRegistrar for KernelFileRegistrar {
    fn register(&self, class: &str) -> Result<Registration> {
        if !self.kernel_file.is_file() {
            debug!("Kernel file {} not found", self.kernel_file.display());
            return Ok(Registration::Unsupported);
        }

        let source = std::fs::read_to_string(&self.kernel_file)?;
        if source.contains(&format!("new {class}(")) || source.contains(&format!("new \\{class}(")) {
            return Ok(Registration::AlreadyRegistered);
        }

        match Self::insert_bundle(&source, class)? {
            Some(updated) => {
                std::fs::write(&self.kernel_file, updated)?;
                info!("Registered {class} in {}", self.kernel_file.display());
                Ok(Registration::Registered)
            }
            None => Ok(Registration::Unsupported),
        }
    }

    fn location(&self) -> Option<PathBuf> {
        Some(self.kernel_file.clone())
    }
}
