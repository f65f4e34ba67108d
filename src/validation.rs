//! Answer validators
//!
//! Every validator returns the accepted value (possibly normalised) or an
//! [`Error::InvalidInput`] carrying a message suitable for re-prompting.

use crate::{
    constants::{BUNDLE_SUFFIX, NAMESPACE_SEPARATOR},
    error::{Error, Result},
};
use regex::Regex;
use std::path::PathBuf;

const NAME_PATTERN: &str = r"^[a-zA-Z][ a-zA-Z]*$";
const NAMESPACE_SEGMENT_PATTERN: &str = r"^[a-zA-Z]*$";
const PHP_IDENTIFIER_PATTERN: &str = r"^[a-zA-Z_\x{7f}-\x{10FFFF}][a-zA-Z0-9_\x{7f}-\x{10FFFF}]*$";

/// Words PHP refuses as namespace segments.
const PHP_RESERVED_WORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "do", "echo", "else", "elseif",
    "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile",
    "eval", "exit", "extends", "final", "finally", "fn", "for", "foreach", "function",
    "global", "goto", "if", "implements", "include", "include_once", "instanceof",
    "insteadof", "interface", "isset", "list", "match", "namespace", "new", "or",
    "print", "private", "protected", "public", "readonly", "require", "require_once",
    "return", "static", "switch", "throw", "trait", "try", "unset", "use", "var",
    "while", "xor", "yield", "__class__", "__dir__", "__file__", "__function__",
    "__line__", "__method__", "__namespace__", "__trait__", "__halt_compiler",
];

fn matches(pattern: &str, value: &str) -> Result<bool> {
    Ok(Regex::new(pattern)?.is_match(value))
}

/// Accepts a field type display name: a letter followed by letters or spaces.
pub fn validate_name(raw: &str) -> Result<&str> {
    if !matches(NAME_PATTERN, raw)? {
        return Err(Error::InvalidInput("name contains invalid characters".into()));
    }
    Ok(raw)
}

/// Accepts a field type namespace: letters only, the empty string included.
pub fn validate_namespace_segment(raw: &str) -> Result<&str> {
    if !matches(NAMESPACE_SEGMENT_PATTERN, raw)? {
        return Err(Error::InvalidInput("namespace contains invalid characters".into()));
    }
    Ok(raw)
}

/// Validates a bundle namespace such as `Acme/BlogBundle` or `Acme\BlogBundle`.
///
/// Forward slashes are accepted and normalised to backslashes. When
/// `require_vendor` is set the namespace must be at least two levels deep.
///
/// # Returns
/// * `Result<String>` - The namespace with `\` separators
pub fn validate_bundle_namespace(raw: &str, require_vendor: bool) -> Result<String> {
    if !raw.ends_with(BUNDLE_SUFFIX) {
        return Err(Error::InvalidInput("the namespace must end with Bundle".into()));
    }

    let namespace = raw.replace('/', "\\");
    for segment in namespace.split(NAMESPACE_SEPARATOR) {
        if !matches(PHP_IDENTIFIER_PATTERN, segment)? {
            return Err(Error::InvalidInput(
                "the namespace contains invalid characters".into(),
            ));
        }
        if PHP_RESERVED_WORDS.contains(&segment.to_lowercase().as_str()) {
            return Err(Error::InvalidInput(format!(
                "the namespace cannot contain PHP reserved words (\"{segment}\")"
            )));
        }
    }

    if require_vendor && !namespace.contains(NAMESPACE_SEPARATOR) {
        return Err(Error::InvalidInput(format!(
            "the namespace must contain a vendor namespace (e.g. \"VendorName\\{namespace}\" instead of simply \"{namespace}\")"
        )));
    }

    Ok(namespace)
}

/// Accepts a bundle name: a PHP identifier ending in `Bundle`.
pub fn validate_bundle_name(raw: &str) -> Result<&str> {
    if !matches(PHP_IDENTIFIER_PATTERN, raw)? {
        return Err(Error::InvalidInput(format!(
            "the bundle name {raw} contains invalid characters"
        )));
    }
    if !raw.ends_with(BUNDLE_SUFFIX) {
        return Err(Error::InvalidInput("the bundle name must end with Bundle".into()));
    }
    Ok(raw)
}

/// Accepts any non-blank target directory.
pub fn validate_target_dir(raw: &str) -> Result<PathBuf> {
    if raw.trim().is_empty() {
        return Err(Error::InvalidInput("the target directory must not be empty".into()));
    }
    Ok(PathBuf::from(raw))
}

/// Bundle name suggested for a namespace: `Acme\Bundle\BlogBundle` -> `AcmeBlogBundle`.
pub fn suggest_bundle_name(namespace: &str) -> String {
    namespace.replace("\\Bundle\\", "").replace(NAMESPACE_SEPARATOR, "")
}
