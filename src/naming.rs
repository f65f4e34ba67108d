//! Casing variants derived from human-supplied names.
//!
//! Everything here is pure string manipulation: the generator feeds the
//! results into the template parameters, the renderer exposes them as filters.

use crate::constants::BUNDLE_SUFFIX;
use crate::error::{Error, Result};

/// Splits a name into underscore-separated words.
///
/// Spaces and existing underscores are dropped first. An underscore is then
/// inserted before an upper-case letter that follows a lower-case letter or a
/// digit, and before the last capital of an upper-case run when that capital
/// starts a capitalised word. Letter case is left untouched.
///
/// ```
/// use fieldtype_scaffold::naming::to_underscored;
///
/// assert_eq!(to_underscored("MyFieldType"), "My_Field_Type");
/// assert_eq!(to_underscored("HTMLField"), "HTML_Field");
/// ```
pub fn to_underscored(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().filter(|c| *c != ' ' && *c != '_').collect();
    let mut underscored = String::with_capacity(chars.len() + chars.len() / 2);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let after_word = prev.is_ascii_lowercase() || prev.is_ascii_digit();
            let ends_acronym = prev.is_ascii_uppercase() && next_is_lower;
            if after_word || ends_acronym {
                underscored.push('_');
            }
        }
        underscored.push(c);
    }

    underscored
}

/// Compacts a name into a separator-free token, keeping the letter case.
///
/// ```
/// use fieldtype_scaffold::naming::to_identifier;
///
/// assert_eq!(to_identifier("My Field Type"), "MyFieldType");
/// ```
pub fn to_identifier(raw: &str) -> String {
    to_underscored(raw).replace('_', "")
}

/// Lower-cased [`to_identifier`].
pub fn to_lower_identifier(raw: &str) -> String {
    to_identifier(raw).to_lowercase()
}

/// Strips the trailing `Bundle` from a bundle name.
///
/// Upstream validation guarantees the suffix, so its absence is reported as
/// a contract violation rather than guessed around.
pub fn bundle_basename(bundle: &str) -> Result<&str> {
    bundle
        .strip_suffix(BUNDLE_SUFFIX)
        .ok_or_else(|| Error::BundleSuffixMissing { bundle: bundle.to_string() })
}

/// Container extension alias of a bundle basename (`AcmeFoo` -> `acme_foo`).
pub fn extension_alias(basename: &str) -> String {
    to_underscored(basename).to_lowercase()
}
