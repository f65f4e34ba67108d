//! The parameter set every skeleton template is rendered with.
//!
//! Parameter names are referenced verbatim by the templates, including
//! user-provided skeleton overrides, so they must not change.

use crate::{
    constants::BUNDLE_SUFFIX,
    error::Result,
    generator::GenerationRequest,
    naming::{bundle_basename, extension_alias, to_identifier, to_lower_identifier},
};
use indexmap::IndexMap;
use serde::Serialize;

/// Immutable name → value mapping derived once per generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
    values: IndexMap<&'static str, String>,
}

impl ParameterSet {
    /// Derives all parameters from a request.
    ///
    /// # Returns
    /// * `Err(Error::BundleSuffixMissing)` - if the bundle name lacks `Bundle`
    pub fn from_request(request: &GenerationRequest) -> Result<Self> {
        let basename = bundle_basename(&request.bundle)?;

        let values = IndexMap::from([
            ("namespace", request.namespace.replace(BUNDLE_SUFFIX, "")),
            ("bundle", request.bundle.clone()),
            ("bundle_basename", basename.to_string()),
            ("bundle_basename_lower", basename.to_lowercase()),
            ("extension_alias", extension_alias(basename)),
            ("fieldtype_name", request.fieldtype_name.clone()),
            ("fieldtype_basename", to_identifier(&request.fieldtype_name)),
            ("fieldtype_identifier", to_lower_identifier(&request.fieldtype_name)),
            ("fieldtype_namespace", request.fieldtype_namespace.clone()),
            (
                "fieldtype_namespace_identifier",
                to_lower_identifier(&request.fieldtype_namespace),
            ),
        ]);

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parameters in derivation order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The parameters as a template context object.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn request(namespace: &str, bundle: &str, name: &str, ns: &str) -> GenerationRequest {
        GenerationRequest::new(namespace, bundle, "/tmp/out", name, ns)
    }

    #[test]
    fn derives_every_parameter() {
        let params =
            ParameterSet::from_request(&request("Acme\\FooBundle", "AcmeFooBundle", "My Field", "acme"))
                .unwrap();

        let expected = [
            ("namespace", "Acme\\Foo"),
            ("bundle", "AcmeFooBundle"),
            ("bundle_basename", "AcmeFoo"),
            ("bundle_basename_lower", "acmefoo"),
            ("extension_alias", "acme_foo"),
            ("fieldtype_name", "My Field"),
            ("fieldtype_basename", "MyField"),
            ("fieldtype_identifier", "myfield"),
            ("fieldtype_namespace", "acme"),
            ("fieldtype_namespace_identifier", "acme"),
        ];
        assert_eq!(params.iter().collect::<Vec<_>>(), expected);
        assert_eq!(params.len(), expected.len());
    }

    #[test]
    fn removes_every_bundle_occurrence_from_namespace() {
        let params = ParameterSet::from_request(&request(
            "Acme\\Bundle\\BlogBundle",
            "AcmeBlogBundle",
            "Blog Post",
            "",
        ))
        .unwrap();
        assert_eq!(params.get("namespace"), Some("Acme\\\\Blog"));
        assert_eq!(params.get("fieldtype_namespace_identifier"), Some(""));
    }

    #[test]
    fn bundle_without_suffix_is_a_contract_error() {
        let err = ParameterSet::from_request(&request("Acme\\FooBundle", "AcmeFoo", "Foo", ""))
            .unwrap_err();
        assert!(matches!(err, Error::BundleSuffixMissing { .. }));
    }

    #[test]
    fn context_is_a_flat_string_object() {
        let params =
            ParameterSet::from_request(&request("Acme\\FooBundle", "AcmeFooBundle", "HTML Field", "Acme"))
                .unwrap();
        let context = params.to_context().unwrap();
        assert_eq!(context["fieldtype_basename"], "HTMLField");
        assert_eq!(context["fieldtype_identifier"], "htmlfield");
        assert_eq!(context["fieldtype_namespace_identifier"], "acme");
        assert_eq!(context.as_object().unwrap().len(), params.len());
    }
}
