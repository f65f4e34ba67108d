/// One skeleton template and where its rendered output goes.
///
/// `output` is itself a template, rendered with the same parameters as the
/// file content and resolved relative to the bundle's target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry {
    pub template: &'static str,
    pub output: &'static str,
}

const fn entry(template: &'static str, output: &'static str) -> ManifestEntry {
    ManifestEntry { template, output }
}

/// Files generated for every field type bundle.
pub const MANIFEST: &[ManifestEntry] = &[
    entry("fieldtype/src/bundle/Bundle.php.j2", "src/bundle/{{ bundle }}.php"),
    entry(
        "fieldtype/src/bundle/DependencyInjection/Extension.php.j2",
        "src/bundle/DependencyInjection/{{ bundle_basename }}Extension.php",
    ),
    entry(
        "fieldtype/src/lib/FieldType/SearchField.php.j2",
        "src/lib/FieldType/{{ fieldtype_basename }}/SearchField.php",
    ),
    entry(
        "fieldtype/src/lib/FieldType/Type.php.j2",
        "src/lib/FieldType/{{ fieldtype_basename }}/Type.php",
    ),
    entry(
        "fieldtype/src/lib/FieldType/Value.php.j2",
        "src/lib/FieldType/{{ fieldtype_basename }}/Value.php",
    ),
    entry(
        "fieldtype/src/lib/FieldType/Mapper/FormMapper.php.j2",
        "src/lib/FieldType/Mapper/{{ fieldtype_basename }}FormMapper.php",
    ),
    entry(
        "fieldtype/src/lib/Persistence/Legacy/Content/FieldValue/Converter/Converter.php.j2",
        "src/lib/Persistence/Legacy/Content/FieldValue/Converter/{{ fieldtype_basename }}Converter.php",
    ),
    entry(
        "fieldtype/src/lib/Form/Type/FieldType/FieldType.php.j2",
        "src/lib/Form/Type/FieldType/{{ fieldtype_basename }}FieldType.php",
    ),
    entry(
        "fieldtype/src/bundle/Resources/config/field_templates.yml.j2",
        "src/bundle/Resources/config/field_templates.yml",
    ),
    entry(
        "fieldtype/src/bundle/Resources/config/field_value_converters.yml.j2",
        "src/bundle/Resources/config/field_value_converters.yml",
    ),
    entry(
        "fieldtype/src/bundle/Resources/config/fieldtypes.yml.j2",
        "src/bundle/Resources/config/fieldtypes.yml",
    ),
    entry(
        "fieldtype/src/bundle/Resources/config/indexable_fieldtypes.yml.j2",
        "src/bundle/Resources/config/indexable_fieldtypes.yml",
    ),
    entry(
        "fieldtype/src/bundle/Resources/views/content_fields.html.twig.j2",
        "src/bundle/Resources/views/content_fields.html.twig",
    ),
    entry(
        "fieldtype/src/bundle/Resources/views/field_types.html.twig.j2",
        "src/bundle/Resources/views/field_types.html.twig",
    ),
    entry(
        "fieldtype/src/bundle/Resources/views/fielddefinition_settings.html.twig.j2",
        "src/bundle/Resources/views/fielddefinition_settings.html.twig",
    ),
    entry(
        "fieldtype/src/bundle/Resources/translations/ezrepoforms_content_type.en.yml.j2",
        "src/bundle/Resources/translations/ezrepoforms_content_type.en.yml",
    ),
    entry(
        "fieldtype/src/bundle/Resources/translations/fieldtypes.en.yml.j2",
        "src/bundle/Resources/translations/fieldtypes.en.yml",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton;
    use std::collections::HashSet;

    #[test]
    fn every_entry_has_a_builtin_template() {
        for entry in MANIFEST {
            assert!(
                skeleton::lookup(entry.template).is_some(),
                "missing template {}",
                entry.template
            );
        }
    }

    #[test]
    fn output_patterns_are_unique_and_relative() {
        let outputs: HashSet<_> = MANIFEST.iter().map(|e| e.output).collect();
        assert_eq!(outputs.len(), MANIFEST.len());
        assert!(MANIFEST.iter().all(|e| !e.output.starts_with('/')));
    }

    #[test]
    fn template_ids_are_unique() {
        let templates: HashSet<_> = MANIFEST.iter().map(|e| e.template).collect();
        assert_eq!(templates.len(), MANIFEST.len());
    }
}
