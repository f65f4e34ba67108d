//! Skeleton templates compiled into the binary, keyed by template id.

macro_rules! skeleton {
    ($($name:literal),+ $(,)?) => {
        &[$(($name, include_str!(concat!("../skeleton/", $name)))),+]
    };
}

/// Every built-in template as `(id, source)`.
pub const SKELETON: &[(&str, &str)] = skeleton![
    "fieldtype/src/bundle/Bundle.php.j2",
    "fieldtype/src/bundle/DependencyInjection/Extension.php.j2",
    "fieldtype/src/lib/FieldType/SearchField.php.j2",
    "fieldtype/src/lib/FieldType/Type.php.j2",
    "fieldtype/src/lib/FieldType/Value.php.j2",
    "fieldtype/src/lib/FieldType/Mapper/FormMapper.php.j2",
    "fieldtype/src/lib/Persistence/Legacy/Content/FieldValue/Converter/Converter.php.j2",
    "fieldtype/src/lib/Form/Type/FieldType/FieldType.php.j2",
    "fieldtype/src/bundle/Resources/config/field_templates.yml.j2",
    "fieldtype/src/bundle/Resources/config/field_value_converters.yml.j2",
    "fieldtype/src/bundle/Resources/config/fieldtypes.yml.j2",
    "fieldtype/src/bundle/Resources/config/indexable_fieldtypes.yml.j2",
    "fieldtype/src/bundle/Resources/views/content_fields.html.twig.j2",
    "fieldtype/src/bundle/Resources/views/field_types.html.twig.j2",
    "fieldtype/src/bundle/Resources/views/fielddefinition_settings.html.twig.j2",
    "fieldtype/src/bundle/Resources/translations/ezrepoforms_content_type.en.yml.j2",
    "fieldtype/src/bundle/Resources/translations/fieldtypes.en.yml.j2",
];

/// Looks up a built-in template source by id.
pub fn lookup(name: &str) -> Option<&'static str> {
    SKELETON.iter().find(|(id, _)| *id == name).map(|(_, source)| *source)
}
