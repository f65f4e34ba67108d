#![allow(dead_code)]

use fieldtype_scaffold::error::{Error, Result};
use fieldtype_scaffold::generator::GenerationRequest;
use fieldtype_scaffold::prompt::{
    ConfirmationConfig, ConfirmationPrompter, Narrator, TextPromptConfig, TextPrompter,
};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Files generated for `Acme\FooBundle` / `AcmeFooBundle` / `My Field`,
/// relative to the bundle directory.
pub const EXPECTED_FILES: [&str; 17] = [
    "src/bundle/AcmeFooBundle.php",
    "src/bundle/DependencyInjection/AcmeFooExtension.php",
    "src/lib/FieldType/MyField/SearchField.php",
    "src/lib/FieldType/MyField/Type.php",
    "src/lib/FieldType/MyField/Value.php",
    "src/lib/FieldType/Mapper/MyFieldFormMapper.php",
    "src/lib/Persistence/Legacy/Content/FieldValue/Converter/MyFieldConverter.php",
    "src/lib/Form/Type/FieldType/MyFieldFieldType.php",
    "src/bundle/Resources/config/field_templates.yml",
    "src/bundle/Resources/config/field_value_converters.yml",
    "src/bundle/Resources/config/fieldtypes.yml",
    "src/bundle/Resources/config/indexable_fieldtypes.yml",
    "src/bundle/Resources/views/content_fields.html.twig",
    "src/bundle/Resources/views/field_types.html.twig",
    "src/bundle/Resources/views/fielddefinition_settings.html.twig",
    "src/bundle/Resources/translations/ezrepoforms_content_type.en.yml",
    "src/bundle/Resources/translations/fieldtypes.en.yml",
];

/// The request every end-to-end test starts from.
pub fn acme_request(base_dir: &Path) -> GenerationRequest {
    GenerationRequest::new("Acme\\FooBundle", "AcmeFooBundle", base_dir, "My Field", "acme")
}

/// Every file below `root`, relative and `/`-separated, sorted.
pub fn relative_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap();
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    files.sort();
    files
}

/// Paths and contents of everything below `root`, for before/after comparisons.
pub fn snapshot(root: &Path) -> Vec<(String, Vec<u8>)> {
    let snapshot: Vec<_> = relative_files(root)
        .into_iter()
        .map(|rel| {
            let content = fs::read(root.join(&rel)).unwrap();
            (rel, content)
        })
        .collect();
    debug!("Snapshot of {}: {} files", root.display(), snapshot.len());
    snapshot
}

/// Prompter for runs that must not ask anything; every confirmation is accepted.
#[derive(Default)]
pub struct AcceptingPrompter;

impl TextPrompter for AcceptingPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        Err(Error::Other(anyhow::anyhow!("unexpected question: {}", config.prompt)))
    }
}

impl ConfirmationPrompter for AcceptingPrompter {
    fn prompt_confirmation(&self, _config: &ConfirmationConfig) -> Result<bool> {
        Ok(true)
    }
}

impl Narrator for AcceptingPrompter {
    fn say(&self, message: &str) {
        debug!("{message}");
    }
}
