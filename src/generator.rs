//! Field type bundle generation: target checks, parameters, manifest rendering.

use crate::{
    constants::NAMESPACE_SEPARATOR,
    error::{Error, Result},
    ext::PathExt,
    parameters::ParameterSet,
    renderer::TemplateRenderer,
    template::{processor::TemplateProcessor, MANIFEST},
};
use log::{debug, info};
use std::path::{Path, PathBuf};

/// The five validated answers a generation run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Bundle namespace with `\` separators, e.g. `Acme\FooBundle`
    pub namespace: String,
    /// Bundle name ending in `Bundle`, e.g. `AcmeFooBundle`
    pub bundle: String,
    /// Directory the namespace path is created under
    pub base_dir: PathBuf,
    /// Human readable field type name, e.g. `My Field`
    pub fieldtype_name: String,
    /// Letters-only field type namespace, possibly empty
    pub fieldtype_namespace: String,
}

impl GenerationRequest {
    pub fn new(
        namespace: impl Into<String>,
        bundle: impl Into<String>,
        base_dir: impl Into<PathBuf>,
        fieldtype_name: impl Into<String>,
        fieldtype_namespace: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            bundle: bundle.into(),
            base_dir: base_dir.into(),
            fieldtype_name: fieldtype_name.into(),
            fieldtype_namespace: fieldtype_namespace.into(),
        }
    }

    /// `base_dir` followed by one directory per namespace segment.
    pub fn target_dir(&self) -> PathBuf {
        self.namespace
            .split(NAMESPACE_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .fold(self.base_dir.clone(), |dir, segment| dir.join(segment))
    }

    /// Fully qualified class name of the generated bundle class.
    pub fn bundle_class(&self) -> String {
        format!("{}{}{}", self.namespace, NAMESPACE_SEPARATOR, self.bundle)
    }
}

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub target_dir: PathBuf,
    /// Every generated file in manifest order (not written in dry-run mode)
    pub files: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Ensures the target directory is absent, or an empty writable directory.
///
/// The checks run in a fixed order and the first failure wins; nothing is
/// written by this function.
pub fn check_target_dir(target_dir: &Path) -> Result<()> {
    if !target_dir.exists() {
        debug!("Target directory {} does not exist yet", target_dir.display());
        return Ok(());
    }

    let path = target_dir.to_absolute().display().to_string();
    if !target_dir.is_dir() {
        return Err(Error::TargetNotDirectory { path });
    }
    match target_dir.is_empty_dir() {
        Ok(true) => {}
        Ok(false) => return Err(Error::TargetNotEmpty { path }),
        Err(source) => return Err(Error::TargetNotReadable { path, source }),
    }
    if !target_dir.is_writable_dir() {
        return Err(Error::TargetNotWritable { path });
    }
    Ok(())
}

/// Renders the field type skeleton into a fresh directory.
pub struct FieldTypeGenerator<'a> {
    engine: &'a dyn TemplateRenderer,
    dry_run: bool,
}

impl<'a> FieldTypeGenerator<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer) -> Self {
        Self { engine, dry_run: false }
    }

    /// Render everything but write nothing.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Generates the bundle described by `request`.
    ///
    /// The target checks run and every template is rendered before anything
    /// touches the filesystem. A write failure stops the run and leaves the
    /// files written so far in place.
    pub fn generate(&self, request: &GenerationRequest) -> Result<GenerationReport> {
        let target_dir = request.target_dir();
        check_target_dir(&target_dir)?;

        let parameters = ParameterSet::from_request(request)?;
        debug!("Template parameters: {parameters:?}");
        let context = parameters.to_context()?;

        let processor = TemplateProcessor::new(self.engine, &target_dir, &context);
        let rendered = MANIFEST
            .iter()
            .map(|entry| processor.process(entry))
            .collect::<Result<Vec<_>>>()?;

        let mut files = Vec::with_capacity(rendered.len());
        for file in rendered {
            if !self.dry_run {
                file.write()?;
            }
            info!("{}", file.get_message(self.dry_run));
            files.push(file.target);
        }

        Ok(GenerationReport { target_dir, files, dry_run: self.dry_run })
    }
}
