use crate::{
    cli::Args,
    constants::{DEFAULT_TARGET_DIR, NAMESPACE_SEPARATOR, STDIN_INDICATOR},
    error::{Error, Result},
    generator::GenerationRequest,
    prompt::{ask_validated, confirm, ConfirmationConfig, PromptProvider, TextPromptConfig},
    validation::{
        suggest_bundle_name, validate_bundle_name, validate_bundle_namespace, validate_name,
        validate_namespace_segment, validate_target_dir,
    },
};
use serde::Deserialize;
use std::path::Path;

/// Predefined answers, from an answers file, `--answers` or explicit flags.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Answers {
    pub namespace: Option<String>,
    pub dir: Option<String>,
    #[serde(alias = "bundle-name")]
    pub bundle_name: Option<String>,
    #[serde(alias = "fieldtype-name")]
    pub fieldtype_name: Option<String>,
    #[serde(alias = "fieldtype-namespace")]
    pub fieldtype_namespace: Option<String>,
}

impl Answers {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Loads a `.json`, `.yaml` or `.yml` answers file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&content),
            Some("yaml" | "yml") => Self::from_yaml(&content),
            _ => Err(Error::Other(anyhow::anyhow!(
                "Unsupported answers file format: {}",
                path.display()
            ))),
        }
    }

    /// Answers given directly as command line flags.
    pub fn from_args(args: &Args) -> Self {
        Self {
            namespace: args.namespace.clone(),
            dir: args.dir.clone(),
            bundle_name: args.bundle_name.clone(),
            fieldtype_name: args.fieldtype_name.clone(),
            fieldtype_namespace: args.fieldtype_namespace.clone(),
        }
    }

    /// Values present in `other` replace the ones in `self`.
    pub fn merge(self, other: Answers) -> Answers {
        Answers {
            namespace: other.namespace.or(self.namespace),
            dir: other.dir.or(self.dir),
            bundle_name: other.bundle_name.or(self.bundle_name),
            fieldtype_name: other.fieldtype_name.or(self.fieldtype_name),
            fieldtype_namespace: other.fieldtype_namespace.or(self.fieldtype_namespace),
        }
    }

    /// Combines every source, lowest precedence first:
    /// answers file, `--answers`, explicit flags.
    pub fn load(args: &Args) -> Result<Self> {
        let mut answers = Answers::default();

        if let Some(path) = &args.answers_file {
            log::debug!("Loading answers from {}", path.display());
            answers = answers.merge(Self::from_file(path)?);
        }

        if let Some(raw) = &args.answers {
            let content = if raw == STDIN_INDICATOR {
                read_from(std::io::stdin())?
            } else {
                raw.clone()
            };
            answers = answers.merge(Self::from_json(&content)?);
        }

        Ok(answers.merge(Self::from_args(args)))
    }
}

/// Read content from a reader into a string.
fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Turns predefined answers and user input into a validated [`GenerationRequest`].
pub struct AnswerCollector<'a> {
    prompter: &'a dyn PromptProvider,
    skip_generation_confirm: bool,
    default_dir: String,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn PromptProvider, skip_generation_confirm: bool) -> Self {
        Self { prompter, skip_generation_confirm, default_dir: DEFAULT_TARGET_DIR.to_string() }
    }

    /// Target directory suggested when none was given.
    pub fn with_default_dir(mut self, dir: &Path) -> Self {
        self.default_dir = dir.display().to_string();
        self
    }

    /// Builds the request from predefined answers alone.
    ///
    /// Every required answer must be present and valid; nothing is asked.
    pub fn from_answers(answers: &Answers) -> Result<GenerationRequest> {
        let namespace = validate_bundle_namespace(
            answers.namespace.as_deref().ok_or(Error::MissingOption("namespace"))?,
            false,
        )?;
        let bundle = match &answers.bundle_name {
            Some(bundle) => validate_bundle_name(bundle)?.to_string(),
            None => namespace.replace(NAMESPACE_SEPARATOR, ""),
        };
        let dir = validate_target_dir(answers.dir.as_deref().ok_or(Error::MissingOption("dir"))?)?;
        let fieldtype_name = validate_name(
            answers.fieldtype_name.as_deref().ok_or(Error::MissingOption("fieldtype-name"))?,
        )?;
        let fieldtype_namespace = validate_namespace_segment(
            answers
                .fieldtype_namespace
                .as_deref()
                .ok_or(Error::MissingOption("fieldtype-namespace"))?,
        )?;

        Ok(GenerationRequest::new(namespace, bundle, dir, fieldtype_name, fieldtype_namespace))
    }

    /// Runs the interactive dialog.
    ///
    /// Valid predefined answers are used without asking. Returns `None` when
    /// the developer declines the final confirmation.
    pub fn collect(&self, answers: &Answers) -> Result<Option<GenerationRequest>> {
        self.prompter.say("Welcome to the eZ Platform FieldType bundle generator");

        let namespace = self.collect_namespace(answers.namespace.as_deref())?;

        self.prompter.say("\nThe FieldType name is used to derive its class names and identifier.");
        let fieldtype_name = self.preset_or_ask(
            answers.fieldtype_name.as_deref(),
            TextPromptConfig::new("FieldType name"),
            |raw| validate_name(raw).map(str::to_owned),
        )?;

        self.prompter
            .say("\nThe FieldType namespace prefixes the FieldType identifier (letters only, may be empty).");
        let fieldtype_namespace = self.preset_or_ask(
            answers.fieldtype_namespace.as_deref(),
            TextPromptConfig::new("FieldType namespace").allow_empty(true),
            |raw| validate_namespace_segment(raw).map(str::to_owned),
        )?;

        self.prompter.say(&format!(
            "\nIn your code, a bundle is often referenced by its name. It can be the\n\
             concatenation of all namespace parts but it's really up to you to come\n\
             up with a unique name (a good practice is to start with the vendor name).\n\
             Based on the namespace, we suggest {}.",
            suggest_bundle_name(&namespace)
        ));
        let bundle = self.preset_or_ask(
            answers.bundle_name.as_deref(),
            TextPromptConfig::new("Bundle name").with_default(Some(suggest_bundle_name(&namespace).as_str())),
            |raw| validate_bundle_name(raw).map(str::to_owned),
        )?;

        self.prompter.say(&format!(
            "\nThe bundle can be generated anywhere. The suggested default directory uses\n\
             the standard conventions. The namespace path {} is created below it.",
            namespace.replace(NAMESPACE_SEPARATOR, "/")
        ));
        let dir = self.preset_or_ask(
            answers.dir.as_deref(),
            TextPromptConfig::new("Target directory").with_default(Some(self.default_dir.as_str())),
            validate_target_dir,
        )?;

        let request =
            GenerationRequest::new(namespace, bundle, dir, fieldtype_name, fieldtype_namespace);

        self.prompter.say(&format!(
            "\nSummary before generation\n\n\
             You are going to generate a \"{}\" bundle\n\
             in \"{}\" with the \"{}\" FieldType.\n",
            request.bundle_class(),
            request.base_dir.display(),
            request.fieldtype_name
        ));

        if !confirm(self.prompter, self.skip_generation_confirm, "Do you confirm generation")? {
            self.prompter.say("Command aborted");
            return Ok(None);
        }

        Ok(Some(request))
    }

    /// Asks for the bundle namespace.
    ///
    /// A namespace without a vendor segment is accepted only after the
    /// developer confirms keeping it.
    fn collect_namespace(&self, preset: Option<&str>) -> Result<String> {
        if let Some(raw) = preset {
            match validate_bundle_namespace(raw, false) {
                Ok(namespace) => return Ok(namespace),
                Err(Error::InvalidInput(msg)) => {
                    self.prompter.say(&format!("Invalid answer: {msg}."))
                }
                Err(e) => return Err(e),
            }
        }

        self.prompter.say(
            "\nYour application code must be written in bundles. The namespace should\n\
             begin with a \"vendor\" name like your company name, your project name, or\n\
             your client name, followed by one or more optional category sub-namespaces,\n\
             and it should end with the bundle name itself (which must have Bundle as a\n\
             suffix). Use / instead of \\ for the namespace delimiter to avoid any problem.",
        );

        let config = TextPromptConfig::new("Bundle namespace");
        loop {
            let namespace =
                ask_validated(self.prompter, &config, |raw| validate_bundle_namespace(raw, false))?;
            if namespace.contains(NAMESPACE_SEPARATOR) {
                return Ok(namespace);
            }

            self.prompter.say(&format!(
                "\nThe namespace sometimes contains a vendor namespace (e.g. VendorName/BlogBundle instead of simply {namespace}).\n\
                 If you *did* type a vendor namespace, try using a forward slash / (Acme/BlogBundle)."
            ));
            let keep = self.prompter.prompt_confirmation(&ConfirmationConfig {
                prompt: format!(
                    "Keep {namespace} as the bundle namespace (choose no to try again)?"
                ),
                default: true,
            })?;
            if keep {
                return Ok(namespace);
            }
        }
    }

    /// Uses a valid preset as is; an invalid one is reported and asked again.
    fn preset_or_ask<T>(
        &self,
        preset: Option<&str>,
        config: TextPromptConfig,
        validate: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        if let Some(value) = preset {
            match validate(value) {
                Ok(accepted) => return Ok(accepted),
                Err(Error::InvalidInput(msg)) => {
                    self.prompter.say(&format!("Invalid answer: {msg}."))
                }
                Err(e) => return Err(e),
            }
        }
        ask_validated(self.prompter, &config, validate)
    }
}
