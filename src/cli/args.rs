use crate::constants::verbosity;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

const AFTER_HELP: &str = r#"By default the command asks for every value it needs. Any option passed
on the command line is used as the answer and not asked again:

  fieldtype-scaffold --namespace=Acme/FooBundle --fieldtype-name=Foo --fieldtype-namespace=acme

Use / instead of \ as the namespace delimiter to avoid shell quoting.

To disable any interaction pass --non-interactive together with all needed options:

  fieldtype-scaffold --namespace=Acme/FooBundle --dir=src --fieldtype-name=Foo \
      --fieldtype-namespace=acme [--bundle-name=...] --non-interactive

The bundle namespace must end with "Bundle"."#;

/// Skip confirmation prompts for specific stages.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum SkipConfirm {
    /// Skip every confirmation prompt.
    All,
    /// Skip the final confirmation before files are generated.
    Generation,
    /// Skip the confirmation before the kernel file is edited.
    Kernel,
}

impl Display for SkipConfirm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SkipConfirm::All => "all",
            SkipConfirm::Generation => "generation",
            SkipConfirm::Kernel => "kernel",
        };
        write!(f, "{s}")
    }
}

/// Generates the structure of a new eZ Platform field type bundle.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Args {
    /// Namespace of the bundle to create, e.g. `Acme/FooBundle`.
    #[arg(long)]
    pub namespace: Option<String>,

    /// Directory the bundle is created in.
    #[arg(long)]
    pub dir: Option<String>,

    /// Bundle name, derived from the namespace when omitted.
    #[arg(long = "bundle-name")]
    pub bundle_name: Option<String>,

    /// Human readable field type name, e.g. `My Field`.
    #[arg(long = "fieldtype-name")]
    pub fieldtype_name: Option<String>,

    /// Field type namespace prefixed to the field type identifier.
    #[arg(long = "fieldtype-namespace")]
    pub fieldtype_namespace: Option<String>,

    /// Root of the host application (holds `composer.json`).
    #[arg(long = "project-root", default_value = ".")]
    pub project_root: PathBuf,

    /// Kernel file to register the bundle in [default: <PROJECT_ROOT>/app/AppKernel.php].
    #[arg(long)]
    pub kernel: Option<PathBuf>,

    /// Directory with templates overriding the built-in skeleton.
    #[arg(long = "skeleton-dir")]
    pub skeleton_dir: Option<PathBuf>,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Predefined answers from a JSON or YAML file.
    #[arg(long = "answers-file")]
    pub answers_file: Option<PathBuf>,

    /// Confirmation prompts to skip (comma-separated).
    #[arg(long = "skip-confirms", value_delimiter = ',')]
    #[arg(value_enum)]
    pub skip_confirms: Vec<SkipConfirm>,

    /// Disable interactive prompts; all required options must be given.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview generated files without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Whether the confirmation for `stage` should be skipped.
    pub fn skips(&self, stage: SkipConfirm) -> bool {
        self.skip_confirms.contains(&SkipConfirm::All) || self.skip_confirms.contains(&stage)
    }
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
