use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    /// A raw user answer was rejected by one of the validators.
    #[error("Invalid input: {0}.")]
    InvalidInput(String),

    #[error("Unable to generate the bundle as the target directory '{path}' exists but is a file.")]
    TargetNotDirectory { path: String },

    #[error("Unable to generate the bundle as the target directory '{path}' is not empty.")]
    TargetNotEmpty { path: String },

    #[error("Unable to generate the bundle as the target directory '{path}' is not writable.")]
    TargetNotWritable { path: String },

    #[error("Unable to generate the bundle as the target directory '{path}' cannot be read. Original error: {source}")]
    TargetNotReadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing a rendered file failed; files written before it are left in place.
    #[error("Failed to write '{path}'. Original error: {source}")]
    RenderWriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Bundle name '{bundle}' does not end with 'Bundle'.")]
    BundleSuffixMissing { bundle: String },

    #[error("The \"{0}\" option must be provided.")]
    MissingOption(&'static str),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON answers: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML answers: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Prompt failed: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Invalid pattern: {0}")]
    RegexError(#[from] regex::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
