/// Handles argument parsing, answer collection and the run workflow.
pub mod cli;

/// Constants used throughout the scaffolder.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Field type bundle generation.
pub mod generator;

/// Autoload checks and kernel registration in the host application.
pub mod integration;

/// Identifier derivation from human readable names.
pub mod naming;

/// The parameter set shared by every template.
pub mod parameters;

/// User input and interaction handling.
pub mod prompt;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Templates compiled into the binary.
pub mod skeleton;

/// The template manifest and its processing.
pub mod template;

/// Answer validators
pub mod validation;
