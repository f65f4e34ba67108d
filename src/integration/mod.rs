//! Post-generation integration with the host application.
//!
//! Both steps only ever produce follow-up notes for the developer; by the time
//! they run the bundle has been generated and nothing here can undo that.

pub mod autoload;
pub mod kernel;

pub use autoload::ComposerAutoloader;
pub use kernel::KernelFileRegistrar;

use crate::error::Result;
use log::warn;
use std::{fmt, path::PathBuf};

/// Reports whether a class can currently be loaded by the host application.
pub trait AutoloadChecker {
    fn is_loadable(&self, class: &str) -> bool;
}

/// Outcome of an attempt to register a bundle with the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    AlreadyRegistered,
    /// The registration list could not be located or edited automatically.
    Unsupported,
}

/// Appends a bundle to the host application's startup list.
pub trait BundleRegistrar {
    fn register(&self, class: &str) -> Result<Registration>;

    /// File a developer should edit when registration has to be done by hand.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}

/// Manual steps left to the developer after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    RegisterAutoload { namespace: String },
    AlreadyRegistered { class: String },
    RegisterManually { class: String, location: Option<PathBuf> },
}

impl fmt::Display for FollowUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowUp::RegisterAutoload { namespace } => write!(
                f,
                "- Edit the composer.json file and register the bundle\n  namespace \"{namespace}\" in the \"autoload\" section."
            ),
            FollowUp::AlreadyRegistered { class } => write!(
                f,
                "Bundle {class} is already defined in AppKernel::registerBundles()."
            ),
            FollowUp::RegisterManually { class, location } => {
                match location {
                    Some(path) => writeln!(f, "- Edit {}", path.display())?,
                    None => writeln!(f, "- Edit your application kernel")?,
                }
                write!(
                    f,
                    "  and add the following bundle in the AppKernel::registerBundles() method:\n\n    new {class}(),"
                )
            }
        }
    }
}

/// Checks that the generated bundle class is autoloadable.
pub fn check_autoloader(
    checker: &dyn AutoloadChecker,
    namespace: &str,
    class: &str,
) -> Option<FollowUp> {
    if checker.is_loadable(class) {
        None
    } else {
        Some(FollowUp::RegisterAutoload { namespace: namespace.to_string() })
    }
}

/// Registers the bundle unless the developer declined automatic updates.
///
/// Registration errors are logged and turned into manual instructions.
pub fn update_kernel(
    registrar: &dyn BundleRegistrar,
    class: &str,
    auto: bool,
) -> Option<FollowUp> {
    let manual =
        || FollowUp::RegisterManually { class: class.to_string(), location: registrar.location() };

    if !auto {
        return Some(manual());
    }

    match registrar.register(class) {
        Ok(Registration::Registered) => None,
        Ok(Registration::AlreadyRegistered) => {
            Some(FollowUp::AlreadyRegistered { class: class.to_string() })
        }
        Ok(Registration::Unsupported) => Some(manual()),
        Err(e) => {
            warn!("Failed to register {class} automatically: {e}");
            Some(manual())
        }
    }
}
