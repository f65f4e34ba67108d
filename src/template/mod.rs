//! The fixed template manifest and its rendering.

pub mod manifest;
pub mod operation;
pub mod processor;

pub use manifest::{ManifestEntry, MANIFEST};
