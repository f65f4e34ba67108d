//! Template rendering: the renderer trait and its MiniJinja implementation.

pub mod filters;
pub mod interface;
pub mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
pub use interface::TemplateRenderer;
