// Re-export the case conversion functions registered as template filters
pub use cruet::case::{
    camel::to_camel_case, kebab::to_kebab_case, pascal::to_pascal_case,
    screaming_snake::to_screaming_snake_case, snake::to_snake_case,
};

pub use crate::naming::{to_identifier, to_underscored};
