//! Domain layer containing business entities, value objects and the rule matcher.

pub mod entities;
pub mod matcher;
pub mod value_objects;

// Re-export commonly used domain types
pub use entities::*;
pub use matcher::matches;
pub use value_objects::*;
