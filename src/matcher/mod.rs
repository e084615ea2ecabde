pub mod algorithms;
pub mod types;

// Re-export the main types
pub use self::algorithms::{match_type_string, TypeMatcher, NO_MATCH};
pub use self::types::TypeVocabulary;
