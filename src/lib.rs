//! typefinder discovers recurring "type" phrases in lists of names, such as
//! "district hospital" or "health centre" in a register of facility names,
//! and matches names back against the discovered vocabulary.
//!
//! Extraction is deterministic and frequency driven: names are normalized,
//! their word n-grams are counted by document frequency, counts of phrases
//! nested inside longer matches are corrected, and the most frequent phrases
//! are selected and tidied by a normalization rule.

// Module declarations
pub mod error;
pub mod parser;
pub mod ngram;
pub mod extractor;
pub mod rules;
pub mod matcher;
pub mod utils;
pub mod config;
pub mod types;

// Re-exports
pub use error::{Error, Result};
pub use extractor::{TypeExtractor, extract_types};
pub use matcher::{match_type_string, TypeMatcher, TypeVocabulary, NO_MATCH};
pub use rules::{NormalizationRule, AffixRule, NoRule};
pub use types::{NameValue, TypeCount, ExtractedType};
pub use config::subsystems::Threshold;

// Re-export the config from config module
pub use config::TypeFinderConfig;
