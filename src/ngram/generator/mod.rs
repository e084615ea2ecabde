// src/ngram/generator/mod.rs

mod core;
mod word_ngrams;
mod parallel;
mod reduction;

// Re-export the main types and structs
pub use self::core::{NGramGenerator, MIN_PARALLEL_NAMES};
pub use self::word_ngrams::unique_ngrams;
