pub mod generator;
pub mod types;

pub use self::generator::{NGramGenerator, unique_ngrams};
pub use self::types::{NGramCandidate, FrequencyTable, FrequencyEntry};

pub use crate::error::{Error, Result};
