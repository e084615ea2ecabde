// types.rs
use serde::{Serialize, Deserialize};

use crate::types::{ExtractedType, TypeCount};
use crate::utils::string::word_count;

/// Type phrases ordered most specific first: more words before fewer,
/// then longer before shorter. Equal phrases keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeVocabulary {
    types: Vec<String>,
}

impl TypeVocabulary {
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types: Vec<String> = phrases
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .filter(|p| !p.trim().is_empty())
            .collect();
        types.sort_by(|a, b| {
            word_count(b)
                .cmp(&word_count(a))
                .then(b.len().cmp(&a.len()))
        });
        Self { types }
    }

    pub fn from_counts(counts: &[TypeCount]) -> Self {
        Self::from_phrases(counts.iter().map(|t| t.phrase.as_str()))
    }

    pub fn from_extracted(types: &[ExtractedType]) -> Self {
        Self::from_phrases(types.iter().map(|t| t.phrase.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TypeVocabulary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_phrases(iter)
    }
}
