// src/ngram/generator/reduction.rs

use ahash::AHashMap;
use log::{info, debug, trace};
use rayon::prelude::*;

use crate::error::Result;
use crate::ngram::types::NGramCandidate;
use crate::types::TypeCount;

use super::core::NGramGenerator;

/// Position of each candidate phrase in the frozen candidate list.
struct CandidateIndex<'a> {
    candidates: &'a [NGramCandidate],
    by_phrase: AHashMap<&'a str, usize>,
}

impl<'a> CandidateIndex<'a> {
    fn new(candidates: &'a [NGramCandidate]) -> Self {
        let by_phrase = candidates
            .iter()
            .enumerate()
            .map(|(idx, candidate)| (candidate.phrase.as_str(), idx))
            .collect();
        Self { candidates, by_phrase }
    }
}

impl<P: crate::parser::TextParser + Sync + Send> NGramGenerator<P> {
    /// Remove the double credit that sub-phrases get from longer phrases
    /// matched in the same name.
    ///
    /// `candidates` must be ordered longest first and is only read. The
    /// corrected counts are written to a separate phrase -> count map and
    /// returned in candidate order.
    pub fn reduce_nested_counts(&self, names: &[String], candidates: &[NGramCandidate]) -> Result<Vec<TypeCount>> {
        let index = CandidateIndex::new(candidates);
        let mut mutable_counts: AHashMap<&str, usize> = candidates
            .iter()
            .map(|candidate| (candidate.phrase.as_str(), candidate.count))
            .collect();

        let decrements = if self.should_parallelize(names.len()) {
            let pool = self.build_pool()?;
            pool.install(|| {
                names
                    .par_iter()
                    .map(|name| self.nested_decrements(name, &index))
                    .fold(Vec::new, |mut acc, mut found| {
                        acc.append(&mut found);
                        acc
                    })
                    .reduce(Vec::new, |mut left, mut right| {
                        left.append(&mut right);
                        left
                    })
            })
        } else {
            names
                .iter()
                .flat_map(|name| self.nested_decrements(name, &index))
                .collect::<Vec<_>>()
        };

        debug!("Applying {} nested n-gram decrements", decrements.len());
        for idx in decrements {
            if let Some(count) = mutable_counts.get_mut(candidates[idx].phrase.as_str()) {
                *count = count.saturating_sub(1);
            }
        }

        let reduced: Vec<TypeCount> = candidates
            .iter()
            .map(|candidate| {
                let count = mutable_counts.get(candidate.phrase.as_str()).copied().unwrap_or(candidate.count);
                TypeCount::new(candidate.phrase.clone(), count)
            })
            .collect();

        info!("Reduced nested n-gram counts across {} names", names.len());
        Ok(reduced)
    }

    /// Candidates whose count this name should decrement.
    ///
    /// Walks the candidates present in the name in list order, tracking the
    /// longest order matched so far. A match shorter than that is presumed
    /// to sit inside the longer phrase and loses one count. Candidates seen
    /// in only one name are never touched.
    fn nested_decrements(&self, name: &str, index: &CandidateIndex<'_>) -> Vec<usize> {
        let mut matched: Vec<usize> = self
            .name_ngrams(name)
            .into_iter()
            .filter_map(|(_, phrase)| index.by_phrase.get(phrase.as_str()).copied())
            .filter(|&idx| index.candidates[idx].count > 1)
            .collect();
        matched.sort_unstable();

        let mut max_matched_n = 0;
        let mut decrements = Vec::new();
        for idx in matched {
            let candidate = &index.candidates[idx];
            if candidate.order >= max_matched_n {
                max_matched_n = candidate.order;
            } else {
                trace!("{:?}: '{}' nested in a longer match", name, candidate.phrase);
                decrements.push(idx);
            }
        }
        decrements
    }
}
