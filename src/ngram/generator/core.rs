// src/ngram/generator/core.rs

use log::debug;

use crate::parser::TextParser;
use crate::config::subsystems::CollectorConfig;

// Corpora smaller than this are always processed sequentially
pub const MIN_PARALLEL_NAMES: usize = 10_000;

pub struct NGramGenerator<P: TextParser> {
    pub(crate) parser: P,
    pub(crate) config: CollectorConfig,
}

impl<P: TextParser + Sync + Send> NGramGenerator<P> {
    pub fn new(parser: P, config: CollectorConfig) -> Self {
        Self { parser, config }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Minimum number of names an n-gram must appear in to be kept.
    ///
    /// `min_support_ratio × number_of_names`, rounded half to even.
    pub fn minimum_support(&self, number_of_names: usize) -> usize {
        let support = (self.config.min_support_ratio * number_of_names as f64).round_ties_even();
        debug!("Minimum support for {} names: {}", number_of_names, support);
        support as usize
    }

    pub(crate) fn should_parallelize(&self, number_of_names: usize) -> bool {
        self.config.use_parallel && self.config.thread_count > 1 && number_of_names >= MIN_PARALLEL_NAMES
    }
}
