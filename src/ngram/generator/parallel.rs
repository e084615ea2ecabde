// src/ngram/generator/parallel.rs

use log::{info, debug};
use rayon::prelude::*;

use crate::error::Result;
use crate::ngram::types::FrequencyTable;

use super::core::NGramGenerator;

impl<P: crate::parser::TextParser + Sync + Send> NGramGenerator<P> {
    /// Build the document-frequency table for a list of cleaned names.
    pub fn collect_frequencies(&self, names: &[String]) -> Result<FrequencyTable> {
        if self.should_parallelize(names.len()) {
            info!("{} names meet parallel threshold. Using {} threads.", names.len(), self.config.thread_count);
            self.collect_frequencies_parallel(names)
        } else {
            debug!("Using sequential n-gram collection for {} names", names.len());
            Ok(self.collect_frequencies_sequential(names))
        }
    }

    pub fn collect_frequencies_sequential(&self, names: &[String]) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        for (name_idx, name) in names.iter().enumerate() {
            self.record_name(&mut table, name_idx, name);
        }
        info!("Collected {} distinct n-grams from {} names", table.len(), names.len());
        table
    }

    /// Collects per-name tables on a rayon pool and merges them. The merge
    /// keeps the earliest discovery key, so the candidate order matches a
    /// sequential run exactly.
    pub fn collect_frequencies_parallel(&self, names: &[String]) -> Result<FrequencyTable> {
        let pool = self.build_pool()?;
        let table = pool.install(|| {
            names
                .par_iter()
                .enumerate()
                .fold(FrequencyTable::new, |mut table, (name_idx, name)| {
                    self.record_name(&mut table, name_idx, name);
                    table
                })
                .reduce(FrequencyTable::new, FrequencyTable::merge)
        });
        info!("Collected {} distinct n-grams from {} names in parallel", table.len(), names.len());
        Ok(table)
    }

    pub(crate) fn build_pool(&self) -> Result<rayon::ThreadPool> {
        Ok(rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.thread_count)
            .build()?)
    }

    fn record_name(&self, table: &mut FrequencyTable, name_idx: usize, name: &str) {
        for (position, (order, phrase)) in self.name_ngrams(name).into_iter().enumerate() {
            table.record(phrase, order, (name_idx, position));
        }
    }
}
