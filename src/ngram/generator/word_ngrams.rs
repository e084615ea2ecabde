// src/ngram/generator/word_ngrams.rs

use ahash::AHashSet;
use log::trace;

use super::core::NGramGenerator;

/// The distinct n-grams of order `n` in a token sequence.
///
/// Slides a window of width `n` over the `len - n + 1` positions and keeps
/// each phrase once, in order of its first window.
pub fn unique_ngrams<S: AsRef<str>>(tokens: &[S], n: usize) -> Vec<String> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }

    let mut seen = AHashSet::with_capacity(tokens.len() - n + 1);
    let mut ngrams = Vec::with_capacity(tokens.len() - n + 1);

    for window in tokens.windows(n) {
        let phrase = window
            .iter()
            .map(|token| token.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        if seen.insert(phrase.clone()) {
            ngrams.push(phrase);
        }
    }

    ngrams
}

impl<P: crate::parser::TextParser + Sync + Send> NGramGenerator<P> {
    /// Every distinct n-gram of a cleaned name, as `(order, phrase)`,
    /// shortest order first.
    pub fn name_ngrams(&self, cleaned_name: &str) -> Vec<(usize, String)> {
        let tokens = self.parser.tokenize_text(cleaned_name);
        let max_order = tokens.len().min(self.config.max_ngram_size);

        let mut ngrams = Vec::new();
        for n in 1..=max_order {
            ngrams.extend(unique_ngrams(&tokens, n).into_iter().map(|phrase| (n, phrase)));
        }

        trace!("{:?}: {} tokens, {} distinct n-grams", cleaned_name, tokens.len(), ngrams.len());
        ngrams
    }
}
