//! The type extraction pipeline: clean, collect, reduce, select, rewrite.

pub mod selector;

use log::{info, debug, trace};

use crate::config::TypeFinderConfig;
use crate::config::subsystems::SelectorConfig;
use crate::error::Result;
use crate::ngram::NGramGenerator;
use crate::parser::{LatinParser, TextParser};
use crate::rules::{self, NormalizationRule};
use crate::types::{ExtractedType, NameValue, TypeCount};

pub use self::selector::{select, minimum_count, sort_by_count};

pub struct TypeExtractor {
    config: TypeFinderConfig,
    generator: NGramGenerator<LatinParser>,
    rule: Option<Box<dyn NormalizationRule>>,
}

impl TypeExtractor {
    /// Build an extractor; the rule comes from `config.rules`.
    pub fn new(config: TypeFinderConfig) -> Result<Self> {
        config.validate()?;
        let rule = rules::build_rule(&config.rules)?;
        let generator = NGramGenerator::new(
            LatinParser::new(config.parser.clone()),
            config.collector.clone(),
        );
        Ok(Self { config, generator, rule })
    }

    pub fn new_with_defaults() -> Result<Self> {
        Self::new(TypeFinderConfig::default())
    }

    /// Replace the normalization rule.
    pub fn with_rule<R: NormalizationRule + 'static>(mut self, rule: R) -> Self {
        self.rule = Some(Box::new(rule));
        self
    }

    /// Return selected phrases without any rewriting.
    pub fn without_rule(mut self) -> Self {
        self.rule = None;
        self
    }

    pub fn config(&self) -> &TypeFinderConfig {
        &self.config
    }

    pub fn parser(&self) -> &LatinParser {
        self.generator.parser()
    }

    /// Clean the usable names; blank, missing and NaN values are skipped.
    pub fn clean_names<I, V>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = V>,
        V: Into<NameValue>,
    {
        let mut skipped = 0usize;
        let cleaned: Vec<String> = names
            .into_iter()
            .filter_map(|value| {
                let value: NameValue = value.into();
                match value.as_text() {
                    Some(text) => Some(self.parser().clean_text(&text)),
                    None => {
                        trace!("Skipping unusable name {:?}", value);
                        skipped += 1;
                        None
                    }
                }
            })
            .collect();
        if skipped > 0 {
            debug!("Skipped {} unusable names", skipped);
        }
        cleaned
    }

    /// Discover the recurring type phrases in a list of names.
    pub fn extract<I, V>(&self, names: I) -> Result<Vec<ExtractedType>>
    where
        I: IntoIterator<Item = V>,
        V: Into<NameValue>,
    {
        let names = self.clean_names(names);
        self.extract_cleaned(&names)
    }

    /// As [`extract`](Self::extract), for names that are already cleaned.
    pub fn extract_cleaned(&self, names: &[String]) -> Result<Vec<ExtractedType>> {
        let number_of_names = names.len();
        info!("Extracting types from {} names", number_of_names);
        if number_of_names == 0 {
            info!("No usable names, nothing to extract");
            return Ok(Vec::new());
        }

        let table = self.generator.collect_frequencies(names)?;
        let min_support = self.generator.minimum_support(number_of_names);
        let candidates = table.into_candidates(min_support);

        let reduced = self.generator.reduce_nested_counts(names, &candidates)?;
        let selected = selector::select(reduced, &self.config.selector, names)?;
        debug!("{} phrases selected before rules", selected.len());

        let rewritten = match &self.rule {
            Some(rule) => {
                let out = rule.apply(selected)?;
                debug!("Rule '{}' left {} types", rule.name(), out.len());
                out
            },
            None => selected,
        };

        let types = finish(rewritten, self.config.selector.return_proportion, number_of_names);
        info!("Extracted {} types", types.len());
        Ok(types)
    }
}

/// Round a proportion to 3 decimals, ties to even.
fn round_proportion(proportion: f64) -> f64 {
    (proportion * 1000.0).round_ties_even() / 1000.0
}

/// Attach proportions when requested.
fn finish(types: Vec<TypeCount>, return_proportion: bool, number_of_names: usize) -> Vec<ExtractedType> {
    types
        .into_iter()
        .map(|t| {
            let mut extracted = ExtractedType::from(t);
            if return_proportion && number_of_names > 0 {
                extracted.proportion = Some(round_proportion(extracted.count as f64 / number_of_names as f64));
            }
            extracted
        })
        .collect()
}

/// Extract types with the default configuration and rule, overriding only
/// the selection options.
pub fn extract_types<I, V>(names: I, options: &SelectorConfig) -> Result<Vec<ExtractedType>>
where
    I: IntoIterator<Item = V>,
    V: Into<NameValue>,
{
    let config = TypeFinderConfig {
        selector: options.clone(),
        ..TypeFinderConfig::default()
    };
    TypeExtractor::new(config)?.extract(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportions_round_ties_to_even() {
        assert_eq!(round_proportion(1.0 / 16.0), 0.062);
        assert_eq!(round_proportion(3.0 / 16.0), 0.188);
        assert_eq!(round_proportion(2.0 / 3.0), 0.667);
        assert_eq!(round_proportion(1.0), 1.0);
    }

    #[test]
    fn finish_attaches_rounded_proportions() {
        let types = finish(vec![TypeCount::new("clinic", 1)], true, 16);
        assert_eq!(types[0].proportion, Some(0.062));

        let types = finish(vec![TypeCount::new("clinic", 1)], false, 16);
        assert_eq!(types[0].proportion, None);
    }
}
