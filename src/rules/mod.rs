//! Post-processing rules applied to the selected phrases.
//!
//! A rule rewrites phrases (for example stripping a leading "of") and
//! re-aggregates the counts of phrases that end up identical.

pub mod affix;

use log::debug;

use crate::config::subsystems::{RuleConfig, RuleKind};
use crate::error::Result;
use crate::types::TypeCount;

pub use self::affix::{AffixRule, strip_preposition, strip_number_prefix};

/// A rewrite over the selected `(phrase, count)` list.
pub trait NormalizationRule: Send + Sync {
    fn name(&self) -> &str {
        "custom"
    }

    fn apply(&self, types: Vec<TypeCount>) -> Result<Vec<TypeCount>>;
}

impl<F> NormalizationRule for F
where
    F: Fn(Vec<TypeCount>) -> Result<Vec<TypeCount>> + Send + Sync,
{
    fn apply(&self, types: Vec<TypeCount>) -> Result<Vec<TypeCount>> {
        self(types)
    }
}

/// Leaves the list exactly as selected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRule;

impl NormalizationRule for NoRule {
    fn name(&self) -> &str {
        "none"
    }

    fn apply(&self, types: Vec<TypeCount>) -> Result<Vec<TypeCount>> {
        Ok(types)
    }
}

/// Drop blank and single-character phrases, sum the counts of identical
/// phrases, and sort by count descending.
///
/// Phrases keep the position of their first appearance among equal counts.
pub fn consolidate(types: Vec<TypeCount>) -> Vec<TypeCount> {
    let mut merged: Vec<TypeCount> = Vec::with_capacity(types.len());
    let mut positions: ahash::AHashMap<String, usize> = ahash::AHashMap::new();

    for TypeCount { phrase, count } in types {
        if phrase.trim().is_empty() || phrase.chars().count() <= 1 {
            continue;
        }
        match positions.get(&phrase) {
            Some(&pos) => merged[pos].count += count,
            None => {
                positions.insert(phrase.clone(), merged.len());
                merged.push(TypeCount { phrase, count });
            }
        }
    }

    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged
}

/// Build the rule a configuration asks for; `None` means no rule.
pub fn build_rule(config: &RuleConfig) -> Result<Option<Box<dyn NormalizationRule>>> {
    match config.rule {
        RuleKind::Affix => {
            let rule = AffixRule::new(&config.prepositions, &config.numbers)?;
            debug!("Using affix rule with {} prepositions, {} ordinals", config.prepositions.len(), config.numbers.len());
            Ok(Some(Box::new(rule)))
        },
        RuleKind::None => Ok(None),
    }
}
