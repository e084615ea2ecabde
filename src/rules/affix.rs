// Affix stripping: the default normalization rule

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::config::subsystems::rules::{DEFAULT_PREPOSITIONS, DEFAULT_NUMBERS};
use crate::error::{Error, Result};
use crate::types::TypeCount;

use super::{NormalizationRule, consolidate};

lazy_static! {
    static ref ONLY_NUMBER: Regex = Regex::new(r"^\d+$").unwrap();
    static ref LEADING_NUMBER: Regex = Regex::new(r"^\d+ ").unwrap();
}

/// Remove `token` when it is the whole phrase, then as a leading word,
/// then (if `trailing`) as a trailing word. Each form is removed at
/// most once.
fn strip_token(phrase: String, token: &str, trailing: bool) -> String {
    let mut phrase = if phrase == token { String::new() } else { phrase };

    if let Some(rest) = phrase.strip_prefix(token).and_then(|rest| rest.strip_prefix(' ')) {
        phrase = rest.to_string();
    }
    if trailing {
        if let Some(rest) = phrase.strip_suffix(token).and_then(|rest| rest.strip_suffix(' ')) {
            phrase = rest.to_string();
        }
    }
    phrase
}

/// Strip prepositions at either end of a phrase.
///
/// Each preposition is tried once, in list order, as the whole phrase, as a
/// leading word and as a trailing word. Prepositions inside the phrase are
/// never touched: "district of health" is returned unchanged.
pub fn strip_preposition<S: AsRef<str>>(input: &str, prepositions: &[S]) -> String {
    prepositions
        .iter()
        .fold(input.trim().to_string(), |phrase, preposition| {
            strip_token(phrase, preposition.as_ref(), true)
        })
}

/// Strip a leading ordinal word or a leading integer from a phrase.
pub fn strip_number_prefix<S: AsRef<str>>(input: &str, numbers: &[S]) -> String {
    let phrase = numbers
        .iter()
        .fold(input.trim().to_string(), |phrase, number| {
            strip_token(phrase, number.as_ref(), false)
        });
    let phrase = ONLY_NUMBER.replace(&phrase, "");
    LEADING_NUMBER.replace(&phrase, "").into_owned()
}

/// The default rule: drop leading ordinals/numbers and boundary
/// prepositions, then merge phrases that became identical.
#[derive(Debug, Clone)]
pub struct AffixRule {
    prepositions: Vec<String>,
    numbers: Vec<String>,
}

impl Default for AffixRule {
    fn default() -> Self {
        Self {
            prepositions: DEFAULT_PREPOSITIONS.iter().map(|s| s.to_string()).collect(),
            numbers: DEFAULT_NUMBERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl AffixRule {
    pub fn new<S: AsRef<str>>(prepositions: &[S], numbers: &[S]) -> Result<Self> {
        let normalize = |tokens: &[S]| -> Result<Vec<String>> {
            tokens
                .iter()
                .map(|token| {
                    let token = token.as_ref().trim();
                    if token.is_empty() || token.contains(char::is_whitespace) {
                        Err(Error::config(format!("Affix tokens must be single non-empty words, got {:?}", token)))
                    } else {
                        Ok(token.to_string())
                    }
                })
                .collect()
        };

        Ok(Self {
            prepositions: normalize(prepositions)?,
            numbers: normalize(numbers)?,
        })
    }

    pub fn prepositions(&self) -> &[String] {
        &self.prepositions
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    /// Rewrite a single phrase without consolidating.
    pub fn rewrite(&self, phrase: &str) -> String {
        strip_preposition(&strip_number_prefix(phrase, &self.numbers), &self.prepositions)
    }
}

impl NormalizationRule for AffixRule {
    fn name(&self) -> &str {
        "affix"
    }

    fn apply(&self, types: Vec<TypeCount>) -> Result<Vec<TypeCount>> {
        let rewritten = types
            .into_iter()
            .map(|TypeCount { phrase, count }| {
                let stripped = self.rewrite(&phrase);
                if stripped != phrase {
                    trace!("Affix rule: '{}' -> '{}'", phrase, stripped);
                }
                TypeCount::new(stripped, count)
            })
            .collect();
        Ok(consolidate(rewritten))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepositions_are_stripped_only_at_the_ends() {
        let defaults = DEFAULT_PREPOSITIONS;
        assert_eq!(strip_preposition("of district hospital", defaults), "district hospital");
        assert_eq!(strip_preposition("district hospital of", defaults), "district hospital");
        assert_eq!(strip_preposition("district of hospital", defaults), "district of hospital");
        assert_eq!(strip_preposition("of", defaults), "");
        assert_eq!(strip_preposition("offices", defaults), "offices");
    }

    #[test]
    fn each_preposition_is_tried_once_in_list_order() {
        // "al" is tried before "de", so both leading words go
        assert_eq!(strip_preposition("al de sante", DEFAULT_PREPOSITIONS), "sante");
        // "de" is tried before "al", so only the first leading word goes
        assert_eq!(strip_preposition("al de sante", &["de", "al"]), "de sante");
    }

    #[test]
    fn number_prefixes_are_stripped() {
        let defaults = DEFAULT_NUMBERS;
        assert_eq!(strip_number_prefix("ii district hospital", defaults), "district hospital");
        assert_eq!(strip_number_prefix("12 health center", defaults), "health center");
        assert_eq!(strip_number_prefix("2024", defaults), "");
        assert_eq!(strip_number_prefix("health center 3", defaults), "health center 3");
        assert_eq!(strip_number_prefix("iv", defaults), "");
    }

    #[test]
    fn rule_merges_rewritten_phrases() {
        let rule = AffixRule::default();
        let out = rule
            .apply(vec![
                TypeCount::new("district hospital", 5),
                TypeCount::new("of district hospital", 3),
                TypeCount::new("health center", 6),
                TypeCount::new("de", 10),
            ])
            .unwrap();
        assert_eq!(
            out,
            vec![TypeCount::new("district hospital", 8), TypeCount::new("health center", 6)]
        );
    }

    #[test]
    fn invalid_tokens_are_rejected() {
        assert!(AffixRule::new(&["of", "de la"], &["i"]).is_err());
        assert!(AffixRule::new(&["of", ""], &["i"]).is_err());
    }
}
