// Normalization of Latin-script names

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use crate::config::subsystems::ParserConfig;
use crate::types::NameValue;

use super::TextParser;

lazy_static! {
    static ref NON_ALPHANUMERIC: Regex = Regex::new(r"[^A-Za-z0-9\s]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct LatinParser {
    settings: ParserConfig,
}

impl LatinParser {
    pub fn new(settings: ParserConfig) -> Self {
        Self { settings }
    }

    pub fn new_with_defaults() -> Self {
        Self::new(ParserConfig::default())
    }

    /// Normalize a loosely typed value. Unusable values become "".
    pub fn clean_value(&self, value: &NameValue) -> String {
        match value.as_text() {
            Some(text) => self.clean_text(&text),
            None => String::new(),
        }
    }

    fn fold_accents(&self, text: &str) -> String {
        if !self.settings.fold_accents {
            return text.to_string();
        }
        text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
    }
}

impl TextParser for LatinParser {
    fn clean_text(&self, text: &str) -> String {
        let folded = self.fold_accents(text).to_lowercase();
        let stripped = NON_ALPHANUMERIC.replace_all(&folded, "");
        let collapsed = WHITESPACE.replace_all(&stripped, " ");
        let cleaned = collapsed.trim().to_string();
        trace!("Cleaned {:?} -> {:?}", text, cleaned);
        cleaned
    }
}

/// Normalize a name with the default parser settings.
pub fn normalize_name(raw: &str) -> String {
    LatinParser::new_with_defaults().clean_text(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(normalize_name("Hôpital Général"), "hopital general");
        assert_eq!(normalize_name("CENTRE DE SANTÉ"), "centre de sante");
    }

    #[test]
    fn strips_punctuation_and_collapses_whitespace() {
        assert_eq!(normalize_name("  St. Mary's\t District   Hospital "), "st marys district hospital");
        assert_eq!(normalize_name("Health-Center (No. 2)"), "healthcenter no 2");
    }

    #[test]
    fn non_latin_content_is_dropped() {
        assert_eq!(normalize_name("مستشفى"), "");
        assert_eq!(normalize_name("Clinic 😀 One"), "clinic one");
    }

    #[test]
    fn accents_are_removed_outright_when_folding_is_off() {
        let parser = LatinParser::new(ParserConfig { fold_accents: false });
        assert_eq!(parser.clean_text("Café Central"), "caf central");
    }

    #[test]
    fn unusable_values_clean_to_empty() {
        let parser = LatinParser::new_with_defaults();
        assert_eq!(parser.clean_value(&NameValue::Missing), "");
        assert_eq!(parser.clean_value(&NameValue::Number(f64::NAN)), "");
        assert_eq!(parser.clean_value(&NameValue::Text("   ".into())), "");
        assert_eq!(parser.clean_value(&NameValue::Number(12.0)), "12");
    }

    #[test]
    fn tokenizes_on_single_spaces() {
        let parser = LatinParser::new_with_defaults();
        assert_eq!(parser.tokenize_text("district hospital"), vec!["district", "hospital"]);
        assert!(parser.tokenize_text("").is_empty());
    }
}
