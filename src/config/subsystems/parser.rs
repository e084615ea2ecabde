// src/config/subsystems/parser.rs

use serde::{Serialize, Deserialize};
use crate::error::Result;
use crate::config::{FromIni, parse_flag};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Decompose accented letters and drop the combining marks, so that
    /// "hôpital" and "hopital" normalize to the same token.
    pub fold_accents: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            fold_accents: true,
        }
    }
}

impl FromIni for ParserConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "text_processing" {
            return None;
        }

        match key {
            "fold_accents" => Some(parse_flag(key, value).map(|flag| {
                self.fold_accents = flag;
            })),
            _ => None,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    pub fn describe(&self) -> String {
        if self.fold_accents {
            "folding accents, lowercasing, removing punctuation".to_string()
        } else {
            "lowercasing, removing punctuation and accented letters".to_string()
        }
    }
}
