// src/config/subsystems/rules.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::{FromIni, parse_list};

pub const DEFAULT_PREPOSITIONS: &[&str] = &[
    "al", "el", "at", "et", "la", "le", "les", "da", "de", "do", "du", "des", "das", "and", "of", "for",
];

pub const DEFAULT_NUMBERS: &[&str] = &["i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    /// Strip leading ordinals and boundary prepositions, then consolidate.
    Affix,
    /// Leave selected phrases untouched.
    None,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Affix => "affix",
            RuleKind::None => "none",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "affix" | "default" => Some(Self::Affix),
            "none" | "off" => Some(Self::None),
            _ => None,
        }
    }
}

impl Default for RuleKind {
    fn default() -> Self {
        Self::Affix
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub rule: RuleKind,
    pub prepositions: Vec<String>,
    pub numbers: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            rule: RuleKind::default(),
            prepositions: DEFAULT_PREPOSITIONS.iter().map(|s| s.to_string()).collect(),
            numbers: DEFAULT_NUMBERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl FromIni for RuleConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "rules" {
            return None;
        }

        match key {
            "rule" => {
                match RuleKind::from_str(value) {
                    Some(rule) => {
                        self.rule = rule;
                        Some(Ok(()))
                    },
                    None => Some(Err(Error::Config(
                        format!("Invalid rule (must be 'affix' or 'none'): {}", value)
                    ))),
                }
            },
            "prepositions" => {
                self.prepositions = parse_list(value);
                Some(Ok(()))
            },
            "numbers" => {
                self.numbers = parse_list(value);
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl RuleConfig {
    pub fn validate(&self) -> Result<()> {
        for token in self.prepositions.iter().chain(self.numbers.iter()) {
            if token.trim().is_empty() || token.contains(char::is_whitespace) {
                return Err(Error::Config(
                    format!("Affix tokens must be single non-empty words, got {:?}", token)
                ));
            }
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        match self.rule {
            RuleKind::Affix => format!(
                "affix rule ({} prepositions, {} ordinals)",
                self.prepositions.len(),
                self.numbers.len()
            ),
            RuleKind::None => "no normalization rule".to_string(),
        }
    }
}
