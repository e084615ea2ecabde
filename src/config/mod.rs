pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::Result;
use log::{info, warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeFinderConfig {
    pub parser: subsystems::ParserConfig,
    pub collector: subsystems::CollectorConfig,
    pub selector: subsystems::SelectorConfig,
    pub rules: subsystems::RuleConfig,
}

impl TypeFinderConfig {
    pub fn validate(&self) -> Result<()> {
        self.parser.validate()?;
        self.collector.validate()?;
        self.selector.validate()?;
        self.rules.validate()?;
        Ok(())
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        trace!("Loading configuration from: {:?}", path.as_ref());
        let content = fs::read_to_string(&path)?;
        Self::from_ini_str(&content)
    }

    /// Parses INI text. Unknown keys are reported and skipped; a value that
    /// fails to parse is returned as an error.
    pub fn from_ini_str(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len() - 1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                // Delegate to appropriate subsystem config
                if let Some(result) = match current_section.as_str() {
                    "text_processing" => config.parser.from_ini_section(&current_section, key, value),
                    "collector" => config.collector.from_ini_section(&current_section, key, value),
                    "selector" => config.selector.from_ini_section(&current_section, key, value),
                    "rules" => config.rules.from_ini_section(&current_section, key, value),
                    _ => None,
                } {
                    if let Err(e) = result {
                        warn!("Error processing config key {}={} on line {}: {}", key, value, line_num + 1, e);
                        return Err(e);
                    }
                } else {
                    warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section);
                }
            }
        }

        config.validate()?;
        info!("Configuration loaded: {}", config.describe());
        Ok(config)
    }

    pub fn describe(&self) -> String {
        format!(
            "{}; {}; {}; {}",
            self.parser.describe(),
            self.collector.describe(),
            self.selector.describe(),
            self.rules.describe()
        )
    }
}

/// Parses a comma-separated INI list, dropping blank items.
pub(crate) fn parse_list(value: &str) -> Vec<String> {
    value
        .trim_matches('"')
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Parses an INI boolean flag for the given key.
pub(crate) fn parse_flag(key: &str, value: &str) -> Result<bool> {
    value.parse().map_err(|_| {
        crate::error::Error::Config(format!("Invalid {} value (must be true/false): {}", key, value))
    })
}
