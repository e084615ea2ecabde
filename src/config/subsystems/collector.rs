// src/config/subsystems/collector.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::{FromIni, parse_flag};
use log::LevelFilter;

/// Longest phrase the collector will ever record, in tokens.
pub const MAX_NGRAM_SIZE: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    // Longest n-gram recorded per name
    pub max_ngram_size: usize,

    // Fraction of names an n-gram must reach to stay in the table
    pub min_support_ratio: f64,

    // Parallelization settings
    pub use_parallel: bool,
    pub thread_count: usize,

    // Log level
    pub log_level: String,
    #[serde(skip)]
    level_filter: Option<LevelFilter>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            max_ngram_size: MAX_NGRAM_SIZE,
            min_support_ratio: 0.001,
            use_parallel: false,
            thread_count: 4,
            log_level: "info".to_string(),
            level_filter: Some(LevelFilter::Info),
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        "none" => Some(LevelFilter::Off),
        _ => None,
    }
}

impl FromIni for CollectorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "collector" {
            return None;
        }

        match key {
            "max_ngram_size" => {
                match value.parse() {
                    Ok(size) if (1..=MAX_NGRAM_SIZE).contains(&size) => {
                        self.max_ngram_size = size;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid max_ngram_size (must be 1..={}): {}", MAX_NGRAM_SIZE, value)
                    ))),
                }
            },
            "min_support_ratio" => {
                match value.parse::<f64>() {
                    Ok(ratio) if (0.0..1.0).contains(&ratio) => {
                        self.min_support_ratio = ratio;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid min_support_ratio (must be in [0, 1)): {}", value)
                    ))),
                }
            },
            "use_parallel" => Some(parse_flag(key, value).map(|flag| {
                self.use_parallel = flag;
            })),
            "thread_count" => {
                match value.parse() {
                    Ok(count) if count > 0 => {
                        self.thread_count = count;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid thread_count (must be > 0): {}", value)
                    ))),
                }
            },
            "log_level" => {
                let level_str = value.trim().to_lowercase();
                Some(match parse_level(&level_str) {
                    Some(level) => {
                        self.log_level = level_str;
                        self.level_filter = Some(level);
                        Ok(())
                    },
                    None => Err(Error::Config(
                        format!("Invalid log level '{}'. Must be one of: none, error, warn, info, debug, trace", value)
                    )),
                })
            },
            _ => None,
        }
    }
}

impl CollectorConfig {
    pub fn get_log_level(&self) -> LevelFilter {
        if let Some(level) = self.level_filter {
            return level;
        }
        parse_level(self.log_level.trim().to_lowercase().as_str()).unwrap_or(LevelFilter::Info)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_ngram_size == 0 || self.max_ngram_size > MAX_NGRAM_SIZE {
            return Err(Error::InvalidNgramSize(
                format!("max_ngram_size must be between 1 and {}, got {}", MAX_NGRAM_SIZE, self.max_ngram_size)
            ));
        }
        if !(0.0..1.0).contains(&self.min_support_ratio) {
            return Err(Error::Config(
                format!("min_support_ratio must be in [0, 1), got {}", self.min_support_ratio)
            ));
        }
        if self.thread_count == 0 {
            return Err(Error::Config(
                "thread_count must be greater than 0".to_string()
            ));
        }
        Ok(())
    }

    /// Adjust thread count based on available system resources
    pub fn adjust_thread_count(&mut self) {
        if self.use_parallel {
            let system_threads = num_cpus::get();
            // Use at most 75% of available threads
            self.thread_count = std::cmp::min(
                self.thread_count,
                std::cmp::max(1, (system_threads as f32 * 0.75) as usize)
            );
        } else {
            self.thread_count = 1;
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "n-grams up to {} words, min support {:.3}%, parallel {} ({} threads)",
            self.max_ngram_size,
            self.min_support_ratio * 100.0,
            if self.use_parallel { "enabled" } else { "disabled" },
            self.thread_count
        )
    }
}
