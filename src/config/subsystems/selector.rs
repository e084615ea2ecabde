// src/config/subsystems/selector.rs

use serde::{Serialize, Deserialize};
use std::fmt;
use crate::error::{Error, Result};
use crate::config::{FromIni, parse_flag};

/// How the selector derives its minimum count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Threshold {
    /// Keep roughly the `max_types` most frequent phrases.
    TopK,
    /// Fraction of the surviving names, in `[0, 1)`.
    Fraction(f64),
    /// Absolute number of names, at least 1.
    Count(usize),
}

impl Default for Threshold {
    fn default() -> Self {
        Self::TopK
    }
}

impl Threshold {
    /// Interprets a numeric threshold the way callers usually pass it:
    /// values in `[0, 1)` are fractions, whole numbers `>= 1` are counts.
    pub fn from_value(value: f64) -> Result<Self> {
        if value.is_nan() || value < 0.0 {
            return Err(Error::threshold(format!("{} is neither a fraction in [0, 1) nor a whole count >= 1", value)));
        }
        if value < 1.0 {
            return Ok(Self::Fraction(value));
        }
        if value.is_finite() && value.fract() == 0.0 {
            return Ok(Self::Count(value as usize));
        }
        Err(Error::threshold(format!("{} is neither a fraction in [0, 1) nor a whole count >= 1", value)))
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::TopK => Ok(()),
            Self::Fraction(f) if (0.0..1.0).contains(&f) => Ok(()),
            Self::Fraction(f) => Err(Error::threshold(format!("fraction must be in [0, 1), got {}", f))),
            Self::Count(0) => Err(Error::threshold("count threshold must be at least 1")),
            Self::Count(_) => Ok(()),
        }
    }
}

impl std::str::FromStr for Threshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" | "auto" | "top" => Ok(Self::TopK),
            other => {
                let value: f64 = other
                    .parse()
                    .map_err(|_| Error::threshold(format!("not a number: {}", s)))?;
                Self::from_value(value)
            }
        }
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopK => write!(f, "top-k"),
            Self::Fraction(v) => write!(f, "{}", v),
            Self::Count(c) => write!(f, "{}", c),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    pub thres: Threshold,
    pub max_types: usize,
    pub return_proportion: bool,
    pub no_full_match: bool,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            thres: Threshold::TopK,
            max_types: 20,
            return_proportion: false,
            no_full_match: false,
        }
    }
}

impl FromIni for SelectorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "selector" {
            return None;
        }

        match key {
            "thres" | "threshold" => Some(value.parse::<Threshold>().map(|thres| {
                self.thres = thres;
            })),
            "max_types" => {
                match value.parse() {
                    Ok(max_types) => {
                        self.max_types = max_types;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid max_types (must be a non-negative integer): {}", value)
                    ))),
                }
            },
            "return_proportion" => Some(parse_flag(key, value).map(|flag| {
                self.return_proportion = flag;
            })),
            "no_full_match" => Some(parse_flag(key, value).map(|flag| {
                self.no_full_match = flag;
            })),
            _ => None,
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> Result<()> {
        self.thres.validate()
    }

    pub fn describe(&self) -> String {
        format!(
            "threshold {}, max {} types{}{}",
            self.thres,
            self.max_types,
            if self.return_proportion { ", with proportions" } else { "" },
            if self.no_full_match { ", excluding full-name matches" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_thresholds_are_classified() {
        assert_eq!(Threshold::from_value(0.05).unwrap(), Threshold::Fraction(0.05));
        assert_eq!(Threshold::from_value(0.0).unwrap(), Threshold::Fraction(0.0));
        assert_eq!(Threshold::from_value(3.0).unwrap(), Threshold::Count(3));
        assert!(Threshold::from_value(2.5).is_err());
        assert!(Threshold::from_value(-0.1).is_err());
        assert!(Threshold::from_value(f64::NAN).is_err());
    }

    #[test]
    fn threshold_parses_from_text() {
        assert_eq!("none".parse::<Threshold>().unwrap(), Threshold::TopK);
        assert_eq!("0.25".parse::<Threshold>().unwrap(), Threshold::Fraction(0.25));
        assert_eq!("7".parse::<Threshold>().unwrap(), Threshold::Count(7));
        assert!("abc".parse::<Threshold>().is_err());
    }

    #[test]
    fn out_of_range_variants_fail_validation() {
        assert!(Threshold::Fraction(1.5).validate().is_err());
        assert!(Threshold::Count(0).validate().is_err());
        assert!(Threshold::Count(1).validate().is_ok());
    }
}
