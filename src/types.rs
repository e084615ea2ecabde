use serde::{Serialize, Deserialize};
use std::fmt;

/// A raw name as supplied by the caller.
///
/// Names come from loosely typed sources (spreadsheets, CSV columns), so a
/// value may be text, a number, or missing altogether.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NameValue {
    Text(String),
    Number(f64),
    Missing,
}

impl NameValue {
    /// Whether this value takes part in extraction at all.
    ///
    /// Missing values, blank text and NaN numbers are skipped and do not
    /// count toward the number of names.
    pub fn is_usable(&self) -> bool {
        match self {
            NameValue::Text(text) => !text.trim().is_empty(),
            NameValue::Number(value) => !value.is_nan(),
            NameValue::Missing => false,
        }
    }

    /// Text form of a usable value, `None` otherwise.
    pub fn as_text(&self) -> Option<String> {
        if !self.is_usable() {
            return None;
        }
        match self {
            NameValue::Text(text) => Some(text.clone()),
            NameValue::Number(value) => Some(value.to_string()),
            NameValue::Missing => None,
        }
    }
}

impl From<&str> for NameValue {
    fn from(value: &str) -> Self {
        NameValue::Text(value.to_string())
    }
}

impl From<String> for NameValue {
    fn from(value: String) -> Self {
        NameValue::Text(value)
    }
}

impl From<&String> for NameValue {
    fn from(value: &String) -> Self {
        NameValue::Text(value.clone())
    }
}

impl From<f64> for NameValue {
    fn from(value: f64) -> Self {
        NameValue::Number(value)
    }
}

impl From<i64> for NameValue {
    fn from(value: i64) -> Self {
        NameValue::Number(value as f64)
    }
}

impl<T: Into<NameValue>> From<Option<T>> for NameValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(NameValue::Missing)
    }
}

/// A phrase with its aggregate count, the unit passed between the selector
/// and the normalization rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeCount {
    pub phrase: String,
    pub count: usize,
}

impl TypeCount {
    pub fn new<S: Into<String>>(phrase: S, count: usize) -> Self {
        Self {
            phrase: phrase.into(),
            count,
        }
    }
}

impl<S: Into<String>> From<(S, usize)> for TypeCount {
    fn from((phrase, count): (S, usize)) -> Self {
        Self::new(phrase, count)
    }
}

/// A discovered type as returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedType {
    pub phrase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proportion: Option<f64>,
    pub count: usize,
}

impl From<TypeCount> for ExtractedType {
    fn from(value: TypeCount) -> Self {
        Self {
            phrase: value.phrase,
            proportion: None,
            count: value.count,
        }
    }
}

impl From<&ExtractedType> for TypeCount {
    fn from(value: &ExtractedType) -> Self {
        TypeCount::new(value.phrase.clone(), value.count)
    }
}

impl fmt::Display for ExtractedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.proportion {
            Some(proportion) => write!(f, "{} ({:.1}%, {})", self.phrase, proportion * 100.0, self.count),
            None => write!(f, "{} ({})", self.phrase, self.count),
        }
    }
}
