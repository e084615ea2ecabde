pub mod parser;
pub mod collector;
pub mod selector;
pub mod rules;

pub use parser::ParserConfig;
pub use collector::CollectorConfig;
pub use selector::{SelectorConfig, Threshold};
pub use rules::{RuleConfig, RuleKind};
