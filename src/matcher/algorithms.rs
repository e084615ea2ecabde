use log::trace;

use crate::parser::{LatinParser, TextParser};
use crate::utils::string::contains_phrase;
use super::types::TypeVocabulary;

/// Display form of a failed match.
pub const NO_MATCH: &str = "no match";

/// The first (most specific) type that occurs in `entry` as whole words.
///
/// First match wins: the vocabulary order decides, not the position in
/// the entry. `entry` is used as given; see [`TypeMatcher::match_name`]
/// for raw names.
pub fn match_type_string<'a>(entry: &str, types: &'a TypeVocabulary) -> Option<&'a str> {
    let found = types
        .iter()
        .find(|type_string| contains_phrase(entry, type_string))
        .map(str::trim);
    trace!("Matched {:?} -> {:?}", entry, found);
    found
}

/// Matches names against a fixed vocabulary of types.
pub struct TypeMatcher<P: TextParser = LatinParser> {
    parser: P,
    vocabulary: TypeVocabulary,
}

impl TypeMatcher<LatinParser> {
    pub fn with_defaults(vocabulary: TypeVocabulary) -> Self {
        Self::new(LatinParser::new_with_defaults(), vocabulary)
    }
}

impl<P: TextParser> TypeMatcher<P> {
    pub fn new(parser: P, vocabulary: TypeVocabulary) -> Self {
        Self { parser, vocabulary }
    }

    pub fn vocabulary(&self) -> &TypeVocabulary {
        &self.vocabulary
    }

    /// Match an entry as given, without cleaning it.
    pub fn match_entry(&self, entry: &str) -> Option<&str> {
        match_type_string(entry, &self.vocabulary)
    }

    /// Clean a raw name the way extraction does, then match it.
    pub fn match_name(&self, raw_name: &str) -> Option<&str> {
        let cleaned = self.parser.clean_text(raw_name);
        match_type_string(&cleaned, &self.vocabulary)
    }

    pub fn match_names<'n, I>(&self, raw_names: I) -> Vec<Option<&str>>
    where
        I: IntoIterator<Item = &'n str>,
    {
        raw_names.into_iter().map(|name| self.match_name(name)).collect()
    }
}
