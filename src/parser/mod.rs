pub mod latin;

/// Folds raw names to the canonical form that n-grams are built from.
pub trait TextParser: Sync + Send {
    /// Normalize a raw name. Never fails: content that cannot be
    /// represented is dropped, so the worst case is an empty string.
    fn clean_text(&self, text: &str) -> String;

    /// Split a cleaned name into its tokens. An empty name has no tokens.
    fn tokenize_text(&self, cleaned: &str) -> Vec<String> {
        if cleaned.is_empty() {
            return Vec::new();
        }
        cleaned.split(' ').map(str::to_string).collect()
    }
}

pub use self::latin::{LatinParser, normalize_name};
