/// Whether `phrase` occurs in `text` as a run of whole words.
///
/// Both sides are padded with a single space, so "hospital" is found in
/// "district hospital" but not in "hospitality center".
pub fn contains_phrase(text: &str, phrase: &str) -> bool {
    let mut padded_text = String::with_capacity(text.len() + 2);
    padded_text.push(' ');
    padded_text.push_str(text);
    padded_text.push(' ');

    let mut padded_phrase = String::with_capacity(phrase.len() + 2);
    padded_phrase.push(' ');
    padded_phrase.push_str(phrase);
    padded_phrase.push(' ');

    padded_text.contains(&padded_phrase)
}

/// Number of words in a single-spaced phrase.
pub fn word_count(phrase: &str) -> usize {
    phrase.matches(' ').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_only() {
        assert!(contains_phrase("abc district hospital xyz", "district hospital"));
        assert!(contains_phrase("district hospital", "district hospital"));
        assert!(!contains_phrase("hospitality center", "hospital"));
        assert!(!contains_phrase("subdistrict hospital", "district hospital"));
    }

    #[test]
    fn counts_words() {
        assert_eq!(word_count("clinic"), 1);
        assert_eq!(word_count("district hospital"), 2);
    }
}
