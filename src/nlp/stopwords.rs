use once_cell::sync::Lazy;
use std::collections::HashSet;

/// English stop words, loaded once and shared read-only across requests.
static ENGLISH: Lazy<HashSet<String>> = Lazy::new(|| {
    stop_words::get(stop_words::LANGUAGE::English)
        .into_iter()
        .collect()
});

/// Case-insensitive stop-word membership test.
pub fn is_stop_word(word: &str) -> bool {
    ENGLISH.contains(&word.to_lowercase())
}
