//! Word and sentence tokenization for the extractive summarizer.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Iterate over the word tokens of `text`.
///
/// A token is a maximal run of word characters; punctuation and whitespace
/// are separators. Casing is preserved.
pub fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(text).map(|m| m.as_str())
}

/// Split `text` into sentences on terminal punctuation boundaries.
///
/// A `.`, `!` or `?` ends a sentence when followed by whitespace or the end
/// of input. Closing quotes and brackets directly after the terminal mark
/// stay attached to the sentence. Casing and interior whitespace are
/// preserved; leading and trailing whitespace is trimmed per sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        current.push(ch);

        if !matches!(ch, '.' | '!' | '?') {
            continue;
        }

        // Keep closing quotes/brackets with the sentence they end.
        while let Some(&next) = chars.peek() {
            if matches!(next, '"' | '\'' | ')' | ']' | '\u{201d}' | '\u{2019}') {
                current.push(next);
                chars.next();
            } else {
                break;
            }
        }

        let boundary = match chars.peek() {
            None => true,
            Some(next) => next.is_whitespace(),
        };
        if boundary {
            let trimmed = current.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            current.clear();
        }
    }

    // Trailing text without terminal punctuation still counts as a sentence.
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn words_split_on_punctuation_and_whitespace() {
        let tokens: Vec<&str> = word_tokens("Hello, world! It's 42.").collect();
        assert_eq!(tokens, vec!["Hello", "world", "It", "s", "42"]);
    }

    #[test]
    fn words_preserve_case() {
        let tokens: Vec<&str> = word_tokens("Rust rust RUST").collect();
        assert_eq!(tokens, vec!["Rust", "rust", "RUST"]);
    }

    #[test]
    fn splits_basic_sentences() {
        let sentences = split_sentences("Hello world. This is a test! Is it? Yes.");
        assert_eq!(
            sentences,
            vec!["Hello world.", "This is a test!", "Is it?", "Yes."]
        );
    }

    #[test]
    fn decimal_points_do_not_split() {
        let sentences = split_sentences("Pi is 3.14 roughly. Euler is 2.71.");
        assert_eq!(sentences, vec!["Pi is 3.14 roughly.", "Euler is 2.71."]);
    }

    #[test]
    fn trailing_fragment_is_kept() {
        let sentences = split_sentences("Complete sentence. dangling tail");
        assert_eq!(sentences, vec!["Complete sentence.", "dangling tail"]);
    }

    #[test]
    fn closing_quote_stays_with_sentence() {
        let sentences = split_sentences("She said \"stop.\" He left.");
        assert_eq!(sentences, vec!["She said \"stop.\"", "He left."]);
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   ").is_empty());
    }
}
