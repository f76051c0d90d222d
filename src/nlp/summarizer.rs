//! Frequency-based extractive summarization.
//!
//! Scores each sentence by the sum of the normalized frequencies of its
//! words (stop words excluded) and returns the top-scoring sentences.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::stopwords::is_stop_word;
use super::tokenize::{split_sentences, word_tokens};

/// Sentences with this many (or more) space-separated chunks are left out
/// of scoring entirely.
const MAX_SENTENCE_WORDS: usize = 30;

/// Default number of sentences in a summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 5;

/// Summarize `text` by extracting its `sentence_count` highest-scoring
/// sentences, joined by single spaces, highest score first. Equal scores
/// keep document order.
///
/// Word frequencies are keyed by the token as it appears in the text, while
/// sentence scoring looks tokens up lower-cased, so capitalized occurrences
/// only contribute where the same spelling also exists lower-cased. This
/// asymmetry is intentional and kept from the reference behavior.
///
/// Returns the empty string when no non-stop-word token exists. The caller
/// is responsible for rejecting empty input up front.
pub fn summarize(text: &str, sentence_count: usize) -> String {
    let sentences = split_sentences(text);

    let mut frequencies: HashMap<&str, f64> = HashMap::new();
    for word in word_tokens(text) {
        if !is_stop_word(word) {
            *frequencies.entry(word).or_insert(0.0) += 1.0;
        }
    }
    if frequencies.is_empty() {
        return String::new();
    }

    let max_frequency = frequencies.values().cloned().fold(0.0, f64::max);
    for weight in frequencies.values_mut() {
        *weight /= max_frequency;
    }

    // (document position, score) for every sentence that hit the table.
    let mut scored: Vec<(usize, f64)> = Vec::new();
    for (position, sentence) in sentences.iter().enumerate() {
        if sentence.split(' ').count() >= MAX_SENTENCE_WORDS {
            continue;
        }
        let lowered = sentence.to_lowercase();
        let mut score = 0.0;
        let mut matched = false;
        for word in word_tokens(&lowered) {
            if let Some(weight) = frequencies.get(word) {
                score += weight;
                matched = true;
            }
        }
        if matched {
            scored.push((position, score));
        }
    }

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(sentence_count);

    scored
        .iter()
        .map(|&(position, _)| sentences[position].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
