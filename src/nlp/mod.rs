pub mod links;
pub mod stopwords;
pub mod summarizer;
pub mod tokenize;

pub use links::extract_links;
pub use summarizer::{summarize, DEFAULT_SENTENCE_COUNT};
