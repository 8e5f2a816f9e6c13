//! Snowball stemming behind the [`Stemmer`] trait.
//!
//! The whole surface term is stemmed as a single token. That keeps the
//! equivalence key deterministic for multi-word thesaurus entries without
//! inventing a tokenization the indexes never applied. No case folding
//! happens here; the index adapters normalize case before terms arrive.

use rust_stemmers::{Algorithm, Stemmer as Snowball};

use crate::traits::Stemmer;

pub struct SnowballStemmer {
    inner: Snowball,
}

impl SnowballStemmer {
    /// Stemmer for a named snowball language, `None` for unknown names.
    pub fn for_language(language: &str) -> Option<Self> {
        algorithm(language).map(|a| Self { inner: Snowball::create(a) })
    }

    pub fn english() -> Self {
        Self { inner: Snowball::create(Algorithm::English) }
    }

    pub fn supports(language: &str) -> bool {
        algorithm(language).is_some()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, term: &str) -> String {
        self.inner.stem(term).into_owned()
    }
}

fn algorithm(language: &str) -> Option<Algorithm> {
    match language {
        "english" => Some(Algorithm::English),
        "danish" => Some(Algorithm::Danish),
        "dutch" => Some(Algorithm::Dutch),
        "french" => Some(Algorithm::French),
        "german" => Some(Algorithm::German),
        "italian" => Some(Algorithm::Italian),
        "norwegian" => Some(Algorithm::Norwegian),
        "portuguese" => Some(Algorithm::Portuguese),
        "russian" => Some(Algorithm::Russian),
        "spanish" => Some(Algorithm::Spanish),
        "swedish" => Some(Algorithm::Swedish),
        _ => None,
    }
}
