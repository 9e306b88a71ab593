//! Lorem ipsum placeholder text.
//!
//! Paragraphs are built from a fixed vocabulary with randomized sentence lengths, sentence
//! endings and sprinkled-in commas, colons, semicolons and dashes. The free functions here use
//! the thread-local random source, the bundled vocabulary, and read the punctuation valence from
//! the `IPSUM_PUNCTUATION_VALENCE` environment variable on every call. For reproducible output,
//! build a [`Generator`] with a seeded random source instead.
//!
//! ```
//! let text = ipsum::ipsum(2, Some(&[2, 3][..]), 10.0).unwrap();
//! assert_eq!(text.len(), 2);
//! ```
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generator;
pub mod valence;
pub mod vocabulary;

use rand::thread_rng;

pub use error::{Error, Result};
pub use generator::{Generator, Ipsum, Request, Words};
pub use valence::{Valence, ValenceSetting};
pub use vocabulary::Vocabulary;

/// Generates `paragraphs` paragraphs of lorem ipsum.
///
/// `sentences` holds either one sentence count per paragraph or a single count used for all of
/// them. Without it every paragraph gets a random number of sentences. Sentences average
/// `avg_words_per_sentence` words.
pub fn ipsum(
    paragraphs: usize,
    sentences: Option<&[usize]>,
    avg_words_per_sentence: f64,
) -> Result<Ipsum> {
    let sentences = sentences.map(<[usize]>::to_vec);
    let request = Request::new(paragraphs, sentences, avg_words_per_sentence)?;
    let valence = env_valence();
    Generator::new(thread_rng(), Vocabulary::bundled(), valence).paragraphs(&request)
}

/// `n` random words, joined by spaces if `collapse` is set.
pub fn ipsum_words(n: usize, collapse: bool) -> Words {
    Generator::new(thread_rng(), Vocabulary::bundled(), Valence::default()).words(n, collapse)
}

/// `n` random starter words.
pub fn ipsum_starts(n: usize) -> Vec<String> {
    Generator::new(thread_rng(), Vocabulary::bundled(), Valence::default()).starts(n)
}

/// Parses a count given as text, such as a command line argument.
///
/// Fails unless `s` is a finite whole number that is not negative. Zero is only accepted if
/// `allow_zero` is set. `"3"` and `"3.0"` both give `3`.
pub fn parse_count(s: &str, allow_zero: bool) -> Result<usize> {
    let invalid = || Error::InvalidCount(s.to_owned());
    let value: f64 = s.trim().parse().map_err(|_| invalid())?;

    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > usize::MAX as f64 {
        return Err(invalid());
    }
    if value == 0.0 && !allow_zero {
        return Err(invalid());
    }

    Ok(value as usize)
}

fn env_valence() -> Valence {
    ValenceSetting::from_env()
        .unwrap_or_default()
        .resolve_or_default(true)
}
