//! Errors returned by the generator.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can make a generation call fail.
///
/// All validation variants are raised before any random sampling happens, so a failed call never
/// produces partial output.
#[derive(Debug, Error)]
pub enum Error {
    /// A count given as text was not a finite, non-negative whole number.
    #[error("'{0}' is not a valid count, expected a whole number")]
    InvalidCount(String),

    #[error("the number of paragraphs must be greater than zero")]
    InvalidParagraphs,

    /// A requested sentence count was zero. `index` is the position in the request.
    #[error("sentence count at position {index} must be greater than zero")]
    InvalidSentences { index: usize },

    #[error(
        "got {sentences} sentence counts for {paragraphs} paragraphs, \
         provide either one count or one per paragraph"
    )]
    SentenceCountMismatch { paragraphs: usize, sentences: usize },

    #[error("average words per sentence must be a finite number greater than zero, got {0}")]
    InvalidAverage(f64),

    #[error("at most {max} paragraphs can be generated at once, got {paragraphs}")]
    TooManyParagraphs { paragraphs: usize, max: usize },

    /// Sentences times words per sentence is too much for a single paragraph.
    #[error("a paragraph may average at most {max} words, the request asks for {words}")]
    TooManyWords { words: f64, max: f64 },

    #[error("vocabulary has no {0}")]
    EmptyVocabulary(&'static str),

    #[error("could not read vocabulary file '{}'", path.display())]
    Vocabulary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Binomial(#[from] rand_distr::BinomialError),

    #[error(transparent)]
    Normal(#[from] rand_distr::NormalError),

    #[error(transparent)]
    Weights(#[from] rand::distributions::WeightedError),
}

pub type Result<T> = std::result::Result<T, Error>;
