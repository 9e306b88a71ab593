//! This module contains the paragraph generator and the pieces it is built from.
//!
//! Text is produced top-down: sentence counts are settled for every paragraph, a word budget is
//! drawn per paragraph, words are sampled behind a starter word, and the resulting stream is cut
//! into sentences which are punctuated, cased and terminated one by one.

pub(crate) mod punctuation;
pub(crate) mod sampler;
pub(crate) mod segmenter;
pub(crate) mod sentence;

use std::{fmt, ops::Deref};

use rand::Rng;
use rand_distr::{Binomial, Distribution};
use tracing::instrument;

use crate::{
    error::{Error, Result},
    valence::Valence,
    vocabulary::Vocabulary,
};

/// Trials and success probability for picking a paragraph's sentence count when none is given.
const SENTENCE_TRIALS: u64 = 10;
const SENTENCE_PROBABILITY: f64 = 0.45;

pub const DEFAULT_AVG_WORDS_PER_SENTENCE: f64 = 10.0;

/// Most paragraphs a single request may ask for.
pub const MAX_PARAGRAPHS: usize = 10_000;

/// Most words a single paragraph may average out to (sentences times words per sentence).
pub const MAX_WORDS_PER_PARAGRAPH: f64 = 1_000_000.0;

/// A validated request for paragraphs.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    paragraphs: usize,
    /// One count per paragraph, or `None` for random counts.
    sentences: Option<Vec<usize>>,
    avg_words_per_sentence: f64,
}

impl Request {
    /// Checks and normalizes a request.
    ///
    /// A single sentence count is used for every paragraph. Otherwise there must be exactly one
    /// count per paragraph. Requests beyond [`MAX_PARAGRAPHS`] or [`MAX_WORDS_PER_PARAGRAPH`] are
    /// refused.
    pub fn new(
        paragraphs: usize,
        sentences: Option<Vec<usize>>,
        avg_words_per_sentence: f64,
    ) -> Result<Self> {
        if paragraphs == 0 {
            return Err(Error::InvalidParagraphs);
        }
        if paragraphs > MAX_PARAGRAPHS {
            return Err(Error::TooManyParagraphs {
                paragraphs,
                max: MAX_PARAGRAPHS,
            });
        }

        let sentences = match sentences {
            Some(counts) => {
                if let Some(index) = counts.iter().position(|c| *c == 0) {
                    return Err(Error::InvalidSentences { index });
                }
                let counts = if counts.len() == 1 {
                    vec![counts[0]; paragraphs]
                } else {
                    counts
                };
                if counts.len() != paragraphs {
                    return Err(Error::SentenceCountMismatch {
                        paragraphs,
                        sentences: counts.len(),
                    });
                }
                Some(counts)
            }
            None => None,
        };

        if !avg_words_per_sentence.is_finite() || avg_words_per_sentence <= 0.0 {
            return Err(Error::InvalidAverage(avg_words_per_sentence));
        }

        let most_sentences = match &sentences {
            Some(counts) => counts.iter().copied().max().unwrap_or(1),
            None => SENTENCE_TRIALS as usize,
        };
        let words = avg_words_per_sentence * most_sentences as f64;
        if words > MAX_WORDS_PER_PARAGRAPH {
            return Err(Error::TooManyWords {
                words,
                max: MAX_WORDS_PER_PARAGRAPH,
            });
        }

        Ok(Self {
            paragraphs,
            sentences,
            avg_words_per_sentence,
        })
    }

    pub fn paragraphs(&self) -> usize {
        self.paragraphs
    }

    pub fn sentences(&self) -> Option<&[usize]> {
        self.sentences.as_deref()
    }

    pub fn avg_words_per_sentence(&self) -> f64 {
        self.avg_words_per_sentence
    }
}

impl Default for Request {
    fn default() -> Self {
        Self {
            paragraphs: 1,
            sentences: None,
            avg_words_per_sentence: DEFAULT_AVG_WORDS_PER_SENTENCE,
        }
    }
}

/// Generated lorem ipsum, one string per paragraph.
///
/// Displays as paragraphs separated by blank lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ipsum(Vec<String>);

impl Ipsum {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Ipsum {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Ipsum {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Ipsum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("\n\n"))
    }
}

/// Random words, either joined by spaces or kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Words {
    Joined(String),
    Split(Vec<String>),
}

impl Words {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Joined(s) => s.split_whitespace().map(str::to_owned).collect(),
            Self::Split(v) => v,
        }
    }
}

impl fmt::Display for Words {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined(s) => write!(f, "{s}"),
            Self::Split(v) => write!(f, "{}", v.join("\n")),
        }
    }
}

/// Produces lorem ipsum from a vocabulary, using an explicit random source.
///
/// Seed `rng` for reproducible output.
#[derive(Debug)]
pub struct Generator<'v, R> {
    rng: R,
    vocabulary: &'v Vocabulary,
    valence: Valence,
}

impl<'v, R: Rng> Generator<'v, R> {
    pub fn new(rng: R, vocabulary: &'v Vocabulary, valence: Valence) -> Self {
        Self {
            rng,
            vocabulary,
            valence,
        }
    }

    pub fn valence(&self) -> Valence {
        self.valence
    }

    /// `n` random words from the vocabulary, joined by spaces if `collapse` is set.
    pub fn words(&mut self, n: usize, collapse: bool) -> Words {
        let words = sampler::sample(&mut self.rng, self.vocabulary.words(), n);
        if collapse {
            Words::Joined(words.join(" "))
        } else {
            Words::Split(words)
        }
    }

    /// `n` random starter words.
    pub fn starts(&mut self, n: usize) -> Vec<String> {
        sampler::sample(&mut self.rng, self.vocabulary.starters(), n)
    }

    /// Generates the paragraphs described by `request`.
    #[instrument(name = "paragraphs", skip(self), level = "debug")]
    pub fn paragraphs(&mut self, request: &Request) -> Result<Ipsum> {
        let counts = match request.sentences() {
            Some(counts) => counts.to_vec(),
            None => {
                let binomial = Binomial::new(SENTENCE_TRIALS, SENTENCE_PROBABILITY)?;
                (0..request.paragraphs())
                    .map(|_| (binomial.sample(&mut self.rng) as usize).max(1))
                    .collect()
            }
        };

        let paragraphs = counts
            .into_iter()
            .map(|sentences| self.paragraph(sentences, request.avg_words_per_sentence()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Ipsum(paragraphs))
    }

    fn paragraph(&mut self, sentences: usize, avg_words_per_sentence: f64) -> Result<String> {
        // Twice the target as trials at p = 0.5 centers the budget on the target
        let trials = (avg_words_per_sentence * sentences as f64 * 2.0).round() as u64;
        let budget = Binomial::new(trials, 0.5)?.sample(&mut self.rng) as usize;
        tracing::debug!("Paragraph with {sentences} sentences gets {budget} words");

        let body = sampler::sample(&mut self.rng, self.vocabulary.words(), budget);
        let starter = sampler::sample(&mut self.rng, self.vocabulary.starters(), 1);
        let blob = format!("{} {}", starter.join(" "), body.join(" "));
        let stream: Vec<String> = blob.split_whitespace().map(str::to_owned).collect();

        let mut formatted = Vec::with_capacity(sentences);
        for words in segmenter::segment(&mut self.rng, stream, Some(sentences))? {
            if let Some(s) = sentence::format_sentence(&mut self.rng, words, self.valence)? {
                formatted.push(s);
            }
        }

        Ok(formatted.join(" "))
    }
}
