//! Sprinkling commas, colons, semicolons and dashes into a sentence.
//!
//! Positions are drawn from a normal distribution centered on the middle of the sentence, so
//! punctuation clusters mid-sentence and never lands next to either end. The valence decides how
//! close a drawn position has to be to an actual word to be accepted.

use rand::{distributions::WeightedIndex, seq::SliceRandom, Rng};
use rand_distr::{Distribution, Normal};

use crate::{error::Result, valence::Valence};

/// Minimum distance, in words, between a mark and either end of the sentence.
const EDGE_MARGIN: f64 = 2.0;

const MARKS: [Mark; 4] = [Mark::Comma, Mark::Colon, Mark::Semicolon, Mark::Dash];
const MARK_WEIGHTS: [f64; 4] = [0.7, 0.1, 0.1, 0.1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mark {
    Comma,
    Colon,
    Semicolon,
    Dash,
}

impl Mark {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Dash => "\u{2013}",
        }
    }
}

/// Returns `words` with punctuation appended to some of them.
pub(crate) fn punctuate<R: Rng + ?Sized>(
    rng: &mut R,
    mut words: Vec<String>,
    valence: Valence,
) -> Result<Vec<String>> {
    let density = match valence {
        Valence::Disabled => return Ok(words),
        Valence::Density(d) => d,
    };

    let positions = draw_positions(rng, words.len(), density)?;
    if positions.is_empty() {
        return Ok(words);
    }

    let weights = WeightedIndex::new(MARK_WEIGHTS)?;
    let mut marks: Vec<Option<Mark>> = positions
        .iter()
        .map(|_| Some(MARKS[weights.sample(rng)]))
        .collect();
    limit_heavy_marks(rng, &mut marks);

    // Repeated positions collapse, the last mark drawn for a word wins
    let mut per_word: Vec<Option<Mark>> = vec![None; words.len()];
    for (pos, mark) in positions.into_iter().zip(marks) {
        per_word[pos] = mark;
    }
    for (word, mark) in words.iter_mut().zip(per_word) {
        if let Some(m) = mark {
            word.push_str(m.as_str());
        }
    }

    Ok(words)
}

/// Draws word indices to punctuate. May contain duplicates.
fn draw_positions<R: Rng + ?Sized>(rng: &mut R, len: usize, density: f64) -> Result<Vec<usize>> {
    if len == 0 {
        return Ok(Vec::new());
    }

    let last = (len - 1) as f64;
    let normal = Normal::new(last / 2.0, (len as f64).sqrt())?;
    let draws = len.div_ceil(3);
    let window = density / 2.0;

    Ok((0..draws)
        .map(|_| normal.sample(rng))
        .filter(|x| *x >= EDGE_MARGIN && *x <= last - EDGE_MARGIN)
        .filter(|x| (x - x.round()).abs() <= window)
        .map(|x| x.round() as usize)
        .collect())
}

/// Colons and semicolons are rare: never both in one sentence, and at most two of either.
fn limit_heavy_marks<R: Rng + ?Sized>(rng: &mut R, marks: &mut [Option<Mark>]) {
    if marks.contains(&Some(Mark::Colon)) && marks.contains(&Some(Mark::Semicolon)) {
        let dropped = if rng.gen_bool(0.5) {
            Mark::Colon
        } else {
            Mark::Semicolon
        };
        for slot in marks.iter_mut().filter(|s| **s == Some(dropped)) {
            *slot = None;
        }
    }

    for heavy in [Mark::Colon, Mark::Semicolon] {
        let found: Vec<usize> = marks
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Some(heavy))
            .map(|(i, _)| i)
            .collect();
        if found.len() > 2 {
            if let Some(keep) = found.choose(rng) {
                for i in found.iter().filter(|i| *i != keep) {
                    marks[*i] = None;
                }
            }
        }
    }
}
