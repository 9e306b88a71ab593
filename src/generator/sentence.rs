use rand::{distributions::WeightedIndex, Rng};
use rand_distr::Distribution;

use crate::{error::Result, valence::Valence};

use super::punctuation::punctuate;

const TERMINALS: [char; 3] = ['.', '!', '?'];
const TERMINAL_WEIGHTS: [f64; 3] = [0.7, 0.15, 0.15];

/// Turns words into a finished sentence: punctuated, lower-cased except for the first letter,
/// and ended with `.`, `!` or `?`.
///
/// Returns `None` for an empty sentence.
pub(crate) fn format_sentence<R: Rng + ?Sized>(
    rng: &mut R,
    words: Vec<String>,
    valence: Valence,
) -> Result<Option<String>> {
    if words.is_empty() {
        return Ok(None);
    }

    let words = punctuate(rng, words, valence)?;
    let lower = words.join(" ").to_lowercase();

    let mut chars = lower.chars();
    let mut sentence = String::with_capacity(lower.len() + 1);
    if let Some(first) = chars.next() {
        sentence.extend(first.to_uppercase());
        sentence.push_str(chars.as_str());
    }

    let terminal = WeightedIndex::new(TERMINAL_WEIGHTS)?;
    sentence.push(TERMINALS[terminal.sample(rng)]);

    Ok(Some(sentence))
}
