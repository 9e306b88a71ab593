//! Cutting a paragraph's word stream into sentences.

use rand::Rng;
use rand_distr::{Binomial, Distribution};

use crate::error::Result;

/// Trials used when drawing a boundary length. Expected length is half of this.
const BOUNDARY_TRIALS: u64 = 20;

/// Sentence count used when none is given: roughly one sentence per this many words.
const WORDS_PER_SENTENCE: f64 = 10.0;

/// Splits `words` into `n` contiguous sentences of randomized, roughly equal length.
///
/// `None` picks `round(len / 10)` sentences, at least one. Every word ends up in exactly one
/// sentence, in order. If the first drawn boundary already covers the whole stream everything
/// becomes a single sentence, regardless of `n`.
///
/// Otherwise the largest boundary is shrunk while the boundaries add up to the whole stream or
/// more. Stopping only once they fall below it, rather than once they stop exceeding it, leaves
/// the last sentence at least one word. Empty sentences are dropped as well, so a stream with
/// fewer words than `n` yields fewer sentences.
pub(crate) fn segment<R: Rng + ?Sized>(
    rng: &mut R,
    words: Vec<String>,
    n: Option<usize>,
) -> Result<Vec<Vec<String>>> {
    let total = words.len();
    let n = n.unwrap_or_else(|| ((total as f64 / WORDS_PER_SENTENCE).round() as usize).max(1));

    if n <= 1 || total == 0 {
        return Ok(vec![words]);
    }

    let binomial = Binomial::new(BOUNDARY_TRIALS, 0.5)?;
    let mut lengths: Vec<usize> = (0..n - 1)
        .map(|_| binomial.sample(rng) as usize)
        .collect();

    if lengths[0] >= total {
        return Ok(vec![words]);
    }

    // Leave room for at least one word in the final sentence
    while lengths.iter().sum::<usize>() >= total {
        let largest = first_max_index(&lengths);
        lengths[largest] -= 1;
    }

    let mut sentences = Vec::with_capacity(n);
    let mut rest = words.into_iter();
    for len in lengths {
        let sentence: Vec<String> = rest.by_ref().take(len).collect();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
    }
    sentences.push(rest.collect());

    Ok(sentences)
}

/// Index of the first occurrence of the largest value.
fn first_max_index(values: &[usize]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate() {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::{Binomial, Distribution};

    use super::{first_max_index, segment, BOUNDARY_TRIALS};

    fn stream(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn one_sentence_keeps_everything() {
        let mut rng = StdRng::seed_from_u64(0);
        let sentences = segment(&mut rng, stream(7), Some(1)).unwrap();
        assert_eq!(sentences, vec![stream(7)]);
    }

    #[test]
    fn covers_stream_in_order() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentences = segment(&mut rng, stream(60), Some(5)).unwrap();
            let flat: Vec<String> = sentences.iter().flatten().cloned().collect();
            assert_eq!(flat, stream(60), "seed {seed} lost or reordered words");
            assert!(sentences.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn produces_requested_count_when_words_suffice() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            // Four boundaries of at most 20 words each never reach 120
            let sentences = segment(&mut rng, stream(120), Some(5)).unwrap();
            assert_eq!(sentences.len(), 5, "seed {seed}");
        }
    }

    #[test]
    fn short_stream_shrinks_boundaries() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentences = segment(&mut rng, stream(21), Some(4)).unwrap();
            let flat: Vec<String> = sentences.into_iter().flatten().collect();
            assert_eq!(flat, stream(21));
        }
    }

    #[test]
    fn tiny_stream_collapses_or_stays_nonempty() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentences = segment(&mut rng, stream(2), Some(6)).unwrap();
            assert!(sentences.len() <= 2);
            assert!(sentences.iter().all(|s| !s.is_empty()));
        }
    }

    #[test]
    fn long_first_boundary_collapses() {
        let binomial = Binomial::new(BOUNDARY_TRIALS, 0.5).unwrap();
        let mut collapsed = 0;
        for seed in 0..200 {
            let first = binomial.sample(&mut StdRng::seed_from_u64(seed)) as usize;
            let mut rng = StdRng::seed_from_u64(seed);
            let sentences = segment(&mut rng, stream(9), Some(4)).unwrap();
            if first >= 9 {
                assert_eq!(sentences, vec![stream(9)], "seed {seed} did not collapse");
                collapsed += 1;
            }
        }
        assert!(collapsed > 0);
    }

    #[test]
    fn single_word_stays_one_sentence() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentences = segment(&mut rng, stream(1), Some(5)).unwrap();
            assert_eq!(sentences, vec![stream(1)]);
        }
    }

    #[test]
    fn crowded_boundaries_leave_last_sentence() {
        // Three boundaries average 30 words, usually more than the stream holds
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentences = segment(&mut rng, stream(25), Some(4)).unwrap();
            assert!(sentences.last().is_some_and(|s| !s.is_empty()), "seed {seed}");
        }
    }

    #[test]
    fn default_count_follows_length() {
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(segment(&mut rng, stream(4), None).unwrap().len(), 1);
        let sentences = segment(&mut rng, stream(200), None).unwrap();
        assert_eq!(sentences.len(), 20);
    }

    #[test]
    fn empty_stream() {
        let mut rng = StdRng::seed_from_u64(0);
        let sentences = segment(&mut rng, vec![], Some(3)).unwrap();
        assert_eq!(sentences, vec![Vec::<String>::new()]);
    }

    #[test]
    fn ties_pick_first() {
        assert_eq!(first_max_index(&[3, 9, 2, 9]), 1);
        assert_eq!(first_max_index(&[4]), 0);
    }
}
