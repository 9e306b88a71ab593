use rand::Rng;

/// Draws `n` entries from `pool`, uniformly and with replacement.
///
/// `pool` must not be empty unless `n` is zero.
pub(crate) fn sample<R, S>(rng: &mut R, pool: &[S], n: usize) -> Vec<String>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|_| pool[rng.gen_range(0..pool.len())].as_ref().to_owned())
        .collect()
}
