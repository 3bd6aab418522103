use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a sequence of `length` elements drawn uniformly from `alpha`
/// using a seeded PRNG, so the same `seed` always gives the same sequence. An
/// empty `alpha` gives an empty sequence.
#[must_use]
pub fn rand_sequence<T: Copy>(alpha: &[T], length: usize, seed: u64) -> Vec<T> {
    if alpha.is_empty() {
        return Vec::new();
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

    (1..=length)
        .map(|_| alpha[rng.next_u32() as usize % alpha.len()])
        .collect()
}

/// Generates a sequence of `length` elements drawn from `alpha` with a copy of
/// `pattern` planted at a random position. Returns the sequence and the
/// position of the planted pattern, or [`None`] if `pattern` is longer than
/// `length`.
#[must_use]
pub fn rand_sequence_with<T: Copy>(alpha: &[T], pattern: &[T], length: usize, seed: u64) -> Option<(Vec<T>, usize)> {
    let positions = length.checked_sub(pattern.len())? + 1;
    let mut sequence = rand_sequence(alpha, length, seed);
    if sequence.len() < length {
        return None;
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed.rotate_left(32));
    let at = rng.next_u32() as usize % positions;
    sequence[at..at + pattern.len()].copy_from_slice(pattern);
    Some((sequence, at))
}
