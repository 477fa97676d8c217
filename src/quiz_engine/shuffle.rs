//! Randomisation primitives shared by every question builder.
//!
//! All of them take the random source by `&mut R` so callers decide whether
//! it is entropy-seeded, seeded for reproducibility, or a fixed mock.

use rand::Rng;

/// Return a uniformly permuted copy of `items`.
pub fn shuffle<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(rng, &mut shuffled);
    shuffled
}

/// Fisher-Yates: walk from the last index down, swapping with a uniformly
/// chosen index in `0..=i`.
pub fn shuffle_in_place<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Pick one element uniformly, or `None` for an empty slice.
pub fn pick_random<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    Some(&items[rng.gen_range(0..items.len())])
}

/// Take `k` elements without replacement (shuffle, then keep the prefix).
///
/// Returns fewer than `k` when `items` is shorter than that.
pub fn sample<T: Clone, R: Rng>(rng: &mut R, items: &[T], k: usize) -> Vec<T> {
    let mut picked = shuffle(rng, items);
    picked.truncate(k);
    picked
}
