//! Bit-string genetic operators.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: swap tails after one cut (Holland, 1975)
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: independent per-bit flip, O(n)

use rand::Rng;

/// Single-point crossover for equal-length bit strings.
///
/// Picks a cut uniformly in `[1, n-1]` and returns
/// `(p1[..cut] ++ p2[cut..], p2[..cut] ++ p1[cut..])`. Strings shorter than
/// two bits have no interior cut and are returned unchanged.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    (splice(parent1, parent2, cut), splice(parent2, parent1, cut))
}

fn splice(head: &[bool], tail: &[bool], cut: usize) -> Vec<bool> {
    let mut child = Vec::with_capacity(head.len());
    child.extend_from_slice(&head[..cut]);
    child.extend_from_slice(&tail[cut..]);
    child
}

/// Flips each bit independently with probability `rate`.
///
/// Returns the number of flipped bits.
///
/// # Panics
/// Panics if `rate` is outside `[0, 1]`.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for bit in genes.iter_mut() {
        if rng.random_bool(rate) {
            *bit = !*bit;
            flipped += 1;
        }
    }
    flipped
}
