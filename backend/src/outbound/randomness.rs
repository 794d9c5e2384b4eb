//! Production permutation sources for reviewer selection.

use std::sync::Mutex;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::domain::ports::ReviewerRandomizer;

fn fisher_yates(rng: &mut impl Rng, len: usize, swap: &mut dyn FnMut(usize, usize)) {
    for i in (1..len).rev() {
        let j = rng.gen_range(0..=i);
        swap(i, j);
    }
}

/// Randomizer drawing from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngRandomizer;

impl ReviewerRandomizer for ThreadRngRandomizer {
    fn shuffle(&self, len: usize, swap: &mut dyn FnMut(usize, usize)) {
        fisher_yates(&mut rand::thread_rng(), len, swap);
    }
}

/// Randomizer with a fixed seed so assignments are reproducible across runs.
#[derive(Debug)]
pub struct SeededRandomizer {
    rng: Mutex<SmallRng>,
}

impl SeededRandomizer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(SmallRng::seed_from_u64(seed)),
        }
    }
}

impl ReviewerRandomizer for SeededRandomizer {
    fn shuffle(&self, len: usize, swap: &mut dyn FnMut(usize, usize)) {
        // A poisoned generator is still a valid generator.
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        fisher_yates(&mut *rng, len, swap);
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn permute(randomizer: &dyn ReviewerRandomizer, len: usize) -> Vec<usize> {
        let mut values: Vec<usize> = (0..len).collect();
        randomizer.shuffle(len, &mut |i, j| values.swap(i, j));
        values
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn short_inputs_emit_no_swaps(#[case] len: usize) {
        let mut swaps = 0;
        ThreadRngRandomizer.shuffle(len, &mut |_, _| swaps += 1);
        SeededRandomizer::new(7).shuffle(len, &mut |_, _| swaps += 1);
        assert_eq!(swaps, 0);
    }

    #[test]
    fn shuffle_yields_a_permutation() {
        let mut shuffled = permute(&ThreadRngRandomizer, 16);
        shuffled.sort_unstable();
        assert_eq!(shuffled, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_gives_same_order() {
        let first = permute(&SeededRandomizer::new(42), 12);
        let second = permute(&SeededRandomizer::new(42), 12);
        assert_eq!(first, second);
    }

    #[test]
    fn swaps_stay_in_bounds() {
        let randomizer = SeededRandomizer::new(3);
        let mut seen = Vec::new();
        randomizer.shuffle(5, &mut |i, j| seen.push((i, j)));
        assert_eq!(seen.len(), 4);
        assert!(seen.iter().all(|&(i, j)| j <= i && i < 5));
    }
}
