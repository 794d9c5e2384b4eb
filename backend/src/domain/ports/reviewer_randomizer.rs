//! Port for the permutation source used when picking reviewers.

/// Produces a random permutation by emitting swaps.
///
/// Implementations call `swap(i, j)` for each exchange of an in-place
/// Fisher–Yates shuffle over `len` elements and emit nothing when `len < 2`.
///
/// # Examples
/// ```
/// use reviewer_service::domain::ports::ReviewerRandomizer;
///
/// struct Reverse;
///
/// impl ReviewerRandomizer for Reverse {
///     fn shuffle(&self, len: usize, swap: &mut dyn FnMut(usize, usize)) {
///         for i in 0..len / 2 {
///             swap(i, len - 1 - i);
///         }
///     }
/// }
///
/// let mut values = vec![1, 2, 3];
/// Reverse.shuffle(values.len(), &mut |i, j| values.swap(i, j));
/// assert_eq!(values, [3, 2, 1]);
/// ```
pub trait ReviewerRandomizer: Send + Sync {
    fn shuffle(&self, len: usize, swap: &mut dyn FnMut(usize, usize));
}

/// Randomizer that keeps the input order; candidates are taken roster-first.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureReviewerRandomizer;

impl ReviewerRandomizer for FixtureReviewerRandomizer {
    fn shuffle(&self, _len: usize, _swap: &mut dyn FnMut(usize, usize)) {}
}
