//! Reviewer candidate selection.
//!
//! A candidate is an active team member who is not the author and not in the
//! caller's exclusion list. Ordering comes from the injected
//! [`ReviewerRandomizer`]; the pool itself starts in roster order.

use std::collections::HashSet;

use super::ports::ReviewerRandomizer;
use super::{ReviewError, User, UserId};

/// Eligible reviewers for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    candidates: Vec<UserId>,
}

impl CandidatePool {
    /// Build the pool from a roster.
    ///
    /// Inactive members, the author and every id in `excluded` are skipped.
    pub fn from_roster<'a>(
        roster: &[User],
        author_id: &UserId,
        excluded: impl IntoIterator<Item = &'a UserId>,
    ) -> Self {
        let excluded: HashSet<&UserId> = excluded.into_iter().collect();
        let candidates = roster
            .iter()
            .filter(|member| member.is_active())
            .map(User::id)
            .filter(|id| *id != author_id && !excluded.contains(id))
            .cloned()
            .collect();
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn contains(&self, user_id: &UserId) -> bool {
        self.candidates.contains(user_id)
    }

    /// Shuffle the pool and keep at most `limit` candidates.
    pub fn pick(mut self, limit: usize, randomizer: &dyn ReviewerRandomizer) -> Vec<UserId> {
        let candidates = &mut self.candidates;
        randomizer.shuffle(candidates.len(), &mut |i, j| candidates.swap(i, j));
        self.candidates.truncate(limit);
        self.candidates
    }

    /// Choose a single replacement.
    ///
    /// A requested id must be in the pool; otherwise a random candidate is
    /// drawn. Both paths fail with [`ReviewError::NoReviewerCandidates`].
    pub fn choose(
        self,
        requested: Option<&UserId>,
        randomizer: &dyn ReviewerRandomizer,
    ) -> Result<UserId, ReviewError> {
        if let Some(requested) = requested {
            return if self.contains(requested) {
                Ok(requested.clone())
            } else {
                Err(ReviewError::NoReviewerCandidates)
            };
        }
        self.pick(1, randomizer)
            .into_iter()
            .next()
            .ok_or(ReviewError::NoReviewerCandidates)
    }
}
