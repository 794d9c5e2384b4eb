//! Test utilities for the reviewer service crate.
//!
//! This module provides shared doubles for unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or with the
//! `test-support` feature.

use std::sync::Mutex;

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

use crate::domain::ports::ReviewerRandomizer;

/// Fixed instant used as "now" by test clocks.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("valid fixture timestamp"))
}

/// Clock that starts at a fixed instant and only moves when told to.
pub struct MutableClock(Mutex<DateTime<Utc>>);

impl MutableClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn advance_minutes(&self, minutes: i64) {
        *self.lock_clock() += TimeDelta::minutes(minutes);
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, DateTime<Utc>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(_) => panic!("clock mutex"),
        }
    }
}

impl Default for MutableClock {
    fn default() -> Self {
        Self::new(fixture_timestamp())
    }
}

impl Clock for MutableClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        *self.lock_clock()
    }
}

/// Randomizer that reverses the candidate order.
///
/// Useful to prove that selection follows the permutation rather than the
/// roster order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReversingRandomizer;

impl ReviewerRandomizer for ReversingRandomizer {
    fn shuffle(&self, len: usize, swap: &mut dyn FnMut(usize, usize)) {
        for i in 0..len / 2 {
            swap(i, len - 1 - i);
        }
    }
}
