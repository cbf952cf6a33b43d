//! Product vote counters.
//!
//! Each product carries a pair of bounded counters. A vote past its
//! configured limit is absorbed as a no-op rather than an error.

use serde::{Deserialize, Serialize};

/// Default ceiling for up-vote counters on newly created products.
pub const DEFAULT_UPPER_LIMIT: i64 = 10;

/// Default floor for down-vote counters on newly created products.
pub const DEFAULT_LOWER_LIMIT: i64 = 10;

/// Up-vote counter with a configured ceiling.
///
/// Invariant: `0 <= current_value <= upper_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpVotes {
    /// Current number of up votes.
    pub current_value: i64,
    /// Ceiling past which further votes are ignored.
    pub upper_limit: i64,
}

impl UpVotes {
    /// A zeroed counter with the given ceiling.
    #[must_use]
    pub const fn new(upper_limit: i64) -> Self {
        Self {
            current_value: 0,
            upper_limit,
        }
    }

    /// The counter after one more vote, or `None` once the ceiling is reached.
    #[must_use]
    pub const fn bump(&self) -> Option<Self> {
        if self.current_value < self.upper_limit {
            Some(Self {
                current_value: self.current_value + 1,
                upper_limit: self.upper_limit,
            })
        } else {
            None
        }
    }

    /// Whether the counter has crossed half of its limit.
    #[must_use]
    pub const fn is_popular(&self) -> bool {
        self.current_value >= self.upper_limit / 2
    }
}

/// Down-vote counter with a configured floor.
///
/// The counter moves while `current_value` is below `lower_limit` and is
/// frozen once the limit is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownVotes {
    /// Current number of down votes.
    pub current_value: i64,
    /// Limit past which further votes are ignored. May be negative or zero.
    pub lower_limit: i64,
}

impl DownVotes {
    /// A zeroed counter with the given floor.
    #[must_use]
    pub const fn new(lower_limit: i64) -> Self {
        Self {
            current_value: 0,
            lower_limit,
        }
    }

    /// The counter after one more vote, or `None` once the limit is reached.
    #[must_use]
    pub const fn bump(&self) -> Option<Self> {
        if self.current_value < self.lower_limit {
            Some(Self {
                current_value: self.current_value + 1,
                lower_limit: self.lower_limit,
            })
        } else {
            None
        }
    }

    /// Whether the counter has crossed half of its limit.
    #[must_use]
    pub const fn is_unpopular(&self) -> bool {
        self.current_value >= self.lower_limit / 2
    }
}

/// The vote counters carried by a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    /// Up-vote counter.
    pub up_votes: UpVotes,
    /// Down-vote counter.
    pub down_votes: DownVotes,
}

impl Votes {
    /// Zeroed counters with the given limits.
    #[must_use]
    pub const fn new(upper_limit: i64, lower_limit: i64) -> Self {
        Self {
            up_votes: UpVotes::new(upper_limit),
            down_votes: DownVotes::new(lower_limit),
        }
    }
}

impl Default for Votes {
    fn default() -> Self {
        Self::new(DEFAULT_UPPER_LIMIT, DEFAULT_LOWER_LIMIT)
    }
}
