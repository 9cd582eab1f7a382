use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::hand::Outcome;

/// Скользящая история исходов: старые вытесняются первыми.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeHistory {
    limit: usize,
    entries: VecDeque<Outcome>,
}

/// Сколько раз выпал каждый исход в окне истории.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeTally {
    pub player: u32,
    pub banker: u32,
    pub tie: u32,
}

impl OutcomeHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: VecDeque::with_capacity(limit),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.entries.push_back(outcome);
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// От старого к новому.
    pub fn iter(&self) -> impl Iterator<Item = &Outcome> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<Outcome> {
        self.entries.iter().copied().collect()
    }

    pub fn tally(&self) -> OutcomeTally {
        let mut t = OutcomeTally::default();
        for o in &self.entries {
            match o {
                Outcome::Player => t.player += 1,
                Outcome::Banker => t.banker += 1,
                Outcome::Tie => t.tie += 1,
            }
        }
        t
    }
}
