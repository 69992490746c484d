//! Dice pool for the current turn and the roller that fills it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::domain::{DomainError, ValidationKind};

/// Remaining move distances for the current turn.
///
/// A non-double roll yields the two face values; a double yields four copies
/// of the face. Values are consumed one at a time as moves are applied, and
/// the turn ends when the pool is empty or no remaining value yields a legal
/// move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dice {
    remaining: Vec<u8>,
}

impl Dice {
    pub fn empty() -> Self {
        Self {
            remaining: Vec::new(),
        }
    }

    /// Fill the pool from two rolled faces.
    pub(crate) fn fill(&mut self, die1: u8, die2: u8) {
        self.remaining.clear();
        if die1 == die2 {
            self.remaining.extend([die1; 4]);
        } else {
            self.remaining.push(die1);
            self.remaining.push(die2);
        }
    }

    /// Pool rebuilt from already-validated remaining values (snapshot
    /// restore).
    pub(crate) fn from_remaining(values: &[u8]) -> Self {
        Self {
            remaining: values.to_vec(),
        }
    }

    /// Unused move distances, in consumption order.
    pub fn remaining(&self) -> &[u8] {
        &self.remaining
    }

    /// True while unused move distances remain.
    pub fn rolled(&self) -> bool {
        !self.remaining.is_empty()
    }

    pub fn contains(&self, die: u8) -> bool {
        self.remaining.contains(&die)
    }

    /// Remove exactly one instance of `die` from the pool.
    pub(crate) fn consume(&mut self, die: u8) -> Result<(), DomainError> {
        match self.remaining.iter().position(|&value| value == die) {
            Some(pos) => {
                self.remaining.remove(pos);
                Ok(())
            }
            None => Err(DomainError::validation(
                ValidationKind::IllegalMove,
                format!("die {die} is not among the remaining dice"),
            )),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.remaining.clear();
    }

    #[cfg(test)]
    pub(crate) fn set_remaining_for_test(&mut self, values: &[u8]) {
        self.remaining = values.to_vec();
    }
}

/// Source of die faces. Seeded for deterministic replay, OS entropy
/// otherwise.
#[derive(Debug)]
pub struct DiceRoller {
    rng: StdRng,
}

impl DiceRoller {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Two independent uniform draws in 1..=6.
    pub fn roll(&mut self) -> (u8, u8) {
        let die1: u8 = self.rng.random_range(1..=6);
        let die2: u8 = self.rng.random_range(1..=6);
        (die1, die2)
    }
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::from_entropy()
    }
}
