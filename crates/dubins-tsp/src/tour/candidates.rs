//! Shrinking set of unvisited sites, keyed by input index.

use crate::error::{Error, Result};

/// Indices `0..len` not yet visited.
///
/// Removal is permanent. Iteration is always in ascending index order, which
/// is what makes the constructor's tie-break reproducible.
#[derive(Clone, Debug)]
pub struct CandidateSet {
    alive: Vec<bool>,
    remaining: usize,
}

impl CandidateSet {
    /// All of `0..len`. `InvalidInput` for `len == 0`: there is nothing to tour.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::invalid_input("empty node set"));
        }
        Ok(Self {
            alive: vec![true; len],
            remaining: len,
        })
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.alive.get(index).copied().unwrap_or(false)
    }

    /// `NotFound` if `index` was never present or was already removed.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        match self.alive.get_mut(index) {
            Some(slot) if *slot => {
                *slot = false;
                self.remaining -= 1;
                Ok(())
            }
            _ => Err(Error::NotFound(index)),
        }
    }

    /// Remaining indices, ascending, each exactly once.
    pub fn remaining(&self) -> impl Iterator<Item = usize> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| alive.then_some(i))
    }
}
