//! Immutable search states.
//!
//! A [`PuzzleState`] is one branch of the search tree: the words still available,
//! the slots still to fill, and the letters placed so far. Placing a word never
//! touches the state it came from; it builds a new one. The slot list is shared
//! read-only between all branches through an `Arc`, and each state only records
//! how many of its leading slots are already filled.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::letter::{Letter, Word};
use crate::render::render_grid;
use crate::slot::{Coord, Slot};

/// Letters placed so far, keyed by coordinate.
pub type Grid = BTreeMap<Coord, Letter>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleState {
    pool: Vec<Word>,
    slots: Arc<[Slot]>,
    filled: usize,
    grid: Grid,
}

impl PuzzleState {
    /// The root state: nothing placed, every slot open.
    pub fn new(pool: Vec<Word>, slots: Vec<Slot>) -> Self {
        PuzzleState {
            pool,
            slots: slots.into(),
            filled: 0,
            grid: Grid::new(),
        }
    }

    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Slots not yet filled, in fill order.
    pub fn remaining_slots(&self) -> &[Slot] {
        &self.slots[self.filled..]
    }

    /// Every slot of the puzzle, filled or not.
    pub fn all_slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_solved(&self) -> bool {
        self.remaining_slots().is_empty()
    }

    /// The slot the next placement fills.
    pub fn next_slot(&self) -> Option<&Slot> {
        self.remaining_slots().first()
    }

    /// The letters `word` would write into `slot`, or `None` if any of them
    /// disagrees with a letter already on the grid.
    pub fn placement(&self, slot: &Slot, word: &Word) -> Option<Vec<(Coord, Letter)>> {
        if slot.len() != word.len() {
            return None;
        }

        slot.cells()
            .iter()
            .zip(word)
            .map(|(cell, &letter)| match self.grid.get(&cell.coord) {
                Some(existing) if *existing != letter => None,
                _ => Some((cell.coord, letter)),
            })
            .collect()
    }

    /// Fill the next slot with the pool word at `pool_index`.
    ///
    /// Returns `None` if the state is solved, the index is out of range, the word
    /// does not fit the slot's pattern, or the placement conflicts with the grid.
    pub fn place(&self, pool_index: usize) -> Option<PuzzleState> {
        let slot = self.next_slot()?;
        let word = self.pool.get(pool_index)?;
        if !slot.matches(word) {
            return None;
        }
        let delta = self.placement(slot, word)?;

        let mut pool = self.pool.clone();
        pool.remove(pool_index);

        let mut grid = self.grid.clone();
        grid.extend(delta);

        debug_assert_eq!(pool.len() + 1, self.pool.len());
        Some(PuzzleState {
            pool,
            slots: Arc::clone(&self.slots),
            filled: self.filled + 1,
            grid,
        })
    }

    /// Every legal child of this state, in pool order.
    ///
    /// Only the first occurrence of a repeated pool word is tried: later copies
    /// would produce an identical child. The search therefore returns each
    /// distinct grid once; a pool of `AB AB` for a single `OX` slot gives one
    /// solution (with the other `AB` left in its pool), not two equal ones.
    pub fn expand(&self) -> Vec<PuzzleState> {
        let Some(slot) = self.next_slot() else {
            return Vec::new();
        };

        let mut tried: Vec<&Word> = Vec::new();
        let mut children = Vec::new();
        for (i, word) in slot.candidates(&self.pool) {
            if tried.contains(&word) {
                continue;
            }
            tried.push(word);
            children.extend(self.place(i));
        }
        children
    }

    /// Fixed-width text rendering of the grid.
    pub fn to_visual(&self) -> String {
        render_grid(&self.grid)
    }
}
