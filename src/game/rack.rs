use rand::seq::SliceRandom;

use crate::models::Tile;

/// The sentinel letter callers use for a blank tile.
pub const BLANK_SENTINEL: char = '?';

/// The tiles a player currently holds. Order is preserved for display but
/// carries no meaning for generation; only the letter counts matter there.
/// No capacity limit is enforced here, that policy lives with the session.
#[derive(Debug, Clone, Default)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Build a rack from raw letters; `'?'` becomes a blank worth 0.
    pub fn from_letters(letters: &[char]) -> Self {
        let tiles = letters
            .iter()
            .map(|&letter| {
                if letter == BLANK_SENTINEL {
                    Tile::new(BLANK_SENTINEL, true)
                } else {
                    Tile::new(letter, false)
                }
            })
            .collect();
        Self { tiles }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove and return the tile at `index`, or None when out of range.
    pub fn remove(&mut self, index: usize) -> Option<Tile> {
        if index < self.tiles.len() {
            Some(self.tiles.remove(index))
        } else {
            None
        }
    }

    /// Shuffle the rack in place. Display-only; generation ignores order.
    pub fn shuffle(&mut self) {
        self.tiles.shuffle(&mut rand::rng());
    }
}
