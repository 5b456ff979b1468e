use std::collections::{HashMap, HashSet};

use crate::dictionary::Dictionary;
use crate::game::board::{coordinate_key, Board, BOARD_SIZE, CENTER};
use crate::game::rack::Rack;
use crate::game::scorer::{Scorer, WordCell, BINGO_BONUS};
use crate::models::{CrossWord, Direction, PlacedTile, Placement, ScoredMove, Tile};

/// Letter inventory for one generation call: concrete letter counts plus a
/// blank count, rebuilt fresh from the rack and cloned per candidate.
#[derive(Clone)]
struct RackInventory {
    letters: HashMap<char, u8>,
    blanks: u8,
}

impl RackInventory {
    fn from_rack(rack: &Rack) -> Self {
        let mut letters: HashMap<char, u8> = HashMap::new();
        let mut blanks = 0;
        for tile in rack.tiles() {
            if tile.is_blank {
                blanks += 1;
            } else {
                *letters.entry(tile.letter).or_insert(0) += 1;
            }
        }
        Self { letters, blanks }
    }

    /// Consume one tile for `letter`: a concrete copy when available,
    /// else a blank. Returns whether the consumed tile was a blank.
    fn take(&mut self, letter: char) -> Option<bool> {
        if let Some(count) = self.letters.get_mut(&letter) {
            if *count > 0 {
                *count -= 1;
                return Some(false);
            }
        }
        if self.blanks > 0 {
            self.blanks -= 1;
            return Some(true);
        }
        None
    }
}

/// A validated candidate before ranking.
struct Candidate {
    word: String,
    direction: Direction,
    start: (u8, u8),
    score: u32,
    is_bingo: bool,
    main_word_score: u32,
    cross_words: Vec<CrossWord>,
    placements: Vec<Placement>,
}

/// Enumerates, validates, scores and ranks candidate moves for one board,
/// dictionary and rack. Holds only shared references; a call mutates none
/// of its inputs, so instances are freely shareable across calls.
pub struct MoveGenerator<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
}

impl<'a> MoveGenerator<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary) -> Self {
        Self { board, dictionary }
    }

    /// Enumerate every legal placement reachable from the board's anchor
    /// squares and return the `limit` best, ranked by score. Ties break by
    /// word, then start row, start column, then horizontal before vertical,
    /// so results are reproducible across runs.
    pub fn generate_moves(&self, rack: &Rack, limit: usize) -> Vec<ScoredMove> {
        let anchors = self.find_anchors();
        if anchors.is_empty() {
            return Vec::new();
        }

        let inventory = RackInventory::from_rack(rack);
        let mut seen: HashSet<(String, u8, u8, Direction)> = HashSet::new();
        let mut candidates: Vec<Candidate> = Vec::new();

        for word in self.dictionary.words() {
            let letters: Vec<char> = word.chars().collect();
            // A legal main word needs at least two letters
            if letters.len() < 2 {
                continue;
            }
            for &anchor in &anchors {
                for direction in [Direction::Horizontal, Direction::Vertical] {
                    for offset in 0..letters.len() {
                        let Some(start) = span_start(anchor, direction, offset, letters.len())
                        else {
                            continue;
                        };
                        let Some(candidate) =
                            self.build_candidate(word, &letters, start, direction, anchor, &inventory, rack.len())
                        else {
                            continue;
                        };
                        // The same span is reachable through several
                        // anchor/offset combinations; keep it once.
                        if seen.insert((candidate.word.clone(), start.0, start.1, direction)) {
                            candidates.push(candidate);
                        }
                    }
                }
            }
        }

        rank(&mut candidates);
        candidates.truncate(limit);
        candidates.into_iter().map(into_scored_move).collect()
    }

    /// Anchor squares: the center cell alone when the board is empty,
    /// otherwise every empty cell orthogonally adjacent to a tile.
    fn find_anchors(&self) -> Vec<(u8, u8)> {
        if self.board.is_empty() {
            return vec![CENTER];
        }
        let mut anchors = Vec::new();
        for row in 1..=BOARD_SIZE {
            for col in 1..=BOARD_SIZE {
                if self.board.tile_at(row, col).is_some() {
                    continue;
                }
                let adjacent_occupied = neighbors(row, col)
                    .into_iter()
                    .any(|(r, c)| self.board.tile_at(r, c).is_some());
                if adjacent_occupied {
                    anchors.push((row, col));
                }
            }
        }
        anchors
    }

    /// Walk one candidate span, consuming rack letters for empty cells and
    /// matching occupied ones, then apply the placement rules and score.
    #[allow(clippy::too_many_arguments)]
    fn build_candidate(
        &self,
        word: &str,
        letters: &[char],
        start: (u8, u8),
        direction: Direction,
        anchor: (u8, u8),
        inventory: &RackInventory,
        rack_size: usize,
    ) -> Option<Candidate> {
        let (dr, dc) = direction.delta();
        let mut inventory = inventory.clone();
        let mut placements: Vec<Placement> = Vec::new();
        let mut main_cells: Vec<WordCell> = Vec::with_capacity(letters.len());
        let mut anchor_is_new = false;

        for (i, &letter) in letters.iter().enumerate() {
            let row = (start.0 as i16 + dr * i as i16) as u8;
            let col = (start.1 as i16 + dc * i as i16) as u8;
            match self.board.tile_at(row, col) {
                Some(occupant) => {
                    // Never overwrite a committed letter
                    if occupant.letter != letter {
                        return None;
                    }
                    main_cells.push(WordCell {
                        row,
                        col,
                        value: occupant.value,
                        newly_placed: false,
                    });
                }
                None => {
                    let is_blank = inventory.take(letter)?;
                    let tile = Tile::new(letter, is_blank);
                    if (row, col) == anchor {
                        anchor_is_new = true;
                    }
                    main_cells.push(WordCell {
                        row,
                        col,
                        value: tile.value,
                        newly_placed: true,
                    });
                    placements.push(Placement { row, col, tile });
                }
            }
        }

        // The word must add something, and must add it on the anchor itself
        if placements.is_empty() || !anchor_is_new {
            return None;
        }

        // An occupied cell just before or after the span would silently
        // extend the word into a different one
        let end = (
            (start.0 as i16 + dr * (letters.len() as i16 - 1)) as u8,
            (start.1 as i16 + dc * (letters.len() as i16 - 1)) as u8,
        );
        if self.occupied_offset(start, -dr, -dc) || self.occupied_offset(end, dr, dc) {
            return None;
        }

        // Every perpendicular word formed by a new tile must be legal
        let mut cross_words = Vec::new();
        let mut cross_total = 0u32;
        for placement in &placements {
            if let Some((text, cells)) = self.cross_word_through(placement, direction.cross()) {
                if !self.dictionary.contains(&text) {
                    return None;
                }
                let score = Scorer::score_word(self.board, &cells);
                cross_total += score;
                cross_words.push(CrossWord { word: text, score });
            }
        }

        let main_word_score = Scorer::score_word(self.board, &main_cells);
        let is_bingo = placements.len() == rack_size;
        let mut score = main_word_score + cross_total;
        if is_bingo {
            score += BINGO_BONUS;
        }

        Some(Candidate {
            word: word.to_string(),
            direction,
            start,
            score,
            is_bingo,
            main_word_score,
            cross_words,
            placements,
        })
    }

    /// True when the cell one step beyond `cell` is on the board and occupied.
    fn occupied_offset(&self, cell: (u8, u8), dr: i16, dc: i16) -> bool {
        let row = cell.0 as i16 + dr;
        let col = cell.1 as i16 + dc;
        if !(1..=BOARD_SIZE as i16).contains(&row) || !(1..=BOARD_SIZE as i16).contains(&col) {
            return false;
        }
        self.board.tile_at(row as u8, col as u8).is_some()
    }

    /// The perpendicular word through a newly placed tile: extend in both
    /// directions along `cross` through occupied cells. Cross cells other
    /// than the placement itself are always pre-existing board tiles, since
    /// a candidate only places along its main axis. Returns None for a
    /// length-1 "word" (the placement touches nothing on that axis).
    fn cross_word_through(
        &self,
        placement: &Placement,
        cross: Direction,
    ) -> Option<(String, Vec<WordCell>)> {
        let (dr, dc) = cross.delta();

        // Scan backwards to the word's first cell
        let mut row = placement.row as i16;
        let mut col = placement.col as i16;
        while row - dr >= 1
            && col - dc >= 1
            && self.board.tile_at((row - dr) as u8, (col - dc) as u8).is_some()
        {
            row -= dr;
            col -= dc;
        }

        let mut text = String::new();
        let mut cells = Vec::new();
        loop {
            if row > BOARD_SIZE as i16 || col > BOARD_SIZE as i16 {
                break;
            }
            let (r, c) = (row as u8, col as u8);
            if (r, c) == (placement.row, placement.col) {
                text.push(placement.tile.letter);
                cells.push(WordCell {
                    row: r,
                    col: c,
                    value: placement.tile.value,
                    newly_placed: true,
                });
            } else if let Some(tile) = self.board.tile_at(r, c) {
                text.push(tile.letter);
                cells.push(WordCell {
                    row: r,
                    col: c,
                    value: tile.value,
                    newly_placed: false,
                });
            } else {
                break;
            }
            row += dr;
            col += dc;
        }

        if cells.len() > 1 {
            Some((text, cells))
        } else {
            None
        }
    }
}

/// Start cell for a span putting `word[offset]` on the anchor, or None when
/// any part of the span would leave the board.
fn span_start(
    anchor: (u8, u8),
    direction: Direction,
    offset: usize,
    len: usize,
) -> Option<(u8, u8)> {
    let (dr, dc) = direction.delta();
    let start_row = anchor.0 as i16 - dr * offset as i16;
    let start_col = anchor.1 as i16 - dc * offset as i16;
    let end_row = start_row + dr * (len as i16 - 1);
    let end_col = start_col + dc * (len as i16 - 1);
    let bounds = 1..=BOARD_SIZE as i16;
    if bounds.contains(&start_row)
        && bounds.contains(&start_col)
        && bounds.contains(&end_row)
        && bounds.contains(&end_col)
    {
        Some((start_row as u8, start_col as u8))
    } else {
        None
    }
}

fn neighbors(row: u8, col: u8) -> Vec<(u8, u8)> {
    let mut cells = Vec::with_capacity(4);
    if row > 1 {
        cells.push((row - 1, col));
    }
    if row < BOARD_SIZE {
        cells.push((row + 1, col));
    }
    if col > 1 {
        cells.push((row, col - 1));
    }
    if col < BOARD_SIZE {
        cells.push((row, col + 1));
    }
    cells
}

/// Score descending, then word, start row, start column, and horizontal
/// before vertical. The documented deterministic tie-break.
fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.word.cmp(&b.word))
            .then_with(|| a.start.0.cmp(&b.start.0))
            .then_with(|| a.start.1.cmp(&b.start.1))
            .then_with(|| direction_order(a.direction).cmp(&direction_order(b.direction)))
    });
}

fn direction_order(direction: Direction) -> u8 {
    match direction {
        Direction::Horizontal => 0,
        Direction::Vertical => 1,
    }
}

fn into_scored_move(candidate: Candidate) -> ScoredMove {
    ScoredMove {
        word: candidate.word,
        direction: candidate.direction,
        start: coordinate_key(candidate.start.0, candidate.start.1),
        score: candidate.score,
        is_bingo: candidate.is_bingo,
        main_word_score: candidate.main_word_score,
        cross_words: candidate.cross_words,
        placements: candidate
            .placements
            .into_iter()
            .map(|placement| PlacedTile {
                coordinate: coordinate_key(placement.row, placement.col),
                row: placement.row,
                column: placement.col,
                letter: placement.tile.letter,
                is_blank: placement.tile.is_blank,
                value: placement.tile.value,
            })
            .collect(),
    }
}
