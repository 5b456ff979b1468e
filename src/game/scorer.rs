use crate::game::board::{coordinate_key, Board};
use crate::models::{Placement, Premium};

/// Flat bonus for a move that consumes every tile on the rack.
pub const BINGO_BONUS: u32 = 50;

/// One cell of a word being scored. Premiums only ever apply to cells that
/// were placed this turn; tiles already on the board count face value.
#[derive(Debug, Clone, Copy)]
pub struct WordCell {
    pub row: u8,
    pub col: u8,
    pub value: u8,
    pub newly_placed: bool,
}

/// Per-placement contribution within a scored word.
#[derive(Debug, Clone)]
pub struct PlacementPoints {
    pub coordinate: String,
    pub points: u32,
}

/// Result of scoring a set of placements: the word total plus the
/// per-placement breakdown (letter value after its letter multiplier).
#[derive(Debug, Clone)]
pub struct PlacementScore {
    pub total: u32,
    pub breakdown: Vec<PlacementPoints>,
}

pub struct Scorer;

impl Scorer {
    /// TL triples a letter, DL doubles it, everything else leaves it alone.
    pub fn letter_multiplier(premium: Option<Premium>) -> u32 {
        match premium {
            Some(Premium::TripleLetter) => 3,
            Some(Premium::DoubleLetter) => 2,
            _ => 1,
        }
    }

    /// TW triples the whole word, DW doubles it.
    pub fn word_multiplier(premium: Option<Premium>) -> u32 {
        match premium {
            Some(Premium::TripleWord) => 3,
            Some(Premium::DoubleWord) => 2,
            _ => 1,
        }
    }

    /// Score one contiguous word's worth of newly placed tiles: each letter
    /// value times its letter multiplier, summed, then the sum times the
    /// product of the word multipliers under those tiles. Blanks contribute
    /// a base value of 0 no matter which letter they stand for.
    pub fn score_placements(board: &Board, placements: &[Placement]) -> PlacementScore {
        let mut letter_total = 0u32;
        let mut word_multiplier = 1u32;
        let mut breakdown = Vec::with_capacity(placements.len());

        for placement in placements {
            let premium = board.premium_at(placement.row, placement.col);
            let points = placement.tile.value as u32 * Self::letter_multiplier(premium);
            letter_total += points;
            word_multiplier *= Self::word_multiplier(premium);
            breakdown.push(PlacementPoints {
                coordinate: coordinate_key(placement.row, placement.col),
                points,
            });
        }

        PlacementScore {
            total: letter_total * word_multiplier,
            breakdown,
        }
    }

    /// Score a full word (main or cross) given every cell it covers.
    /// Pre-existing tiles never re-trigger the premium under them.
    pub fn score_word(board: &Board, cells: &[WordCell]) -> u32 {
        let mut letter_total = 0u32;
        let mut word_multiplier = 1u32;

        for cell in cells {
            if cell.newly_placed {
                let premium = board.premium_at(cell.row, cell.col);
                letter_total += cell.value as u32 * Self::letter_multiplier(premium);
                word_multiplier *= Self::word_multiplier(premium);
            } else {
                letter_total += cell.value as u32;
            }
        }

        letter_total * word_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tile;

    fn placement(row: u8, col: u8, letter: char) -> Placement {
        Placement {
            row,
            col,
            tile: Tile::new(letter, false),
        }
    }

    #[test]
    fn test_letter_multiplier_mapping() {
        assert_eq!(Scorer::letter_multiplier(Some(Premium::TripleLetter)), 3);
        assert_eq!(Scorer::letter_multiplier(Some(Premium::DoubleLetter)), 2);
        assert_eq!(Scorer::letter_multiplier(Some(Premium::DoubleWord)), 1);
        assert_eq!(Scorer::letter_multiplier(Some(Premium::TripleWord)), 1);
        assert_eq!(Scorer::letter_multiplier(None), 1);
    }

    #[test]
    fn test_word_multiplier_mapping() {
        assert_eq!(Scorer::word_multiplier(Some(Premium::TripleWord)), 3);
        assert_eq!(Scorer::word_multiplier(Some(Premium::DoubleWord)), 2);
        assert_eq!(Scorer::word_multiplier(Some(Premium::DoubleLetter)), 1);
        assert_eq!(Scorer::word_multiplier(Some(Premium::TripleLetter)), 1);
        assert_eq!(Scorer::word_multiplier(None), 1);
    }

    #[test]
    fn test_score_placements_without_premiums() {
        // H5..H7 carry no premiums on the standard layout
        let board = Board::new();
        let placements = vec![
            placement(8, 5, 'C'),
            placement(8, 6, 'A'),
            placement(8, 7, 'T'),
        ];
        let score = Scorer::score_placements(&board, &placements);
        // C(3) + A(1) + T(1) = 5
        assert_eq!(score.total, 5);
        assert_eq!(score.breakdown.len(), 3);
        assert_eq!(score.breakdown[0].coordinate, "H5");
        assert_eq!(score.breakdown[0].points, 3);
    }

    #[test]
    fn test_double_word_doubles_the_letter_sum() {
        let board = Board::new();
        // H8 is the center double-word cell; H9 and H10 are plain
        let plain = vec![placement(8, 5, 'C'), placement(8, 6, 'A'), placement(8, 7, 'T')];
        let on_center = vec![placement(8, 8, 'C'), placement(8, 9, 'A'), placement(8, 10, 'T')];
        let plain_score = Scorer::score_placements(&board, &plain).total;
        let center_score = Scorer::score_placements(&board, &on_center).total;
        assert_eq!(center_score, plain_score * 2);
    }

    #[test]
    fn test_triple_letter_applies_before_word_multiplier() {
        let board = Board::new();
        // F6 is TL on the standard layout
        let placements = vec![placement(6, 6, 'Q'), placement(6, 7, 'I')];
        let score = Scorer::score_placements(&board, &placements);
        // Q(10*3) + I(1) = 31, no word multiplier in play
        assert_eq!(score.total, 31);
    }

    #[test]
    fn test_blank_scores_zero_even_on_premium() {
        let board = Board::new();
        let placements = vec![Placement {
            row: 6,
            col: 6, // TL cell
            tile: Tile::new('Q', true),
        }];
        let score = Scorer::score_placements(&board, &placements);
        assert_eq!(score.total, 0);
        assert_eq!(score.breakdown[0].points, 0);
    }

    #[test]
    fn test_score_word_ignores_premiums_under_existing_tiles() {
        let board = Board::new();
        // Same word, one cell sits on the center DW. When that cell is
        // pre-existing the multiplier must not re-trigger.
        let fresh = [
            WordCell { row: 8, col: 8, value: 3, newly_placed: true },
            WordCell { row: 8, col: 9, value: 1, newly_placed: true },
        ];
        let played_through = [
            WordCell { row: 8, col: 8, value: 3, newly_placed: false },
            WordCell { row: 8, col: 9, value: 1, newly_placed: true },
        ];
        assert_eq!(Scorer::score_word(&board, &fresh), 8);
        assert_eq!(Scorer::score_word(&board, &played_through), 4);
    }
}
