use std::collections::HashMap;

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{Premium, SnapshotCell, Tile};

/// Rows and columns are 1-based and run from 1 to 15.
pub const BOARD_SIZE: u8 = 15;
/// The opening move must cover the center cell (H8).
pub const CENTER: (u8, u8) = (8, 8);

/// Premium layout for the full board, indexed `[row - 1][col - 1]`.
pub type PremiumLayout = [[Option<Premium>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinate ({row}, {col}) is outside the 15x15 board")]
    OutOfBounds { row: u8, col: u8 },
    #[error("malformed coordinate string: {0:?}")]
    MalformedCoordinate(String),
}

/// Convert a 1-based (row, col) pair to its wire form, e.g. (8, 8) -> "H8".
pub fn coordinate_key(row: u8, col: u8) -> String {
    format!("{}{}", (b'A' + row - 1) as char, col)
}

/// Parse a wire coordinate: one uppercase row letter A-O followed by the
/// column number with no leading zero.
pub fn parse_coordinate(coordinate: &str) -> Result<(u8, u8), BoardError> {
    let malformed = || BoardError::MalformedCoordinate(coordinate.to_string());

    let mut chars = coordinate.chars();
    let row_letter = chars.next().ok_or_else(malformed)?;
    if !row_letter.is_ascii_uppercase() || row_letter > 'O' {
        return Err(malformed());
    }
    let row = (row_letter as u8) - b'A' + 1;

    let digits = chars.as_str();
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let col: u8 = digits.parse().map_err(|_| malformed())?;
    if col == 0 || col > BOARD_SIZE {
        return Err(malformed());
    }

    Ok((row, col))
}

// Standard premium squares, one quadrant's worth mirrored through the
// center so the layout is symmetric under 180-degree rotation.
static STANDARD_LAYOUT: Lazy<PremiumLayout> = Lazy::new(|| {
    let mut layout: PremiumLayout = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];

    let quadrant: &[(usize, usize, Premium)] = &[
        (0, 0, Premium::TripleWord),
        (0, 7, Premium::TripleWord),
        (7, 0, Premium::TripleWord),
        (1, 1, Premium::DoubleWord),
        (2, 2, Premium::DoubleWord),
        (3, 3, Premium::DoubleWord),
        (4, 4, Premium::DoubleWord),
        (1, 5, Premium::TripleLetter),
        (5, 1, Premium::TripleLetter),
        (5, 5, Premium::TripleLetter),
        (0, 3, Premium::DoubleLetter),
        (3, 0, Premium::DoubleLetter),
        (2, 6, Premium::DoubleLetter),
        (6, 2, Premium::DoubleLetter),
        (6, 6, Premium::DoubleLetter),
        (3, 7, Premium::DoubleLetter),
        (7, 3, Premium::DoubleLetter),
    ];

    let n = BOARD_SIZE as usize;
    for &(row, col, premium) in quadrant {
        // The four images of the cell under horizontal/vertical mirroring
        for (r, c) in [
            (row, col),
            (row, n - 1 - col),
            (n - 1 - row, col),
            (n - 1 - row, n - 1 - col),
        ] {
            layout[r][c] = Some(premium);
        }
    }

    layout[7][7] = Some(Premium::DoubleWord);
    layout
});

/// The canonical symmetric premium matrix (center cell is double word).
pub fn standard_layout() -> &'static PremiumLayout {
    &STANDARD_LAYOUT
}

/// A 15x15 board: sparse occupancy plus an immutable premium layout.
/// The board itself never validates word-level rules; overwriting an
/// occupied cell is the generator's responsibility to avoid.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: HashMap<(u8, u8), Tile>,
    layout: PremiumLayout,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::with_layout(*standard_layout())
    }

    pub fn with_layout(layout: PremiumLayout) -> Self {
        Self {
            tiles: HashMap::new(),
            layout,
        }
    }

    /// Build a board from a caller-supplied snapshot of occupied cells.
    pub fn from_snapshot(
        cells: &[SnapshotCell],
        layout: Option<PremiumLayout>,
    ) -> Result<Self, BoardError> {
        let mut board = match layout {
            Some(layout) => Self::with_layout(layout),
            None => Self::new(),
        };
        for cell in cells {
            let (row, col) = parse_coordinate(&cell.coordinate)?;
            board.place_tile(row, col, Tile::new(cell.letter, cell.is_blank))?;
        }
        Ok(board)
    }

    fn in_bounds(row: u8, col: u8) -> bool {
        (1..=BOARD_SIZE).contains(&row) && (1..=BOARD_SIZE).contains(&col)
    }

    /// Store a tile at (row, col), overwriting any previous occupant.
    /// Fails without mutating anything when the cell is off the board.
    pub fn place_tile(&mut self, row: u8, col: u8, tile: Tile) -> Result<(), BoardError> {
        if !Self::in_bounds(row, col) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        self.tiles.insert((row, col), tile);
        Ok(())
    }

    pub fn tile_at(&self, row: u8, col: u8) -> Option<&Tile> {
        self.tiles.get(&(row, col))
    }

    pub fn tile_at_coordinate(&self, coordinate: &str) -> Result<Option<&Tile>, BoardError> {
        let (row, col) = parse_coordinate(coordinate)?;
        Ok(self.tile_at(row, col))
    }

    /// Premium category of a cell, independent of occupancy.
    pub fn premium_at(&self, row: u8, col: u8) -> Option<Premium> {
        if !Self::in_bounds(row, col) {
            return None;
        }
        self.layout[row as usize - 1][col as usize - 1]
    }

    /// True iff no cell is occupied; flags the opening-move condition.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_round_trip_for_every_cell() {
        for row in 1..=BOARD_SIZE {
            for col in 1..=BOARD_SIZE {
                let key = coordinate_key(row, col);
                assert_eq!(
                    parse_coordinate(&key),
                    Ok((row, col)),
                    "coordinate {} should parse back to ({}, {})",
                    key,
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_parse_coordinate_examples() {
        assert_eq!(parse_coordinate("H8"), Ok((8, 8)));
        assert_eq!(parse_coordinate("A1"), Ok((1, 1)));
        assert_eq!(parse_coordinate("O15"), Ok((15, 15)));
    }

    #[test]
    fn test_parse_coordinate_rejects_malformed_input() {
        for bad in ["", "8H", "H", "H0", "H07", "H16", "P1", "h8", "H8 ", "HH8"] {
            assert!(
                matches!(parse_coordinate(bad), Err(BoardError::MalformedCoordinate(_))),
                "{:?} should be rejected as malformed",
                bad
            );
        }
    }

    #[test]
    fn test_place_tile_out_of_bounds_does_not_mutate() {
        let mut board = Board::new();
        let result = board.place_tile(16, 1, Tile::new('A', false));
        assert_eq!(result, Err(BoardError::OutOfBounds { row: 16, col: 1 }));
        assert!(board.is_empty(), "failed placement must leave the board unchanged");

        let result = board.place_tile(1, 0, Tile::new('A', false));
        assert_eq!(result, Err(BoardError::OutOfBounds { row: 1, col: 0 }));
        assert!(board.is_empty());
    }

    #[test]
    fn test_place_tile_overwrites_without_validation() {
        let mut board = Board::new();
        board.place_tile(3, 3, Tile::new('A', false)).unwrap();
        board.place_tile(3, 3, Tile::new('B', false)).unwrap();
        assert_eq!(board.tile_at(3, 3).unwrap().letter, 'B');
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_tile_at_coordinate() {
        let mut board = Board::new();
        board.place_tile(8, 8, Tile::new('Z', false)).unwrap();
        assert_eq!(board.tile_at_coordinate("H8").unwrap().unwrap().letter, 'Z');
        assert!(board.tile_at_coordinate("H9").unwrap().is_none());
        assert!(matches!(
            board.tile_at_coordinate("99"),
            Err(BoardError::MalformedCoordinate(_))
        ));
    }

    #[test]
    fn test_standard_layout_center_and_corners() {
        let board = Board::new();
        assert_eq!(board.premium_at(8, 8), Some(Premium::DoubleWord));
        assert_eq!(board.premium_at(1, 1), Some(Premium::TripleWord));
        assert_eq!(board.premium_at(1, 15), Some(Premium::TripleWord));
        assert_eq!(board.premium_at(15, 1), Some(Premium::TripleWord));
        assert_eq!(board.premium_at(15, 15), Some(Premium::TripleWord));
        assert_eq!(board.premium_at(2, 2), Some(Premium::DoubleWord));
        assert_eq!(board.premium_at(2, 6), Some(Premium::TripleLetter));
        assert_eq!(board.premium_at(1, 4), Some(Premium::DoubleLetter));
        assert_eq!(board.premium_at(8, 7), None);
    }

    #[test]
    fn test_standard_layout_is_rotationally_symmetric() {
        let layout = standard_layout();
        for row in 0..15 {
            for col in 0..15 {
                assert_eq!(
                    layout[row][col],
                    layout[14 - row][14 - col],
                    "cell ({}, {}) must match its 180-degree image",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_from_snapshot_places_tiles() {
        let cells = vec![
            SnapshotCell {
                coordinate: "D4".to_string(),
                letter: 'C',
                is_blank: false,
            },
            SnapshotCell {
                coordinate: "D5".to_string(),
                letter: 'A',
                is_blank: true,
            },
        ];
        let board = Board::from_snapshot(&cells, None).unwrap();
        assert_eq!(board.tile_at(4, 4).unwrap().letter, 'C');
        let blank = board.tile_at(4, 5).unwrap();
        assert!(blank.is_blank);
        assert_eq!(blank.value, 0);
    }

    #[test]
    fn test_from_snapshot_rejects_bad_coordinate() {
        let cells = vec![SnapshotCell {
            coordinate: "4D".to_string(),
            letter: 'C',
            is_blank: false,
        }];
        assert!(matches!(
            Board::from_snapshot(&cells, None),
            Err(BoardError::MalformedCoordinate(_))
        ));
    }
}
