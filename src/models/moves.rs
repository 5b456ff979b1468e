use serde::{Deserialize, Serialize};

use crate::utils::letters::letter_value;

/// A single letter tile. Immutable once constructed; reassigning a blank
/// means building a new tile carrying the chosen letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub letter: char,
    pub value: u8,
    pub is_blank: bool,
}

impl Tile {
    /// Build a tile, taking the value from the standard letter table.
    /// A blank is worth 0 no matter which letter it stands for.
    pub fn new(letter: char, is_blank: bool) -> Self {
        let letter = letter.to_ascii_uppercase();
        Self {
            letter,
            value: if is_blank { 0 } else { letter_value(letter) },
            is_blank,
        }
    }

    /// Build a non-blank tile with an explicit value (variant tile sets).
    pub fn with_value(letter: char, value: u8) -> Self {
        Self {
            letter: letter.to_ascii_uppercase(),
            value,
            is_blank: false,
        }
    }
}

/// Premium category of a board cell. A plain cell is the absence of a
/// premium (`Option<Premium>::None`), mirroring how cells carry multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Premium {
    #[serde(rename = "DL")]
    DoubleLetter,
    #[serde(rename = "TL")]
    TripleLetter,
    #[serde(rename = "DW")]
    DoubleWord,
    #[serde(rename = "TW")]
    TripleWord,
}

impl Premium {
    /// Parse the two-letter wire code; empty or unknown codes mean no premium.
    pub fn from_code(code: &str) -> Option<Premium> {
        match code {
            "DL" => Some(Premium::DoubleLetter),
            "TL" => Some(Premium::TripleLetter),
            "DW" => Some(Premium::DoubleWord),
            "TW" => Some(Premium::TripleWord),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Premium::DoubleLetter => "DL",
            Premium::TripleLetter => "TL",
            Premium::DoubleWord => "DW",
            Premium::TripleWord => "TW",
        }
    }
}

/// Orientation of the main word of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// (row, col) step along this axis.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
        }
    }

    /// The perpendicular axis, along which cross-words form.
    pub fn cross(&self) -> Direction {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

/// One newly placed tile within a candidate move. Rows and columns are
/// 1-based board coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub row: u8,
    pub col: u8,
    pub tile: Tile,
}

/// A perpendicular word formed by a newly placed tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossWord {
    pub word: String,
    pub score: u32,
}

/// Wire form of a placement, as the response payload carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTile {
    pub coordinate: String,
    pub row: u8,
    pub column: u8,
    pub letter: char,
    pub is_blank: bool,
    pub value: u8,
}

/// A fully scored candidate move, ready for ranking and serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredMove {
    pub word: String,
    pub direction: Direction,
    pub start: String,
    pub score: u32,
    pub is_bingo: bool,
    pub main_word_score: u32,
    pub cross_words: Vec<CrossWord>,
    pub placements: Vec<PlacedTile>,
}

/// One occupied cell in a board snapshot supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotCell {
    pub coordinate: String,
    pub letter: char,
    #[serde(default)]
    pub is_blank: bool,
}

/// One tile on the caller's rack.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RackTile {
    pub letter: char,
    #[serde(default)]
    pub is_blank: bool,
}

/// The logical move-generation request (the excluded HTTP layer would
/// deserialize its body into this).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    #[serde(default)]
    pub board: Vec<SnapshotCell>,
    /// Optional custom 15×15 premium layout as wire codes ("", "DL", ...).
    #[serde(default)]
    pub layout: Option<Vec<Vec<String>>>,
    pub rack: Vec<RackTile>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// The logical response: moves ranked best-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub moves: Vec<ScoredMove>,
}
