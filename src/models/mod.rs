pub mod moves;

pub use moves::{
    // Engine-side types
    CrossWord, Direction, Placement, Premium, ScoredMove, Tile,
    // Wire payloads
    MoveRequest, MoveResponse, PlacedTile, RackTile, SnapshotCell,
};
