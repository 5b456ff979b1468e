pub mod config;
pub mod dictionary;
pub mod game;
pub mod models;
pub mod utils;

pub use dictionary::Dictionary;
pub use game::{Board, MoveGenerator, Rack, Scorer};
