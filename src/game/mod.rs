// Game engine modules

pub mod board;
pub mod movegen;
pub mod rack;
pub mod scorer;

pub use board::Board;
pub use movegen::MoveGenerator;
pub use rack::Rack;
pub use scorer::Scorer;
