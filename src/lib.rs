pub mod board;
pub mod frontier;
pub mod heuristic;
pub mod logger;
pub mod moves;
pub mod path;
pub mod shuffle;
pub mod solver;

pub use board::{Board, Pos, DEFAULT_START, GOAL};
pub use moves::Direction;
pub use shuffle::Shuffler;
pub use solver::{SearchObserver, SearchStats, Solution, Solver};
