//! Game-tree search: recursive engines and the root move selector

pub mod alphabeta;
pub mod engine;
pub mod exhaustive;
pub mod selector;

pub use alphabeta::AlphaBeta;
pub use engine::{GameSearch, SearchStats, Window};
pub use exhaustive::Exhaustive;
pub use selector::{Decision, MoveSelector, ScoredAction, best_move};
