//! Computer opponent: the agent interface and the single-ply greedy agent
//! with its window-scanning heuristic.

mod agent;
mod greedy;
pub mod heuristic;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use heuristic::{Heuristic, WindowHeuristic};
