//! **wallmaze** is a maze generation, visualisation and random-walk simulation library.
//!
//! Mazes live on a wall/passage cell lattice: cells at even (x, y) are rooms, cells
//! with an odd x or y are the walls between rooms that generation may carve open.

pub mod agent;
pub mod cells;
pub mod generators;
pub mod grid;
pub mod renderers;
pub mod units;
mod utils;
