//! Shortest corner-to-corner path through a rectangular grid of walkable and
//! obstacle cells, where the path may pass through at most one obstacle as if
//! it were walkable.
//!
//! A validated [`Grid`] is turned into a weighted [`Graph`] whose edge weights
//! make obstacle crossings prohibitively expensive, [`PathFinder`] runs a
//! bounded shortest-path search over it, and [`solve`] repeats that query once
//! per obstacle with the obstacle temporarily cleared, keeping the minimum.

pub mod find;
pub mod graph;
pub mod grid;
pub mod solve;

pub use find::{PathFinder, SearchState};
pub use graph::{Graph, NodeId};
pub use grid::{Cell, Grid, InvalidGrid, Point, MAX_DIM, MIN_DIM};
pub use solve::{solve, solve_matrix, SolveResult};
