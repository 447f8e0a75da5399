use serde::{Deserialize, Serialize};

use crate::find::{PathFinder, SearchState};
use crate::graph::Graph;
use crate::grid::{Grid, InvalidGrid, Point};

/// Final outcome of the obstacle-removal search.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SolveResult {
    /// Number of cells on the best path, counting both endpoints.
    Path(usize),
    /// No corner-to-corner path exists, even after clearing any single
    /// obstacle.
    Unreachable,
}

/// Length in cells of the shortest path from the top-left to the bottom-right
/// corner of `grid`, where the path may pass through at most one obstacle
/// cell as if it were walkable.
///
/// Runs one unbounded baseline query on the grid as-is, then one query per
/// obstacle against a variant with that obstacle cleared, bounded by the best
/// length seen so far. Each variant is a fresh value, so `grid` is unchanged
/// when this returns.
pub fn solve(grid: &Grid) -> SolveResult {
    let Some(mut best) = path_length(grid, None) else {
        return SolveResult::Unreachable;
    };

    for obstacle in grid.obstacles() {
        let variant = grid.with_walkable(obstacle);
        // a trial only matters if it comes in strictly below the best so far
        if let Some(length) = path_length(&variant, Some(best.saturating_sub(1))) {
            best = best.min(length);
        }
    }

    // A path that clears at most one obstacle has at most N-1 edges of weight
    // one, so at most N cells. Anything longer crossed an uncleared obstacle
    // at sentinel weight and is no path at all.
    if best > grid.node_count() {
        SolveResult::Unreachable
    } else {
        SolveResult::Path(best)
    }
}

/// Validates `matrix` and solves the resulting grid.
pub fn solve_matrix(matrix: &[Vec<u8>]) -> Result<SolveResult, InvalidGrid> {
    Ok(solve(&Grid::from_matrix(matrix)?))
}

/// Cell count of the cheapest top-left to bottom-right path in one grid
/// variant, or `None` when the search finished without one inside `limit`.
fn path_length(grid: &Grid, limit: Option<usize>) -> Option<usize> {
    let graph = Graph::build(grid);
    let source = graph.node_at(Point { row: 0, col: 0 });
    let sink = graph.node_at(Point {
        row: grid.rows() - 1,
        col: grid.columns() - 1,
    });

    match PathFinder::new(&graph, source, sink, limit).finish() {
        // +1 converts the edge distance into a count of visited cells
        SearchState::DistanceFound(distance) => Some(distance + 1),
        SearchState::Computing | SearchState::NoPathFound | SearchState::LimitExceeded => None,
    }
}
