use crate::grid::{Cell, Grid, Point};

/// Flattened node index, `row * columns + col`.
pub type NodeId = usize;

/// Weight for entering or leaving a cell: 1 for walkable cells and the total
/// node count for obstacles. The sentinel makes any path that crosses an
/// obstacle cost at least `node_count`, which no all-walkable path of at most
/// `node_count - 1` edges can reach.
fn cell_weight(cell: Cell, node_count: usize) -> usize {
    match cell {
        Cell::Walkable => 1,
        Cell::Obstacle => node_count,
    }
}

/// Symmetric weighted adjacency over the cells of one grid variant.
#[derive(Debug)]
pub struct Graph {
    pub(crate) node_count: usize,
    pub(crate) columns: usize,
    pub(crate) adjacency: Vec<Vec<(NodeId, usize)>>,
}

impl Graph {
    /// Builds the adjacency structure for `grid`. Nodes are connected to their
    /// orthogonal neighbors only, and the edge weight is the larger of the two
    /// endpoint cell weights, so an obstacle poisons every edge touching it in
    /// both directions.
    pub fn build(grid: &Grid) -> Self {
        let node_count = grid.node_count();
        let columns = grid.columns();
        let mut adjacency: Vec<Vec<(NodeId, usize)>> = vec![Vec::with_capacity(4); node_count];

        for row in 0..grid.rows() {
            for col in 0..columns {
                let Some(cell) = grid.get(Point { row, col }) else {
                    continue;
                };

                // south and east neighbors only; every edge is inserted in
                // both directions, so each pair is still visited exactly once
                let south = Point { row: row + 1, col };
                let east = Point { row, col: col + 1 };

                for neighbor in [south, east] {
                    let Some(neighbor_cell) = grid.get(neighbor) else {
                        continue;
                    };

                    let weight =
                        cell_weight(cell, node_count).max(cell_weight(neighbor_cell, node_count));
                    let u = row * columns + col;
                    let v = neighbor.row * columns + neighbor.col;
                    adjacency[u].push((v, weight));
                    adjacency[v].push((u, weight));
                }
            }
        }

        Self {
            node_count,
            columns,
            adjacency,
        }
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Node id for a grid position.
    pub fn node_at(&self, point: Point) -> NodeId {
        point.row * self.columns + point.col
    }

    /// Return an iterator over the neighbors of the provided node and the
    /// edge weight required to go there.
    pub fn neighbors_of(&self, node: NodeId) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.adjacency[node].iter().copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn neighbors_sorted(graph: &Graph, node: NodeId) -> Vec<(NodeId, usize)> {
        let mut neighbors: Vec<_> = graph.neighbors_of(node).collect();
        neighbors.sort_unstable();
        neighbors
    }

    #[test]
    fn test_all_walkable_weights() {
        let grid = Grid::from_matrix(&[vec![0, 0], vec![0, 0]]).unwrap();
        let graph = Graph::build(&grid);

        assert_eq!(graph.node_count(), 4);
        // corner nodes have exactly two neighbors, each one step away
        assert_eq!(neighbors_sorted(&graph, 0), vec![(1, 1), (2, 1)]);
        assert_eq!(neighbors_sorted(&graph, 3), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn test_obstacle_poisons_both_directions() {
        // obstacle at (0,1) in a 2x2 grid, sentinel weight = 4
        let grid = Grid::from_matrix(&[vec![0, 1], vec![0, 0]]).unwrap();
        let graph = Graph::build(&grid);

        assert_eq!(neighbors_sorted(&graph, 0), vec![(1, 4), (2, 1)]);
        assert_eq!(neighbors_sorted(&graph, 1), vec![(0, 4), (3, 4)]);
        assert_eq!(neighbors_sorted(&graph, 3), vec![(1, 4), (2, 1)]);
    }

    #[test]
    fn test_interior_node_degree() {
        let grid = Grid::from_matrix(&[vec![0; 3], vec![0; 3], vec![0; 3]]).unwrap();
        let graph = Graph::build(&grid);

        let center = graph.node_at(Point { row: 1, col: 1 });
        assert_eq!(graph.neighbors_of(center).count(), 4);
        // no diagonals
        assert!(graph.neighbors_of(center).all(|(n, _)| n != 0));
    }

    #[test]
    fn test_node_at_is_row_major() {
        let grid = Grid::from_matrix(&[vec![0; 4], vec![0; 4], vec![0; 4]]).unwrap();
        let graph = Graph::build(&grid);

        assert_eq!(graph.node_at(Point { row: 0, col: 0 }), 0);
        assert_eq!(graph.node_at(Point { row: 1, col: 2 }), 6);
        assert_eq!(graph.node_at(Point { row: 2, col: 3 }), 11);
    }

    #[test]
    fn test_edges_are_symmetric() {
        let grid = Grid::from_matrix(&[vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]).unwrap();
        let graph = Graph::build(&grid);

        for u in 0..graph.node_count() {
            for (v, weight) in graph.neighbors_of(u) {
                assert!(
                    graph.neighbors_of(v).any(|(n, w)| n == u && w == weight),
                    "edge {} -> {} with weight {} has no mirror",
                    u,
                    v,
                    weight
                );
            }
        }
    }
}
