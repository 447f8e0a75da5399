use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::{Graph, NodeId};

/// The entries we store in the priority queue
#[derive(Eq, Debug)]
struct ToVisit {
    cost: usize,
    node: NodeId,
}

impl Ord for ToVisit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cost.cmp(&other.cost).reverse() // reverse for BinaryHeap to be a min-heap
    }
}

impl PartialOrd for ToVisit {
    fn partial_cmp(&self, other: &ToVisit) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ToVisit {
    fn eq(&self, other: &ToVisit) -> bool {
        self.cost == other.cost
    }
}

/// Outcome of a shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Computing,
    /// The sink was settled at this total edge weight.
    DistanceFound(usize),
    /// The queue ran dry before the sink was reached.
    NoPathFound,
    /// Every remaining candidate already exceeds the supplied limit.
    LimitExceeded,
}

impl SearchState {
    fn is_done(&self) -> bool {
        !matches!(self, SearchState::Computing)
    }
}

/// Single-source shortest-path search from `source` to `sink` over a
/// [`Graph`], driven one settled node at a time.
///
/// All edge weights are non-negative by construction, so plain Dijkstra
/// relaxation applies. An optional `limit` lets the search give up as soon as
/// no completion within the bound is possible; it never changes the distance
/// reported for a path that fits the bound.
#[derive(Debug)]
pub struct PathFinder<'a> {
    graph: &'a Graph,
    sink: NodeId,
    limit: Option<usize>,
    settled: Vec<Option<usize>>,
    visit_list: BinaryHeap<ToVisit>,
    state: SearchState,
}

impl<'a> PathFinder<'a> {
    pub fn new(graph: &'a Graph, source: NodeId, sink: NodeId, limit: Option<usize>) -> Self {
        Self {
            graph,
            sink,
            limit,
            settled: vec![None; graph.node_count()],
            visit_list: BinaryHeap::from([ToVisit {
                cost: 0,
                node: source,
            }]),
            state: SearchState::Computing,
        }
    }

    /// Runs the search to completion.
    pub fn finish(mut self) -> SearchState {
        loop {
            match self.step() {
                SearchState::Computing => {}
                state => return state,
            }
        }
    }

    /// Advances the search by settling at most one node.
    pub fn step(&mut self) -> SearchState {
        if self.state.is_done() {
            return self.state.clone();
        }

        if let Some(visit) = self.visit_list.pop() {
            // the heap minimum never decreases, so once it passes the limit
            // no completion within the bound exists
            if self.limit.is_some_and(|limit| visit.cost > limit) {
                self.state = SearchState::LimitExceeded;
                return self.state.clone();
            }

            if self.settled[visit.node].is_some() {
                return self.state.clone();
            }
            self.settled[visit.node] = Some(visit.cost);

            if visit.node == self.sink {
                self.state = SearchState::DistanceFound(visit.cost);
                return self.state.clone();
            }

            for (node, weight) in self.graph.neighbors_of(visit.node) {
                if self.settled[node].is_none() {
                    self.visit_list.push(ToVisit {
                        cost: visit.cost + weight,
                        node,
                    });
                }
            }
        } else {
            self.state = SearchState::NoPathFound;
        }

        self.state.clone()
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }
}
